#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod cli;
pub mod error;
pub mod helpers;
pub mod race;
pub mod sieve;

pub use error::{PsSieveError, Result};
pub use race::config::RaceConfig;
pub use race::{race, RaceOutcome};
pub use sieve::{reference_count, PrimeSieve, Validity, PRIME_COUNTS};
