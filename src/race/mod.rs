//! Timed pass loop.
//!
//! A pass constructs a fresh [`PrimeSieve`] and runs it. Passes repeat until
//! the time budget has elapsed; the clock is only read between passes, so the
//! loop may overshoot by at most one pass. Only the last sieve is kept.

pub mod config;
pub mod report;

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::sieve::{PrimeSieve, Validity};
use config::RaceConfig;

#[derive(Clone, Debug)]
pub struct RaceOutcome {
    pub sieve: PrimeSieve,
    pub passes: u64,
    pub elapsed: Duration,
}

impl RaceOutcome {
    /// mean time per pass
    #[must_use]
    pub fn average(&self) -> Duration {
        match u32::try_from(self.passes) {
            Ok(passes) if passes > 0 => self.elapsed / passes,
            _ => self.elapsed.div_f64(self.passes.max(1) as f64),
        }
    }

    #[must_use]
    pub fn validity(&self) -> Validity {
        self.sieve.validate()
    }
}

/// Runs passes for the configured limit until `budget` has elapsed.
///
/// At least one pass always runs.
#[tracing::instrument(skip_all, fields(limit = limit, budget = ?budget))]
pub fn race(limit: u64, budget: Duration) -> Result<RaceOutcome> {
    let start = Instant::now();
    let mut passes = 0u64;

    let sieve = loop {
        let sieve = PrimeSieve::sieved(limit)?;

        passes += 1;

        if start.elapsed() >= budget {
            break sieve;
        }
    };

    let elapsed = start.elapsed();

    tracing::info!(passes, ?elapsed, "race finished");

    Ok(RaceOutcome {
        sieve,
        passes,
        elapsed,
    })
}

/// Validates `config`, waits out the settle delay, then races.
pub fn run(config: &RaceConfig) -> Result<RaceOutcome> {
    config.validate()?;

    let settle = config.settle_delay()?;

    if !settle.is_zero() {
        tracing::debug!(?settle, "settling before timing");
        std::thread::sleep(settle);
    }

    tracing::info!(limit = config.limit, time = config.time, "starting race");

    race(config.limit, config.budget()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_runs_one_pass() {
        let outcome = race(1_000, Duration::ZERO).unwrap();

        assert_eq!(outcome.passes, 1);
        assert_eq!(outcome.sieve.count(), 168);
        assert_eq!(outcome.validity(), Validity::Valid);
    }

    #[test]
    fn short_budget_runs_many_passes() {
        let outcome = race(100, Duration::from_millis(20)).unwrap();

        assert!(outcome.passes > 1);
        assert!(outcome.elapsed >= Duration::from_millis(20));
        assert!(outcome.average() <= outcome.elapsed);
    }

    #[test]
    fn run_rejects_invalid_config() {
        let config = RaceConfig {
            limit: 0,
            settle: 0.0,
            ..RaceConfig::default()
        };

        assert!(run(&config).is_err());
    }

    #[test]
    fn run_with_config() {
        let config = RaceConfig {
            limit: 10_000,
            time: 0.0,
            settle: 0.0,
            ..RaceConfig::default()
        };

        let outcome = run(&config).unwrap();

        assert_eq!(outcome.sieve.limit(), 10_000);
        assert_eq!(outcome.sieve.count(), 1_229);
    }
}
