use std::fmt;

use crate::error::{PsSieveError, Result};
use crate::helpers::bits::BitArray;
use crate::helpers::wheel::{index_to_number, number_to_index, slot_count};

/// Known prime counts for round-number limits, used as a spot check.
pub const PRIME_COUNTS: [(u64, usize); 8] = [
    (10, 4),
    (100, 25),
    (1_000, 168),
    (10_000, 1_229),
    (100_000, 9_592),
    (1_000_000, 78_498),
    (10_000_000, 664_579),
    (100_000_000, 5_761_455),
];

#[must_use]
pub fn reference_count(limit: u64) -> Option<usize> {
    PRIME_COUNTS
        .iter()
        .find(|(known, _)| *known == limit)
        .map(|(_, count)| *count)
}

/// Outcome of comparing a prime count against [`PRIME_COUNTS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Validity {
    Valid,
    Invalid { expected: usize, actual: usize },
    /// no reference count exists for this limit
    Unknown,
}

impl Validity {
    #[must_use]
    pub fn check(limit: u64, count: usize) -> Self {
        match reference_count(limit) {
            Some(expected) if expected == count => Self::Valid,
            Some(expected) => Self::Invalid {
                expected,
                actual: count,
            },
            None => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("true"),
            Self::Invalid { .. } => f.write_str("false"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Sieve of Eratosthenes over the wheel-6 candidates `5, 7, 11, 13, ...`.
///
/// 2 and 3 are implicit. A set bit means the candidate is composite.
#[derive(Clone, Debug)]
pub struct PrimeSieve {
    limit: u64,
    bits: BitArray,
    sieved: bool,
}

impl PrimeSieve {
    /// Allocates the flag array for `limit`; nothing is marked yet.
    pub fn new(limit: u64) -> Result<Self> {
        if limit == 0 {
            return Err(PsSieveError::InvalidLimit(limit));
        }

        let slots = slot_count(limit).ok_or(PsSieveError::InvalidLimit(limit))?;

        let bits = BitArray::new(slots).map_err(|_| PsSieveError::AllocationFailed {
            limit,
            words: slots.div_ceil(64),
        })?;

        Ok(Self {
            limit,
            bits,
            sieved: false,
        })
    }

    /// Constructs and runs in one go.
    pub fn sieved(limit: u64) -> Result<Self> {
        let mut sieve = Self::new(limit)?;

        sieve.run();

        Ok(sieve)
    }

    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    #[must_use]
    pub const fn is_sieved(&self) -> bool {
        self.sieved
    }

    #[must_use]
    pub const fn bits(&self) -> &BitArray {
        &self.bits
    }

    /// Marks every composite candidate.
    ///
    /// Marks are only ever added, so a second call leaves the array as is.
    #[tracing::instrument(skip_all, fields(limit = self.limit, slots = self.bits.len()))]
    pub fn run(&mut self) {
        let root = self.limit.isqrt();
        let bound = 3 * root.saturating_sub(1);
        let len = self.bits.len();

        let mut factor = 0usize;
        let mut factors = 0usize;

        // 8 * factor < 3 * (sqrt(limit) - 1)
        while (factor as u64).saturating_mul(8) < bound {
            factor = match self.bits.next_unset(factor) {
                Some(next) => next,
                None => break,
            };

            // each prime p has two progressions of multiples left on the
            // wheel, 6p apart; they start at 5p and 7p
            let half = factor / 2;
            let num = 2 * (factor + half) + 5;
            let step = 2 * num;

            let start1 = factor + step;
            let start2 = factor + num + 2 * (1 + half);

            let marked = self.bits.set_strided(start1, step) + self.bits.set_strided(start2, step);

            tracing::trace!(factor, prime = num, marked, "struck multiples");

            factors += 1;
            factor += 1;
        }

        tracing::debug!(factors, len, "sieve complete");

        self.sieved = true;
    }

    fn candidates(&self) -> impl Iterator<Item = u64> + '_ {
        let limit = self.limit;

        self.bits
            .iter_unset()
            .map(index_to_number)
            .take_while(move |&number| number <= limit)
    }

    /// Primes up to and including the limit, ascending.
    #[must_use]
    pub fn primes(&self) -> Vec<u64> {
        match self.limit {
            0 | 1 => vec![],
            2 => vec![2],
            _ => [2, 3].into_iter().chain(self.candidates()).collect(),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        match self.limit {
            0 | 1 => 0,
            2 => 1,
            _ => 2 + self.candidates().count(),
        }
    }

    #[must_use]
    pub fn validate(&self) -> Validity {
        Validity::check(self.limit, self.count())
    }

    /// Primality of a single `number <= limit`; `false` beyond the limit.
    #[must_use]
    pub fn is_prime(&self, number: u64) -> bool {
        if number > self.limit {
            return false;
        }

        match number {
            2 | 3 => true,
            _ => number_to_index(number).is_some_and(|index| !self.bits.get(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_ten() {
        let sieve = PrimeSieve::sieved(10).unwrap();

        assert_eq!(sieve.primes(), vec![2, 3, 5, 7]);
        assert_eq!(sieve.count(), 4);
        assert_eq!(sieve.validate(), Validity::Valid);
    }

    #[test]
    fn degenerate_limits() {
        assert_eq!(PrimeSieve::sieved(1).unwrap().primes(), Vec::<u64>::new());
        assert_eq!(PrimeSieve::sieved(1).unwrap().count(), 0);
        assert_eq!(PrimeSieve::sieved(2).unwrap().primes(), vec![2]);
        assert_eq!(PrimeSieve::sieved(2).unwrap().count(), 1);
        assert_eq!(PrimeSieve::sieved(3).unwrap().primes(), vec![2, 3]);
        assert_eq!(PrimeSieve::sieved(4).unwrap().primes(), vec![2, 3]);
        assert_eq!(PrimeSieve::sieved(5).unwrap().primes(), vec![2, 3, 5]);
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(matches!(
            PrimeSieve::new(0),
            Err(PsSieveError::InvalidLimit(0))
        ));
    }

    #[test]
    fn oversized_limit_is_rejected() {
        assert!(matches!(
            PrimeSieve::new(u64::MAX),
            Err(PsSieveError::InvalidLimit(u64::MAX))
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unallocatable_limit_reports_allocation_failure() {
        assert!(matches!(
            PrimeSieve::new(u64::MAX / 4),
            Err(PsSieveError::AllocationFailed {
                limit,
                ..
            }) if limit == u64::MAX / 4
        ));
    }

    #[test]
    fn squares_of_small_primes_are_composite() {
        let sieve = PrimeSieve::sieved(200).unwrap();

        for square in [25, 49, 121, 169] {
            assert!(!sieve.is_prime(square), "{square}");
        }

        for prime in [2, 3, 5, 7, 11, 13, 197, 199] {
            assert!(sieve.is_prime(prime), "{prime}");
        }

        assert!(!sieve.is_prime(1));
        assert!(!sieve.is_prime(0));
        assert!(!sieve.is_prime(201));
    }

    #[test]
    fn run_twice_is_stable() {
        let mut sieve = PrimeSieve::new(1_000).unwrap();

        assert!(!sieve.is_sieved());

        sieve.run();
        let first = sieve.primes();
        sieve.run();

        assert!(sieve.is_sieved());
        assert_eq!(sieve.primes(), first);
        assert_eq!(sieve.count(), 168);
    }

    #[test]
    fn validity_table() {
        assert_eq!(Validity::check(100, 25), Validity::Valid);
        assert_eq!(
            Validity::check(100, 24),
            Validity::Invalid {
                expected: 25,
                actual: 24
            }
        );
        assert_eq!(Validity::check(101, 26), Validity::Unknown);
        assert_eq!(reference_count(100_000_000), Some(5_761_455));
        assert_eq!(reference_count(50), None);
    }

    #[test]
    fn validity_display() {
        assert_eq!(Validity::Valid.to_string(), "true");
        assert_eq!(
            Validity::Invalid {
                expected: 1,
                actual: 2
            }
            .to_string(),
            "false"
        );
        assert_eq!(Validity::Unknown.to_string(), "unknown");
    }
}
