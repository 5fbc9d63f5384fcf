//! Mapping between dense slot indices and the integers congruent to 1 or 5
//! modulo 6, starting at 5: `5, 7, 11, 13, 17, 19, 23, 25, ...`

/// `2 * (k + k / 2) + 5`
#[inline]
#[must_use]
pub const fn index_to_number(index: usize) -> u64 {
    let index = index as u64;

    2 * (index + index / 2) + 5
}

/// Inverse of [`index_to_number`]; `None` for 2, 3 and anything divisible by
/// 2 or 3.
#[must_use]
pub fn number_to_index(number: u64) -> Option<usize> {
    if number < 5 {
        return None;
    }

    let index = match number % 6 {
        5 => 2 * (number / 6),
        1 => 2 * (number / 6) - 1,
        _ => return None,
    };

    usize::try_from(index).ok()
}

/// Number of slots needed to cover every wheel candidate up to `limit`:
/// `max(1, 3 * limit / 8)`.
///
/// Returns `None` if the count does not fit in `usize`.
#[must_use]
pub fn slot_count(limit: u64) -> Option<usize> {
    let slots = limit.checked_mul(3)? / 8;

    usize::try_from(slots.max(1)).ok()
}
