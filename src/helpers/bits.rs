use std::collections::TryReserveError;

const WORD_BITS: usize = u64::BITS as usize;

/// Packed flag array, one bit per slot, 64 slots per word.
///
/// A cleared bit is "unset"; slots past `len` inside the last word are never
/// set and never reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitArray {
    words: Vec<u64>,
    len: usize,
}

#[inline]
const fn slot_and_bit(index: usize) -> (usize, u64) {
    (index / WORD_BITS, 1u64 << (index % WORD_BITS))
}

impl BitArray {
    /// Allocates `len` cleared slots.
    pub fn new(len: usize) -> Result<Self, TryReserveError> {
        let count = len.div_ceil(WORD_BITS);
        let mut words = Vec::new();

        words.try_reserve_exact(count)?;
        words.resize(count, 0);

        Ok(Self { words, len })
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// number of backing `u64` words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }

        let (slot, bit) = slot_and_bit(index);

        self.words[slot] & bit != 0
    }

    /// Out-of-range indices are ignored.
    #[inline]
    pub fn set(&mut self, index: usize) {
        if index >= self.len {
            return;
        }

        let (slot, bit) = slot_and_bit(index);

        self.words[slot] |= bit;
    }

    /// Finds the first unset slot at or after `from`.
    #[must_use]
    pub fn next_unset(&self, from: usize) -> Option<usize> {
        if from >= self.len {
            return None;
        }

        let mut slot = from / WORD_BITS;
        let mut word = !self.words[slot] & (!0u64 << (from % WORD_BITS));

        loop {
            if word != 0 {
                let index = slot * WORD_BITS + word.trailing_zeros() as usize;

                return (index < self.len).then_some(index);
            }

            slot += 1;
            word = !*self.words.get(slot)?;
        }
    }

    /// Sets `start, start + step, start + 2 * step, ...` up to and including
    /// the last valid slot, returning how many slots were touched.
    ///
    /// A zero step marks nothing.
    pub fn set_strided(&mut self, start: usize, step: usize) -> usize {
        if step == 0 || start >= self.len {
            return 0;
        }

        let count = (self.len - start).div_ceil(step);
        let (skip, shift) = (step / WORD_BITS, step % WORD_BITS);

        let mut slot = start / WORD_BITS;
        let mut offset = start % WORD_BITS;
        let mut mask = 0u64;

        // collect all bits landing in one word, then write the word once
        for _ in 0..count {
            mask |= 1u64 << offset;
            offset += shift;

            let next = slot + skip + offset / WORD_BITS;

            offset %= WORD_BITS;

            if next != slot {
                self.words[slot] |= mask;
                mask = 0;
                slot = next;
            }
        }

        if mask != 0 {
            self.words[slot] |= mask;
        }

        count
    }

    /// Ascending iterator over unset slots.
    #[must_use]
    pub fn iter_unset(&self) -> UnsetBits<'_> {
        UnsetBits {
            words: &self.words,
            len: self.len,
            slot: 0,
            word: self.words.first().map_or(0, |word| !word),
        }
    }
}

/// See [`BitArray::iter_unset`].
#[derive(Clone, Debug)]
pub struct UnsetBits<'lt> {
    words: &'lt [u64],
    len: usize,
    slot: usize,
    word: u64,
}

impl Iterator for UnsetBits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.word != 0 {
                let index = self.slot * WORD_BITS + self.word.trailing_zeros() as usize;

                // clear lowest set bit
                self.word &= self.word - 1;

                if index < self.len {
                    return Some(index);
                }

                self.word = 0;
                self.slot = self.words.len();

                return None;
            }

            self.slot += 1;
            self.word = !*self.words.get(self.slot)?;
        }
    }
}
