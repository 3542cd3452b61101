//! Fixed-length bitset tracking which offsets of a range are in use.

const WORD_BITS: u64 = u64::BITS as u64;

/// Number of `u64` words needed to hold `bits` bits, if addressable.
#[inline]
pub(crate) fn words_for_bits(bits: u64) -> Option<usize> {
    usize::try_from(bits.div_ceil(WORD_BITS)).ok()
}

/// One bit per offset, all clear on creation.
///
/// Indexes past `len` are a caller bug and panic through slice indexing;
/// the allocator only ever passes offsets below its range size.
pub(crate) struct OffsetBitmap {
    words: Vec<u64>,
    len: u64,
}

impl OffsetBitmap {
    /// Allocate a clear bitmap of `len` bits.
    ///
    /// Returns `None` when the words cannot be allocated, instead of
    /// aborting the process.
    pub(crate) fn try_new(len: u64) -> Option<Self> {
        let count = words_for_bits(len)?;
        let mut words = Vec::new();
        words.try_reserve_exact(count).ok()?;
        words.resize(count, 0);
        Some(Self { words, len })
    }

    #[inline]
    fn locate(index: u64) -> (usize, u64) {
        ((index / WORD_BITS) as usize, 1u64 << (index % WORD_BITS))
    }

    pub(crate) fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub(crate) fn get(&self, index: u64) -> bool {
        debug_assert!(index < self.len);
        let (word, mask) = Self::locate(index);
        self.words[word] & mask != 0
    }

    /// Set the bit; returns `true` if it was previously clear.
    #[inline]
    pub(crate) fn set(&mut self, index: u64) -> bool {
        debug_assert!(index < self.len);
        let (word, mask) = Self::locate(index);
        let was_clear = self.words[word] & mask == 0;
        self.words[word] |= mask;
        was_clear
    }

    /// Clear the bit; returns `true` if it was previously set.
    #[inline]
    pub(crate) fn clear(&mut self, index: u64) -> bool {
        debug_assert!(index < self.len);
        let (word, mask) = Self::locate(index);
        let was_set = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        was_set
    }

    #[cfg(test)]
    pub(crate) fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }
}
