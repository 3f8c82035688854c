//! Dense packed storage for four-state bit vectors.
//!
//! Each [`LogicValue`] occupies one 2-bit slot of a `u64` word, 32 slots per
//! word, slot 0 = least-significant bit. The storage owns its words outright
//! (plain `Vec<u64>`, standard copy/clone), and every width-changing
//! operation allocates and returns a new vector.

use crate::error::NumberError;
use crate::logic::{self, LogicValue};

const SLOT_BITS: usize = 2;
const SLOTS_PER_WORD: usize = u64::BITS as usize / SLOT_BITS;

/// High bit of every 2-bit slot. Both don't-care encodings (`x` = `10`,
/// `z` = `11`) set it, so one masked compare per word detects any of them.
const UNKNOWN_SCAN_MASK: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// Base-4 repunit: multiplying a 2-bit encoding by this replicates it
/// across all 32 slots of a word.
const SLOT_REPLICATE: u64 = 0x5555_5555_5555_5555;

/// A fixed-width sequence of four-state bits, index 0 = LSB.
///
/// Invariants: the width is at least 1 and never changes for a given
/// instance; slots at index `width` and above in the last word are kept
/// zero so whole-word scans and equality never see stale data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    words: Vec<u64>,
    width: usize,
}

impl BitVector {
    /// Allocates a vector of `width` bits, every bit set to `fill`.
    ///
    /// A zero width violates the storage contract and panics.
    pub fn new(width: usize, fill: LogicValue) -> Self {
        assert!(width > 0, "bit vector width must be at least 1");
        let word_count = width.div_ceil(SLOTS_PER_WORD);
        let mut vector = Self {
            words: vec![(fill as u64) * SLOT_REPLICATE; word_count],
            width,
        };
        vector.clear_tail_slots();
        vector
    }

    /// Builds a vector from LSB-first values. Panics on an empty slice.
    pub fn from_lsb_values(values: &[LogicValue]) -> Self {
        let mut vector = Self::new(values.len(), LogicValue::Zero);
        for (i, v) in values.iter().enumerate() {
            vector.put(i, *v);
        }
        vector
    }

    /// Number of bits stored.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bounds-checked read of bit `index`.
    pub fn get(&self, index: usize) -> Result<LogicValue, NumberError> {
        if index >= self.width {
            return Err(NumberError::OutOfRange {
                index,
                width: self.width,
            });
        }
        Ok(self.value_at(index))
    }

    /// Bounds-checked write of bit `index`.
    pub fn set(&mut self, index: usize, value: LogicValue) -> Result<(), NumberError> {
        if index >= self.width {
            return Err(NumberError::OutOfRange {
                index,
                width: self.width,
            });
        }
        self.put(index, value);
        Ok(())
    }

    /// Unchecked-by-contract read used by the in-crate loops, which always
    /// iterate inside the width.
    pub(crate) fn value_at(&self, index: usize) -> LogicValue {
        debug_assert!(index < self.width);
        let (word, offset) = Self::locate(index);
        LogicValue::from_encoding(((self.words[word] >> offset) & 0b11) as u8)
    }

    pub(crate) fn put(&mut self, index: usize, value: LogicValue) {
        debug_assert!(index < self.width);
        let (word, offset) = Self::locate(index);
        self.words[word] &= !(0b11 << offset);
        self.words[word] |= (value as u64) << offset;
    }

    const fn locate(index: usize) -> (usize, usize) {
        (index / SLOTS_PER_WORD, (index % SLOTS_PER_WORD) * SLOT_BITS)
    }

    /// `true` if any bit is `x` or `z`. Scans whole words, never
    /// individual slots.
    pub fn has_unknowns(&self) -> bool {
        self.words.iter().any(|w| w & UNKNOWN_SCAN_MASK != 0)
    }

    /// Iterates the bits LSB-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = LogicValue> + ExactSizeIterator + '_ {
        (0..self.width).map(|i| self.value_at(i))
    }

    /// Renders the vector over `{'0','1','x','z'}`. `msb_first = false` is
    /// the internal canonical order; `msb_first = true` is the order used
    /// in literal output.
    pub fn to_bitstring(&self, msb_first: bool) -> String {
        let chars = self.iter().map(LogicValue::to_char);
        if msb_first {
            chars.rev().collect()
        } else {
            chars.collect()
        }
    }

    /// Two's complement at the same width: ripple-adds 1 to the bitwise
    /// negation, LSB to MSB, through the `NOT`/`XOR`/`AND` tables.
    pub fn twos_complement(&self) -> Self {
        let mut out = Self::new(self.width, LogicValue::Zero);
        let mut carry = LogicValue::One;
        for (i, bit) in self.iter().enumerate() {
            let negated = logic::eval1(&logic::NOT, bit);
            out.put(i, logic::eval2(&logic::XOR, carry, negated));
            carry = logic::eval2(&logic::AND, carry, negated);
        }
        out
    }

    /// Returns a copy resized to `width` bits: low bits are preserved,
    /// new high bits take `pad`, excess high bits are dropped.
    pub fn resized(&self, width: usize, pad: LogicValue) -> Self {
        let mut out = Self::new(width, pad);
        for i in 0..width.min(self.width) {
            out.put(i, self.value_at(i));
        }
        out
    }

    fn clear_tail_slots(&mut self) {
        let used = self.width % SLOTS_PER_WORD;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << (used * SLOT_BITS)) - 1;
            }
        }
    }
}
