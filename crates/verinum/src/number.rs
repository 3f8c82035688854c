//! The public value type: one owned four-state bit vector plus a
//! signedness flag.
//!
//! A `VNumber` is constructed from literal text, from a native integer, or
//! as the result of an operator, and is never mutated afterwards: every
//! operator in [`crate::ops`] takes its operands by reference and returns a
//! brand-new value.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::bits::BitVector;
use crate::error::NumberError;
use crate::literal;
use crate::logic::LogicValue;

/// A sized, signed-or-unsigned four-state number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VNumber {
    bits: BitVector,
    signed: bool,
}

impl VNumber {
    pub fn new(bits: BitVector, signed: bool) -> Self {
        Self { bits, signed }
    }

    /// A `width`-bit value with every bit set to `fill`.
    pub fn filled(width: usize, fill: LogicValue, signed: bool) -> Self {
        Self::new(BitVector::new(width, fill), signed)
    }

    /// The all-zero unsigned value of the given width.
    pub fn zeros(width: usize) -> Self {
        Self::filled(width, LogicValue::Zero, false)
    }

    /// The all-`x` unsigned value of the given width, used wherever an
    /// operator's result is entirely indeterminate.
    pub fn all_unknown(width: usize) -> Self {
        Self::filled(width, LogicValue::Unknown, false)
    }

    pub fn width(&self) -> usize {
        self.bits.width()
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    /// `true` iff any bit is `x` or `z`.
    pub fn has_unknowns(&self) -> bool {
        self.bits.has_unknowns()
    }

    /// A value is negative when it is signed and its sign bit is `1`.
    /// An `x`/`z` sign bit is not negative (and not positive either; the
    /// operators degrade such values through the truth tables instead).
    pub fn is_negative(&self) -> bool {
        self.signed && self.bits.value_at(self.width() - 1) == LogicValue::One
    }

    /// The bit used to extend this value to a wider width: the replicated
    /// sign bit when signed and negative, otherwise `0`.
    pub fn padding_bit(&self) -> LogicValue {
        if self.is_negative() {
            LogicValue::One
        } else {
            LogicValue::Zero
        }
    }

    /// Bit `index` counting from the least-significant end.
    pub fn bit_from_lsb(&self, index: usize) -> Result<LogicValue, NumberError> {
        self.bits.get(index)
    }

    /// Bit `index` counting from the most-significant end (`0` = sign bit).
    pub fn bit_from_msb(&self, index: usize) -> Result<LogicValue, NumberError> {
        if index >= self.width() {
            return Err(NumberError::OutOfRange {
                index,
                width: self.width(),
            });
        }
        self.bits.get(self.width() - 1 - index)
    }

    /// Bit `index`, or the padding bit once past the top: the read used by
    /// every width-aligning operator loop.
    pub(crate) fn bit_or_pad(&self, index: usize) -> LogicValue {
        if index < self.width() {
            self.bits.value_at(index)
        } else {
            self.padding_bit()
        }
    }

    /// Two's complement at the same width and signedness.
    pub fn twos_complement(&self) -> Self {
        Self::new(self.bits.twos_complement(), self.signed)
    }

    /// A copy resized to `width`: truncates from the top, or extends with
    /// this value's padding bit.
    pub fn resized(&self, width: usize) -> Self {
        Self::new(self.bits.resized(width, self.padding_bit()), self.signed)
    }

    /// Reads the value as a native `i64` (signed interpretation when the
    /// sign flag is set). Don't-care bits and widths beyond the native
    /// window are not convertible.
    pub fn as_i64(&self) -> Result<i64, NumberError> {
        if self.has_unknowns() {
            return Err(self.non_convertible("contains x/z bits"));
        }
        if self.width() > 64 {
            return Err(self.non_convertible("wider than 64 bits"));
        }
        let mut raw: u64 = 0;
        for (i, bit) in self.bits.iter().enumerate() {
            if bit == LogicValue::One {
                raw |= 1 << i;
            }
        }
        if self.is_negative() {
            for i in self.width()..64 {
                raw |= 1 << i;
            }
        } else if self.width() == 64 && raw > i64::MAX as u64 {
            return Err(self.non_convertible("unsigned value exceeds the i64 range"));
        }
        Ok(raw as i64)
    }

    /// The raw bit pattern as an unsigned big integer.
    pub fn as_biguint(&self) -> Result<BigUint, NumberError> {
        if self.has_unknowns() {
            return Err(self.non_convertible("contains x/z bits"));
        }
        let mut out = BigUint::zero();
        for bit in self.bits.iter().rev() {
            out <<= 1u8;
            if bit == LogicValue::One {
                out += 1u8;
            }
        }
        Ok(out)
    }

    /// The value under its declared signedness as a big integer.
    pub fn as_bigint(&self) -> Result<BigInt, NumberError> {
        if self.is_negative() {
            let magnitude = self.twos_complement();
            let magnitude = VNumber::new(magnitude.bits, false).as_biguint()?;
            Ok(BigInt::from_biguint(Sign::Minus, magnitude))
        } else {
            Ok(BigInt::from(self.as_biguint()?))
        }
    }

    fn non_convertible(&self, reason: &str) -> NumberError {
        NumberError::NonConvertible {
            value: self.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl FromStr for VNumber {
    type Err = NumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        literal::parse(text)
    }
}

impl From<i64> for VNumber {
    /// Builds the minimal signed representation, exactly as the unsized
    /// `'sd` literal form of the same value would parse.
    fn from(value: i64) -> Self {
        let mut width = 64;
        while width > 1 && ((value >> (width - 1)) & 1) == ((value >> (width - 2)) & 1) {
            width -= 1;
        }
        let values: Vec<LogicValue> = (0..width)
            .map(|i| {
                if (value >> i) & 1 == 1 {
                    LogicValue::One
                } else {
                    LogicValue::Zero
                }
            })
            .collect();
        Self::new(BitVector::from_lsb_values(&values), true)
    }
}

impl fmt::Display for VNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", literal::format(self))
    }
}
