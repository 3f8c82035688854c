//! The operator library: pure functions over [`VNumber`] operands.
//!
//! Every operator takes its operands by reference and returns a brand-new
//! value; nothing here mutates an input. Don't-care bits are ordinary
//! domain values and flow through the truth tables; the only fatal
//! conditions are the native-integer conversions inside the shift
//! operators.
//!
//! Binary table operators align their operands to the wider width, each
//! side extended with its *own* padding bit, so a short signed negative
//! operand meets a wide one as the same negative value.

mod arith;
mod cmp;
mod shift;

pub use arith::{add, divide, modulo, multiply, power, subtract};
pub use cmp::{equal, greater_equal, greater_than, less_equal, less_than, not_equal};
pub use shift::{arith_shift_left, arith_shift_right, shift_left, shift_right};

use itertools::{EitherOrBoth, Itertools};

use crate::bits::BitVector;
use crate::logic::{self, BinaryTable, LogicValue};
use crate::number::VNumber;

// ─────────────────────────────────────────────────────────
//  Shared drivers
// ─────────────────────────────────────────────────────────

/// Applies `lut` position-wise over both operands aligned to the wider
/// width. Result width = aligned width.
pub(crate) fn redux_op(a: &VNumber, b: &VNumber, lut: &BinaryTable) -> VNumber {
    let (pad_a, pad_b) = (a.padding_bit(), b.padding_bit());
    let values: Vec<LogicValue> = a
        .bits()
        .iter()
        .zip_longest(b.bits().iter())
        .map(|pair| match pair {
            EitherOrBoth::Both(x, y) => logic::eval2(lut, x, y),
            EitherOrBoth::Left(x) => logic::eval2(lut, x, pad_b),
            EitherOrBoth::Right(y) => logic::eval2(lut, pad_a, y),
        })
        .collect();
    VNumber::new(
        BitVector::from_lsb_values(&values),
        a.is_signed() && b.is_signed(),
    )
}

/// Left-fold of every bit through a 2-input table; the reduction
/// primitive behind the unary reduction operators.
pub(crate) fn reduce_op(a: &VNumber, lut: &BinaryTable) -> LogicValue {
    let mut acc = a.bits().value_at(0);
    for i in 1..a.width() {
        acc = logic::eval2(lut, acc, a.bits().value_at(i));
    }
    acc
}

/// Wraps a single bit as a 1-bit unsigned result.
pub(crate) fn one_bit(value: LogicValue) -> VNumber {
    VNumber::new(BitVector::from_lsb_values(&[value]), false)
}

// ─────────────────────────────────────────────────────────
//  Unary operators
// ─────────────────────────────────────────────────────────

/// Bitwise `~`: per-bit table lookup at the operand's width.
pub fn bitwise_not(a: &VNumber) -> VNumber {
    let values: Vec<LogicValue> = a
        .bits()
        .iter()
        .map(|bit| logic::eval1(&logic::NOT, bit))
        .collect();
    VNumber::new(BitVector::from_lsb_values(&values), a.is_signed())
}

/// Unary `+`: the identity. `z` bits survive verbatim, unlike a buffer.
pub fn identity(a: &VNumber) -> VNumber {
    a.clone()
}

/// Unary `-`: two's-complement negation at the operand's width.
pub fn negate(a: &VNumber) -> VNumber {
    a.twos_complement()
}

pub fn reduce_and(a: &VNumber) -> VNumber {
    one_bit(reduce_op(a, &logic::AND))
}

pub fn reduce_or(a: &VNumber) -> VNumber {
    one_bit(reduce_op(a, &logic::OR))
}

pub fn reduce_xor(a: &VNumber) -> VNumber {
    one_bit(reduce_op(a, &logic::XOR))
}

pub fn reduce_nand(a: &VNumber) -> VNumber {
    one_bit(reduce_op(a, &logic::NAND))
}

pub fn reduce_nor(a: &VNumber) -> VNumber {
    one_bit(reduce_op(a, &logic::NOR))
}

pub fn reduce_xnor(a: &VNumber) -> VNumber {
    one_bit(reduce_op(a, &logic::XNOR))
}

/// Logical `!`: or-reduce, then invert.
pub fn logical_not(a: &VNumber) -> VNumber {
    one_bit(logic::eval1(&logic::NOT, reduce_op(a, &logic::OR)))
}

// ─────────────────────────────────────────────────────────
//  Binary bitwise and logical operators
// ─────────────────────────────────────────────────────────

pub fn bitwise_and(a: &VNumber, b: &VNumber) -> VNumber {
    redux_op(a, b, &logic::AND)
}

pub fn bitwise_or(a: &VNumber, b: &VNumber) -> VNumber {
    redux_op(a, b, &logic::OR)
}

pub fn bitwise_xor(a: &VNumber, b: &VNumber) -> VNumber {
    redux_op(a, b, &logic::XOR)
}

pub fn bitwise_nand(a: &VNumber, b: &VNumber) -> VNumber {
    redux_op(a, b, &logic::NAND)
}

pub fn bitwise_nor(a: &VNumber, b: &VNumber) -> VNumber {
    redux_op(a, b, &logic::NOR)
}

pub fn bitwise_xnor(a: &VNumber, b: &VNumber) -> VNumber {
    redux_op(a, b, &logic::XNOR)
}

/// `&&`: both operands or-reduced to one bit, then combined through the
/// and table.
pub fn logical_and(a: &VNumber, b: &VNumber) -> VNumber {
    one_bit(logic::eval2(
        &logic::AND,
        reduce_op(a, &logic::OR),
        reduce_op(b, &logic::OR),
    ))
}

/// `||`: both operands or-reduced to one bit, then combined through the
/// or table.
pub fn logical_or(a: &VNumber, b: &VNumber) -> VNumber {
    one_bit(logic::eval2(
        &logic::OR,
        reduce_op(a, &logic::OR),
        reduce_op(b, &logic::OR),
    ))
}

/// `===`: per-bit literal comparison (`x` matches `x`, `z` matches `z`),
/// folded to a single always-known verdict bit.
pub fn case_equal(a: &VNumber, b: &VNumber) -> VNumber {
    let per_bit = redux_op(a, b, &logic::CASE_EQ);
    one_bit(reduce_op(&per_bit, &logic::AND))
}

/// `!==`: the inverse verdict of [`case_equal`], or-folded over the
/// derived per-bit inequality table.
pub fn case_not_equal(a: &VNumber, b: &VNumber) -> VNumber {
    let per_bit = redux_op(a, b, &logic::CASE_NEQ);
    one_bit(reduce_op(&per_bit, &logic::OR))
}

// ─────────────────────────────────────────────────────────
//  Ternary select
// ─────────────────────────────────────────────────────────

/// `cond ? when_true : when_false`.
///
/// A condition that or-reduces to `1` or `0` selects a branch unchanged.
/// An indeterminate condition merges the branches bit-wise: agreeing bits
/// survive, disagreeing bits become `x`.
pub fn ternary(cond: &VNumber, when_true: &VNumber, when_false: &VNumber) -> VNumber {
    match reduce_op(cond, &logic::OR) {
        LogicValue::One => when_true.clone(),
        LogicValue::Zero => when_false.clone(),
        _ => redux_op(when_true, when_false, &logic::TERNARY),
    }
}

/// The pass/fail verdict used by external drivers: `true` iff the value
/// or-reduces to a definite `1`.
pub fn is_true(a: &VNumber) -> bool {
    reduce_op(a, &logic::OR) == LogicValue::One
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(text: &str) -> VNumber {
        text.parse().unwrap()
    }

    #[test]
    fn test_bitwise_not() {
        assert_eq!(bitwise_not(&n("4'b10xz")).to_string(), "4'b01xx");
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(&n("4'sd6")).as_i64().unwrap(), -6);
    }

    #[test]
    fn test_binary_bitwise_alignment_pads_each_side() {
        // 2'sb11 is -1: extends with ones against the wider operand
        assert_eq!(bitwise_and(&n("2'sb11"), &n("4'sb0111")).to_string(), "4'sb0111");
        // unsigned 2'b11 extends with zeros
        assert_eq!(bitwise_and(&n("2'b11"), &n("4'b0111")).to_string(), "4'b0011");
        assert_eq!(bitwise_or(&n("4'b0001"), &n("4'b1000")).to_string(), "4'b1001");
        assert_eq!(bitwise_xor(&n("4'b1100"), &n("4'b1010")).to_string(), "4'b0110");
    }

    #[test]
    fn test_reductions() {
        assert_eq!(reduce_and(&n("4'b1111")).to_string(), "1'b1");
        assert_eq!(reduce_and(&n("4'b1101")).to_string(), "1'b0");
        assert_eq!(reduce_or(&n("4'b0000")).to_string(), "1'b0");
        // one unknown keeps reduction-or of an otherwise-zero vector at x
        assert_eq!(reduce_or(&n("4'b0x00")).to_string(), "1'bx");
        assert_eq!(reduce_or(&n("4'b0x10")).to_string(), "1'b1");
        assert_eq!(reduce_xor(&n("4'b1101")).to_string(), "1'b1");
        assert_eq!(reduce_nor(&n("4'b0000")).to_string(), "1'b1");
    }

    #[test]
    fn test_logical_ops() {
        assert_eq!(logical_not(&n("4'b0000")).to_string(), "1'b1");
        assert_eq!(logical_not(&n("4'b0100")).to_string(), "1'b0");
        assert_eq!(logical_not(&n("4'b000x")).to_string(), "1'bx");
        assert_eq!(logical_and(&n("4'b0010"), &n("1'b1")).to_string(), "1'b1");
        assert_eq!(logical_and(&n("4'b0000"), &n("1'b1")).to_string(), "1'b0");
        assert_eq!(logical_or(&n("4'b0000"), &n("4'b0x00")).to_string(), "1'bx");
        // a definite 1 wins over an unknown side for ||
        assert_eq!(logical_or(&n("4'b0001"), &n("4'bxxxx")).to_string(), "1'b1");
    }

    #[test]
    fn test_case_equality_is_literal() {
        assert_eq!(case_equal(&n("4'b1x0z"), &n("4'b1x0z")).to_string(), "1'b1");
        assert_eq!(case_equal(&n("4'b1x0z"), &n("4'b1x00")).to_string(), "1'b0");
        assert_eq!(case_not_equal(&n("4'b1x0z"), &n("4'b1x00")).to_string(), "1'b1");
    }

    #[test]
    fn test_ternary_definite_condition() {
        assert_eq!(ternary(&n("1'b1"), &n("4'd3"), &n("4'd9")).to_string(), "4'b0011");
        assert_eq!(ternary(&n("1'b0"), &n("4'd3"), &n("4'd9")).to_string(), "4'b1001");
        assert_eq!(ternary(&n("4'b0010"), &n("4'd3"), &n("4'd9")).to_string(), "4'b0011");
    }

    #[test]
    fn test_ternary_indeterminate_condition_merges_branches() {
        // 3 = 0011, 9 = 1001: agree on bits 1 (0) and 0 (1)
        assert_eq!(ternary(&n("1'bx"), &n("4'd3"), &n("4'd9")).to_string(), "4'bx0x1");
        assert_eq!(ternary(&n("1'bz"), &n("4'd5"), &n("4'd5")).to_string(), "4'b0101");
    }

    #[test]
    fn test_is_true() {
        assert!(is_true(&n("4'b0100")));
        assert!(!is_true(&n("4'b0000")));
        assert!(!is_true(&n("4'b00x0")));
    }
}
