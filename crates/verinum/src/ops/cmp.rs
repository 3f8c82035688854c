//! Signed magnitude comparison and the relational operators.

use crate::logic::{self, LogicValue};
use crate::number::VNumber;

use super::one_bit;

/// Outcome of a magnitude comparison. `Unknown` means a don't-care bit was
/// reached before the order could be decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CmpResult {
    LessThan,
    GreaterThan,
    Equal,
    Unknown,
}

/// Compares two numbers under their signed interpretation.
///
/// Opposite signs decide immediately. When both operands are negative,
/// their magnitudes are compared and the verdict flipped. The bit walk
/// runs from the most significant aligned position downward, driven by
/// the single-bit `LT`/`GT` tables, so the first don't-care bit ahead of
/// a decision degrades the result to `Unknown`.
pub(crate) fn eval_cmp(lhs: &VNumber, rhs: &VNumber) -> CmpResult {
    let neg_l = lhs.is_negative();
    let neg_r = rhs.is_negative();
    if neg_l && !neg_r {
        return CmpResult::LessThan;
    }
    if !neg_l && neg_r {
        return CmpResult::GreaterThan;
    }

    let invert = neg_l && neg_r;
    let (mag_l, mag_r);
    let (a, b) = if invert {
        mag_l = magnitude(lhs);
        mag_r = magnitude(rhs);
        (&mag_l, &mag_r)
    } else {
        (lhs, rhs)
    };

    for i in (0..a.width().max(b.width())).rev() {
        let x = a.bit_or_pad(i);
        let y = b.bit_or_pad(i);
        let below = logic::eval2(&logic::LT, x, y);
        if below.is_unknown() {
            return CmpResult::Unknown;
        }
        if below == LogicValue::One {
            return if invert {
                CmpResult::GreaterThan
            } else {
                CmpResult::LessThan
            };
        }
        if logic::eval2(&logic::GT, x, y) == LogicValue::One {
            return if invert {
                CmpResult::LessThan
            } else {
                CmpResult::GreaterThan
            };
        }
    }
    CmpResult::Equal
}

/// Compares against a small constant.
pub(crate) fn eval_cmp_const(lhs: &VNumber, constant: i64) -> CmpResult {
    eval_cmp(lhs, &VNumber::from(constant))
}

/// The absolute value of a negative operand, reinterpreted as unsigned so
/// the walk pads it with zeros.
fn magnitude(n: &VNumber) -> VNumber {
    VNumber::new(n.bits().twos_complement(), false)
}

pub fn less_than(a: &VNumber, b: &VNumber) -> VNumber {
    one_bit(match eval_cmp(a, b) {
        CmpResult::Unknown => LogicValue::Unknown,
        CmpResult::LessThan => LogicValue::One,
        _ => LogicValue::Zero,
    })
}

pub fn greater_than(a: &VNumber, b: &VNumber) -> VNumber {
    one_bit(match eval_cmp(a, b) {
        CmpResult::Unknown => LogicValue::Unknown,
        CmpResult::GreaterThan => LogicValue::One,
        _ => LogicValue::Zero,
    })
}

/// `<=` is the inverse of the strict `>`.
pub fn less_equal(a: &VNumber, b: &VNumber) -> VNumber {
    one_bit(match eval_cmp(a, b) {
        CmpResult::Unknown => LogicValue::Unknown,
        CmpResult::GreaterThan => LogicValue::Zero,
        _ => LogicValue::One,
    })
}

/// `>=` is the inverse of the strict `<`.
pub fn greater_equal(a: &VNumber, b: &VNumber) -> VNumber {
    one_bit(match eval_cmp(a, b) {
        CmpResult::Unknown => LogicValue::Unknown,
        CmpResult::LessThan => LogicValue::Zero,
        _ => LogicValue::One,
    })
}

pub fn equal(a: &VNumber, b: &VNumber) -> VNumber {
    one_bit(match eval_cmp(a, b) {
        CmpResult::Unknown => LogicValue::Unknown,
        CmpResult::Equal => LogicValue::One,
        _ => LogicValue::Zero,
    })
}

pub fn not_equal(a: &VNumber, b: &VNumber) -> VNumber {
    one_bit(match eval_cmp(a, b) {
        CmpResult::Unknown => LogicValue::Unknown,
        CmpResult::Equal => LogicValue::Zero,
        _ => LogicValue::One,
    })
}
