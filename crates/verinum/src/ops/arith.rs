//! Ripple-carry addition, two's-complement subtraction, shift-and-add
//! multiplication, restoring division and the power special cases.
//!
//! None of the algorithms lean on native machine arithmetic: every bit is
//! resolved through the `SUM`/`CARRY` truth tables, which is what lets
//! don't-care bits degrade results instead of corrupting them.

use crate::bits::BitVector;
use crate::logic::{self, LogicValue};
use crate::number::VNumber;

use super::cmp::{CmpResult, eval_cmp, eval_cmp_const};
use super::shift::shift_by;

/// Ripple adder over the aligned operands, seeded with `initial_carry`
/// (`1` for subtract-via-complement). When `invert_b` is set each `b` bit
/// passes through the not table first, padding bit included, which makes
/// `a + !b + 1` the standard subtraction identity at any width mix.
///
/// Result width is `max(width_a, width_b) + 1`: the top position is summed
/// from the two padding bits so the final carry (or the sign of a
/// negative difference) is always captured. Callers wanting wrap-around
/// semantics truncate explicitly.
fn ripple(a: &VNumber, b: &VNumber, initial_carry: LogicValue, invert_b: bool) -> VNumber {
    let width = a.width().max(b.width()) + 1;
    let mut out = BitVector::new(width, LogicValue::Zero);
    let mut carry = initial_carry;
    for i in 0..width {
        let x = a.bit_or_pad(i);
        let y = if invert_b {
            logic::eval1(&logic::NOT, b.bit_or_pad(i))
        } else {
            b.bit_or_pad(i)
        };
        out.put(i, logic::eval3(&logic::SUM, carry, x, y));
        carry = logic::eval3(&logic::CARRY, carry, x, y);
    }
    VNumber::new(out, a.is_signed() && b.is_signed())
}

/// `a + b`.
pub fn add(a: &VNumber, b: &VNumber) -> VNumber {
    ripple(a, b, LogicValue::Zero, false)
}

/// `a - b`, computed as `a + !b + 1`.
pub fn subtract(a: &VNumber, b: &VNumber) -> VNumber {
    ripple(a, b, LogicValue::One, true)
}

/// `a * b` by shift-and-add over the absolute values.
///
/// Result width is `width_a + width_b` (the full product), negated at the
/// end when exactly one operand was negative. Any don't-care operand
/// short-circuits to the all-`x` product.
pub fn multiply(a: &VNumber, b: &VNumber) -> VNumber {
    let width = a.width() + b.width();
    let signed = a.is_signed() && b.is_signed();
    if a.has_unknowns() || b.has_unknowns() {
        return VNumber::filled(width, LogicValue::Unknown, signed);
    }

    let neg_a = a.is_negative();
    let neg_b = b.is_negative();
    let abs_a = if neg_a { a.twos_complement() } else { a.clone() };
    let abs_b = if neg_b { b.twos_complement() } else { b.clone() };
    let invert_result = neg_a != neg_b;

    let mut acc = BitVector::new(width, LogicValue::Zero);
    for i in 0..abs_a.width() {
        if abs_a.bits().value_at(i) != LogicValue::One {
            continue;
        }
        // add abs_b, shifted up by i, into the accumulator
        let mut carry = LogicValue::Zero;
        for j in 0..abs_b.width() {
            let position = i + j;
            if position >= width {
                break;
            }
            let current = acc.value_at(position);
            let bit = abs_b.bits().value_at(j);
            acc.put(position, logic::eval3(&logic::SUM, carry, current, bit));
            carry = logic::eval3(&logic::CARRY, carry, current, bit);
        }
        let mut position = i + abs_b.width();
        while carry == LogicValue::One && position < width {
            let current = acc.value_at(position);
            acc.put(position, logic::eval2(&logic::XOR, current, carry));
            carry = current;
            position += 1;
        }
    }

    if invert_result {
        acc = acc.twos_complement();
    }
    VNumber::new(acc, signed)
}

/// `a ** b`, special-cased on whether each operand reduces to
/// `0`, `±1` or a larger magnitude before falling back to repeated
/// multiplication (IEEE 1364-2005 table 5-6).
pub fn power(a: &VNumber, b: &VNumber) -> VNumber {
    let signed = a.is_signed() && b.is_signed();
    if a.has_unknowns() || b.has_unknowns() {
        // self-determined: the result takes the base's width
        return VNumber::filled(a.width(), LogicValue::Unknown, signed);
    }

    let base_class: i8 = match eval_cmp_const(a, 0) {
        CmpResult::Equal => 0,
        CmpResult::LessThan => {
            if eval_cmp_const(a, -1) == CmpResult::LessThan {
                -2
            } else {
                -1
            }
        }
        _ => {
            if eval_cmp_const(a, 1) == CmpResult::GreaterThan {
                2
            } else {
                1
            }
        }
    };
    let exponent_class: i8 = match eval_cmp_const(b, 0) {
        CmpResult::Equal => 0,
        CmpResult::LessThan => -1,
        _ => 1,
    };

    let result = match (base_class, exponent_class) {
        (_, 0) | (1, _) => VNumber::from(1),
        (-1, _) => {
            // parity of the exponent decides, negative exponents included
            if b.bits().value_at(0) == LogicValue::One {
                VNumber::from(-1)
            } else {
                VNumber::from(1)
            }
        }
        (0, -1) => return VNumber::filled(a.width(), LogicValue::Unknown, signed),
        (0, 1) => VNumber::from(0),
        (_, -1) => VNumber::from(0),
        _ => {
            let one = VNumber::from(1);
            let mut result = VNumber::from(1);
            let mut remaining = b.clone();
            while eval_cmp_const(&remaining, 0) == CmpResult::GreaterThan {
                result = multiply(&result, a);
                remaining = subtract(&remaining, &one).resized(b.width());
            }
            result
        }
    };
    VNumber::new(result.bits().clone(), signed)
}

/// `a / b`: quotient of the restoring division, truncated toward zero,
/// negative when exactly one operand is negative. Division by zero or by
/// (or of) a don't-care value is the all-`x` result at the dividend's
/// width.
pub fn divide(a: &VNumber, b: &VNumber) -> VNumber {
    let signed = a.is_signed() && b.is_signed();
    if a.has_unknowns() || b.has_unknowns() || eval_cmp_const(b, 0) == CmpResult::Equal {
        return VNumber::filled(a.width(), LogicValue::Unknown, signed);
    }
    let (quotient, _) = div_rem(a, b);
    let quotient = if a.is_negative() != b.is_negative() {
        quotient.twos_complement()
    } else {
        quotient
    };
    VNumber::new(quotient.bits().clone(), signed)
}

/// `a % b`: remainder of the restoring division; it keeps the dividend's
/// sign, matching the truncate-toward-zero quotient.
pub fn modulo(a: &VNumber, b: &VNumber) -> VNumber {
    let signed = a.is_signed() && b.is_signed();
    if a.has_unknowns() || b.has_unknowns() || eval_cmp_const(b, 0) == CmpResult::Equal {
        return VNumber::filled(a.width(), LogicValue::Unknown, signed);
    }
    let (_, remainder) = div_rem(a, b);
    let remainder = if a.is_negative() {
        remainder.twos_complement()
    } else {
        remainder
    };
    VNumber::new(remainder.bits().clone(), signed)
}

/// Unsigned restoring long division over the operand magnitudes: find the
/// largest left-shift of the divisor still within the shrinking dividend,
/// subtract it, set the matching quotient bit, repeat. Both results have
/// the dividend's width.
fn div_rem(a: &VNumber, b: &VNumber) -> (VNumber, VNumber) {
    let width = a.width();
    let abs = |n: &VNumber| {
        if n.is_negative() {
            VNumber::new(n.bits().twos_complement(), false)
        } else {
            VNumber::new(n.bits().clone(), false)
        }
    };
    let dividend = abs(a);
    let divisor = abs(b);

    let mut remainder = dividend;
    let mut quotient = BitVector::new(width, LogicValue::Zero);
    while eval_cmp(&remainder, &divisor) != CmpResult::LessThan {
        let mut shift = 0usize;
        let mut chunk = divisor.clone();
        loop {
            let next = shift_by(&chunk, 1, false);
            if eval_cmp(&next, &remainder) == CmpResult::GreaterThan {
                break;
            }
            chunk = next;
            shift += 1;
        }
        remainder = subtract(&remainder, &chunk).resized(width);
        quotient.put(shift, LogicValue::One);
    }
    (VNumber::new(quotient, false), remainder)
}
