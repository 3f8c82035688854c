//! Logical and arithmetic shift operators.
//!
//! The shift amount is the *numeric value* of the right operand, so it
//! must be fully determined: any `x`/`z` bit in it collapses the result to
//! the 1-bit unknown placeholder. A right-operand wider than the native
//! integer window is not convertible and propagates
//! [`NumberError::NonConvertible`].

use crate::error::NumberError;
use crate::logic::LogicValue;
use crate::number::VNumber;

use crate::bits::BitVector;

/// `a << b`: grows the width by the shift amount, vacated low bits are
/// zero.
pub fn shift_left(a: &VNumber, b: &VNumber) -> Result<VNumber, NumberError> {
    shift_numeric(a, b, false, false)
}

/// `a <<< b`: identical to the logical left shift; the sign plays no part
/// in which bits enter from the low end.
pub fn arith_shift_left(a: &VNumber, b: &VNumber) -> Result<VNumber, NumberError> {
    shift_numeric(a, b, false, true)
}

/// `a >> b`: keeps the operand's width, vacated high bits are zero,
/// dropped low bits are discarded.
pub fn shift_right(a: &VNumber, b: &VNumber) -> Result<VNumber, NumberError> {
    shift_numeric(a, b, true, false)
}

/// `a >>> b`: keeps the operand's width, vacated high bits replicate the
/// operand's padding bit.
pub fn arith_shift_right(a: &VNumber, b: &VNumber) -> Result<VNumber, NumberError> {
    shift_numeric(a, b, true, true)
}

fn shift_numeric(
    a: &VNumber,
    b: &VNumber,
    rightward: bool,
    arithmetic: bool,
) -> Result<VNumber, NumberError> {
    if b.has_unknowns() {
        return Ok(VNumber::all_unknown(1));
    }
    let amount = b.as_i64()?;
    let amount = if rightward {
        0i64.saturating_sub(amount)
    } else {
        amount
    };
    Ok(shift_by(a, amount, arithmetic))
}

/// Shifts by a signed bit count: positive moves toward the MSB (growing
/// the width), negative toward the LSB (keeping it). A negative numeric
/// amount on the right operand therefore reverses the shift direction.
pub(crate) fn shift_by(a: &VNumber, amount: i64, arithmetic: bool) -> VNumber {
    use std::cmp::Ordering;
    match amount.cmp(&0) {
        Ordering::Equal => a.clone(),
        Ordering::Greater => {
            let n = amount as usize;
            let mut out = BitVector::new(a.width() + n, LogicValue::Zero);
            for (i, bit) in a.bits().iter().enumerate() {
                out.put(i + n, bit);
            }
            VNumber::new(out, a.is_signed())
        }
        Ordering::Less => {
            let n = amount.unsigned_abs() as usize;
            let pad = if arithmetic {
                a.padding_bit()
            } else {
                LogicValue::Zero
            };
            let width = a.width();
            let mut out = BitVector::new(width, pad);
            for i in 0..width.saturating_sub(n) {
                out.put(i, a.bits().value_at(i + n));
            }
            VNumber::new(out, a.is_signed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(text: &str) -> VNumber {
        text.parse().unwrap()
    }

    #[test]
    fn test_left_shift_grows_width() {
        assert_eq!(shift_left(&n("4'b1011"), &n("2'd2")).unwrap().to_string(), "6'b101100");
        assert_eq!(shift_left(&n("4'b1011"), &n("2'd0")).unwrap().to_string(), "4'b1011");
    }

    #[test]
    fn test_right_shift_keeps_width() {
        assert_eq!(shift_right(&n("4'b1011"), &n("2'd2")).unwrap().to_string(), "4'b0010");
        assert_eq!(shift_right(&n("4'b1011"), &n("4'd9")).unwrap().to_string(), "4'b0000");
    }

    #[test]
    fn test_arithmetic_right_shift_replicates_the_sign() {
        assert_eq!(
            arith_shift_right(&n("4'sb1011"), &n("2'd2")).unwrap().to_string(),
            "4'sb1110"
        );
        // unsigned operand: padding bit is zero even for >>>
        assert_eq!(
            arith_shift_right(&n("4'b1011"), &n("2'd2")).unwrap().to_string(),
            "4'b0010"
        );
    }

    #[test]
    fn test_arith_left_equals_logical_left() {
        assert_eq!(
            arith_shift_left(&n("4'sb1011"), &n("2'd2")).unwrap().to_string(),
            "6'sb101100"
        );
    }

    #[test]
    fn test_unknown_amount_collapses() {
        assert_eq!(shift_left(&n("4'b1011"), &n("2'bx0")).unwrap().to_string(), "1'bx");
        assert_eq!(shift_right(&n("4'b1011"), &n("2'b1z")).unwrap().to_string(), "1'bx");
    }

    #[test]
    fn test_negative_amount_reverses_direction() {
        assert_eq!(shift_left(&n("4'b1011"), &n("2'sb11")).unwrap().to_string(), "4'b0101");
        assert_eq!(shift_right(&n("4'b1011"), &n("2'sb11")).unwrap().to_string(), "5'b10110");
    }

    #[test]
    fn test_oversized_amount_operand() {
        let wide = VNumber::zeros(80);
        assert!(matches!(
            shift_left(&n("4'b1011"), &wide),
            Err(NumberError::NonConvertible { .. })
        ));
    }

    #[test]
    fn test_x_bits_shift_as_values() {
        assert_eq!(shift_left(&n("4'bx01z"), &n("1'b1")).unwrap().to_string(), "5'bx01z0");
    }
}
