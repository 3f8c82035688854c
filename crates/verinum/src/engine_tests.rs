//! Cross-operator tests: literal-level cross-checks and the algebraic
//! properties of the engine, checked against `num-bigint` as an
//! independent oracle.

use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

use crate::bits::BitVector;
use crate::logic::LogicValue;
use crate::number::VNumber;
use crate::ops;

fn n(text: &str) -> VNumber {
    text.parse().unwrap()
}

fn is_one(v: &VNumber) -> bool {
    v.to_string() == "1'b1"
}

fn is_x(v: &VNumber) -> bool {
    v.to_string() == "1'bx"
}

/// The result bit pattern an operator must produce for `value` at `width`.
fn wrapped(value: BigInt, width: usize) -> BigUint {
    let modulus = BigInt::from(1) << width;
    let reduced = ((value % &modulus) + &modulus) % &modulus;
    reduced.to_biguint().unwrap()
}

/// A don't-care-free number of 1..=40 bits, signed or unsigned.
fn known_number() -> impl Strategy<Value = VNumber> {
    (prop::collection::vec(prop::bool::ANY, 1..=40), prop::bool::ANY).prop_map(|(bits, signed)| {
        let values: Vec<LogicValue> = bits
            .iter()
            .map(|&b| if b { LogicValue::One } else { LogicValue::Zero })
            .collect();
        VNumber::new(BitVector::from_lsb_values(&values), signed)
    })
}

/// Any number, don't-care bits included.
fn any_number() -> impl Strategy<Value = VNumber> {
    (prop::collection::vec(0u8..4, 1..=40), prop::bool::ANY).prop_map(|(encodings, signed)| {
        let values: Vec<LogicValue> = encodings
            .iter()
            .map(|&e| LogicValue::from_encoding(e))
            .collect();
        VNumber::new(BitVector::from_lsb_values(&values), signed)
    })
}

proptest! {
    #[test]
    fn prop_twos_complement_involution(a in known_number()) {
        prop_assert_eq!(&a.twos_complement().twos_complement(), &a);
    }

    #[test]
    fn prop_add_matches_bigint(a in known_number(), b in known_number()) {
        let sum = ops::add(&a, &b);
        let expected = a.as_bigint().unwrap() + b.as_bigint().unwrap();
        prop_assert_eq!(sum.as_biguint().unwrap(), wrapped(expected, sum.width()));
    }

    #[test]
    fn prop_subtract_matches_bigint(a in known_number(), b in known_number()) {
        let difference = ops::subtract(&a, &b);
        let expected = a.as_bigint().unwrap() - b.as_bigint().unwrap();
        prop_assert_eq!(
            difference.as_biguint().unwrap(),
            wrapped(expected, difference.width())
        );
    }

    #[test]
    fn prop_multiply_matches_bigint(a in known_number(), b in known_number()) {
        let product = ops::multiply(&a, &b);
        let expected = a.as_bigint().unwrap() * b.as_bigint().unwrap();
        prop_assert_eq!(
            product.as_biguint().unwrap(),
            wrapped(expected, product.width())
        );
    }

    #[test]
    fn prop_divide_matches_bigint(a in known_number(), b in known_number()) {
        // BigInt division truncates toward zero, the convention chosen here
        let quotient = ops::divide(&a, &b);
        if b.as_bigint().unwrap() == BigInt::from(0) {
            prop_assert!(quotient.has_unknowns());
        } else {
            let expected = a.as_bigint().unwrap() / b.as_bigint().unwrap();
            prop_assert_eq!(
                quotient.as_biguint().unwrap(),
                wrapped(expected, quotient.width())
            );
        }
    }

    #[test]
    fn prop_modulo_matches_bigint(a in known_number(), b in known_number()) {
        let remainder = ops::modulo(&a, &b);
        if b.as_bigint().unwrap() == BigInt::from(0) {
            prop_assert!(remainder.has_unknowns());
        } else {
            let expected = a.as_bigint().unwrap() % b.as_bigint().unwrap();
            prop_assert_eq!(
                remainder.as_biguint().unwrap(),
                wrapped(expected, remainder.width())
            );
        }
    }

    #[test]
    fn prop_comparison_matches_bigint(a in known_number(), b in known_number()) {
        let expected = a.as_bigint().unwrap() < b.as_bigint().unwrap();
        prop_assert_eq!(is_one(&ops::less_than(&a, &b)), expected);
        let expected = a.as_bigint().unwrap() == b.as_bigint().unwrap();
        prop_assert_eq!(is_one(&ops::equal(&a, &b)), expected);
    }

    #[test]
    fn prop_literal_round_trip(a in any_number()) {
        let round_tripped: VNumber = a.to_string().parse().unwrap();
        prop_assert_eq!(&round_tripped, &a);
    }

    #[test]
    fn prop_nand_is_not_of_and(a in any_number(), b in any_number()) {
        let nand = ops::bitwise_nand(&a, &b);
        let not_and = ops::bitwise_not(&ops::bitwise_and(&a, &b));
        prop_assert_eq!(nand.bits(), not_and.bits());
    }
}

#[test]
fn test_multiply_divide_cross_checks() {
    let product = ops::multiply(&n("4'd6"), &n("4'd1"));
    assert_eq!(product.as_i64().unwrap(), 6);
    assert!(is_one(&ops::equal(&product, &n("4'd6"))));

    assert!(is_one(&ops::equal(&ops::divide(&n("8'd7"), &n("8'd2")), &n("8'd3"))));
    assert!(is_one(&ops::equal(&ops::modulo(&n("8'd7"), &n("8'd2")), &n("8'd1"))));
}

#[test]
fn test_comparison_sanity() {
    assert!(is_one(&ops::less_than(&n("4'sd-1"), &n("4'sd0"))));
    assert!(is_one(&ops::equal(&n("4'd5"), &n("4'd5"))));

    // any x operand degrades every value comparison ...
    let with_x = n("4'bx101");
    let five = n("4'd5");
    assert!(is_x(&ops::less_than(&five, &with_x)));
    assert!(is_x(&ops::greater_than(&five, &with_x)));
    assert!(is_x(&ops::less_equal(&five, &with_x)));
    assert!(is_x(&ops::greater_equal(&five, &with_x)));
    assert!(is_x(&ops::equal(&five, &with_x)));
    assert!(is_x(&ops::not_equal(&five, &with_x)));

    // ... while case equality stays bit-for-bit literal
    assert!(is_one(&ops::case_equal(&with_x, &n("4'bx101"))));
    assert!(!is_one(&ops::case_equal(&five, &with_x)));
}

#[test]
fn test_ternary_determinism() {
    assert!(is_one(&ops::equal(
        &ops::ternary(&n("1'b1"), &n("4'd3"), &n("4'd9")),
        &n("4'd3")
    )));
    assert!(is_one(&ops::equal(
        &ops::ternary(&n("1'b0"), &n("4'd3"), &n("4'd9")),
        &n("4'd9")
    )));
    // 3 = 0011 and 9 = 1001 agree on the low two bits only
    assert_eq!(
        ops::ternary(&n("1'bx"), &n("4'd3"), &n("4'd9")).to_string(),
        "4'bx0x1"
    );
}

#[test]
fn test_shift_amount_unknown_law() {
    assert_eq!(
        ops::shift_left(&n("8'd19"), &n("4'bx001")).unwrap().to_string(),
        "1'bx"
    );
    assert_eq!(
        ops::arith_shift_right(&n("8'sd-19"), &n("4'b1z01")).unwrap().to_string(),
        "1'bx"
    );
}

#[test]
fn test_is_true_verdict() {
    assert!(ops::is_true(&n("4'b0100")));
    assert!(!ops::is_true(&n("4'b0000")));
    // an unknown is not a definite pass
    assert!(!ops::is_true(&n("4'b0x00")));
    assert!(ops::is_true(&n("4'b0x10")));
}

#[test]
fn test_sum_width_always_captures_the_carry() {
    let sum = ops::add(&n("4'd15"), &n("4'd15"));
    assert_eq!(sum.width(), 5);
    assert_eq!(sum.as_i64().unwrap(), 30);

    // wrap-around width is the caller's explicit truncation
    assert_eq!(sum.resized(4).as_i64().unwrap(), 14);
}

#[test]
fn test_token_dispatch_end_to_end() {
    let a = n("8'd7");
    let b = n("8'd2");
    let quotient = crate::apply_binary("/".parse().unwrap(), &a, &b).unwrap();
    assert_eq!(quotient.to_string(), "8'b00000011");
    let verdict = crate::apply_unary("!".parse().unwrap(), &quotient);
    assert_eq!(verdict.to_string(), "1'b0");
}
