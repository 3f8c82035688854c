//! The literal engine: sized/based Verilog literal text to [`VNumber`] and
//! back.
//!
//! Grammar: optional decimal size digits, `'`, optional `s`/`S`, a base
//! character in `{b,o,d,h}` (case-insensitive), then digits of that base
//! drawn from `{0-9,a-f,x,z}` as applicable. Underscores are permitted
//! anywhere and stripped before parsing. Text without a quote parses as an
//! unsized signed decimal. Decimal additionally accepts a leading `-`,
//! which two's-complements the magnitude.

use crate::bits::BitVector;
use crate::error::NumberError;
use crate::logic::LogicValue;
use crate::number::VNumber;

/// Parses literal text into a number. All failures are
/// [`NumberError::MalformedLiteral`]; there is no recoverable-parse mode.
pub(crate) fn parse(text: &str) -> Result<VNumber, NumberError> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() {
        return Err(malformed(text, "empty literal"));
    }

    let (declared_size, signed, radix, digits) = split_literal(text, &cleaned)?;

    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) if radix == 10 => (true, rest),
        Some(_) => {
            return Err(malformed(text, "negative sign is only valid in decimal literals"));
        }
        None => (false, digits),
    };
    if digits.is_empty() {
        return Err(malformed(text, "missing digits"));
    }

    let mut values = digits_to_lsb_values(text, digits, radix)?;

    // Decimal digits encode a value rather than a bit pattern: a positive
    // signed value gets room for its sign bit, and a negative literal is the
    // two's complement of its magnitude.
    if radix == 10 && (signed || negative) && values.last() == Some(&LogicValue::One) {
        values.push(LogicValue::Zero);
    }
    if negative {
        if values.iter().any(|v| v.is_unknown()) {
            return Err(malformed(text, "cannot negate a don't-care literal"));
        }
        let complemented = BitVector::from_lsb_values(&values).twos_complement();
        values = complemented.iter().collect();
    }

    adjust_to_size(&mut values, declared_size, signed);

    Ok(VNumber::new(BitVector::from_lsb_values(&values), signed))
}

/// Serializes a number as its canonical binary literal,
/// `<width>'sb<bits>` or `<width>'b<bits>`, bits written MSB-first.
pub(crate) fn format(number: &VNumber) -> String {
    format!(
        "{}'{}b{}",
        number.width(),
        if number.is_signed() { "s" } else { "" },
        number.bits().to_bitstring(true)
    )
}

/// Splits the cleaned text into declared size, sign flag, radix and digit
/// run. A missing quote means an implicit unsized `'sd` prefix.
fn split_literal<'a>(
    text: &str,
    cleaned: &'a str,
) -> Result<(Option<usize>, bool, u32, &'a str), NumberError> {
    let Some(quote) = cleaned.find('\'') else {
        return Ok((None, true, 10, cleaned));
    };

    let declared_size = if quote == 0 {
        None
    } else {
        let size: usize = cleaned[..quote]
            .parse()
            .map_err(|_| malformed(text, "size prefix is not a decimal number"))?;
        if size == 0 {
            return Err(malformed(text, "zero-width size prefix"));
        }
        Some(size)
    };

    let rest = &cleaned[quote + 1..];
    let (signed, rest) = match rest.strip_prefix(['s', 'S']) {
        Some(tail) => (true, tail),
        None => (false, rest),
    };
    let mut chars = rest.chars();
    let radix = match chars.next().map(|c| c.to_ascii_lowercase()) {
        Some('b') => 2,
        Some('o') => 8,
        Some('d') => 10,
        Some('h') => 16,
        _ => return Err(malformed(text, "unrecognized base character")),
    };
    Ok((declared_size, signed, radix, chars.as_str()))
}

/// Converts a validated digit run into LSB-first bit values by per-digit
/// expansion (binary/octal/hex) or repeated halving (decimal).
fn digits_to_lsb_values(
    text: &str,
    digits: &str,
    radix: u32,
) -> Result<Vec<LogicValue>, NumberError> {
    if radix == 10 {
        // A lone x or z is the only don't-care form decimal admits.
        if digits.eq_ignore_ascii_case("x") {
            return Ok(vec![LogicValue::Unknown]);
        }
        if digits.eq_ignore_ascii_case("z") {
            return Ok(vec![LogicValue::HighZ]);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(text, "invalid decimal digit"));
        }
        return Ok(decimal_to_lsb_values(digits));
    }

    let mut values = Vec::new();
    for digit in digits.chars().rev() {
        let run = radix_digit_values(digit, radix)
            .ok_or_else(|| malformed(text, "invalid digit for base"))?;
        values.extend(run);
    }
    Ok(values)
}

/// One digit's LSB-first expansion: 1 bit for binary, 3 for octal, 4 for
/// hex; `x`/`z` expand to a run of the same state.
fn radix_digit_values(digit: char, radix: u32) -> Option<Vec<LogicValue>> {
    let bits_per_digit = match radix {
        2 => 1,
        8 => 3,
        16 => 4,
        _ => return None,
    };
    match digit {
        'x' | 'X' => Some(vec![LogicValue::Unknown; bits_per_digit]),
        'z' | 'Z' => Some(vec![LogicValue::HighZ; bits_per_digit]),
        _ => {
            let value = digit.to_digit(radix)?;
            Some(
                (0..bits_per_digit)
                    .map(|i| {
                        if (value >> i) & 1 == 1 {
                            LogicValue::One
                        } else {
                            LogicValue::Zero
                        }
                    })
                    .collect(),
            )
        }
    }
}

/// Repeated digit-by-digit halving of a decimal magnitude, emitting one
/// result bit (the running remainder) per pass, LSB first.
fn decimal_to_lsb_values(digits: &str) -> Vec<LogicValue> {
    let mut current: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    let mut values = Vec::new();
    loop {
        let mut halved = Vec::with_capacity(current.len());
        let mut remainder = 0u8;
        for &digit in &current {
            let pair = remainder * 10 + digit;
            halved.push(pair / 2);
            remainder = pair % 2;
        }
        values.push(if remainder == 1 {
            LogicValue::One
        } else {
            LogicValue::Zero
        });
        match halved.iter().position(|&d| d != 0) {
            Some(first_nonzero) => current = halved.split_off(first_nonzero),
            None => break,
        }
    }
    values
}

/// Declared-size adjustment: truncate from the top, extend with the
/// padding bit, or (unsized) trim to the minimal non-redundant width.
fn adjust_to_size(values: &mut Vec<LogicValue>, declared_size: Option<usize>, signed: bool) {
    match declared_size {
        Some(size) if values.len() > size => values.truncate(size),
        Some(size) => {
            let pad = if signed && values[values.len() - 1] == LogicValue::One {
                LogicValue::One
            } else {
                LogicValue::Zero
            };
            values.resize(size, pad);
        }
        None if signed => {
            while values.len() > 1 && values[values.len() - 1] == values[values.len() - 2] {
                values.pop();
            }
        }
        None => {
            while values.len() > 1 && values[values.len() - 1] == LogicValue::Zero {
                values.pop();
            }
        }
    }
}

fn malformed(literal: &str, reason: &str) -> NumberError {
    NumberError::MalformedLiteral {
        literal: literal.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn parsed(text: &str) -> String {
        parse(text).unwrap().to_string()
    }

    #[test_case("3'b101", "3'b101" ; "exact size")]
    #[test_case("2'b101", "2'b01" ; "truncates from the top")]
    #[test_case("5'b101", "5'b00101" ; "zero extends")]
    #[test_case("5'sb101", "5'sb00101" ; "positive pattern extends with zero")]
    #[test_case("4'sb1010", "4'sb1010" ; "signed pattern kept verbatim")]
    #[test_case("8'o17", "8'b00001111" ; "octal expansion")]
    #[test_case("8'hA5", "8'b10100101" ; "hex expansion")]
    #[test_case("8'Hf0", "8'b11110000" ; "base is case insensitive")]
    #[test_case("4'd6", "4'b0110" ; "decimal sized")]
    #[test_case("'d6", "3'b110" ; "decimal unsized unsigned")]
    #[test_case("6", "4'sb0110" ; "bare decimal is signed")]
    #[test_case("0", "1'sb0" ; "zero")]
    #[test_case("'sd6", "4'sb0110" ; "signed decimal gets a sign bit")]
    #[test_case("4'sd-1", "4'sb1111" ; "negative decimal")]
    #[test_case("-1", "1'sb1" ; "bare negative one")]
    #[test_case("8'sd-100", "8'sb10011100" ; "negative hundred")]
    #[test_case("12'h0_f_f", "12'b000011111111" ; "underscores stripped")]
    #[test_case("4'bxz01", "4'bxz01" ; "dont care pattern")]
    #[test_case("8'hx", "8'b0000xxxx" ; "hex x digit expands per digit")]
    #[test_case("'hzz", "8'bzzzzzzzz" ; "unsized z pattern keeps its width")]
    #[test_case("'shxx", "1'sbx" ; "signed unsized trims duplicate x")]
    #[test_case("4'dx", "4'b000x" ; "decimal x digit")]
    #[test_case("16'd40000", "16'b1001110001000000" ; "large decimal")]
    fn test_parse_and_canonicalize(input: &str, expected: &str) {
        assert_eq!(parsed(input), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("4'" ; "missing base")]
    #[test_case("4'q1010" ; "unknown base")]
    #[test_case("4'b102" ; "binary digit out of range")]
    #[test_case("8'o8" ; "octal digit out of range")]
    #[test_case("8'hg" ; "hex digit out of range")]
    #[test_case("4'd1x" ; "decimal mixes digits and x")]
    #[test_case("4'b-1" ; "negative binary")]
    #[test_case("4'sd-x" ; "negative dont care")]
    #[test_case("0'd1" ; "zero declared size")]
    #[test_case("x'd1" ; "size not a number")]
    #[test_case("4'sb" ; "no digits")]
    fn test_malformed_literals(input: &str) {
        assert!(matches!(
            parse(input),
            Err(NumberError::MalformedLiteral { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_canonical_form() {
        for text in ["4'sd-3", "9'o701", "16'hbeef", "'d1024", "5'bx1z01"] {
            let first = parse(text).unwrap();
            let second = parse(&first.to_string()).unwrap();
            assert_eq!(first, second);
        }
    }
}
