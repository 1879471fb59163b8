//! Quantity text handling.
//!
//! The quantity field is free text. The order API expects a number, so the
//! text is coerced with the same rules a browser applies to `Number(text)`:
//! anything that is not a numeric literal becomes `NaN`.

/// Coerce free quantity text into the numeric amount sent to the API.
pub fn coerce_amount(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_js_whitespace);

    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// `0x`, `0o` and `0b` literals. Signs are not allowed in front of them.
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

/// `[+-] digits [. digits] [(e|E) [+-] digits]`, where either the integer or
/// the fraction part may be empty but not both.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(coerce_amount("3"), 3.0);
        assert_eq!(coerce_amount("1"), 1.0);
        assert_eq!(coerce_amount("-2"), -2.0);
        assert_eq!(coerce_amount("+7"), 7.0);
    }

    #[test]
    fn test_empty_and_blank_are_zero() {
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("   "), 0.0);
        assert_eq!(coerce_amount("\n\t"), 0.0);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(coerce_amount(" 4 "), 4.0);
        assert_eq!(coerce_amount("\u{A0}5\u{FEFF}"), 5.0);
    }

    #[test]
    fn test_decimals_and_exponents() {
        assert_eq!(coerce_amount("1.5"), 1.5);
        assert_eq!(coerce_amount(".5"), 0.5);
        assert_eq!(coerce_amount("2."), 2.0);
        assert_eq!(coerce_amount("1e2"), 100.0);
        assert_eq!(coerce_amount("2.5E-1"), 0.25);
    }

    #[test]
    fn test_prefixed_integers() {
        assert_eq!(coerce_amount("0x10"), 16.0);
        assert_eq!(coerce_amount("0o17"), 15.0);
        assert_eq!(coerce_amount("0b101"), 5.0);
        assert!(coerce_amount("0x").is_nan());
        assert!(coerce_amount("0xZ").is_nan());
        assert!(coerce_amount("-0x10").is_nan());
    }

    #[test]
    fn test_infinity_spelling() {
        assert_eq!(coerce_amount("Infinity"), f64::INFINITY);
        assert_eq!(coerce_amount("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_amount("inf").is_nan());
        assert!(coerce_amount("infinity").is_nan());
    }

    #[test]
    fn test_non_numeric_text_is_nan() {
        assert!(coerce_amount("abc").is_nan());
        assert!(coerce_amount("3 beers").is_nan());
        assert!(coerce_amount("1,5").is_nan());
        assert!(coerce_amount("1_000").is_nan());
        assert!(coerce_amount("NaN").is_nan());
        assert!(coerce_amount(".").is_nan());
        assert!(coerce_amount("1e").is_nan());
        assert!(coerce_amount("+").is_nan());
    }
}
