//! Integer literals as they appear in code-tag lines.
//!
//! Accepted forms: optional surrounding whitespace, an optional single `-`, then either a
//! `0x`/`0X`/`0h`/`0H` prefix followed by hex digits, or plain decimal digits.

/// Parses a code-tag integer literal. Returns `None` for anything outside the grammar or
/// outside the `i32` range.
pub fn parse_int(text: &str) -> Option<i32> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (radix, digits) = match body.as_bytes() {
        [b'0', b'x' | b'X' | b'h' | b'H', ..] => (16, &body[2..]),
        _ => (10, body),
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value * i64::from(radix) + i64::from(digit);
        if value > i64::from(i32::MAX) + 1 {
            return None;
        }
    }
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::parse_int;

    #[test]
    fn decimal_and_hex_forms() {
        assert_eq!(parse_int("1234"), Some(1234));
        assert_eq!(parse_int("0x4D2"), Some(1234));
        assert_eq!(parse_int("0h4D2"), Some(1234));
        assert_eq!(parse_int("0X4d2"), Some(1234));
        assert_eq!(parse_int(" 1234 "), Some(1234));
        assert_eq!(parse_int("\t0x4D2\t"), Some(1234));
    }

    #[test]
    fn signed_forms() {
        assert_eq!(parse_int("-1234"), Some(-1234));
        assert_eq!(parse_int("-0x4D2"), Some(-1234));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("-2147483648"), Some(i32::MIN));
        assert_eq!(parse_int("2147483647"), Some(i32::MAX));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(parse_int("0xx1234"), None);
        assert_eq!(parse_int("4D2"), None);
        assert_eq!(parse_int("--123"), None);
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("Hello"), None);
        assert_eq!(parse_int("12 34"), None);
        assert_eq!(parse_int("+12"), None);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_int("2147483648"), None);
        assert_eq!(parse_int("-2147483649"), None);
        assert_eq!(parse_int("0xFFFFFFFFFF"), None);
    }
}
