//! Numeric algorithms behind the ECMAScript conversions: StringToNumber, Number::toString,
//! ToInt32, ToUint32 and ToInt64.

const TWO_POW_32: f64 = 4294967296.0;
const TWO_POW_31: f64 = 2147483648.0;
const TWO_POW_64: f64 = 18446744073709551616.0;
const TWO_POW_63: f64 = 9223372036854775808.0;

/// StrWhiteSpaceChar: WhiteSpace and LineTerminator.
/// Unicode White_Space minus U+0085, plus the byte order mark.
pub fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// StringToNumber. Never fails: anything that is not a StringNumericLiteral is NaN.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.as_bytes() {
        [b'0', b'x' | b'X', ..] => Some(16),
        [b'0', b'o' | b'O', ..] => Some(8),
        [b'0', b'b' | b'B', ..] => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_non_decimal(&s[2..], radix);
    }

    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if unsigned == "Infinity" {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    if !is_decimal_literal(unsigned) {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_non_decimal(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    let mut value = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    value
}

/// StrUnsignedDecimalLiteral without the `Infinity` case:
/// `digits [. digits] [e [+-] digits]` or `. digits [e [+-] digits]`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

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

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
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

/// Number::toString(x) with radix 10.
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return String::from("NaN");
    }
    if x == 0.0 {
        return String::from("0");
    }
    if x.is_infinite() {
        return String::from(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if x < 0.0 {
        return format!("-{}", number_to_string(-x));
    }

    // `{:e}` yields the shortest digit string that round-trips, e.g. `1.2345e-7`
    let sci = format!("{x:e}");
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => (sci.as_str(), "0"),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    // x = digits * 10^(n - k)
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        let mut out = digits;
        out.extend(std::iter::repeat('0').take((n - k) as usize));
        out
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        let zeros = "0".repeat((-n) as usize);
        format!("0.{zeros}{digits}")
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let e = (n - 1).abs();
        if k == 1 {
            format!("{digits}e{sign}{e}")
        } else {
            let (first, rest) = digits.split_at(1);
            format!("{first}.{rest}e{sign}{e}")
        }
    }
}

/// ToInt32 applied to an already converted number.
pub fn f64_to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }

    let m = n.trunc().rem_euclid(TWO_POW_32);
    if m >= TWO_POW_31 {
        (m - TWO_POW_32) as i32
    } else {
        m as i32
    }
}

/// ToUint32 applied to an already converted number.
pub fn f64_to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }

    n.trunc().rem_euclid(TWO_POW_32) as u32
}

/// Integer conversion modulo 2^64, the 64-bit analogue of ToInt32.
pub fn f64_to_int64(n: f64) -> i64 {
    if !n.is_finite() {
        return 0;
    }

    let t = n.trunc();
    if (-TWO_POW_63..TWO_POW_63).contains(&t) {
        return t as i64;
    }

    let m = t.rem_euclid(TWO_POW_64);
    if m >= TWO_POW_63 {
        (m - TWO_POW_64) as i64
    } else {
        m as i64
    }
}
