/// Parse raw field text as an integer, leniently.
///
/// Thousands separators (`,` and the full-width `，`) are removed first. Leading whitespace and a
/// single sign are accepted, then the longest run of ASCII digits is read; anything after it is
/// ignored (`"12株"` parses as `12`, `"1.9"` as `1`). Input without leading digits, and values
/// outside the `i64` range, parse as `0`.
pub fn parse_num(raw: &str) -> i64 {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, ',' | '，')).collect();
    let rest = cleaned.trim_start();

    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(b - b'0');
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
        match next {
            Some(v) => value = v,
            None => return 0,
        }
    }

    if seen_digit {
        value
    } else {
        0
    }
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// `floor(numerator / denominator + 1/2)`, computed exactly.
///
/// Halves round towards positive infinity. Returns `None` when `denominator <= 0`.
pub fn round_div(numerator: i64, denominator: i64) -> Option<i64> {
    if denominator <= 0 {
        return None;
    }
    let n = i128::from(numerator);
    let d = i128::from(denominator);
    Some(saturate((2 * n + d).div_euclid(2 * d)))
}

/// `floor(numerator / denominator)`, computed exactly. Returns `None` when `denominator <= 0`.
pub fn floor_div(numerator: i64, denominator: i64) -> Option<i64> {
    if denominator <= 0 {
        return None;
    }
    Some(saturate(
        i128::from(numerator).div_euclid(i128::from(denominator)),
    ))
}

/// `floor(value * percent / 100)` without an intermediate float.
pub fn mul_percent_floor(value: i64, percent: i64) -> i64 {
    saturate((i128::from(value) * i128::from(percent)).div_euclid(100))
}

/// Share of `part` in `whole` as a rounded whole percentage; `None` unless `whole > 0`.
pub fn pct(part: i64, whole: i64) -> Option<i64> {
    if whole <= 0 {
        return None;
    }
    let n = i128::from(part) * 100;
    let d = i128::from(whole);
    Some(saturate((2 * n + d).div_euclid(2 * d)))
}
