//! Numeric validation functions

/// Parses the leading integer of a string the way browsers' `parseInt` does.
///
/// Skips leading whitespace, accepts one optional sign and then as many ASCII digits as
/// follow. Anything after the digits is ignored. Returns `None` when no digit is found.
/// Values too large for `i64` saturate.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let rest = value.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Validates value is within an inclusive range
pub fn is_in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Renders an integer with comma thousands separators (`10000` -> `10,000`)
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
