// * Integer conversion shared by argument and XML property lookups.
// * "0x"-prefixed values are hex; anything else is read as a leading
// * decimal number ("12abc" -> 12). Unparsable text reads as 0.

pub fn parse_int(value: &str) -> i64 {
    if value.len() > 2 && value.starts_with("0x") {
        let digits: String = value[2..]
            .chars()
            .take_while(|c| c.is_ascii_hexdigit())
            .collect();
        return u32::from_str_radix(&digits, 16).map_or(0, i64::from);
    }

    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);

    let magnitude = match digits.parse::<i64>() {
        Ok(v) => v,
        Err(_) if digits.is_empty() => 0,
        Err(_) => i64::MAX,
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
