//! Numeric input sanitizer
//!
//! Normalizes free keystroke text into a canonical decimal string. Never
//! fails and never returns an empty string; format-level garbage is
//! absorbed here so the engine only ever sees digit/dot shapes.

/// Sanitize amount text into `digits(.digits)?` form
///
/// Steps, in order (the order matters for the fixtures below):
/// 1. empty input is "0"
/// 2. drop every character that is not a digit or a dot
/// 3. keep the first dot, merge all later digit groups into the fraction
/// 4. strip leading zeros that precede another digit ("007" -> "7",
///    "0.5" stays; a missing integer part as in ".5" is left alone)
/// 5. an empty result is "0"
///
/// "00123.45.6" -> "123.456", "abc" -> "0", "--1..2" -> "1.2"
pub fn sanitize_amount(raw: &str) -> String {
    if raw.is_empty() {
        return "0".to_string();
    }

    // Steps 2 and 3 in one pass over the characters
    let mut sanitized = String::with_capacity(raw.len());
    let mut seen_dot = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => sanitized.push(c),
            '.' if !seen_dot => {
                sanitized.push('.');
                seen_dot = true;
            }
            _ => {}
        }
    }

    // Step 4: zeros are stripped only while another digit follows,
    // so "0", "0.5" and ".5" are untouched
    let bytes = sanitized.as_bytes();
    let mut start = 0;
    while start + 1 < bytes.len() && bytes[start] == b'0' && bytes[start + 1].is_ascii_digit() {
        start += 1;
    }
    let sanitized = &sanitized[start..];

    if sanitized.is_empty() {
        "0".to_string()
    } else {
        sanitized.to_string()
    }
}
