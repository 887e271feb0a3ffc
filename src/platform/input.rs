//! Form field input parsing

/// Parse numeric text from a form field into a non-negative integer
///
/// Reads the leading integer (optional whitespace and sign, then digits up
/// to the first non-digit). No digits or a negative value collapse to 0;
/// values past `u32::MAX` saturate.
pub fn parse_numeric_input(text: &str) -> u32 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}
