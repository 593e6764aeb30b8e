//! Cell text handling for terminal display.
//!
//! Remote records are untrusted; cell text rendered into the terminal must
//! not carry control sequences. This is the terminal equivalent of escaping
//! markup before injecting strings into a display tree.

/// Strip control characters from cell text. Tabs become single spaces so
/// tabular data stays on one line; everything else below U+0020 (and DEL)
/// is dropped.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Truncate to at most `max` characters, ending with an ellipsis when
/// anything was cut. `max` of zero yields an empty string.
pub fn truncate(input: &str, max: usize) -> String {
    if input.chars().count() <= max {
        return input.to_string();
    }
    let mut out: String = input.chars().take(max.saturating_sub(1)).collect();
    if max > 0 {
        out.push('…');
    }
    out
}
