//! Text truncation and padding for terminal output.
//!
//! Widths are counted in characters so multi-byte descriptions line up.

/// Truncate a string to a maximum length, handling multi-byte characters properly.
/// Appends "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Truncate and then right-pad with spaces to exactly `width` characters.
pub fn fit_width(s: &str, width: usize) -> String {
    let truncated = truncate_string(s, width);
    let len = truncated.chars().count();
    format!("{truncated}{}", " ".repeat(width.saturating_sub(len)))
}
