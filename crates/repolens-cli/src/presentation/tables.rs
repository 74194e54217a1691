//! Table formatting utilities for CLI output.

/// Truncates a string to at most `max_len` characters, adding "..." if
/// needed.
///
/// # Examples
///
/// ```rust
/// use repolens_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_string("데이터 분석 도구", 6), "데이터...");
        assert_eq!(truncate_string("short", 5), "short");
    }
}
