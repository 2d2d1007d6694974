//! Display-width aware text layout helpers.

use unicode_width::UnicodeWidthStr;

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Widths are measured with [`UnicodeWidthStr`] on the whole kept prefix, so
/// the result agrees with `.width()` on the returned string, control
/// characters and CJK text included.
///
/// # Example
///
/// ```rust
/// use lumen::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let next = idx + c.len_utf8();
        if s[..next].width() > limit {
            break;
        }
        end = next;
    }

    let mut result = s[..end].to_string();
    if max_width > 0 {
        result.push('…');
    }
    result
}

/// Centers `s` in a field of `width` columns, truncating when it doesn't fit.
///
/// Odd leftover space goes to the right. The result is exactly `width`
/// columns wide, except when a wide character cannot be split.
///
/// ```rust
/// use lumen::pad_center;
///
/// assert_eq!(pad_center("ab", 6), "  ab  ");
/// assert_eq!(pad_center("ab", 5), " ab  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let free = width.saturating_sub(text.width());
    let left = free / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(free - left))
}

/// Right-aligns `s` in a field of `width` columns, truncating when it doesn't fit.
pub fn pad_left(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let free = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(free), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truncate_to_width_no_truncation() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
        assert_eq!(truncate_to_width("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_to_width_with_truncation() {
        assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
        assert_eq!(truncate_to_width("Hello World", 7), "Hello …");
    }

    #[test]
    fn test_truncate_to_width_zero_width() {
        assert_eq!(truncate_to_width("Hello", 0), "");
    }

    #[test]
    fn test_truncate_to_width_one_width() {
        assert_eq!(truncate_to_width("Hello", 1), "…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_truncate_with_control_chars_stays_within_width() {
        let out = truncate_to_width("ab\tcdefghijkl", 5);
        assert!(out.starts_with("ab\t"));
        assert!(out.ends_with('…'));
        assert!(out.width() <= 5);
    }

    #[test]
    fn test_pad_center_even_and_odd() {
        assert_eq!(pad_center("ab", 6), "  ab  ");
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("", 2), "  ");
    }

    #[test]
    fn test_pad_center_truncates() {
        assert_eq!(pad_center("Sign in to continue", 8), "Sign in…");
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("[dark]", 10), "    [dark]");
        assert_eq!(pad_left("abc", 2), "a…");
    }

    proptest! {
        #[test]
        fn prop_pad_center_fills_width(s in "[a-zA-Z0-9 \t]{0,40}", width in 1usize..60) {
            prop_assert_eq!(pad_center(&s, width).width(), width);
        }

        #[test]
        fn prop_pad_never_exceeds_width(s in "[a-z日本語 \t]{0,20}", width in 0usize..40) {
            prop_assert!(pad_center(&s, width).width() <= width);
            prop_assert!(pad_left(&s, width).width() <= width);
        }

        #[test]
        fn prop_truncate_never_exceeds_width(
            s in "[a-z日本語\t\n ]{0,30}",
            width in 0usize..40,
        ) {
            prop_assert!(truncate_to_width(&s, width).width() <= width);
        }
    }
}
