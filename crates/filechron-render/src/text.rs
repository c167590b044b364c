//! HTML escaping and path helpers.

/// Escape HTML-significant characters so the result renders as the
/// original text and executes no markup or script.
///
/// The ampersand is replaced first; the remaining replacements cannot
/// introduce new ones.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Return the final segment of a path, i.e. the substring after the last
/// `/` or `\` (mixed separators within one string are permitted).
///
/// A path without separators is returned unchanged; a path ending in a
/// separator yields the empty string.
pub fn basename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"quoted\" 'single'"), "&quot;quoted&quot; &#39;single&#39;");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_output_has_no_literal_angle_brackets() {
        let escaped = escape_html("<script>alert('x')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
    }

    #[test]
    fn test_escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_basename_forward_slashes() {
        assert_eq!(basename("a/b/c.txt"), "c.txt");
    }

    #[test]
    fn test_basename_backslashes() {
        assert_eq!(basename("a\\b\\c.txt"), "c.txt");
    }

    #[test]
    fn test_basename_mixed_separators() {
        assert_eq!(basename("a\\b/c.txt"), "c.txt");
        assert_eq!(basename("a/b\\c.txt"), "c.txt");
    }

    #[test]
    fn test_basename_no_separator() {
        assert_eq!(basename("file.txt"), "file.txt");
        assert_eq!(basename(""), "");
    }

    #[test]
    fn test_basename_trailing_separator_is_empty() {
        assert_eq!(basename("a/b/"), "");
        assert_eq!(basename("a\\b\\"), "");
    }
}
