//! Marker extraction from scan-build report HTML.
//!
//! scan-build embeds structured fields as single-line HTML comments:
//! `<!-- BUGTYPE Memory leak -->`. Four tags are recognized; none is
//! mandatory. Only the first occurrence of a tag counts.

use regex::Regex;

pub const BUG_TYPE: &str = "BUGTYPE";
pub const BUG_DESC: &str = "BUGDESC";
pub const BUG_FILE: &str = "BUGFILE";
pub const BUG_CATEGORY: &str = "BUGCATEGORY";

/// Extract the first value for `tag` from report contents, trimmed.
/// Returns `None` when the marker is absent.
pub fn extract_marker(contents: &str, tag: &str) -> Option<String> {
    // Tags are fixed module constants; the pattern is always valid.
    let re = Regex::new(&format!(r"<!--\s*{}\s+(.*?)\s*-->", tag)).expect("marker pattern");
    re.captures(contents)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"<html><head>
<!-- BUGTYPE Memory leak -->
<!-- BUGDESC Potential leak of memory pointed to by 'b' -->
<!-- BUGFILE /ws/src/foo.c -->
<!-- BUGCATEGORY Logic error -->
</head><body></body></html>"#;

    #[test]
    fn test_extracts_all_four_markers_verbatim() {
        assert_eq!(
            extract_marker(REPORT, BUG_TYPE).as_deref(),
            Some("Memory leak")
        );
        assert_eq!(
            extract_marker(REPORT, BUG_DESC).as_deref(),
            Some("Potential leak of memory pointed to by 'b'")
        );
        assert_eq!(
            extract_marker(REPORT, BUG_FILE).as_deref(),
            Some("/ws/src/foo.c")
        );
        assert_eq!(
            extract_marker(REPORT, BUG_CATEGORY).as_deref(),
            Some("Logic error")
        );
    }

    #[test]
    fn test_missing_marker_yields_none() {
        let text = "<html><!-- BUGTYPE leak --></html>";
        assert_eq!(extract_marker(text, BUG_TYPE).as_deref(), Some("leak"));
        assert_eq!(extract_marker(text, BUG_DESC), None);
        assert_eq!(extract_marker(text, BUG_FILE), None);
        assert_eq!(extract_marker(text, BUG_CATEGORY), None);
    }

    #[test]
    fn test_first_occurrence_wins_when_marker_repeats() {
        let text = "<!-- BUGTYPE first -->\n<!-- BUGTYPE second -->";
        assert_eq!(extract_marker(text, BUG_TYPE).as_deref(), Some("first"));
    }

    #[test]
    fn test_value_whitespace_is_trimmed() {
        let text = "<!--  BUGCATEGORY   Logic error   -->";
        assert_eq!(
            extract_marker(text, BUG_CATEGORY).as_deref(),
            Some("Logic error")
        );
    }

    #[test]
    fn test_no_markers_at_all() {
        assert_eq!(extract_marker("<html></html>", BUG_TYPE), None);
    }
}
