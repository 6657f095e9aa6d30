//! Plain-text previews of markdown memo bodies.
//!
//! This is a lossy, best-effort strip of common markdown syntax for list
//! excerpts. It is not a markdown parser.

use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_PREVIEW_LENGTH: usize = 150;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#{1,6}\s+").expect("valid heading regex"));
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic regex"));
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.*?)`").expect("valid inline code regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("valid link regex"));
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").expect("valid bullet regex"));
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").expect("valid numbered list regex"));
static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*>[ \t]*").expect("valid blockquote regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Strip markdown markers and collapse whitespace.
///
/// Rules apply in order: headings, bullet markers, numbered markers,
/// blockquote markers, bold, italics, inline code, links (text kept),
/// whitespace. Line markers go first so a leading `* ` is not read as emphasis.
pub fn plain_text(markdown: &str) -> String {
    let text = HEADING_RE.replace_all(markdown, "");
    let text = BULLET_RE.replace_all(&text, "");
    let text = NUMBERED_RE.replace_all(&text, "");
    let text = QUOTE_RE.replace_all(&text, "");
    let text = BOLD_RE.replace_all(&text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = INLINE_CODE_RE.replace_all(&text, "$1");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

/// [`plain_text`] cut to `max_len` characters, with `...` appended when cut.
pub fn excerpt(markdown: &str, max_len: usize) -> String {
    let text = plain_text(markdown);
    if text.chars().count() > max_len {
        let cut: String = text.chars().take(max_len).collect();
        format!("{}...", cut)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_headings_and_emphasis() {
        assert_eq!(
            plain_text("# Title\n\nSome **bold** and *italic* text"),
            "Title Some bold and italic text"
        );
    }

    #[test]
    fn test_strips_code_and_links() {
        assert_eq!(
            plain_text("Run `cargo test` then see [docs](https://example.com)"),
            "Run cargo test then see docs"
        );
    }

    #[test]
    fn test_strips_list_and_quote_markers() {
        let markdown = "- milk\n* eggs\n+ bread\n1. first\n2. second\n> quoted";
        assert_eq!(plain_text(markdown), "milk eggs bread first second quoted");
    }

    #[test]
    fn test_idempotent() {
        let once = plain_text("## Plan\n- **Visit** [Paris](http://x)\n> soon");
        assert_eq!(plain_text(&once), once);
    }

    #[test]
    fn test_excerpt_truncates_by_chars() {
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("abc", 3), "abc");
        assert_eq!(excerpt("메모 앱 입니다", 2), "메모...");
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(excerpt("", DEFAULT_PREVIEW_LENGTH), "");
    }
}
