//! README excerpt derivation.
//!
//! A pure text transform from raw README markdown to a short plain-text
//! excerpt.

use regex::Regex;
use std::sync::LazyLock;

/// Appended when an excerpt is cut short. Counts toward the maximum length.
pub const ELLIPSIS: char = '…';

// Link and image targets may hold one level of balanced parentheses.
static IMAGE_EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[[^\]]*\]\((?:[^()]|\([^()]*\))*\)").expect("valid image regex")
});

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid fence regex"));

// Blanks any line starting with `#`, headings or not.
static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[^\n]*").expect("valid heading regex"));

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\((?:[^()]|\([^()]*\))*\)").expect("valid link regex")
});

/// Derives a plain-text excerpt of at most `max_len` characters from README markdown.
///
/// Image embeds and fenced code blocks are stripped, line endings are
/// normalized to `\n`, lines starting with `#` are blanked, links collapse to
/// their visible text, and the result is trimmed and truncated. Truncated
/// output ends with [`ELLIPSIS`].
#[must_use]
pub fn derive_excerpt(raw: &str, max_len: usize) -> String {
    let text = IMAGE_EMBED.replace_all(raw, "");
    let text = FENCED_CODE.replace_all(&text, "");
    let text = normalize_line_endings(&text);
    let text = HEADING_LINE.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");

    truncate(text.trim(), max_len)
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let kept: String = text.chars().take(max_len - 1).collect();
    let mut excerpt = kept.trim_end().to_string();
    excerpt.push(ELLIPSIS);
    excerpt
}
