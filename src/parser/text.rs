use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
static HEADING_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+\s.*$").unwrap());
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_`]").unwrap());
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub const PREVIEW_LENGTH: usize = 180;

/// URL-safe identifier for a title: "My Project Title" -> "my-project-title".
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let dashed = NON_SLUG_RE.replace_all(&lower, "-");
    // Runs are collapsed, so at most one hyphen sits on either end.
    dashed.trim_matches('-').to_string()
}

/// Plain-text preview of a markdown body, cut to `max_len` characters.
///
/// Headings go first, then emphasis/code markers, images, and links (link
/// text survives). Whitespace is collapsed to single spaces. When the text
/// is longer than `max_len` the cut is followed by `...`.
pub fn preview(body: &str, max_len: usize) -> String {
    let plain = HEADING_LINE_RE.replace_all(body, "");
    let plain = MARKER_RE.replace_all(&plain, "");
    let plain = IMAGE_RE.replace_all(&plain, "");
    let plain = LINK_RE.replace_all(&plain, "$1");
    let plain = WHITESPACE_RE.replace_all(&plain, " ");
    let plain = plain.trim();

    if plain.chars().count() > max_len {
        let cut: String = plain.chars().take(max_len).collect();
        format!("{}...", cut)
    } else {
        plain.to_string()
    }
}

pub fn preview_default(body: &str) -> String {
    preview(body, PREVIEW_LENGTH)
}
