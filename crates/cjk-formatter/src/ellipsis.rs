//! Ellipsis normalization. Applies to all text, CJK or not.

use regex::Regex;
use std::sync::LazyLock;

/// Three or more dots with whitespace between each, plus any leading whitespace.
static RE_SPACED_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\.\s+\.\s+\.(?:\s+\.)*").unwrap());
static RE_ELLIPSIS_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\.\.\s*").unwrap());

/// `. . .` → `...`
pub fn collapse_spaced_dots(text: &str) -> String {
    RE_SPACED_DOTS.replace_all(text, "...").into_owned()
}

/// Exactly one space after `...` when more text follows.
///
/// Trailing whitespace at the very end of the text is left alone.
pub fn fix_ellipsis_spacing(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in RE_ELLIPSIS_TAIL.find_iter(text) {
        // the tail is greedy, so anything after it is non-space
        if m.end() == text.len() {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push_str("... ");
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

pub fn normalize(text: &str) -> String {
    fix_ellipsis_spacing(&collapse_spaced_dots(text))
}
