//! Em-dash rules: `--` between CJK anchors becomes `——`, and existing `——`
//! gets canonical spacing.

use cjk_core::charset::{is_cjk_no_korean, is_cjk_punctuation, CJK_EM_DASH};
use regex::{Match, Regex};
use std::sync::LazyLock;

static RE_DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-{2,}\s*").unwrap());
static RE_EMDASH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\s*(?:{CJK_EM_DASH})+\s*")).unwrap());

/// Ideographs, kana, and the CJK brackets/terminal punctuation.
fn is_anchor(c: char) -> bool {
    is_cjk_no_korean(c) || is_cjk_punctuation(c)
}

/// Spacing around an em-dash between `before` and `after`.
///
/// No space after a closing `）`/`》`, none before an opening `（`/`《`,
/// one space otherwise.
pub fn emdash_between(before: char, after: char, dash: &str) -> String {
    let left = if matches!(before, '）' | '》') { "" } else { " " };
    let right = if matches!(after, '（' | '《') { "" } else { " " };
    format!("{left}{dash}{right}")
}

/// Rewrite each match whose neighbours satisfy `accept`. Neighbours are read
/// from the input, so adjacent matches can share an anchor character.
fn rewrite_between(
    text: &str,
    re: &Regex,
    accept: impl Fn(char, char) -> bool,
    render: impl Fn(char, char, &Match) -> String,
) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in re.find_iter(text) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        let (Some(b), Some(a)) = (before, after) else { continue };
        if !accept(b, a) {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push_str(&render(b, a, &m));
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// `中文--中文` → `中文 —— 中文`.
pub fn convert_dashes(text: &str) -> String {
    if !text.contains("--") {
        return text.to_string();
    }
    rewrite_between(
        text,
        &RE_DASH_RUN,
        |b, a| is_anchor(b) && is_anchor(a),
        |b, a, _| emdash_between(b, a, CJK_EM_DASH),
    )
}

/// Canonical spacing around every em-dash token bounded by non-space text.
pub fn fix_emdash_spacing(text: &str) -> String {
    if !text.contains(CJK_EM_DASH) {
        return text.to_string();
    }
    rewrite_between(
        text,
        &RE_EMDASH_RUN,
        |b, a| !b.is_whitespace() && !a.is_whitespace(),
        |b, a, m| emdash_between(b, a, m.as_str().trim()),
    )
}
