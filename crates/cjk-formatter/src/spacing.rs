//! Horizontal spacing: CJK/Latin boundaries, currency amounts, slashes.

use cjk_core::charset::class;
use regex::Regex;
use std::sync::LazyLock;

/// Latin/numeric run with an optional currency prefix and unit suffix.
///
/// The suffix list is a fixed allowlist: `%`, `‰`, `℃`, `℉`, `°` with an
/// optional `C`/`F`, or a currency code. The prefix takes any whitespace
/// before the amount, the same gap `fix_currency_spacing` removes.
const ALNUM_RUN: &str =
    r"(?:[$¥€£₹]\s*)?[A-Za-z0-9]+(?:[%‰℃℉]|°[CcFf]?|[ ]?(?:USD|CNY|EUR|GBP|RMB))?";

static RE_CJK_THEN_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("([{}])({ALNUM_RUN})", class::CJK_ALL)).unwrap());
static RE_ALNUM_THEN_CJK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("({ALNUM_RUN})([{}])", class::CJK_ALL)).unwrap());
static RE_CURRENCY_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([$¥€£₹]|USD|CNY|EUR|GBP)\s+([0-9])").unwrap());

/// One space at every CJK/alphanumeric boundary, both directions.
pub fn space_cjk_english(text: &str) -> String {
    let forward = RE_CJK_THEN_ALNUM.replace_all(text, "${1} ${2}");
    RE_ALNUM_THEN_CJK.replace_all(&forward, "${1} ${2}").into_owned()
}

/// `$ 100` → `$100`.
pub fn fix_currency_spacing(text: &str) -> String {
    RE_CURRENCY_GAP.replace_all(text, "${1}${2}").into_owned()
}

fn blocks_slash(c: char) -> bool {
    c == '/' || c == ':'
}

/// Remove whitespace around `/`.
///
/// A slash directly after `/` or `:` keeps its left side, and a slash
/// followed by another `/` is left alone, so `http://` and `a//b` survive.
pub fn fix_slash_spacing(text: &str) -> String {
    if !text.contains('/') {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for s in 0..n {
        if chars[s] != '/' || s < cursor {
            continue;
        }

        let mut ws_start = s;
        while ws_start > cursor && chars[ws_start - 1].is_whitespace() {
            ws_start -= 1;
        }
        // earliest start whose left neighbour is not `/` or `:`
        let Some(start) = (ws_start..=s).find(|&p| p == 0 || !blocks_slash(chars[p - 1])) else {
            continue;
        };

        let mut tail = s + 1;
        while tail < n && chars[tail].is_whitespace() {
            tail += 1;
        }
        let end = if tail < n && chars[tail] == '/' {
            if tail == s + 1 {
                continue;
            }
            // keep one whitespace so the next slash is not glued on
            tail - 1
        } else {
            tail
        };

        out.extend(&chars[cursor..start]);
        out.push('/');
        cursor = end;
    }
    out.extend(&chars[cursor..]);
    out
}
