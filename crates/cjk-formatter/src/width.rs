//! Character-width normalization: fullwidth letters/digits down to ASCII,
//! ASCII punctuation and brackets up to fullwidth inside CJK context.

use cjk_core::charset::{is_cjk_no_korean, CJK_EM_DASH};

/// Offset between a fullwidth form and its ASCII counterpart.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Half-width → fullwidth, in scan order.
pub const PUNCTUATION_TABLE: [(char, char); 6] = [
    (',', '，'),
    ('.', '。'),
    ('!', '！'),
    ('?', '？'),
    (';', '；'),
    (':', '：'),
];

fn narrow(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => {
            char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}

/// `ＡＢＣ１２３` → `ABC123`. Other characters pass through.
pub fn normalize_alphanumeric(text: &str) -> String {
    text.chars().map(narrow).collect()
}

/// Widen one half-width mark where it follows a CJK (non-Korean) character
/// and precedes another one, whitespace, an em-dash token, or the end of
/// the text.
pub fn widen_mark(text: &str, half: char, full: char) -> String {
    if !text.contains(half) {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if c == half && i > 0 && is_cjk_no_korean(chars[i - 1]) {
            let widen = match chars.get(i + 1) {
                None => true,
                Some(next) => {
                    is_cjk_no_korean(*next) || next.is_whitespace() || starts_em_dash(&chars[i + 1..])
                }
            };
            if widen {
                out.push(full);
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn starts_em_dash(chars: &[char]) -> bool {
    chars.iter().copied().take(2).eq(CJK_EM_DASH.chars())
}

pub fn normalize_punctuation(text: &str) -> String {
    PUNCTUATION_TABLE
        .iter()
        .fold(text.to_string(), |acc, (half, full)| widen_mark(&acc, *half, *full))
}

/// Widen matched `open`/`close` pairs in one pass.
///
/// A pair is widened when its content starts with a CJK (non-Korean)
/// character and holds no half-width `open`/`close` once the pairs nested
/// inside it have been widened. Unmatched marks are left alone.
fn widen_pairs(text: &str, open: char, close: char, full_open: char, full_close: char) -> String {
    if !text.contains(open) {
        return text.to_string();
    }
    let mut out: Vec<char> = Vec::with_capacity(text.len());
    // (index of the open mark in `out`, content still holds a half-width mark)
    let mut stack: Vec<(usize, bool)> = Vec::new();
    for c in text.chars() {
        if c == open {
            stack.push((out.len(), false));
            out.push(c);
        } else if c == close {
            let Some((start, dirty)) = stack.pop() else {
                out.push(c);
                continue;
            };
            let widen = !dirty && out.get(start + 1).is_some_and(|&first| is_cjk_no_korean(first));
            if widen {
                out[start] = full_open;
                out.push(full_close);
            } else {
                out.push(c);
                if let Some(parent) = stack.last_mut() {
                    parent.1 = true;
                }
            }
        } else {
            out.push(c);
        }
    }
    out.into_iter().collect()
}

/// `(中文)` → `（中文）` when the content starts with a CJK character.
pub fn normalize_parentheses(text: &str) -> String {
    widen_pairs(text, '(', ')', '（', '）')
}

/// `[中文]` → `【中文】`, same condition as parentheses.
pub fn normalize_brackets(text: &str) -> String {
    widen_pairs(text, '[', ']', '【', '】')
}
