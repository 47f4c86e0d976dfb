//! Spacing around curly quotes next to Latin or CJK text.

use cjk_core::charset::{
    class, is_closing_bracket, is_opening_bracket, is_terminal_punctuation, CJK_CLOSING_BRACKETS,
    CJK_EM_DASH, CJK_OPENING_BRACKETS, CJK_TERMINAL_PUNCTUATION,
};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// An opening/closing quote pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePair {
    pub open: char,
    pub close: char,
}

pub const DOUBLE: QuotePair = QuotePair { open: '\u{201C}', close: '\u{201D}' };
pub const SINGLE: QuotePair = QuotePair { open: '\u{2018}', close: '\u{2019}' };

struct QuoteRules {
    pair: QuotePair,
    before: Regex,
    after: Regex,
}

impl QuoteRules {
    fn new(pair: QuotePair) -> Self {
        let before = format!(
            "([A-Za-z0-9{}{}{}]|{})({})",
            class::CJK_ALL,
            CJK_CLOSING_BRACKETS,
            CJK_TERMINAL_PUNCTUATION,
            CJK_EM_DASH,
            regex::escape(&pair.open.to_string()),
        );
        let after = format!(
            "({})([A-Za-z0-9{}{}{}]|{})",
            regex::escape(&pair.close.to_string()),
            class::CJK_ALL,
            CJK_OPENING_BRACKETS,
            CJK_TERMINAL_PUNCTUATION,
            CJK_EM_DASH,
        );
        Self {
            pair,
            before: Regex::new(&before).unwrap(),
            after: Regex::new(&after).unwrap(),
        }
    }

    fn apply(&self, text: &str) -> String {
        if !text.contains(self.pair.open) && !text.contains(self.pair.close) {
            return text.to_string();
        }
        let spaced = self.before.replace_all(text, |caps: &Captures| {
            let prev = &caps[1];
            if separates(prev, is_closing_bracket) {
                format!("{}{}", prev, &caps[2])
            } else {
                format!("{} {}", prev, &caps[2])
            }
        });
        self.after
            .replace_all(&spaced, |caps: &Captures| {
                let next = &caps[2];
                if separates(next, is_opening_bracket) {
                    format!("{}{}", &caps[1], next)
                } else {
                    format!("{} {}", &caps[1], next)
                }
            })
            .into_owned()
    }
}

/// Neighbours that already provide visual separation from the quote.
fn separates(neighbour: &str, bracket: fn(char) -> bool) -> bool {
    if neighbour == CJK_EM_DASH {
        return true;
    }
    let mut chars = neighbour.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => bracket(c) || is_terminal_punctuation(c),
        _ => false,
    }
}

static DOUBLE_RULES: LazyLock<QuoteRules> = LazyLock::new(|| QuoteRules::new(DOUBLE));
static SINGLE_RULES: LazyLock<QuoteRules> = LazyLock::new(|| QuoteRules::new(SINGLE));

/// Spacing around `“` and `”`.
pub fn fix_double_quotes(text: &str) -> String {
    DOUBLE_RULES.apply(text)
}

/// Spacing around `‘` and `’`.
pub fn fix_single_quotes(text: &str) -> String {
    SINGLE_RULES.apply(text)
}
