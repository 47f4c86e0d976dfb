//! Word counting for mixed CJK/English text.
//!
//! Every CJK code point (Han, kana, Hangul) counts as one word; Latin words
//! are maximal runs of ASCII letters and digits.

use crate::markdown::strip_markdown;
use cjk_core::charset::CharClass;
use cjk_core::CjkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountResult {
    /// CJK code points.
    pub cjk: usize,
    /// ASCII alphanumeric words.
    pub english: usize,
    pub total: usize,
    /// Non-whitespace code points.
    pub chars: usize,
}

/// Count CJK code points.
pub fn count_cjk_characters(text: &str) -> usize {
    text.chars().filter(|&c| CharClass::of(c).is_cjk()).count()
}

/// Count ASCII alphanumeric words.
///
/// Word boundaries are ASCII ones: a run of `[A-Za-z0-9_]` is one candidate,
/// and counts only if it holds no underscore.
pub fn count_english_words(text: &str) -> usize {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|run| !run.is_empty() && !run.contains('_'))
        .count()
}

/// Count non-whitespace code points.
pub fn count_characters(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Count already-stripped text.
pub fn count_plain(text: &str) -> WordCountResult {
    let cjk = count_cjk_characters(text);
    let english = count_english_words(text);
    let result = WordCountResult {
        cjk,
        english,
        total: cjk + english,
        chars: count_characters(text),
    };
    tracing::debug!(cjk, english, chars = result.chars, "counted words");
    result
}

/// Strip markdown, then count.
pub fn count(text: &str) -> WordCountResult {
    count_plain(&strip_markdown(text))
}

/// How a count is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Total,
    Detailed,
}

impl FromStr for DisplayMode {
    type Err = CjkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total" => Ok(Self::Total),
            "detailed" => Ok(Self::Detailed),
            _ => Err(CjkError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Total => f.write_str("total"),
            Self::Detailed => f.write_str("detailed"),
        }
    }
}

/// `12345` → `12,345`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Status-line text for a count.
pub fn render(result: &WordCountResult, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Total => format!("Words: {}", group_thousands(result.total)),
        DisplayMode::Detailed => format!(
            "CJK: {} | EN: {} | Total: {}",
            group_thousands(result.cjk),
            group_thousands(result.english),
            group_thousands(result.total),
        ),
    }
}
