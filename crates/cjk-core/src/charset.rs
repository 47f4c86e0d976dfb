//! Unicode classification shared by the formatter and the word counter.
//!
//! Ranges:
//! - Han        U+4E00..=U+9FFF (Chinese characters, Japanese kanji)
//! - Hiragana   U+3040..=U+309F
//! - Katakana   U+30A0..=U+30FF
//! - Hangul     U+AC00..=U+D7AF
//!
//! "CJK" is the union of all four. Punctuation-width rules use the narrower
//! union without Hangul, since Korean prose keeps half-width punctuation.

/// Regex class fragments, for embedding inside `[...]`.
pub mod class {
    pub const CJK_ALL: &str = r"\x{4E00}-\x{9FFF}\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{AC00}-\x{D7AF}";
}

pub const CJK_TERMINAL_PUNCTUATION: &str = "，。！？；：、";
pub const CJK_CLOSING_BRACKETS: &str = "》」』】）〉";
pub const CJK_OPENING_BRACKETS: &str = "《「『【（〈";
/// Two U+2014 characters, used as one typographic unit.
pub const CJK_EM_DASH: &str = "——";

/// Coarse class of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Han,
    Hiragana,
    Katakana,
    Hangul,
    LatinAlphanumeric,
    CjkPunctuation,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if is_han(c) {
            Self::Han
        } else if is_hiragana(c) {
            Self::Hiragana
        } else if is_katakana(c) {
            Self::Katakana
        } else if is_hangul(c) {
            Self::Hangul
        } else if c.is_ascii_alphanumeric() {
            Self::LatinAlphanumeric
        } else if is_cjk_punctuation(c) {
            Self::CjkPunctuation
        } else {
            Self::Other
        }
    }

    pub fn is_cjk(&self) -> bool {
        matches!(self, Self::Han | Self::Hiragana | Self::Katakana | Self::Hangul)
    }
}

#[inline]
pub fn is_han(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

#[inline]
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}')
}

#[inline]
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}')
}

#[inline]
pub fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7AF}')
}

/// Han, Hiragana, Katakana or Hangul.
#[inline]
pub fn is_cjk(c: char) -> bool {
    is_han(c) || is_hiragana(c) || is_katakana(c) || is_hangul(c)
}

/// Han, Hiragana or Katakana.
#[inline]
pub fn is_cjk_no_korean(c: char) -> bool {
    is_han(c) || is_hiragana(c) || is_katakana(c)
}

pub fn is_terminal_punctuation(c: char) -> bool {
    CJK_TERMINAL_PUNCTUATION.contains(c)
}

pub fn is_closing_bracket(c: char) -> bool {
    CJK_CLOSING_BRACKETS.contains(c)
}

pub fn is_opening_bracket(c: char) -> bool {
    CJK_OPENING_BRACKETS.contains(c)
}

/// Terminal punctuation or any CJK bracket.
pub fn is_cjk_punctuation(c: char) -> bool {
    is_terminal_punctuation(c) || is_closing_bracket(c) || is_opening_bracket(c)
}

/// True iff the text holds at least one Han ideograph.
///
/// This is the gate for every CJK-specific formatting rule; kana-only or
/// Hangul-only text does not open it.
pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}
