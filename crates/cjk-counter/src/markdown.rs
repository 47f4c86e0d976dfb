//! Markdown stripping: removes syntax, keeps the prose in order.

use crate::traits::Stripper;
use regex::Regex;
use std::sync::LazyLock;

/// One removal pass: pattern and its replacement (`""` or `"$1"`).
struct Pass {
    re: Regex,
    replacement: &'static str,
}

impl Pass {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self { re: Regex::new(pattern).unwrap(), replacement }
    }
}

/// Markdown stripper. Passes run in order; later ones see the output of
/// earlier ones.
pub struct MarkdownStripper {
    passes: Vec<Pass>,
}

impl MarkdownStripper {
    pub fn new() -> Self {
        let passes = vec![
            // Code: fenced, indented, inline
            Pass::new(r"(?s)```.*?```", ""),
            Pass::new(r"(?s)~~~.*?~~~", ""),
            Pass::new(r"(?m)^(?: {4}|\t).+$", ""),
            Pass::new(r"`[^`\n]+`", ""),
            Pass::new(r"(?s)<!--.*?-->", ""),
            // Leading front matter only
            Pass::new(r"(?m)\A---[ \t]*\r?\n(?s:.*?)^---[ \t]*\r?$", ""),
            Pass::new(r"(?m)^[-*_]{3,}\r?$", ""),
            // Block markers, text kept
            Pass::new(r"(?m)^#{1,6}\s+", ""),
            Pass::new(r"(?m)^>\s+", ""),
            Pass::new(r"(?m)^\s*[-*+]\s+\[[xX ]\]\s+", ""),
            Pass::new(r"(?m)^\s*[-*+]\s+", ""),
            Pass::new(r"(?m)^\s*[0-9]+\.\s+", ""),
            // Images go before links so alt text is dropped with them
            Pass::new(r"!\[[^\]]*\]\([^)]+\)", ""),
            Pass::new(r"\[([^\]]+)\]\([^)]+\)", "${1}"),
            Pass::new(r"\[([^\]]+)\]\[[^\]]*\]", "${1}"),
            Pass::new(r"(?m)^\[[^\]]+\]:\s+.+$", ""),
            // Emphasis
            Pass::new(r"\*\*([^*]+)\*\*", "${1}"),
            Pass::new(r"__([^_]+)__", "${1}"),
            Pass::new(r"\*([^*]+)\*", "${1}"),
            Pass::new(r"_([^_]+)_", "${1}"),
            Pass::new(r"~~([^~]+)~~", "${1}"),
            Pass::new(r"<[^>]+>", ""),
            Pass::new(r"\[\^[^\]]+\]", ""),
            // Tables: rows, then separator rows
            Pass::new(r"(?m)^\|.+\|\r?$", ""),
            Pass::new(r"(?m)^\|?\s*:?-+:?\s*\|.*$", ""),
            Pass::new(r"[*_~`#]", ""),
        ];
        Self { passes }
    }

    pub fn strip(&self, content: &str) -> String {
        self.passes.iter().fold(content.to_string(), |acc, pass| {
            pass.re.replace_all(&acc, pass.replacement).into_owned()
        })
    }
}

impl Stripper for MarkdownStripper {
    fn strip(&self, content: &str) -> String {
        MarkdownStripper::strip(self, content)
    }

    fn supported_extensions(&self) -> Vec<String> {
        vec![".md".into(), ".markdown".into(), ".mdown".into(), ".mkd".into()]
    }
}

impl Default for MarkdownStripper {
    fn default() -> Self { Self::new() }
}

static STRIPPER: LazyLock<MarkdownStripper> = LazyLock::new(MarkdownStripper::new);

/// Strip markdown with the shared stripper.
pub fn strip_markdown(content: &str) -> String {
    STRIPPER.strip(content)
}
