//! Whitespace cleanup: space runs, trailing spaces, blank-line runs.

use regex::Regex;
use std::sync::LazyLock;

static RE_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([-*+]|[0-9]+[.)])\s+([^\r]*)$").unwrap());
static RE_SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\S) {2,}").unwrap());
static RE_TRAILING_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m) +(\r?)$").unwrap());
static RE_MULTI_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

fn collapse_runs(s: &str) -> String {
    RE_SPACE_RUN.replace_all(s, "${1} ").into_owned()
}

/// Collapse a single line. List markers keep their indent and get exactly
/// one space before the content; leading indentation is never touched.
pub fn collapse_line(line: &str) -> String {
    match RE_LIST_ITEM.captures(line) {
        Some(caps) => format!("{}{} {}", &caps[1], &caps[2], collapse_runs(&caps[3])),
        None => collapse_runs(line),
    }
}

pub fn collapse_spaces(text: &str) -> String {
    text.split('\n').map(collapse_line).collect::<Vec<_>>().join("\n")
}

/// Strip spaces (not tabs) at the end of every line.
pub fn strip_trailing_spaces(text: &str) -> String {
    RE_TRAILING_SPACES.replace_all(text, "${1}").into_owned()
}

/// At most one blank line between paragraphs.
pub fn collapse_newlines(text: &str) -> String {
    RE_MULTI_NEWLINE.replace_all(text, "\n\n").into_owned()
}
