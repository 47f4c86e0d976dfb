//! Markdown-aware word counting for mixed CJK/English documents.

pub mod counter;
pub mod markdown;
pub mod text;
pub mod traits;

pub use counter::{count, count_plain, render, DisplayMode, WordCountResult};
pub use markdown::{strip_markdown, MarkdownStripper};
pub use text::PlainTextStripper;
pub use traits::Stripper;

/// Pick a stripper by file extension; unknown extensions count as plain text.
pub fn stripper_for_path(path: &str) -> Box<dyn Stripper> {
    let md = MarkdownStripper::new();
    if md.can_strip(path) {
        Box::new(md)
    } else {
        Box::new(PlainTextStripper::new())
    }
}
