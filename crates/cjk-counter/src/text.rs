//! Plain text passthrough.

use crate::traits::Stripper;

/// Plain text has no markup; content is counted as-is.
pub struct PlainTextStripper;

impl PlainTextStripper {
    pub fn new() -> Self { Self }
}

impl Stripper for PlainTextStripper {
    fn strip(&self, content: &str) -> String {
        content.to_string()
    }

    fn supported_extensions(&self) -> Vec<String> {
        vec![".txt".into(), ".text".into()]
    }
}

impl Default for PlainTextStripper {
    fn default() -> Self { Self::new() }
}
