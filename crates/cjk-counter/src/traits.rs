use crate::counter::{count_plain, WordCountResult};
use cjk_core::Result;

/// Removes markup from a document, leaving the text that should be counted.
pub trait Stripper: Send + Sync {
    /// Strip markup from content.
    fn strip(&self, content: &str) -> String;

    /// Supported file extensions, with leading dot.
    fn supported_extensions(&self) -> Vec<String>;

    /// Strip and count.
    fn count(&self, content: &str) -> WordCountResult {
        count_plain(&self.strip(content))
    }

    /// Read a file and count it.
    fn count_file(&self, path: &str) -> Result<WordCountResult> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.count(&content))
    }

    /// Check if a file has one of the supported extensions.
    fn can_strip(&self, path: &str) -> bool {
        let ext = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        let ext_with_dot = format!(".{}", ext.to_lowercase());
        self.supported_extensions().contains(&ext_with_dot)
    }
}
