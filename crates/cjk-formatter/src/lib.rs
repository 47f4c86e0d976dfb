//! CJK Formatter: rule-based punctuation and spacing normalization for
//! mixed CJK/Latin text.
//!
//! Rules, in application order:
//! 1. Ellipsis normalization (all text)
//! 2. Width: fullwidth alphanumerics, punctuation, parentheses, brackets
//! 3. Em-dash conversion and spacing
//! 4. Double and single quote spacing
//! 5. CJK/English, currency and slash spacing
//! 6. Space collapsing, trailing spaces, blank-line runs
//!
//! Steps 2–6 only run when the text contains a Han ideograph, except the
//! blank-line collapse which always runs.

pub mod cleanup;
pub mod dash;
pub mod ellipsis;
pub mod pipeline;
pub mod quotes;
pub mod spacing;
pub mod width;

pub use cjk_core::{Rule, RuleConfig};
pub use pipeline::{format, FormatResult, FormatterPipeline};
