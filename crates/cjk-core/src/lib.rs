//! Shared primitives for CJK text formatting and counting.

pub mod charset;
pub mod config;
pub mod error;

pub use charset::{contains_han, CharClass};
pub use config::{ensure_within_limit, Rule, RuleConfig, ServiceConfig};
pub use error::{CjkError, Result};
