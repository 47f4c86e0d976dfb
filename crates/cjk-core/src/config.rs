use crate::error::{CjkError, Result};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One formatting rule switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    EllipsisNormalization,
    FullwidthAlphanumeric,
    FullwidthPunctuation,
    FullwidthParentheses,
    FullwidthBrackets,
    DashConversion,
    EmdashSpacing,
    QuoteSpacing,
    SingleQuoteSpacing,
    CjkEnglishSpacing,
    CurrencySpacing,
    SlashSpacing,
    SpaceCollapsing,
}

impl Rule {
    pub const ALL: [Rule; 13] = [
        Rule::EllipsisNormalization,
        Rule::FullwidthAlphanumeric,
        Rule::FullwidthPunctuation,
        Rule::FullwidthParentheses,
        Rule::FullwidthBrackets,
        Rule::DashConversion,
        Rule::EmdashSpacing,
        Rule::QuoteSpacing,
        Rule::SingleQuoteSpacing,
        Rule::CjkEnglishSpacing,
        Rule::CurrencySpacing,
        Rule::SlashSpacing,
        Rule::SpaceCollapsing,
    ];

    /// Rules behind the Han gate, in application order.
    pub const CJK_ORDER: [Rule; 12] = [
        Rule::FullwidthAlphanumeric,
        Rule::FullwidthPunctuation,
        Rule::FullwidthParentheses,
        Rule::FullwidthBrackets,
        Rule::DashConversion,
        Rule::EmdashSpacing,
        Rule::QuoteSpacing,
        Rule::SingleQuoteSpacing,
        Rule::CjkEnglishSpacing,
        Rule::CurrencySpacing,
        Rule::SlashSpacing,
        Rule::SpaceCollapsing,
    ];

    /// Configuration key, as used in JSON settings.
    pub fn key(&self) -> &'static str {
        match self {
            Self::EllipsisNormalization => "ellipsisNormalization",
            Self::FullwidthAlphanumeric => "fullwidthAlphanumeric",
            Self::FullwidthPunctuation => "fullwidthPunctuation",
            Self::FullwidthParentheses => "fullwidthParentheses",
            Self::FullwidthBrackets => "fullwidthBrackets",
            Self::DashConversion => "dashConversion",
            Self::EmdashSpacing => "emdashSpacing",
            Self::QuoteSpacing => "quoteSpacing",
            Self::SingleQuoteSpacing => "singleQuoteSpacing",
            Self::CjkEnglishSpacing => "cjkEnglishSpacing",
            Self::CurrencySpacing => "currencySpacing",
            Self::SlashSpacing => "slashSpacing",
            Self::SpaceCollapsing => "spaceCollapsing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.key() == key)
    }

    /// Every rule is on unless configured otherwise, except bracket widening.
    pub fn default_enabled(&self) -> bool {
        !matches!(self, Self::FullwidthBrackets)
    }
}

/// Rule switches for one formatting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleConfig {
    pub ellipsis_normalization: bool,
    pub dash_conversion: bool,
    pub emdash_spacing: bool,
    pub quote_spacing: bool,
    pub single_quote_spacing: bool,
    pub cjk_english_spacing: bool,
    pub fullwidth_punctuation: bool,
    pub fullwidth_parentheses: bool,
    pub fullwidth_brackets: bool,
    pub fullwidth_alphanumeric: bool,
    pub currency_spacing: bool,
    pub slash_spacing: bool,
    pub space_collapsing: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            ellipsis_normalization: true,
            dash_conversion: true,
            emdash_spacing: true,
            quote_spacing: true,
            single_quote_spacing: true,
            cjk_english_spacing: true,
            fullwidth_punctuation: true,
            fullwidth_parentheses: true,
            fullwidth_brackets: false,
            fullwidth_alphanumeric: true,
            currency_spacing: true,
            slash_spacing: true,
            space_collapsing: true,
        }
    }
}

impl RuleConfig {
    /// All thirteen rules switched on, brackets included.
    pub fn all_enabled() -> Self {
        Rule::ALL.iter().fold(Self::default(), |cfg, r| cfg.with(*r, true))
    }

    /// Lenient construction from loosely-typed settings.
    ///
    /// Keys that are missing or not booleans keep their default; anything
    /// other than a JSON object yields the default config.
    pub fn from_value(value: &Value) -> Self {
        let mut cfg = Self::default();
        let Some(map) = value.as_object() else {
            tracing::debug!("rule config is not an object, using defaults");
            return cfg;
        };
        for rule in Rule::ALL {
            match map.get(rule.key()) {
                Some(Value::Bool(on)) => cfg.set(rule, *on),
                Some(other) => {
                    tracing::debug!(key = rule.key(), value = %other, "ignoring non-boolean rule switch");
                }
                None => {}
            }
        }
        cfg
    }

    pub fn is_enabled(&self, rule: Rule) -> bool {
        match rule {
            Rule::EllipsisNormalization => self.ellipsis_normalization,
            Rule::FullwidthAlphanumeric => self.fullwidth_alphanumeric,
            Rule::FullwidthPunctuation => self.fullwidth_punctuation,
            Rule::FullwidthParentheses => self.fullwidth_parentheses,
            Rule::FullwidthBrackets => self.fullwidth_brackets,
            Rule::DashConversion => self.dash_conversion,
            Rule::EmdashSpacing => self.emdash_spacing,
            Rule::QuoteSpacing => self.quote_spacing,
            Rule::SingleQuoteSpacing => self.single_quote_spacing,
            Rule::CjkEnglishSpacing => self.cjk_english_spacing,
            Rule::CurrencySpacing => self.currency_spacing,
            Rule::SlashSpacing => self.slash_spacing,
            Rule::SpaceCollapsing => self.space_collapsing,
        }
    }

    pub fn set(&mut self, rule: Rule, on: bool) {
        let slot = match rule {
            Rule::EllipsisNormalization => &mut self.ellipsis_normalization,
            Rule::FullwidthAlphanumeric => &mut self.fullwidth_alphanumeric,
            Rule::FullwidthPunctuation => &mut self.fullwidth_punctuation,
            Rule::FullwidthParentheses => &mut self.fullwidth_parentheses,
            Rule::FullwidthBrackets => &mut self.fullwidth_brackets,
            Rule::DashConversion => &mut self.dash_conversion,
            Rule::EmdashSpacing => &mut self.emdash_spacing,
            Rule::QuoteSpacing => &mut self.quote_spacing,
            Rule::SingleQuoteSpacing => &mut self.single_quote_spacing,
            Rule::CjkEnglishSpacing => &mut self.cjk_english_spacing,
            Rule::CurrencySpacing => &mut self.currency_spacing,
            Rule::SlashSpacing => &mut self.slash_spacing,
            Rule::SpaceCollapsing => &mut self.space_collapsing,
        };
        *slot = on;
    }

    pub fn with(mut self, rule: Rule, on: bool) -> Self {
        self.set(rule, on);
        self
    }
}

pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Settings for the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub max_input_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ServiceConfig {
    /// Read a JSON config file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Apply `CJK_FORMATTER_HOST`, `CJK_FORMATTER_PORT` and
    /// `CJK_FORMATTER_MAX_INPUT_BYTES` on top of the current values.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup("CJK_FORMATTER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("CJK_FORMATTER_PORT") {
            self.port = port
                .parse()
                .map_err(|e| CjkError::Other(anyhow!("invalid CJK_FORMATTER_PORT {port:?}: {e}")))?;
        }
        if let Some(limit) = lookup("CJK_FORMATTER_MAX_INPUT_BYTES") {
            self.max_input_bytes = limit.parse().map_err(|e| {
                CjkError::Other(anyhow!("invalid CJK_FORMATTER_MAX_INPUT_BYTES {limit:?}: {e}"))
            })?;
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reject input over `limit` bytes before any pipeline scans it.
pub fn ensure_within_limit(text: &str, limit: usize) -> Result<()> {
    if text.len() > limit {
        return Err(CjkError::InputTooLarge { len: text.len(), limit });
    }
    Ok(())
}
