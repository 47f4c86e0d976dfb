//! Formatting pipeline: runs the enabled rules in their fixed order.

use crate::{cleanup, dash, ellipsis, quotes, spacing, width};
use cjk_core::charset::contains_han;
use cjk_core::{Rule, RuleConfig};

/// Upper bound on rule-sequence passes per call.
const MAX_PASSES: usize = 8;

/// Formatting result with the rules that actually ran.
#[derive(Debug, Clone)]
pub struct FormatResult {
    pub output: String,
    pub original_len: usize,
    pub formatted_len: usize,
    /// Whether the Han gate was open.
    pub cjk_detected: bool,
    pub rules_applied: Vec<&'static str>,
    changed: bool,
}

impl FormatResult {
    /// False when formatting left the text byte-for-byte unchanged.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// The transform behind one rule switch.
pub fn transform(rule: Rule) -> fn(&str) -> String {
    match rule {
        Rule::EllipsisNormalization => ellipsis::normalize,
        Rule::FullwidthAlphanumeric => width::normalize_alphanumeric,
        Rule::FullwidthPunctuation => width::normalize_punctuation,
        Rule::FullwidthParentheses => width::normalize_parentheses,
        Rule::FullwidthBrackets => width::normalize_brackets,
        Rule::DashConversion => dash::convert_dashes,
        Rule::EmdashSpacing => dash::fix_emdash_spacing,
        Rule::QuoteSpacing => quotes::fix_double_quotes,
        Rule::SingleQuoteSpacing => quotes::fix_single_quotes,
        Rule::CjkEnglishSpacing => spacing::space_cjk_english,
        Rule::CurrencySpacing => spacing::fix_currency_spacing,
        Rule::SlashSpacing => spacing::fix_slash_spacing,
        Rule::SpaceCollapsing => cleanup::collapse_spaces,
    }
}

/// The main formatter pipeline.
#[derive(Debug, Clone, Default)]
pub struct FormatterPipeline {
    pub config: RuleConfig,
}

impl FormatterPipeline {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Format text through every enabled rule.
    ///
    /// The rule sequence repeats until the text settles; formatting the
    /// output again changes nothing.
    pub fn format(&self, text: &str) -> FormatResult {
        let original_len = text.len();
        let cjk_detected = contains_han(text);

        let mut output = self.apply(text, cjk_detected);
        let mut passes = 1;
        while passes < MAX_PASSES {
            let next = self.apply(&output, cjk_detected);
            if next == output {
                break;
            }
            output = next;
            passes += 1;
        }
        if passes == MAX_PASSES {
            tracing::warn!(original_len, passes, "formatting did not settle");
        }

        let rules_applied = self.enabled_rules(cjk_detected);
        tracing::debug!(
            original_len,
            formatted_len = output.len(),
            cjk_detected,
            passes,
            rules = ?rules_applied,
            "formatted text"
        );

        FormatResult {
            changed: output != text,
            formatted_len: output.len(),
            original_len,
            cjk_detected,
            rules_applied,
            output,
        }
    }

    /// Keys of the rules that run for text with or without Han.
    fn enabled_rules(&self, cjk_detected: bool) -> Vec<&'static str> {
        let mut rules = Vec::new();
        if self.config.is_enabled(Rule::EllipsisNormalization) {
            rules.push(Rule::EllipsisNormalization.key());
        }
        if cjk_detected {
            rules.extend(
                Rule::CJK_ORDER
                    .iter()
                    .filter(|r| self.config.is_enabled(**r))
                    .map(|r| r.key()),
            );
        }
        rules
    }

    /// One pass of the rule sequence.
    fn apply(&self, text: &str, cjk_detected: bool) -> String {
        let mut result = text.to_string();

        // Ellipsis runs regardless of script
        if self.config.is_enabled(Rule::EllipsisNormalization) {
            result = ellipsis::normalize(&result);
        }

        if cjk_detected {
            for rule in Rule::CJK_ORDER {
                if self.config.is_enabled(rule) {
                    result = transform(rule)(&result);
                }
            }
            result = cleanup::strip_trailing_spaces(&result);
        }

        result = cleanup::collapse_newlines(&result);
        result.trim().to_string()
    }
}

/// Format `text` with `config`.
pub fn format(text: &str, config: &RuleConfig) -> String {
    FormatterPipeline::new(*config).format(text).output
}
