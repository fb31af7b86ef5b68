//! Token and cost approximation for a completed run.

use crate::core::config::ModelConfig;

/// Rough characters-per-token divisor. The provider's tokenizer is the
/// source of truth; this is close enough for cost reporting and must not
/// be presented as exact.
const CHARS_PER_TOKEN: usize = 4;

/// Approximate token/cost accounting derived from text lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageEstimate {
    pub input_tokens: usize,
    pub output_tokens: usize,
    pub input_cost: f64,
    pub output_cost: f64,
}

impl UsageEstimate {
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.input_cost + self.output_cost
    }
}

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / CHARS_PER_TOKEN
}

/// Derive the usage estimate for one run from the corpus sent in and the
/// report that came back. Costs bill whole thousands of tokens only:
/// 1999 approximate tokens is one thousand-unit.
#[must_use]
pub fn estimate_usage(corpus: &str, report: &str, model: &ModelConfig) -> UsageEstimate {
    let input_tokens = estimate_tokens(corpus);
    let output_tokens = estimate_tokens(report);
    UsageEstimate {
        input_tokens,
        output_tokens,
        input_cost: (input_tokens / 1000) as f64 * model.input_price_per_1k,
        output_cost: (output_tokens / 1000) as f64 * model.output_price_per_1k,
    }
}
