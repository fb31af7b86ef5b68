use std::env;

use tracing::warn;
use url::Url;

/// Fallback postcode when none is given on the command line.
pub const DEFAULT_AREA_KEY: &str = "SW72BU";

const DEFAULT_BASE_URL: &str = "https://www.streetcheck.co.uk/";
const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Output ceiling for the summary call.
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// USD per 1000 tokens (input, output), keyed by model identifier.
const MODEL_PRICES: &[(&str, f64, f64)] = &[
    ("gpt-4o", 0.0025, 0.01),
    ("gpt-4o-mini", 0.000_15, 0.0006),
    ("gpt-4.1", 0.002, 0.008),
    ("gpt-4.1-mini", 0.0004, 0.0016),
];

/// Model identity plus the decoding ceiling and pricing that go with it.
/// Passed explicitly into the summarizer and the usage estimator so
/// neither reads pricing out of global state.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub id: String,
    pub max_output_tokens: u32,
    pub input_price_per_1k: f64,
    pub output_price_per_1k: f64,
}

impl ModelConfig {
    /// Look up pricing for `model_id`. Unknown models still run, priced
    /// at zero with a warning; cost estimation is advisory.
    #[must_use]
    pub fn for_model(model_id: &str) -> Self {
        let prices = MODEL_PRICES
            .iter()
            .find(|(id, _, _)| *id == model_id)
            .map(|(_, input, output)| (*input, *output));

        if prices.is_none() {
            warn!(
                "No pricing known for model {}; cost estimates will be zero",
                model_id
            );
        }
        let (input_price_per_1k, output_price_per_1k) = prices.unwrap_or((0.0, 0.0));

        Self {
            id: model_id.to_string(),
            max_output_tokens: MAX_OUTPUT_TOKENS,
            input_price_per_1k,
            output_price_per_1k,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub llm_endpoint: String,
    pub llm_api_key: String,
    pub model: ModelConfig,
    /// When set, a run whose every fetch failed aborts instead of
    /// summarizing an empty corpus.
    pub require_corpus: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let raw_base = env::var("AREA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut base_url = Url::parse(&raw_base).map_err(|e| format!("AREA_BASE_URL: {}", e))?;
        // Url::join treats a base without a trailing slash as a file path
        // and would drop the last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            llm_endpoint: env::var("LLM_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_LLM_ENDPOINT.to_string()),
            llm_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            model: ModelConfig::for_model(
                &env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            ),
            require_corpus: env::var("REQUIRE_CORPUS")
                .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
        })
    }
}
