//! LLM API client module
//!
//! Encapsulates the single chat-completions call that turns an assembled
//! corpus into a summary.

use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::core::config::ModelConfig;
use crate::errors::ReportError;

const LLM_TIMEOUT: Duration = Duration::from_secs(120);

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    endpoint: String,
    model: ModelConfig,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, endpoint: String, model: ModelConfig) -> Self {
        Self {
            api_key,
            endpoint,
            model,
        }
    }

    /// Send `prompt` as a single user turn and return the generated text.
    ///
    /// Decoding is deterministic (temperature 0, top_p 1); identical
    /// prompts reproduce identical summaries modulo provider-side
    /// nondeterminism.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot
    /// be parsed into the expected shape.
    pub async fn generate_summary(&self, prompt: &str) -> Result<String, ReportError> {
        #[cfg(feature = "debug-logs")]
        info!("Using LLM prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary from {} ({} prompt chars)",
            self.model.id,
            prompt.len()
        );

        let request_body = json!({
            "model": self.model.id,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": 0.0,
            "top_p": 1,
            "max_tokens": self.model.max_output_tokens
        });

        let client = Client::builder().timeout(LLM_TIMEOUT).build()?;

        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ReportError::HttpError(format!("LLM API request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ReportError::LlmError(format!("LLM API error: {}", error_text)));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ReportError::LlmError(format!("Failed to parse LLM response: {}", e)))?;

        let text_opt = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string);

        text_opt.ok_or_else(|| ReportError::LlmError("No text in response".to_string()))
    }
}
