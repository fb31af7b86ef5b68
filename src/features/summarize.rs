use tracing::error;

use crate::clients::llm_client::LlmClient;
use crate::prompt::{build_summary_prompt, extract_report};

/// Run the corpus through the LLM and unwrap the report.
///
/// Provider and transport failures are absorbed here: the error is logged
/// with the provider's message and the caller gets `None`, meaning no
/// report was produced and nothing should be persisted.
pub async fn summarize_corpus(client: &LlmClient, corpus: &str) -> Option<String> {
    let prompt = build_summary_prompt(corpus);
    match client.generate_summary(&prompt).await {
        Ok(raw) => Some(extract_report(&raw).to_string()),
        Err(e) => {
            error!("Error getting summary: {}", e);
            None
        }
    }
}
