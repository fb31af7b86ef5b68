//! Client modules for external API interactions

pub mod llm_client;
pub mod page_client;

pub use llm_client::LlmClient;
pub use page_client::{FetchPolicy, PageClient};
