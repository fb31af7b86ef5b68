/// postcheck - scrapes public area statistics for a UK postcode and writes
/// an LLM-generated summary report.
///
/// The pipeline is a single forward pass:
/// 1. Fetch the profile, house-price and monthly crime pages for the postcode
/// 2. Normalize each page's HTML into plain text
/// 3. Assemble the pieces into one corpus
/// 4. Ask the LLM for a structured summary and extract the report
/// 5. Estimate token usage/cost and write the report to a Markdown file
///
/// # Architecture
///
/// The system uses:
/// - reqwest for both the scrape target and the LLM endpoint
/// - scraper for HTML-to-text normalization
/// - chrono for calendar-month arithmetic
/// - Tokio for the async runtime
///
/// Every fetch is independent: a page that cannot be retrieved is dropped
/// from the corpus (with a recorded reason) rather than failing the run.
/// Only an output-file conflict aborts the whole run.
// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod usage;
pub mod utils;

pub use errors::ReportError;

/// Configure human-readable structured logging for the CLI.
///
/// Respects `RUST_LOG` and defaults to `info`. Call once at startup.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
