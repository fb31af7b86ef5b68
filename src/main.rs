use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use chrono::Local;
use clap::Parser;
use tracing::{error, info, warn};

use postcheck::clients::{LlmClient, PageClient};
use postcheck::core::config::{AppConfig, DEFAULT_AREA_KEY};
use postcheck::core::models::AreaKey;
use postcheck::features::{collect, deliver, summarize};
use postcheck::usage;

/// Summarize public area statistics for a UK postcode.
#[derive(Debug, Parser)]
#[command(name = "postcheck", version, about)]
struct Cli {
    /// Postcode to look up; spaces and case are ignored. Defaults to a
    /// Knightsbridge/Kensington postcode.
    postcode: Option<String>,

    /// Directory the report file is written into.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    postcheck::setup_logging();

    let cli = Cli::parse();
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow!("Config error: {}", e)
    })?;

    let area = cli
        .postcode
        .as_deref()
        .map(AreaKey::new)
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| AreaKey::new(DEFAULT_AREA_KEY));

    // Check the destination before any fetch: a duplicate run must abort
    // without touching the network or the existing report.
    let output_path = deliver::output_path(&cli.output_dir, &area);
    deliver::ensure_fresh_output(&output_path)?;

    info!("Collecting data for postcode {}", area);
    let pages = PageClient::new(config.base_url.clone());
    let today = Local::now().date_naive();
    let corpus = collect::collect_area_corpus(&pages, &area, today).await;

    for skipped in &corpus.skipped {
        warn!("Missing from corpus: {} ({})", skipped.kind, skipped.reason);
    }

    if corpus.text.trim().is_empty() {
        if config.require_corpus {
            bail!("No data could be fetched for {area}; refusing to summarize an empty corpus");
        }
        warn!("Corpus for {} is empty; summarizing anyway", area);
    }

    let llm = LlmClient::new(
        config.llm_api_key.clone(),
        config.llm_endpoint.clone(),
        config.model.clone(),
    );
    let Some(report) = summarize::summarize_corpus(&llm, &corpus.text).await else {
        bail!("No summary was produced; nothing to write");
    };

    let estimate = usage::estimate_usage(&corpus.text, &report, &config.model);
    println!("{}", deliver::format_usage(&estimate));

    deliver::write_report(&output_path, &area, &report)?;
    println!("Summary written to: {}", output_path.display());

    Ok(())
}
