//! Corpus collection: per-period crime aggregation and document assembly.

use chrono::{Months, NaiveDate};
use tracing::warn;

use crate::clients::page_client::PageClient;
use crate::core::models::{AreaCorpus, AreaKey, PageKind, Period, SkippedSource};

/// How many trailing months of crime data go into the corpus.
pub const INCIDENT_MONTHS: u32 = 3;

/// The `count` consecutive calendar months starting `count + 1` months
/// before `today`, chronologically ascending.
///
/// The window excludes the current and immediately preceding month; the
/// remote source publishes crime figures with a lag.
#[must_use]
pub fn recent_periods(today: NaiveDate, count: u32) -> Vec<Period> {
    let start = today - Months::new(count + 1);
    (0..count)
        .map(|offset| Period::from_date(start + Months::new(offset)))
        .collect()
}

/// Fetch the crime page for each period and concatenate the labeled
/// blocks in chronological order. A period that cannot be fetched is
/// omitted (no placeholder) and recorded in `skipped`.
pub async fn collect_incident_months(
    client: &PageClient,
    area: &AreaKey,
    periods: &[Period],
    skipped: &mut Vec<SkippedSource>,
) -> String {
    let mut results = String::new();
    for period in periods {
        let kind = PageKind::IncidentLog(*period);
        match client.fetch(area, kind).await {
            Ok(text) => {
                results.push_str(&format!("Data for {period}:\n"));
                results.push_str(&text);
                results.push_str("\n\n");
            }
            Err(e) => {
                warn!("Could not fetch {} for postcode {}: {}", kind, area, e);
                skipped.push(SkippedSource {
                    kind,
                    reason: e.to_string(),
                });
            }
        }
    }
    results
}

/// Concatenate the corpus blocks in fixed order: profile, price history,
/// then the aggregated crime months. Present optional blocks are each
/// followed by a blank-line separator; absent ones are skipped entirely.
#[must_use]
pub fn assemble(profile: Option<&str>, prices: Option<&str>, months: &str) -> String {
    let mut corpus = String::new();
    if let Some(text) = profile {
        corpus.push_str(text);
        corpus.push_str("\n\n");
    }
    if let Some(text) = prices {
        corpus.push_str(text);
        corpus.push_str("\n\n");
    }
    corpus.push_str(months);
    corpus
}

async fn fetch_optional(
    client: &PageClient,
    area: &AreaKey,
    kind: PageKind,
    skipped: &mut Vec<SkippedSource>,
) -> Option<String> {
    match client.fetch(area, kind).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Could not fetch {} for postcode {}: {}", kind, area, e);
            skipped.push(SkippedSource {
                kind,
                reason: e.to_string(),
            });
            None
        }
    }
}

/// Run the whole collection pass for one postcode: profile page, price
/// history, then the trailing crime months, sequentially. Every fetch
/// failure degrades the corpus by omission and is recorded; collection
/// itself never fails.
pub async fn collect_area_corpus(
    client: &PageClient,
    area: &AreaKey,
    today: NaiveDate,
) -> AreaCorpus {
    let mut skipped = Vec::new();

    let profile = fetch_optional(client, area, PageKind::Profile, &mut skipped).await;
    let prices = fetch_optional(client, area, PageKind::PriceHistory, &mut skipped).await;

    let periods = recent_periods(today, INCIDENT_MONTHS);
    let months = collect_incident_months(client, area, &periods, &mut skipped).await;

    AreaCorpus {
        text: assemble(profile.as_deref(), prices.as_deref(), &months),
        skipped,
    }
}
