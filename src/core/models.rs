use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Normalized postcode identifier.
///
/// Construction strips all whitespace and lowercases, so the value can be
/// used directly in URL paths and filenames. Normalization is idempotent:
/// re-normalizing an already-normalized key is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaKey(String);

impl AreaKey {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let normalized: String = raw.split_whitespace().collect::<String>().to_lowercase();
        Self(normalized)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AreaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One calendar month scoping a crime-page fetch. Computed once per run
/// from the local date, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Period {
    /// Renders as `YYYY/MM`, the format the remote site uses in its paths.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}", self.year, self.month)
    }
}

/// The category of page being fetched for an area.
///
/// The crime log is only published per calendar month; that variant
/// carries its `Period`, and a monthless crime fetch cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Profile,
    PriceHistory,
    IncidentLog(Period),
}

impl PageKind {
    /// Path segment on the remote host for this page kind.
    #[must_use]
    pub fn path_segment(&self) -> &'static str {
        match self {
            PageKind::Profile => "postcode",
            PageKind::PriceHistory => "houseprices",
            PageKind::IncidentLog(_) => "crime",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKind::Profile => write!(f, "area profile"),
            PageKind::PriceHistory => write!(f, "house price history"),
            PageKind::IncidentLog(period) => write!(f, "crime data for {period}"),
        }
    }
}

/// Why a page was left out of the corpus. Fetch failures never abort the
/// run; they are recorded here so callers can see what is missing.
#[derive(Debug, Clone)]
pub struct SkippedSource {
    pub kind: PageKind,
    pub reason: String,
}

/// The assembled plain-text document submitted for summarization, along
/// with the sources that could not be fetched.
#[derive(Debug, Clone)]
pub struct AreaCorpus {
    pub text: String,
    pub skipped: Vec<SkippedSource>,
}
