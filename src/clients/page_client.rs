//! HTTP client for the area-statistics site.
//!
//! Each fetch is independent: a fresh connection, a randomized browser
//! header profile and a short random delay beforehand. Failures are
//! reported, never retried; the caller decides whether the page was
//! optional.

use std::time::Duration;

use rand::Rng;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONNECTION, DNT, HeaderMap, HeaderName, HeaderValue,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use tracing::info;
use url::Url;

use crate::core::models::{AreaKey, PageKind};
use crate::errors::ReportError;
use crate::utils::html::html_to_plain_text;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Common desktop browser user agents, rotated per request.
const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:122.0) Gecko/20100101 Firefox/122.0",
];

/// Anti-blocking knobs for outbound page requests: the user-agent pool to
/// rotate through and the uniform pre-request delay bounds in
/// milliseconds (`None` disables the delay). Tests substitute a policy
/// with a single agent and no delay.
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    pub user_agents: Vec<String>,
    pub delay_ms: Option<(u64, u64)>,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            user_agents: DEFAULT_USER_AGENTS.iter().map(ToString::to_string).collect(),
            delay_ms: Some((1_000, 3_000)),
        }
    }
}

impl FetchPolicy {
    fn pick_user_agent(&self) -> Option<&str> {
        match self.user_agents.len() {
            0 => None,
            1 => self.user_agents.first().map(String::as_str),
            n => {
                let idx = rand::rng().random_range(0..n);
                Some(&self.user_agents[idx])
            }
        }
    }

    fn pick_delay(&self) -> Option<Duration> {
        self.delay_ms
            .map(|(low, high)| Duration::from_millis(rand::rng().random_range(low..=high)))
    }
}

/// Fetches pages from the statistics site and reduces them to plain text.
pub struct PageClient {
    base_url: Url,
    policy: FetchPolicy,
}

impl PageClient {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_policy(base_url, FetchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(base_url: Url, policy: FetchPolicy) -> Self {
        Self { base_url, policy }
    }

    /// Request URL for one page: `<base>/<segment>/<areakey>[/<YYYY/MM>]`.
    pub fn page_url(&self, area: &AreaKey, kind: &PageKind) -> Result<Url, ReportError> {
        let path = match kind {
            PageKind::IncidentLog(period) => {
                format!("{}/{}/{}", kind.path_segment(), area, period)
            }
            _ => format!("{}/{}", kind.path_segment(), area),
        };
        Ok(self.base_url.join(&path)?)
    }

    fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(agent) = self.policy.pick_user_agent()
            && let Ok(value) = HeaderValue::from_str(agent)
        {
            headers.insert(USER_AGENT, value);
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(DNT, HeaderValue::from_static("1"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
        headers.insert(
            HeaderName::from_static("sec-fetch-dest"),
            HeaderValue::from_static("document"),
        );
        headers.insert(
            HeaderName::from_static("sec-fetch-mode"),
            HeaderValue::from_static("navigate"),
        );
        headers.insert(
            HeaderName::from_static("sec-fetch-site"),
            HeaderValue::from_static("none"),
        );
        headers.insert(
            HeaderName::from_static("sec-fetch-user"),
            HeaderValue::from_static("?1"),
        );
        headers
    }

    /// Fetch one page and reduce it to plain text.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport failures, timeouts and non-2xx
    /// statuses. No retry is attempted.
    pub async fn fetch(&self, area: &AreaKey, kind: PageKind) -> Result<String, ReportError> {
        if let Some(delay) = self.policy.pick_delay() {
            tokio::time::sleep(delay).await;
        }

        let url = self.page_url(area, &kind)?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client
            .get(url.clone())
            .headers(self.request_headers())
            .send()
            .await
            .map_err(|e| ReportError::FetchError(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(ReportError::FetchError(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReportError::FetchError(format!("reading body from {}: {}", url, e)))?;

        info!("Fetched {} for postcode {}", kind, area);
        Ok(html_to_plain_text(&body))
    }
}
