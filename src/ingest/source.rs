use std::path::PathBuf;
use std::time::Duration;
use async_trait::async_trait;
use scraper::{Html, Selector};
use crate::errors::TriageError;
use crate::models::{RawReport, ReportRecord};
use super::summarize::summarize_reports;
use tracing::{info, warn};

const FEED_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("bountytriage/", env!("CARGO_PKG_VERSION"));

/// Supplier of vulnerability write-ups, already shaped as knowledge records.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ReportRecord>, TriageError>;

    /// Source name for logging
    fn name(&self) -> &str;
}

/// Lightweight scrape of the HackerOne Hacktivity listing.
pub struct HacktivityFeed {
    url: String,
    client: reqwest::Client,
}

impl HacktivityFeed {
    pub fn new(url: impl Into<String>) -> Result<Self, TriageError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FEED_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TriageError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { url: url.into(), client })
    }

    /// Scrape the listing page. A non-200 response yields no reports.
    pub async fn fetch_raw(&self) -> Result<Vec<RawReport>, TriageError> {
        let resp = self.client.get(&self.url).send().await
            .map_err(|e| TriageError::Network(format!("Failed to fetch {}: {}", self.url, e)))?;

        if resp.status() != reqwest::StatusCode::OK {
            warn!(
                url = %self.url,
                status = %resp.status(),
                "Report feed returned non-200, ingesting nothing"
            );
            return Ok(Vec::new());
        }

        let body = resp.text().await
            .map_err(|e| TriageError::Network(format!("Failed to read {}: {}", self.url, e)))?;
        let reports = parse_hacktivity(&body, &self.url);
        info!(url = %self.url, reports = reports.len(), "Fetched report feed");
        Ok(reports)
    }
}

#[async_trait]
impl ReportSource for HacktivityFeed {
    async fn fetch(&self) -> Result<Vec<ReportRecord>, TriageError> {
        let raw = self.fetch_raw().await?;
        Ok(summarize_reports(&raw))
    }

    fn name(&self) -> &str {
        "hacktivity"
    }
}

/// Every `.fade-out` element is one report: its trimmed text is the title,
/// its `href` the url (the feed url when absent).
pub fn parse_hacktivity(html: &str, feed_url: &str) -> Vec<RawReport> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse(".fade-out") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(|item| {
            let title = item
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            let url = item.value().attr("href").unwrap_or(feed_url).to_string();
            RawReport { title, url, body: String::new() }
        })
        .collect()
}

/// Pre-summarized records kept in a local JSON array.
pub struct LocalReportFile {
    path: PathBuf,
}

impl LocalReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_records(&self) -> Result<Vec<ReportRecord>, TriageError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<ReportRecord> = serde_json::from_str(&content)?;
        info!(path = %self.path.display(), records = records.len(), "Loaded local report records");
        Ok(records)
    }
}

#[async_trait]
impl ReportSource for LocalReportFile {
    async fn fetch(&self) -> Result<Vec<ReportRecord>, TriageError> {
        self.read_records().await
    }

    fn name(&self) -> &str {
        "local-file"
    }
}
