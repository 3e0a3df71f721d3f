use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_REPORTS_DIR: &str = "reports";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TriageConfig {
    #[serde(default)]
    pub scanner: ScannerConfig,
    pub rag: RagConfig,
    pub sources: Option<SourcesConfig>,
    pub output: Option<OutputConfig>,
}

impl TriageConfig {
    /// Minimal configuration around a knowledge index, with scanner defaults.
    pub fn new(rag: RagConfig) -> Self {
        Self {
            scanner: ScannerConfig::default(),
            rag,
            sources: None,
            output: None,
        }
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.output
            .as_ref()
            .and_then(|o| o.reports_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_DIR))
    }

    pub fn feed_url(&self) -> Option<&str> {
        self.sources.as_ref()?.hackerone_rss.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub targets: Vec<TargetConfig>,
    pub allowlist: Vec<String>,
    pub denylist: Vec<String>,
    pub safe_mode: bool,
    pub rate_limit_per_minute: Option<u32>,
    pub generate_findings: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            allowlist: Vec::new(),
            denylist: Vec::new(),
            safe_mode: true,
            rate_limit_per_minute: None,
            generate_findings: true,
        }
    }
}

/// One bug-bounty program and the assets it declares in scope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    pub program: String,
    #[serde(default)]
    pub scope: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RagConfig {
    pub index_path: PathBuf,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    /// Skip chunks whose text is already indexed. Off by default: ingestion is append-only.
    #[serde(default)]
    pub deduplicate: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SourcesConfig {
    pub hackerone_rss: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub reports_dir: Option<PathBuf>,
}
