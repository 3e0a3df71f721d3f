use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use crate::models::{Finding, TestPlan};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseName {
    Ingestion,
    Profiling,
    Planning,
    Synthesis,
    Reporting,
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ingestion => write!(f, "ingestion"),
            Self::Profiling => write!(f, "profiling"),
            Self::Planning => write!(f, "planning"),
            Self::Synthesis => write!(f, "synthesis"),
            Self::Reporting => write!(f, "reporting"),
        }
    }
}

/// Plans and findings produced for all configured targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub plans: Vec<TestPlan>,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub records_ingested: usize,
    pub chunks_indexed: usize,
    pub knowledge_chunks: usize,
    pub plans: usize,
    pub total_findings: usize,
    pub finding_counts: BTreeMap<String, usize>,
    pub report_files: Vec<PathBuf>,
}

impl PipelineSummary {
    pub fn record_findings(&mut self, findings: &[Finding]) {
        self.total_findings = findings.len();
        self.finding_counts.clear();
        for f in findings {
            *self.finding_counts.entry(f.severity.to_string()).or_default() += 1;
        }
    }
}
