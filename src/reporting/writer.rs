use std::path::{Path, PathBuf};
use chrono::Utc;
use crate::errors::TriageError;
use crate::models::finding::Finding;
use super::formatter::{format_executive_summary, render_report};
use tracing::info;

/// Filesystem-safe lowercase slug of a program name.
pub fn slugify(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() { "program".to_string() } else { slug }
}

/// Write one markdown report per finding plus `findings.json` and `summary.md`.
/// Returns the paths of the per-finding reports.
pub async fn write_reports(
    findings: &[Finding],
    reports_dir: &Path,
) -> Result<Vec<PathBuf>, TriageError> {
    tokio::fs::create_dir_all(reports_dir)
        .await
        .map_err(|e| storage_error(reports_dir, e))?;

    let timestamp = Utc::now().format("%Y%m%d%H%M%S").to_string();
    let mut written = Vec::with_capacity(findings.len());
    for (idx, finding) in findings.iter().enumerate() {
        let name = format!("{}-{}-{:03}.md", slugify(&finding.program), timestamp, idx + 1);
        let path = reports_dir.join(name);
        tokio::fs::write(&path, render_report(finding))
            .await
            .map_err(|e| storage_error(&path, e))?;
        written.push(path);
    }

    let json_path = reports_dir.join("findings.json");
    let json = serde_json::to_string_pretty(findings)?;
    tokio::fs::write(&json_path, &json).await.map_err(|e| storage_error(&json_path, e))?;

    let summary_path = reports_dir.join("summary.md");
    let summary = format!("# Findings Report\n\n{}", format_executive_summary(findings));
    tokio::fs::write(&summary_path, &summary).await.map_err(|e| storage_error(&summary_path, e))?;

    info!(dir = %reports_dir.display(), reports = written.len(), "Wrote findings reports");
    Ok(written)
}

fn storage_error(path: &Path, e: std::io::Error) -> TriageError {
    TriageError::Storage(format!("Failed to write {}: {}", path.display(), e))
}
