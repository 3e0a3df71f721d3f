use crate::models::finding::{Finding, Severity};

/// One markdown document for a single finding.
pub fn render_report(finding: &Finding) -> String {
    let references = if finding.references.is_empty() {
        "- None".to_string()
    } else {
        finding.references.iter().map(|r| format!("- {}", r)).collect::<Vec<_>>().join("\n")
    };

    format!(
        "# {}\n\n**Program:** {}\n**Target:** {}\n**Severity:** {}\n\n\
         ## Evidence\n{}\n\n## Recommendation\n{}\n\n## References\n{}",
        finding.title,
        finding.program,
        finding.target,
        finding.severity,
        finding.evidence,
        finding.recommendation,
        references,
    )
}

pub fn format_executive_summary(findings: &[Finding]) -> String {
    let count = |severity: Severity| findings.iter().filter(|f| f.severity == severity).count();

    format!(
        "## Executive Summary\n\n| Severity | Count |\n|---|---|\n\
         | High | {} |\n| Medium | {} |\n| Low | {} |\n| **Total** | **{}** |\n",
        count(Severity::High),
        count(Severity::Medium),
        count(Severity::Low),
        findings.len()
    )
}
