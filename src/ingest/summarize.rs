use crate::models::{RawReport, ReportRecord};

const TECHNIQUE_PROMPT: &str = "Extract key exploitation technique.";
const ROOT_CAUSE_PROMPT: &str = "Identify underlying root cause.";
const REMEDIATION_PROMPT: &str = "Summarize remediation guidance.";

/// Shape scraped reports into technique-oriented knowledge records.
///
/// The analysis fields carry extraction prompts until a summarizer fills them in.
pub fn summarize_reports(reports: &[RawReport]) -> Vec<ReportRecord> {
    reports
        .iter()
        .map(|report| ReportRecord {
            title: report.title.clone(),
            url: report.url.clone(),
            technique: TECHNIQUE_PROMPT.to_string(),
            root_cause: ROOT_CAUSE_PROMPT.to_string(),
            remediation: REMEDIATION_PROMPT.to_string(),
            raw_text: report.body.clone(),
        })
        .collect()
}
