use crate::models::{Finding, Severity, TestPlan};
use super::signals::{signals_for_hypothesis, Confidence};
use tracing::debug;

const RECOMMENDATION: &str = "Validate access controls and add server-side checks.";

/// Map each plan hypothesis to heuristic signals and emit one finding per
/// hypothesis that produced any.
pub fn synthesize(plan: &TestPlan, synthesis_enabled: bool) -> Vec<Finding> {
    if !synthesis_enabled || plan.hypotheses.is_empty() {
        return Vec::new();
    }

    let context = context_summary(plan);
    let mut findings = Vec::new();
    for hypothesis in &plan.hypotheses {
        let signals = signals_for_hypothesis(hypothesis);
        if signals.is_empty() {
            debug!(asset = %plan.asset, hypothesis = %hypothesis, "No signal for hypothesis");
            continue;
        }

        let summary = signals.iter().map(|s| s.description).collect::<Vec<_>>().join("; ");
        let severity = if signals.iter().any(|s| s.confidence == Confidence::Medium) {
            Severity::Medium
        } else {
            Severity::Low
        };

        findings.push(Finding {
            program: plan.program.clone(),
            target: plan.asset.clone(),
            title: hypothesis.clone(),
            evidence: format!("{} ({})", summary, context),
            severity,
            recommendation: RECOMMENDATION.to_string(),
            references: plan.references.clone(),
        });
    }
    findings
}

fn context_summary(plan: &TestPlan) -> String {
    let endpoints = plan.endpoints.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    let tech = if plan.tech_stack.is_empty() {
        "unknown".to_string()
    } else {
        plan.tech_stack.join(", ")
    };
    [
        format!("Endpoints: {}", endpoints),
        format!("Tech stack: {}", tech),
        format!("Constraints: {}", plan.constraints.join(", ")),
    ]
    .join(" | ")
}
