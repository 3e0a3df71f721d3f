use crate::config::ScannerConfig;
use crate::guardrails::safe_mode_enabled;
use crate::knowledge::{KnowledgeStore, DEFAULT_SEARCH_LIMIT};
use crate::models::{AssetProfile, TestPlan};
use super::rules::derive_hypotheses;
use tracing::debug;

const PLAN_STEPS: &[&str] = &[
    "Review recon notes and enumerate prioritized endpoints.",
    "Run low-impact probes for each hypothesis.",
    "Escalate to verification steps only on positive signals.",
    "Summarize evidence and impact for reporting.",
];

const SAFE_MODE_CONSTRAINT: &str = "Operate in safe mode (no destructive actions).";
const SCOPE_CONSTRAINT: &str = "Stay within declared scope and rate limits.";

/// Retrieval query for a profile: program, asset, then tech tags.
pub fn plan_query(profile: &AssetProfile) -> String {
    let mut parts = vec![profile.program.as_str(), profile.asset.as_str()];
    parts.extend(profile.tech_stack.iter().map(String::as_str));
    parts.join(" ")
}

pub fn build_constraints(scanner: &ScannerConfig) -> Vec<String> {
    let mut constraints = Vec::new();
    if safe_mode_enabled(scanner) {
        constraints.push(SAFE_MODE_CONSTRAINT.to_string());
    }
    if let Some(limit) = scanner.rate_limit_per_minute.filter(|l| *l > 0) {
        constraints.push(format!("Rate limit: {} requests per minute.", limit));
    }
    constraints.push(SCOPE_CONSTRAINT.to_string());
    constraints
}

/// Derive the test plan for one profile from the knowledge retrieved for it.
pub fn build_plan(
    profile: &AssetProfile,
    knowledge: &KnowledgeStore,
    scanner: &ScannerConfig,
) -> TestPlan {
    let context = knowledge.search(&plan_query(profile), DEFAULT_SEARCH_LIMIT);

    let mut references: Vec<String> = Vec::new();
    for chunk in &context {
        if !references.contains(&chunk.source) {
            references.push(chunk.source.clone());
        }
    }

    let texts: Vec<&str> = context.iter().map(|c| c.text.as_str()).collect();
    let hypotheses = derive_hypotheses(&texts, &profile.tech_stack);

    debug!(
        asset = %profile.asset,
        context_chunks = context.len(),
        hypotheses = hypotheses.len(),
        references = references.len(),
        "Built test plan"
    );

    TestPlan {
        program: profile.program.clone(),
        asset: profile.asset.clone(),
        endpoints: profile.endpoints.clone(),
        tech_stack: profile.tech_stack.clone(),
        recon_notes: profile.notes.clone(),
        hypotheses,
        steps: PLAN_STEPS.iter().map(|s| s.to_string()).collect(),
        constraints: build_constraints(scanner),
        references,
    }
}
