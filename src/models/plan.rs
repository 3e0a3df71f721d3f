use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Hypotheses and operating constraints derived for one asset profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPlan {
    pub program: String,
    pub asset: String,
    pub endpoints: BTreeSet<String>,
    pub tech_stack: Vec<String>,
    pub recon_notes: Vec<String>,
    /// Derivation order, see `planning::rules::HYPOTHESIS_RULES`.
    pub hypotheses: Vec<String>,
    pub steps: Vec<String>,
    pub constraints: Vec<String>,
    pub references: Vec<String>,
}
