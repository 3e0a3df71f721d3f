pub mod builder;
pub mod rules;

pub use builder::{build_constraints, build_plan, plan_query};
pub use rules::{derive_hypotheses, FALLBACK_HYPOTHESIS, HYPOTHESIS_RULES};
