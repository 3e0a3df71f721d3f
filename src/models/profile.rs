use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inferred technical fingerprint of one in-scope asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetProfile {
    pub program: String,
    pub asset: String,
    pub host: String,
    /// Sorted, de-duplicated candidate paths.
    pub endpoints: BTreeSet<String>,
    /// Technology tags in inference order.
    pub tech_stack: Vec<String>,
    pub notes: Vec<String>,
}
