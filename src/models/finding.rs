use serde::{Deserialize, Serialize};

/// Severity level for a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reportable unit of evidence tied to one hypothesis for one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub program: String,
    /// The in-scope asset the finding was derived for.
    pub target: String,
    /// The hypothesis this finding supports.
    pub title: String,
    pub evidence: String,
    pub severity: Severity,
    pub recommendation: String,
    /// Knowledge sources that informed the plan, first-seen order.
    pub references: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"Low\"");
        let parsed: Severity = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(parsed, Severity::Medium);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::High), "High");
    }
}
