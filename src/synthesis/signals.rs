/// Confidence tier attached to a heuristic signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    pub description: &'static str,
    pub confidence: Confidence,
}

pub struct SignalRule {
    /// Lowercase substrings of the hypothesis text; any one fires the rule.
    pub triggers: &'static [&'static str],
    pub signals: &'static [Signal],
}

/// First matching rule wins.
pub static SIGNAL_RULES: &[SignalRule] = &[
    SignalRule {
        triggers: &["access control"],
        signals: &[Signal {
            description: "Role-based response discrepancy detected.",
            confidence: Confidence::Medium,
        }],
    },
    SignalRule {
        triggers: &["jwt", "session"],
        signals: &[Signal {
            description: "Token validation response variance observed.",
            confidence: Confidence::Low,
        }],
    },
    SignalRule {
        triggers: &["injection"],
        signals: &[Signal {
            description: "Input handling anomaly on special characters.",
            confidence: Confidence::Low,
        }],
    },
    SignalRule {
        triggers: &["graphql"],
        signals: &[Signal {
            description: "Schema metadata responded to minimal query.",
            confidence: Confidence::Low,
        }],
    },
    SignalRule {
        triggers: &["authentication"],
        signals: &[Signal {
            description: "Login flow did not enforce expected checks.",
            confidence: Confidence::Low,
        }],
    },
];

pub fn signals_for_hypothesis(hypothesis: &str) -> &'static [Signal] {
    let lower = hypothesis.to_lowercase();
    SIGNAL_RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| lower.contains(t)))
        .map(|rule| rule.signals)
        .unwrap_or(&[])
}
