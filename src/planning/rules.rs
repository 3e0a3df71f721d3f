/// What a hypothesis rule inspects.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Any of these substrings in the lowercased retrieved knowledge.
    Knowledge(&'static [&'static str]),
    /// This tag in the profile's tech stack.
    TechTag(&'static str),
}

pub struct HypothesisRule {
    pub trigger: Trigger,
    pub hypothesis: &'static str,
}

/// Evaluated top to bottom; output order follows this table.
pub static HYPOTHESIS_RULES: &[HypothesisRule] = &[
    HypothesisRule {
        trigger: Trigger::Knowledge(&["jwt", "token"]),
        hypothesis: "JWT handling or session validation weakness",
    },
    HypothesisRule {
        trigger: Trigger::Knowledge(&["access control", "idor"]),
        hypothesis: "Broken access control on sensitive resources",
    },
    HypothesisRule {
        trigger: Trigger::Knowledge(&["sql"]),
        hypothesis: "Input validation issue that could enable injection",
    },
    HypothesisRule {
        trigger: Trigger::Knowledge(&["xss"]),
        hypothesis: "Reflected or stored script injection in dynamic fields",
    },
    HypothesisRule {
        trigger: Trigger::TechTag("graphql"),
        hypothesis: "GraphQL schema exposure or excessive query depth",
    },
    HypothesisRule {
        trigger: Trigger::TechTag("auth"),
        hypothesis: "Authentication flow misconfiguration",
    },
];

pub const FALLBACK_HYPOTHESIS: &str = "General input validation and authorization gaps";

/// Apply the rule table to retrieved chunk texts and the profile's tags.
pub fn derive_hypotheses(knowledge: &[&str], tech_stack: &[String]) -> Vec<String> {
    let corpus = knowledge.join(" ").to_lowercase();

    let mut hypotheses: Vec<String> = HYPOTHESIS_RULES
        .iter()
        .filter(|rule| match rule.trigger {
            Trigger::Knowledge(needles) => needles.iter().any(|n| corpus.contains(n)),
            Trigger::TechTag(tag) => tech_stack.iter().any(|t| t == tag),
        })
        .map(|rule| rule.hypothesis.to_string())
        .collect();

    if hypotheses.is_empty() {
        hypotheses.push(FALLBACK_HYPOTHESIS.to_string());
    }
    hypotheses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(t: &[&str]) -> Vec<String> {
        t.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        assert_eq!(derive_hypotheses(&[], &[]), vec![FALLBACK_HYPOTHESIS]);
        assert_eq!(
            derive_hypotheses(&["open redirect on logout"], &tags(&["rest-api"])),
            vec![FALLBACK_HYPOTHESIS]
        );
    }

    #[test]
    fn test_token_triggers_jwt_hypothesis() {
        assert_eq!(
            derive_hypotheses(&["Bearer TOKEN replay"], &[]),
            vec!["JWT handling or session validation weakness"]
        );
    }

    #[test]
    fn test_fixed_order_across_sources() {
        let knowledge = [
            "stored XSS in profile",
            "IDOR leaks invoices",
            "blind SQL",
            "jwt alg none",
        ];
        let hypotheses = derive_hypotheses(&knowledge, &tags(&["auth", "graphql"]));
        assert_eq!(
            hypotheses,
            vec![
                "JWT handling or session validation weakness",
                "Broken access control on sensitive resources",
                "Input validation issue that could enable injection",
                "Reflected or stored script injection in dynamic fields",
                "GraphQL schema exposure or excessive query depth",
                "Authentication flow misconfiguration",
            ]
        );
    }

    #[test]
    fn test_phrase_may_span_chunk_boundary() {
        // chunks are joined with a space before matching
        assert_eq!(
            derive_hypotheses(&["broken access", "control on admin"], &[]),
            vec!["Broken access control on sensitive resources"]
        );
    }

    #[test]
    fn test_tech_tag_must_match_exactly() {
        assert_eq!(derive_hypotheses(&[], &tags(&["graphql-lite"])), vec![FALLBACK_HYPOTHESIS]);
    }
}
