use super::state::PhaseName;

pub struct PhaseDefinition {
    pub name: PhaseName,
    pub display_name: &'static str,
    pub description: &'static str,
}

pub static PHASES: &[PhaseDefinition] = &[
    PhaseDefinition {
        name: PhaseName::Ingestion,
        display_name: "Knowledge Ingestion",
        description: "Fetch public write-ups, chunk them and persist the knowledge index",
    },
    PhaseDefinition {
        name: PhaseName::Profiling,
        display_name: "Target Profiling",
        description: "Filter declared scope through guardrails and fingerprint each asset",
    },
    PhaseDefinition {
        name: PhaseName::Planning,
        display_name: "Test Planning",
        description: "Retrieve related knowledge and derive hypotheses and constraints",
    },
    PhaseDefinition {
        name: PhaseName::Synthesis,
        display_name: "Signal Synthesis",
        description: "Map hypotheses to heuristic signals and emit findings",
    },
    PhaseDefinition {
        name: PhaseName::Reporting,
        display_name: "Reporting",
        description: "Render one report per finding",
    },
];

pub fn display_name(phase: PhaseName) -> &'static str {
    PHASES
        .iter()
        .find(|p| p.name == phase)
        .map(|p| p.display_name)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_phase_has_definition() {
        for phase in [
            PhaseName::Ingestion,
            PhaseName::Profiling,
            PhaseName::Planning,
            PhaseName::Synthesis,
            PhaseName::Reporting,
        ] {
            assert_ne!(display_name(phase), "Unknown");
        }
    }

    #[test]
    fn test_phase_order() {
        let names: Vec<String> = PHASES.iter().map(|p| p.name.to_string()).collect();
        assert_eq!(names, vec!["ingestion", "profiling", "planning", "synthesis", "reporting"]);
    }
}
