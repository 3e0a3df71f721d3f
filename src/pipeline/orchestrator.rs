use crate::config::TriageConfig;
use crate::errors::TriageError;
use crate::ingest::ReportSource;
use crate::knowledge::KnowledgeStore;
use crate::models::{Finding, TestPlan};
use crate::planning::build_plan;
use crate::recon::profile_targets;
use crate::reporting::write_reports;
use crate::synthesis::synthesize;
use super::phase::display_name;
use super::state::*;
use tracing::{info, warn};

/// Profile every configured target and build one plan per in-scope asset.
pub fn plan_targets(config: &TriageConfig, knowledge: &KnowledgeStore) -> Vec<TestPlan> {
    let scanner = &config.scanner;
    profile_targets(&scanner.targets, scanner)
        .iter()
        .map(|profile| build_plan(profile, knowledge, scanner))
        .collect()
}

/// Profiling, planning and synthesis across all targets, in declaration order.
pub fn scan(config: &TriageConfig, knowledge: &KnowledgeStore) -> ScanOutcome {
    let plans = plan_targets(config, knowledge);
    let findings = plans
        .iter()
        .flat_map(|plan| synthesize(plan, config.scanner.generate_findings))
        .collect();
    ScanOutcome { plans, findings }
}

pub fn scan_targets(config: &TriageConfig, knowledge: &KnowledgeStore) -> Vec<Finding> {
    scan(config, knowledge).findings
}

/// Drives one full run: ingest, persist, scan, report.
pub struct PipelineOrchestrator {
    config: TriageConfig,
    source: Option<Box<dyn ReportSource>>,
    write_reports: bool,
}

impl PipelineOrchestrator {
    pub fn new(config: TriageConfig) -> Self {
        Self {
            config,
            source: None,
            write_reports: true,
        }
    }

    /// Ingest from this source. Without one, the persisted index is reused.
    pub fn with_source(mut self, source: Box<dyn ReportSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Skip writing report files.
    pub fn dry_run(mut self) -> Self {
        self.write_reports = false;
        self
    }

    fn phase_started(&self, phase: PhaseName) {
        info!(phase = %phase, "{} started", display_name(phase));
    }

    /// Build the knowledge store: fresh ingestion when a source is attached,
    /// otherwise the previously persisted index.
    async fn ingest(&self, summary: &mut PipelineSummary) -> Result<KnowledgeStore, TriageError> {
        self.phase_started(PhaseName::Ingestion);

        let Some(source) = &self.source else {
            warn!("No report source configured, reusing persisted knowledge index");
            let store = KnowledgeStore::open(&self.config.rag)?;
            summary.knowledge_chunks = store.len();
            return Ok(store);
        };

        let records = source.fetch().await?;
        info!(source = source.name(), records = records.len(), "Fetched report records");

        let mut store = KnowledgeStore::from_config(&self.config.rag)?;
        summary.records_ingested = records.len();
        summary.chunks_indexed = store.ingest(&records);
        store.persist()?;
        summary.knowledge_chunks = store.len();
        Ok(store)
    }

    pub async fn run(&self) -> Result<PipelineSummary, TriageError> {
        let mut summary = PipelineSummary::default();

        // Single writer: the store is complete and persisted before any query.
        let store = self.ingest(&mut summary).await?;

        self.phase_started(PhaseName::Profiling);
        self.phase_started(PhaseName::Planning);
        self.phase_started(PhaseName::Synthesis);
        let outcome = scan(&self.config, &store);
        for plan in &outcome.plans {
            info!(
                program = %plan.program,
                asset = %plan.asset,
                hypotheses = plan.hypotheses.len(),
                references = plan.references.len(),
                "Planned asset"
            );
        }
        summary.plans = outcome.plans.len();
        summary.record_findings(&outcome.findings);

        if self.write_reports {
            self.phase_started(PhaseName::Reporting);
            let reports_dir = self.config.reports_dir();
            summary.report_files = write_reports(&outcome.findings, &reports_dir).await?;
        }

        info!(
            plans = summary.plans,
            findings = summary.total_findings,
            chunks = summary.knowledge_chunks,
            "Pipeline completed"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RagConfig, TargetConfig};
    use crate::models::{ReportRecord, Severity};
    use async_trait::async_trait;
    use std::path::Path;

    struct StaticSource(Vec<ReportRecord>);

    #[async_trait]
    impl ReportSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<ReportRecord>, TriageError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    fn config(index: &Path, scope: &[&str]) -> TriageConfig {
        let mut config = TriageConfig::new(RagConfig {
            index_path: index.to_path_buf(),
            chunk_size: 50,
            chunk_overlap: 5,
            deduplicate: false,
        });
        config.scanner.targets = vec![TargetConfig {
            program: "Acme".into(),
            scope: scope.iter().map(|s| s.to_string()).collect(),
        }];
        config
    }

    fn idor_record() -> ReportRecord {
        ReportRecord {
            title: "IDOR".into(),
            url: "https://h1.example/report/2".into(),
            technique: String::new(),
            root_cause: String::new(),
            remediation: String::new(),
            raw_text: "idor on invoice export".into(),
        }
    }

    #[test]
    fn test_scan_one_plan_per_in_scope_asset() {
        let scope = ["https://app.acme.com", "https://internal.acme.com"];
        let mut cfg = config(Path::new("unused.json"), &scope);
        cfg.scanner.denylist = vec!["internal".into()];
        let kb = KnowledgeStore::from_config(&cfg.rag).unwrap();
        let outcome = scan(&cfg, &kb);
        assert_eq!(outcome.plans.len(), 1);
        assert_eq!(outcome.plans[0].asset, "https://app.acme.com");
    }

    #[test]
    fn test_findings_disabled() {
        let mut cfg = config(Path::new("unused.json"), &["https://app.acme.com"]);
        cfg.scanner.generate_findings = false;
        let kb = KnowledgeStore::from_config(&cfg.rag).unwrap();
        assert!(scan_targets(&cfg, &kb).is_empty());
    }

    #[tokio::test]
    async fn test_run_ingests_persists_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let index = dir.path().join("data").join("knowledge.json");
        let mut cfg = config(&index, &["https://app.acme.com"]);
        cfg.output = Some(crate::config::OutputConfig {
            reports_dir: Some(dir.path().join("reports")),
        });

        let orchestrator = PipelineOrchestrator::new(cfg)
            .with_source(Box::new(StaticSource(vec![idor_record()])));
        let summary = orchestrator.run().await.unwrap();

        assert_eq!(summary.records_ingested, 1);
        assert_eq!(summary.chunks_indexed, 1);
        assert!(index.exists());
        assert_eq!(summary.plans, 1);
        // access control (Medium), graphql (Low), authentication (Low)
        assert_eq!(summary.total_findings, 3);
        assert_eq!(summary.finding_counts.get("Medium"), Some(&1));
        assert_eq!(summary.report_files.len(), 3);
    }

    #[tokio::test]
    async fn test_run_without_source_reuses_index() {
        let dir = tempfile::tempdir().unwrap();
        let index = dir.path().join("knowledge.json");
        let cfg = config(&index, &["https://app.acme.com"]);

        let mut seeded = KnowledgeStore::from_config(&cfg.rag).unwrap();
        seeded.ingest(&[idor_record()]);
        seeded.persist().unwrap();

        let summary = PipelineOrchestrator::new(cfg).dry_run().run().await.unwrap();
        assert_eq!(summary.records_ingested, 0);
        assert_eq!(summary.knowledge_chunks, 1);
        assert!(summary.report_files.is_empty());
        assert_eq!(summary.finding_counts.get(Severity::Medium.as_str()), Some(&1));
    }
}
