use std::path::PathBuf;
use console::style;
use crate::cli::commands::RunArgs;
use crate::config::{self, TriageConfig};
use crate::errors::TriageError;
use crate::ingest::{HacktivityFeed, LocalReportFile, ReportSource};
use crate::pipeline::PipelineOrchestrator;
use tracing::info;

pub async fn handle_run(args: RunArgs) -> Result<(), TriageError> {
    info!(
        config = %args.config,
        build = option_env!("GIT_HASH").unwrap_or("unknown"),
        built_at = env!("BUILD_TIMESTAMP"),
        "Starting triage run"
    );

    let config = config::parse_config(&PathBuf::from(&args.config)).await?;
    let source = select_source(&args, &config)?;

    let mut orchestrator = PipelineOrchestrator::new(config);
    if let Some(source) = source {
        orchestrator = orchestrator.with_source(source);
    }
    if args.dry_run {
        orchestrator = orchestrator.dry_run();
    }

    let summary = orchestrator.run().await?;

    println!("{}", style("Triage run complete").bold());
    println!("  Records ingested: {}", summary.records_ingested);
    println!("  Knowledge chunks: {}", summary.knowledge_chunks);
    println!("  Plans:            {}", summary.plans);
    println!("  Findings:         {}", summary.total_findings);
    for (severity, count) in &summary.finding_counts {
        println!("    {:<8} {}", severity, count);
    }
    for path in &summary.report_files {
        println!("  {} {}", style("wrote").green(), path.display());
    }
    Ok(())
}

/// `--reports` wins over the configured feed; neither means reuse the index.
fn select_source(
    args: &RunArgs,
    config: &TriageConfig,
) -> Result<Option<Box<dyn ReportSource>>, TriageError> {
    if let Some(path) = &args.reports {
        return Ok(Some(Box::new(LocalReportFile::new(path))));
    }
    match config.feed_url() {
        Some(url) => Ok(Some(Box::new(HacktivityFeed::new(url)?))),
        None => Ok(None),
    }
}
