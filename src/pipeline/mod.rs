pub mod orchestrator;
pub mod phase;
pub mod state;

pub use orchestrator::{plan_targets, scan, scan_targets, PipelineOrchestrator};
pub use phase::PHASES;
pub use state::{PhaseName, PipelineSummary, ScanOutcome};
