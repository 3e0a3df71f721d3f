pub mod cli;
pub mod config;
pub mod errors;
pub mod guardrails;
pub mod ingest;
pub mod knowledge;
pub mod models;
pub mod pipeline;
pub mod planning;
pub mod recon;
pub mod reporting;
pub mod synthesis;
pub mod utils;
