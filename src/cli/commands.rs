use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(
    name = "bountytriage",
    version,
    about = "Bug-bounty triage: report knowledge retrieval and test planning"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest reports, plan every in-scope asset and write findings
    Run(RunArgs),
    /// Query the persisted knowledge index
    Search(SearchArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct RunArgs {
    /// YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Local JSON array of report records to ingest instead of the feed
    #[arg(short, long)]
    pub reports: Option<String>,

    /// Plan and synthesize without writing report files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Clone)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Maximum number of chunks to return
    #[arg(short, long, default_value = "5")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
