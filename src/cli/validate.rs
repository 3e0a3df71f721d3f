use std::path::PathBuf;
use crate::cli::commands::ValidateArgs;
use crate::config;
use crate::errors::TriageError;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), TriageError> {
    let path = PathBuf::from(&args.config);
    let config = config::parse_config(&path).await?;
    let assets: usize = config.scanner.targets.iter().map(|t| t.scope.len()).sum();
    println!(
        "Configuration is valid: {} ({} targets, {} scope entries)",
        args.config,
        config.scanner.targets.len(),
        assets
    );
    Ok(())
}
