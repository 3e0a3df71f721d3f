use std::path::PathBuf;
use console::style;
use crate::cli::commands::SearchArgs;
use crate::config;
use crate::errors::TriageError;
use crate::knowledge::KnowledgeStore;
use crate::utils::{jaccard_similarity, truncate_preview};

pub async fn handle_search(args: SearchArgs) -> Result<(), TriageError> {
    let config = config::parse_config(&PathBuf::from(&args.config)).await?;
    let store = KnowledgeStore::open(&config.rag)?;
    let results = store.search(&args.query, args.limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("Knowledge index is empty: {}", store.index_path().display());
        return Ok(());
    }
    if results.is_empty() {
        println!("No matching chunks");
        return Ok(());
    }

    for (rank, chunk) in results.iter().enumerate() {
        let score = jaccard_similarity(&args.query, &chunk.text);
        println!(
            "{}. {} {} {}",
            rank + 1,
            style(format!("[{:.3}]", score)).cyan(),
            style(&chunk.id).bold(),
            style(&chunk.source).dim()
        );
        println!("   {}", truncate_preview(&chunk.text));
    }
    Ok(())
}
