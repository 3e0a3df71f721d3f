use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::config::RagConfig;
use crate::errors::TriageError;
use crate::models::ReportRecord;
use crate::utils::{atomic_write, jaccard, token_set};
use super::chunker::{chunk_words, validate_chunking};
use tracing::{debug, info};

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// A bounded, source-attributed slice of ingested text.
///
/// Fields are declared alphabetically so the persisted index has sorted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeChunk {
    pub id: String,
    /// Origin URL of the report the text came from.
    pub source: String,
    pub text: String,
}

/// Append-only chunk index with word-window chunking and Jaccard search.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    index_path: PathBuf,
    chunk_size: usize,
    chunk_overlap: usize,
    deduplicate: bool,
    chunks: Vec<KnowledgeChunk>,
}

impl KnowledgeStore {
    pub fn new(
        index_path: impl Into<PathBuf>,
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Result<Self, TriageError> {
        validate_chunking(chunk_size, chunk_overlap)?;
        Ok(Self {
            index_path: index_path.into(),
            chunk_size,
            chunk_overlap,
            deduplicate: false,
            chunks: Vec::new(),
        })
    }

    pub fn from_config(config: &RagConfig) -> Result<Self, TriageError> {
        Ok(Self::new(&config.index_path, config.chunk_size, config.chunk_overlap)?
            .with_deduplication(config.deduplicate))
    }

    /// Build from config and load the persisted index, if one exists.
    pub fn open(config: &RagConfig) -> Result<Self, TriageError> {
        let mut store = Self::from_config(config)?;
        if store.index_path.exists() {
            store.load()?;
        }
        Ok(store)
    }

    /// Skip chunks whose exact text is already stored.
    pub fn with_deduplication(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Chunk and append every record. Returns the number of chunks added.
    pub fn ingest(&mut self, records: &[ReportRecord]) -> usize {
        let before = self.chunks.len();
        let mut known: HashSet<String> = if self.deduplicate {
            self.chunks.iter().map(|c| c.text.clone()).collect()
        } else {
            HashSet::new()
        };

        for record in records {
            let text = record.document_text();
            if text.is_empty() {
                debug!(title = %record.title, "Skipping record with no text");
                continue;
            }

            let mut added = 0usize;
            for chunk in chunk_words(&text, self.chunk_size, self.chunk_overlap) {
                if self.deduplicate && !known.insert(chunk.clone()) {
                    continue;
                }
                let id = format!("{}-{}", record.title, self.chunks.len());
                self.chunks.push(KnowledgeChunk {
                    id,
                    source: record.url.clone(),
                    text: chunk,
                });
                added += 1;
            }
            debug!(title = %record.title, chunks = added, "Ingested record");
        }

        let added = self.chunks.len() - before;
        info!(
            records = records.len(),
            chunks = added,
            total = self.chunks.len(),
            "Knowledge ingestion complete"
        );
        added
    }

    /// Top `limit` chunks by token-set Jaccard similarity to `query`.
    /// Equal scores keep insertion order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&KnowledgeChunk> {
        let query_terms = token_set(query);
        let mut scored: Vec<(f64, &KnowledgeChunk)> = self.chunks
            .iter()
            .map(|chunk| (jaccard(&query_terms, &token_set(&chunk.text)), chunk))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.into_iter().take(limit).map(|(_, chunk)| chunk).collect()
    }

    /// Write all chunks, in insertion order, as a pretty-printed JSON array.
    pub fn persist(&self) -> Result<(), TriageError> {
        let json = serde_json::to_string_pretty(&self.chunks)?;
        atomic_write(&self.index_path, &json).map_err(|e| {
            TriageError::Storage(format!(
                "Failed to write knowledge index {}: {}",
                self.index_path.display(),
                e
            ))
        })?;
        info!(
            path = %self.index_path.display(),
            chunks = self.chunks.len(),
            "Persisted knowledge index"
        );
        Ok(())
    }

    /// Replace in-memory chunks with the persisted index.
    pub fn load(&mut self) -> Result<(), TriageError> {
        let content = std::fs::read_to_string(&self.index_path).map_err(|e| {
            TriageError::Storage(format!(
                "Failed to read knowledge index {}: {}",
                self.index_path.display(),
                e
            ))
        })?;
        let chunks: Vec<KnowledgeChunk> = serde_json::from_str(&content).map_err(|e| {
            TriageError::Storage(format!(
                "Corrupt knowledge index {}: {}",
                self.index_path.display(),
                e
            ))
        })?;
        info!(path = %self.index_path.display(), chunks = chunks.len(), "Loaded knowledge index");
        self.chunks = chunks;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    pub fn chunks(&self) -> &[KnowledgeChunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }
}
