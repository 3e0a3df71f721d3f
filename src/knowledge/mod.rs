pub mod chunker;
pub mod store;

pub use chunker::{chunk_words, validate_chunking};
pub use store::{KnowledgeChunk, KnowledgeStore, DEFAULT_SEARCH_LIMIT};
