pub mod fs;
pub mod similarity;
pub mod truncation;

pub use fs::atomic_write;
pub use similarity::{jaccard, jaccard_similarity, token_set};
pub use truncation::truncate_preview;
