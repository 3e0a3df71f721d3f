use crate::errors::TriageError;

/// Reject chunking parameters that could not make progress.
pub fn validate_chunking(chunk_size: usize, chunk_overlap: usize) -> Result<(), TriageError> {
    if chunk_size == 0 {
        return Err(TriageError::Config("rag.chunk_size must be greater than 0".into()));
    }
    if chunk_overlap >= chunk_size {
        return Err(TriageError::Config(format!(
            "rag.chunk_overlap ({}) must be smaller than rag.chunk_size ({})",
            chunk_overlap, chunk_size
        )));
    }
    Ok(())
}

/// Split `text` into windows of `chunk_size` words, consecutive windows
/// sharing `chunk_overlap` words. The final window always ends at the last word.
pub fn chunk_words(text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut chunks = Vec::new();
    if words.is_empty() || chunk_size == 0 {
        return chunks;
    }

    let mut start = 0;
    while start < words.len() {
        let end = (start + chunk_size).min(words.len());
        chunks.push(words[start..end].join(" "));
        if end == words.len() {
            break;
        }
        let next = end.saturating_sub(chunk_overlap);
        // Never step backwards or in place.
        start = if next <= start { end } else { next };
    }
    chunks
}
