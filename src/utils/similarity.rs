use std::collections::HashSet;

/// Lowercased whitespace-delimited token set.
pub fn token_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(|t| t.to_lowercase()).collect()
}

/// Token-set Jaccard similarity: |A ∩ B| / |A ∪ B|, or 0.0 when either side is empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    let total = a.union(b).count();
    shared as f64 / total as f64
}

pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    jaccard(&token_set(a), &token_set(b))
}
