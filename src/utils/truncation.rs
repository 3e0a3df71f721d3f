const MAX_PREVIEW_CHARS: usize = 160;

/// Shorten text for single-line terminal previews, respecting char boundaries.
pub fn truncate_preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_PREVIEW_CHARS {
        flat
    } else {
        let head: String = flat.chars().take(MAX_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
