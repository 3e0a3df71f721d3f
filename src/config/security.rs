use serde_yaml::Value;
use url::Url;
use crate::errors::TriageError;

/// Config keys that name filesystem locations.
const PATH_KEYS: &[&str] = &["rag.index_path", "output.reports_dir"];

const TRAVERSAL_PATTERNS: &[&str] = &["../", "..\\"];

/// Schemes a scope entry may never carry.
const BLOCKED_SCOPE_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript"];

const FEED_SCHEMES: &[&str] = &["http", "https"];

/// Scope entries end up verbatim in markdown reports.
const MARKUP_CHARS: &[char] = &['<', '>', '"'];

/// Screen the raw config document before typed parsing.
///
/// Filesystem keys are checked for traversal, the report feed must be an
/// http(s) URL, and scope entries are judged by their parsed scheme.
pub fn validate_security_patterns(value: &Value) -> Result<(), TriageError> {
    for key in PATH_KEYS {
        if let Some(path) = lookup_str(value, key) {
            check_path(key, path)?;
        }
    }

    if let Some(feed) = lookup_str(value, "sources.hackerone_rss") {
        check_feed_url(feed)?;
    }

    let targets = value
        .get("scanner")
        .and_then(|s| s.get("targets"))
        .and_then(Value::as_sequence);
    for (i, target) in targets.into_iter().flatten().enumerate() {
        let scope = target.get("scope").and_then(Value::as_sequence);
        for (j, entry) in scope.into_iter().flatten().enumerate() {
            if let Some(asset) = entry.as_str() {
                check_scope_entry(&format!("scanner.targets.[{}].scope.[{}]", i, j), asset)?;
            }
        }
    }

    Ok(())
}

fn lookup_str<'a>(value: &'a Value, dotted: &str) -> Option<&'a str> {
    dotted
        .split('.')
        .try_fold(value, |v, key| v.get(key))
        .and_then(Value::as_str)
}

fn rejected(what: &str, path: &str) -> TriageError {
    TriageError::Config(format!("{} found at config path: {}", what, path))
}

fn check_path(key: &str, path: &str) -> Result<(), TriageError> {
    match TRAVERSAL_PATTERNS.iter().find(|p| path.contains(*p)) {
        Some(pattern) => Err(rejected(&format!("Path traversal '{}'", pattern), key)),
        None => Ok(()),
    }
}

fn check_feed_url(feed: &str) -> Result<(), TriageError> {
    let url = Url::parse(feed).map_err(|e| {
        TriageError::Config(format!("Invalid URL at config path sources.hackerone_rss: {}", e))
    })?;
    if !FEED_SCHEMES.contains(&url.scheme()) {
        let what = format!("Unsupported scheme '{}'", url.scheme());
        return Err(rejected(&what, "sources.hackerone_rss"));
    }
    Ok(())
}

fn check_scope_entry(path: &str, asset: &str) -> Result<(), TriageError> {
    if let Some(c) = asset.chars().find(|c| MARKUP_CHARS.contains(c)) {
        return Err(rejected(&format!("Markup character '{}'", c), path));
    }
    // Bare hosts either fail to parse or parse with a harmless pseudo-scheme.
    if let Ok(url) = Url::parse(asset.trim()) {
        if BLOCKED_SCOPE_SCHEMES.contains(&url.scheme()) {
            return Err(rejected(&format!("Blocked scheme '{}'", url.scheme()), path));
        }
    }
    Ok(())
}
