use std::path::Path;
use crate::errors::TriageError;
use crate::knowledge::validate_chunking;
use super::types::TriageConfig;
use super::security::validate_security_patterns;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<TriageConfig, TriageError> {
    if !path.exists() {
        return Err(TriageError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(TriageError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), targets = config.scanner.targets.len(), "Loaded configuration");
    Ok(config)
}

/// Parse and validate a configuration document already held in memory.
pub fn parse_config_str(content: &str) -> Result<TriageConfig, TriageError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| TriageError::Config(format!("Invalid YAML: {}", e)))?;

    validate_security_patterns(&yaml)?;

    validate_schema(&yaml)?;

    // Missing required keys (e.g. rag.chunk_size) surface here.
    let config: TriageConfig = serde_yaml::from_value(yaml)
        .map_err(|e| TriageError::Config(e.to_string()))?;

    validate_conflicts(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), TriageError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| TriageError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| TriageError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        // Advisory only; typed deserialization decides what is fatal.
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Detect semantic problems in the parsed configuration.
fn validate_conflicts(config: &TriageConfig) -> Result<(), TriageError> {
    validate_chunking(config.rag.chunk_size, config.rag.chunk_overlap)?;

    let scanner = &config.scanner;
    for allowed in &scanner.allowlist {
        if scanner.denylist.iter().any(|d| d.eq_ignore_ascii_case(allowed)) {
            warn!(entry = %allowed, "Entry appears in both allowlist and denylist; denylist wins");
        }
    }

    if scanner.rate_limit_per_minute == Some(0) {
        warn!("rate_limit_per_minute is 0; no rate-limit constraint will be planned");
    }

    for target in &scanner.targets {
        if target.program.trim().is_empty() {
            return Err(TriageError::Config("Target with empty program name".into()));
        }
        if target.scope.is_empty() {
            warn!(program = %target.program, "Target declares no scope entries");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
scanner:
  targets:
    - program: Acme
      scope: ["https://app.acme.com/login"]
  rate_limit_per_minute: 30
rag:
  index_path: data/knowledge.json
  chunk_size: 200
  chunk_overlap: 40
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = parse_config_str(VALID).unwrap();
        assert_eq!(config.scanner.targets.len(), 1);
        assert_eq!(config.scanner.targets[0].program, "Acme");
        assert_eq!(config.scanner.rate_limit_per_minute, Some(30));
        assert!(config.scanner.safe_mode);
        assert!(config.scanner.generate_findings);
        assert_eq!(config.rag.chunk_size, 200);
        assert!(!config.rag.deduplicate);
    }

    #[test]
    fn test_scope_url_with_port_accepted() {
        let src = VALID.replace("https://app.acme.com/login", "https://bigdata:8443/api");
        let config = parse_config_str(&src).unwrap();
        assert_eq!(config.scanner.targets[0].scope, vec!["https://bigdata:8443/api"]);
    }

    #[test]
    fn test_missing_rag_section_is_config_error() {
        let err = parse_config_str("scanner:\n  safe_mode: false\n").unwrap_err();
        assert!(matches!(err, TriageError::Config(_)));
    }

    #[test]
    fn test_missing_chunk_size_is_config_error() {
        let src = "rag:\n  index_path: data/knowledge.json\n  chunk_overlap: 10\n";
        let err = parse_config_str(src).unwrap_err();
        match err {
            TriageError::Config(msg) => assert!(msg.contains("chunk_size")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_overlap_not_smaller_than_size_rejected() {
        let src = "rag:\n  index_path: idx.json\n  chunk_size: 10\n  chunk_overlap: 10\n";
        assert!(matches!(parse_config_str(src), Err(TriageError::Config(_))));
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let src = "rag:\n  index_path: idx.json\n  chunk_size: 0\n  chunk_overlap: 0\n";
        assert!(matches!(parse_config_str(src), Err(TriageError::Config(_))));
    }

    #[test]
    fn test_empty_program_rejected() {
        let src = "scanner:\n  targets:\n    - program: ''\n      scope: [a.com]\n\
                   rag:\n  index_path: idx.json\n  chunk_size: 10\n  chunk_overlap: 2\n";
        assert!(matches!(parse_config_str(src), Err(TriageError::Config(_))));
    }

    #[test]
    fn test_generate_findings_can_be_disabled() {
        let src = "scanner:\n  generate_findings: false\n\
                   rag:\n  index_path: idx.json\n  chunk_size: 10\n  chunk_overlap: 2\n";
        let config = parse_config_str(src).unwrap();
        assert!(!config.scanner.generate_findings);
    }

    #[tokio::test]
    async fn test_parse_config_missing_file() {
        let err = parse_config(Path::new("/nonexistent/bountytriage.yaml")).await.unwrap_err();
        assert!(matches!(err, TriageError::Config(_)));
    }

    #[tokio::test]
    async fn test_parse_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, VALID).unwrap();
        let config = parse_config(&path).await.unwrap();
        assert_eq!(config.rag.chunk_overlap, 40);
    }
}
