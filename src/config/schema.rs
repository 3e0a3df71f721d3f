use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["rag"],
        "properties": {
            "scanner": {
                "type": "object",
                "properties": {
                    "targets": { "type": "array", "items": { "$ref": "#/$defs/target" } },
                    "allowlist": { "type": "array", "items": { "type": "string" } },
                    "denylist": { "type": "array", "items": { "type": "string" } },
                    "safe_mode": { "type": "boolean" },
                    "rate_limit_per_minute": { "type": ["integer", "null"], "minimum": 1 },
                    "generate_findings": { "type": "boolean" }
                }
            },
            "rag": {
                "type": "object",
                "required": ["index_path", "chunk_size", "chunk_overlap"],
                "properties": {
                    "index_path": { "type": "string" },
                    "chunk_size": { "type": "integer", "minimum": 1 },
                    "chunk_overlap": { "type": "integer", "minimum": 0 },
                    "deduplicate": { "type": "boolean" }
                }
            },
            "sources": {
                "type": "object",
                "properties": {
                    "hackerone_rss": { "type": "string", "format": "uri" }
                }
            },
            "output": {
                "type": "object",
                "properties": {
                    "reports_dir": { "type": "string" }
                }
            }
        },
        "$defs": {
            "target": {
                "type": "object",
                "required": ["program", "scope"],
                "properties": {
                    "program": { "type": "string" },
                    "scope": { "type": "array", "items": { "type": "string" } }
                }
            }
        }
    })
});
