use std::collections::BTreeSet;
use crate::config::{ScannerConfig, TargetConfig};
use crate::guardrails::{is_in_scope, normalize_host, split_authority};
use crate::models::AssetProfile;
use tracing::{debug, info};

/// Paths probed on every asset in addition to its own base path.
const PROBE_PATHS: &[&str] = &["/login", "/api", "/graphql"];

/// (tag, asset substring, endpoint) in evaluation order.
const TECH_MARKERS: &[(&str, &str, &str)] = &[
    ("graphql", "graphql", "/graphql"),
    ("rest-api", "api", "/api"),
    ("auth", "login", "/login"),
];

const STUB_MODE_NOTE: &str = "Recon is running in stub mode; no live requests sent.";

/// Build one profile per in-scope asset across all configured targets.
pub fn profile_targets(targets: &[TargetConfig], scanner: &ScannerConfig) -> Vec<AssetProfile> {
    let mut profiles = Vec::new();
    for target in targets {
        for asset in &target.scope {
            if !is_in_scope(asset, scanner) {
                debug!(program = %target.program, asset = %asset, "Asset rejected by guardrails");
                continue;
            }
            profiles.push(profile_asset(&target.program, asset));
        }
    }
    info!(profiles = profiles.len(), "Target profiling complete");
    profiles
}

pub fn profile_asset(program: &str, asset: &str) -> AssetProfile {
    let endpoints = infer_endpoints(asset);
    let tech_stack = infer_tech_stack(asset, &endpoints);

    let endpoint_list = endpoints.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    let tech_list = if tech_stack.is_empty() { "none".to_string() } else { tech_stack.join(", ") };

    AssetProfile {
        program: program.to_string(),
        asset: asset.to_string(),
        host: normalize_host(asset),
        notes: vec![
            STUB_MODE_NOTE.to_string(),
            format!("Discovered endpoints: {}", endpoint_list),
            format!("Inferred tech stack: {}", tech_list),
        ],
        endpoints,
        tech_stack,
    }
}

/// Path component of the asset as written, without query, fragment or
/// trailing slashes. `/` when empty.
fn base_path(asset: &str) -> String {
    let (_, rest) = split_authority(asset.trim());
    let path = rest.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn infer_endpoints(asset: &str) -> BTreeSet<String> {
    let mut endpoints: BTreeSet<String> = PROBE_PATHS.iter().map(|p| p.to_string()).collect();
    endpoints.insert(base_path(asset));
    endpoints
}

pub fn infer_tech_stack(asset: &str, endpoints: &BTreeSet<String>) -> Vec<String> {
    let asset_lower = asset.to_lowercase();
    TECH_MARKERS
        .iter()
        .filter(|(_, needle, endpoint)| {
            asset_lower.contains(needle) || endpoints.contains(*endpoint)
        })
        .map(|(tag, _, _)| tag.to_string())
        .collect()
}
