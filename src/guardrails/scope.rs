use crate::config::ScannerConfig;

/// Split an asset into its authority and the remainder (path, query, fragment),
/// both exactly as written.
///
/// A leading `scheme://` is dropped without validating the rest, so malformed
/// URLs (bad port, stray characters) still yield their authority text.
pub fn split_authority(asset: &str) -> (&str, &str) {
    let after_scheme = strip_scheme(asset).unwrap_or(asset);
    let end = after_scheme.find(['/', '?', '#']).unwrap_or(after_scheme.len());
    after_scheme.split_at(end)
}

fn strip_scheme(asset: &str) -> Option<&str> {
    let (scheme, rest) = asset.split_once("://")?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(rest)
}

/// Reduce an asset identifier to its lowercased host (`host[:port]`).
///
/// The host is taken from the text as written, never re-encoded, so Unicode
/// hosts stay comparable with Unicode list entries. Userinfo is dropped. When
/// nothing remains the whole string is the host.
pub fn normalize_host(asset: &str) -> String {
    let asset = asset.trim();
    let (authority, _) = split_authority(asset);
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if host.is_empty() {
        asset.to_lowercase()
    } else {
        host.to_lowercase()
    }
}

/// Whether `asset` may be touched under the configured allow/deny lists.
///
/// A denylist hit always wins. Without an allowlist every other host is in
/// scope; with one, the host must contain at least one allowlist entry.
pub fn is_in_scope(asset: &str, scanner: &ScannerConfig) -> bool {
    let host = normalize_host(asset);

    if scanner.denylist.iter().any(|blocked| host.contains(&blocked.to_lowercase())) {
        return false;
    }
    if !scanner.allowlist.is_empty() {
        return scanner.allowlist.iter().any(|allowed| host.contains(&allowed.to_lowercase()));
    }
    true
}

pub fn safe_mode_enabled(scanner: &ScannerConfig) -> bool {
    scanner.safe_mode
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(allow: &[&str], deny: &[&str]) -> ScannerConfig {
        ScannerConfig {
            allowlist: allow.iter().map(|s| s.to_string()).collect(),
            denylist: deny.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_host_with_scheme() {
        assert_eq!(normalize_host("https://app.acme.com/login"), "app.acme.com");
    }

    #[test]
    fn test_normalize_host_keeps_explicit_port() {
        assert_eq!(normalize_host("http://app.acme.com:8443/api"), "app.acme.com:8443");
    }

    #[test]
    fn test_normalize_host_without_scheme() {
        assert_eq!(normalize_host("app.acme.com/login"), "app.acme.com");
        assert_eq!(normalize_host("*.acme.com"), "*.acme.com");
    }

    #[test]
    fn test_normalize_host_schemeless_port() {
        assert_eq!(normalize_host("localhost:8080/admin"), "localhost:8080");
    }

    #[test]
    fn test_normalize_host_malformed_url_keeps_authority() {
        assert_eq!(
            normalize_host("https://internal.acme.com:99999/login"),
            "internal.acme.com:99999"
        );
        assert_eq!(normalize_host("https://bad host.acme.com/x"), "bad host.acme.com");
    }

    #[test]
    fn test_normalize_host_unicode_as_written() {
        assert_eq!(normalize_host("https://Shop.Bücher.example/login"), "shop.bücher.example");
    }

    #[test]
    fn test_normalize_host_drops_userinfo() {
        assert_eq!(normalize_host("https://acme.com@evil.example/"), "evil.example");
    }

    #[test]
    fn test_normalize_host_degenerate_input_is_whole_string() {
        assert_eq!(normalize_host("/just/a/path"), "/just/a/path");
        assert_eq!(normalize_host("file:///etc/passwd"), "file:///etc/passwd");
    }

    #[test]
    fn test_scheme_inside_query_is_not_a_scheme() {
        assert_eq!(normalize_host("app.acme.com/redirect?to=https://evil.example"), "app.acme.com");
    }

    #[test]
    fn test_split_authority() {
        assert_eq!(split_authority("https://app.acme.com/v2?x=1"), ("app.acme.com", "/v2?x=1"));
        assert_eq!(split_authority("app.acme.com"), ("app.acme.com", ""));
    }

    #[test]
    fn test_denylist_applies_to_malformed_url() {
        let cfg = scanner(&[], &["internal"]);
        assert!(!is_in_scope("https://internal.acme.com:99999/login", &cfg));
        assert!(!is_in_scope("https://internal.acme.com/<bad>", &cfg));
    }

    #[test]
    fn test_unicode_host_matches_unicode_entries() {
        let cfg = scanner(&[], &["bücher"]);
        assert!(!is_in_scope("https://shop.bücher.example/login", &cfg));
        let cfg = scanner(&["BÜCHER.example"], &[]);
        assert!(is_in_scope("https://shop.bücher.example/login", &cfg));
    }

    #[test]
    fn test_no_lists_everything_in_scope() {
        let cfg = scanner(&[], &[]);
        assert!(is_in_scope("https://anything.example", &cfg));
        assert!(is_in_scope("not a url at all", &cfg));
        assert!(is_in_scope("", &cfg));
    }

    #[test]
    fn test_denylist_overrides_allowlist() {
        let cfg = scanner(&["acme.com"], &["internal"]);
        assert!(!is_in_scope("https://internal.acme.com", &cfg));
        assert!(is_in_scope("https://app.acme.com", &cfg));
    }

    #[test]
    fn test_allowlist_required_when_present() {
        let cfg = scanner(&["acme.com"], &[]);
        assert!(!is_in_scope("https://evil.example", &cfg));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let cfg = scanner(&["ACME.COM"], &[]);
        assert!(is_in_scope("https://App.Acme.Com/", &cfg));
        let cfg = scanner(&[], &["STAGING"]);
        assert!(!is_in_scope("staging.acme.com/api", &cfg));
    }

    #[test]
    fn test_only_host_is_matched() {
        // "acme" appears in the path only
        let cfg = scanner(&["acme"], &[]);
        assert!(!is_in_scope("https://example.org/acme", &cfg));
    }

    #[test]
    fn test_safe_mode_default_on() {
        assert!(safe_mode_enabled(&ScannerConfig::default()));
    }
}
