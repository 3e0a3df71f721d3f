pub mod scope;

pub use scope::{is_in_scope, normalize_host, safe_mode_enabled, split_authority};
