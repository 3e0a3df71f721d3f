pub mod profiler;

pub use profiler::{profile_asset, profile_targets};
