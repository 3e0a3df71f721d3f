pub mod commands;
pub mod run;
pub mod search;
pub mod validate;

pub use commands::{Cli, Commands};
