pub mod formatter;
pub mod writer;

pub use formatter::{format_executive_summary, render_report};
pub use writer::{slugify, write_reports};
