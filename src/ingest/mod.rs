pub mod source;
pub mod summarize;

pub use source::{parse_hacktivity, HacktivityFeed, LocalReportFile, ReportSource};
pub use summarize::summarize_reports;
