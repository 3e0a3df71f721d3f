pub mod finding;
pub mod plan;
pub mod profile;
pub mod report;

pub use finding::*;
pub use plan::*;
pub use profile::*;
pub use report::*;
