//! Input/output helpers.
//!
//! - reading-file ingest + validation (`readings`)
//! - diagnosis report JSON read/write (`report`)

pub mod readings;
pub mod report;

pub use readings::*;
pub use report::*;
