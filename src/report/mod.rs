//! Reporting utilities: plain-text rendering of diagnosis reports for the terminal.

pub mod format;

pub use format::*;
