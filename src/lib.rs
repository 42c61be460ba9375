//! `econ-gauge` library crate.
//!
//! Two-layer economic diagnosis: a chronic layer scores structural indicators
//! on a 0..5 severity scale, and an acute layer watches seven fast-moving
//! gauges for shocks. The `verdict` module combines them by priority, never by
//! averaging.
//!
//! The binary (`gauge`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the engine can be embedded by other services
//! - the library never installs a logging subscriber (only the binary does)

pub mod acute;
pub mod app;
pub mod chronic;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
pub mod verdict;

pub use config::EngineConfig;
pub use engine::{DiagnosisEngine, DiagnosisReport, DiagnosisRequest};
