//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - configuration records (`IndicatorDefinition`, `AxisDefinition`, `CrossSignalDefinition`)
//! - per-call inputs (`Readings`, `CrossCheck`)
//! - layer outputs (`ChronicDiagnosis`, `AcuteDiagnosis`, `LayerVerdict`)

pub mod types;

pub use types::*;
