//! Synthetic data for demos and tests.
//!
//! Real readings come from an external acquisition pipeline; this module only
//! produces deterministic stand-ins shaped like that pipeline's output.

pub mod sample;

pub use sample::*;
