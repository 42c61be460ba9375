//! Small numeric helpers shared by the scorers: rounding and means.

pub mod stats;

pub use stats::*;
