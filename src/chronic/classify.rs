//! Composite chronic score and its 5-level classification.

use std::collections::BTreeMap;

use crate::chronic::normalize::NEUTRAL_SEVERITY;
use crate::domain::{AxisScore, Level};
use crate::math::{mean_or, round2};

/// `(level, name, color, upper bound exclusive)`, ascending.
const LEVEL_BANDS: [(u8, &str, &str, f64); 5] = [
    (1, "stable", "#22c55e", 1.5),
    (2, "caution", "#84cc16", 2.0),
    (3, "watch", "#eab308", 2.5),
    (4, "severe", "#f97316", 3.5),
    (5, "crisis", "#ef4444", 5.0),
];

/// Map a 0..5 score to its level. Scores at or past the last bound fall into the last band.
pub fn level_for(score: f64) -> Level {
    let (level, name, color, _) = LEVEL_BANDS
        .iter()
        .copied()
        .find(|&(_, _, _, upper)| score < upper)
        .unwrap_or(LEVEL_BANDS[LEVEL_BANDS.len() - 1]);
    Level {
        level,
        name: name.to_string(),
        color: color.to_string(),
    }
}

/// Mean of all axis scores (neutral when there are no axes).
pub fn overall_score(axes: &BTreeMap<String, AxisScore>) -> f64 {
    let scores: Vec<f64> = axes.values().map(|a| a.score).collect();
    round2(mean_or(&scores, NEUTRAL_SEVERITY))
}

pub fn classify(axes: &BTreeMap<String, AxisScore>) -> (f64, Level) {
    let score = overall_score(axes);
    (score, level_for(score))
}
