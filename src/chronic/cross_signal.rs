//! Cross-signal analysis: pairs of axes deteriorating together.

use std::collections::{BTreeMap, HashSet};

use crate::chronic::classify::level_for;
use crate::chronic::normalize::NEUTRAL_SEVERITY;
use crate::domain::{AxisScore, CrossSignalDefinition, CrossSignalResult};
use crate::math::round2;

fn axis_score(axes: &BTreeMap<String, AxisScore>, id: &str) -> f64 {
    axes.get(id).map(|a| a.score).unwrap_or(NEUTRAL_SEVERITY)
}

/// Evaluate every pair and return the active ones, most severe first.
///
/// A pair is active when both axis scores are `>= activation`. An axis missing
/// from `axes` scores neutral. A pair whose unordered axis set was already seen
/// is skipped.
pub fn analyze(
    definitions: &[CrossSignalDefinition],
    axes: &BTreeMap<String, AxisScore>,
    activation: f64,
) -> Vec<CrossSignalResult> {
    let mut seen = HashSet::new();
    let mut active = Vec::new();

    for def in definitions {
        let [a, b] = &def.axes;
        let key = if a <= b { (a.as_str(), b.as_str()) } else { (b.as_str(), a.as_str()) };
        if !seen.insert(key) {
            tracing::warn!(id = %def.id, "duplicate cross-signal pair skipped");
            continue;
        }

        let score_a = axis_score(axes, a);
        let score_b = axis_score(axes, b);
        if score_a < activation || score_b < activation {
            continue;
        }

        let combined = round2((score_a + score_b) / 2.0);
        active.push(CrossSignalResult {
            id: def.id.clone(),
            name: def.name.clone(),
            axes: def.axes.clone(),
            scores: [score_a, score_b],
            combined,
            level: level_for(combined),
        });
    }

    active.sort_by(|x, y| y.combined.total_cmp(&x.combined));
    active
}
