//! Per-axis aggregation of normalized severities.

use crate::chronic::normalize::{NEUTRAL_SEVERITY, normalize_indicator};
use crate::config::EngineConfig;
use crate::domain::{AxisDefinition, AxisScore, GaugeSeverity, Readings, reading};
use crate::math::{mean_or, round2};

/// Score one axis from the current readings.
///
/// Members without a reading or without a registry entry are skipped. An axis
/// with no contributing member scores neutral (2.5), not zero, so that missing
/// data never reads as "healthy".
pub fn aggregate_axis(axis: &AxisDefinition, readings: &Readings, config: &EngineConfig) -> AxisScore {
    let mut gauges: Vec<GaugeSeverity> = axis
        .members
        .iter()
        .filter_map(|id| {
            let raw = reading(readings, id)?;
            let severity = normalize_indicator(config, id, raw)?;
            Some(GaugeSeverity {
                id: id.clone(),
                raw,
                severity,
            })
        })
        .collect();

    gauges.sort_by(|a, b| b.severity.total_cmp(&a.severity));

    let severities: Vec<f64> = gauges.iter().map(|g| g.severity).collect();
    let score = round2(mean_or(&severities, NEUTRAL_SEVERITY));

    tracing::debug!(axis = %axis.id, score, count = gauges.len(), "axis aggregated");

    AxisScore {
        axis_id: axis.id.clone(),
        name: axis.name.clone(),
        score,
        count: gauges.len(),
        gauges,
    }
}
