//! Chronic/structural layer.
//!
//! Pipeline per evaluation:
//!
//! - normalize every reading against its registry threshold (`normalize`)
//! - average per axis (`axis`)
//! - classify the mean of all axes into one of five levels (`classify`)
//! - find axis pairs deteriorating together (`cross_signal`)
//! - check for the dual-lock state (`dual_lock`)
//! - emit alerts for critical axes and for a dual lock

use std::collections::BTreeMap;

use crate::config::EngineConfig;
use crate::domain::{AxisScore, ChronicAlert, ChronicAlertKind, ChronicDiagnosis, DualLockResult, Readings};

pub mod axis;
pub mod classify;
pub mod cross_signal;
pub mod dual_lock;
pub mod normalize;

/// Run the full chronic evaluation for one set of readings.
pub fn evaluate_chronic(config: &EngineConfig, readings: &Readings) -> ChronicDiagnosis {
    let axes: BTreeMap<String, AxisScore> = config
        .axes
        .iter()
        .map(|def| (def.id.clone(), axis::aggregate_axis(def, readings, config)))
        .collect();

    let (overall_score, level) = classify::classify(&axes);
    let cross_signals =
        cross_signal::analyze(&config.cross_signals, &axes, config.scoring.cross_signal_activation);
    let dual_lock = dual_lock::detect(&axes, &cross_signals, &config.scoring);
    let alerts = build_alerts(config, &axes, &dual_lock);

    tracing::info!(
        overall_score,
        level = level.level,
        cross_signals = cross_signals.len(),
        locked = dual_lock.locked,
        "chronic evaluation complete"
    );

    ChronicDiagnosis {
        overall_score,
        level,
        axes,
        cross_signals,
        dual_lock,
        alerts,
    }
}

/// One alert per critical axis (worst first), plus one for a dual lock.
fn build_alerts(
    config: &EngineConfig,
    axes: &BTreeMap<String, AxisScore>,
    dual_lock: &DualLockResult,
) -> Vec<ChronicAlert> {
    let mut critical: Vec<&AxisScore> = axes
        .values()
        .filter(|a| a.score >= config.scoring.critical_axis)
        .collect();
    critical.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut alerts: Vec<ChronicAlert> = critical
        .into_iter()
        .map(|a| ChronicAlert {
            kind: ChronicAlertKind::CriticalAxis,
            axis_id: Some(a.axis_id.clone()),
            score: a.score,
            message: format!("{} at critical severity {:.2}", a.name, a.score),
            top_gauges: a.gauges.iter().take(config.scoring.alert_top_gauges).cloned().collect(),
        })
        .collect();

    if dual_lock.locked {
        alerts.push(ChronicAlert {
            kind: ChronicAlertKind::DualLock,
            axis_id: None,
            score: dual_lock.critical_axes.len() as f64,
            message: format!("Dual lock engaged ({})", dual_lock.reason),
            top_gauges: Vec::new(),
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Readings putting every registry indicator at its worst threshold end.
    fn worst_case(config: &EngineConfig) -> Readings {
        config
            .indicators
            .iter()
            .map(|d| {
                let worst = if d.threshold.invert { d.threshold.max } else { d.threshold.min };
                (d.id.clone(), Some(worst))
            })
            .collect()
    }

    #[test]
    fn empty_readings_stay_neutral_and_lock() {
        let config = EngineConfig::default();
        let diagnosis = evaluate_chronic(&config, &Readings::new());
        assert_eq!(diagnosis.overall_score, 2.5);
        assert_eq!(diagnosis.level.level, 4);
        assert!(diagnosis.axes.values().all(|a| a.count == 0 && a.score == 2.5));
        // Every axis is neutral 2.5, so all pairs are active and every axis is critical.
        assert_eq!(diagnosis.cross_signals.len(), 15);
        assert!(diagnosis.dual_lock.locked);
    }

    #[test]
    fn worst_case_locks_and_alerts() {
        let config = EngineConfig::default();
        let diagnosis = evaluate_chronic(&config, &worst_case(&config));
        assert_eq!(diagnosis.overall_score, 5.0);
        assert_eq!(diagnosis.level.name, "crisis");
        assert!(diagnosis.dual_lock.locked);

        let axis_alerts = diagnosis
            .alerts
            .iter()
            .filter(|a| a.kind == ChronicAlertKind::CriticalAxis)
            .count();
        assert_eq!(axis_alerts, 9);
        assert_eq!(diagnosis.alerts.last().unwrap().kind, ChronicAlertKind::DualLock);
        assert!(diagnosis.alerts[0].top_gauges.len() <= 3);
    }

    #[test]
    fn healthy_readings_are_stable() {
        let config = EngineConfig::default();
        let readings: Readings = config
            .indicators
            .iter()
            .map(|d| {
                let best = if d.threshold.invert { d.threshold.min } else { d.threshold.max };
                (d.id.clone(), Some(best))
            })
            .collect();
        let diagnosis = evaluate_chronic(&config, &readings);
        assert_eq!(diagnosis.overall_score, 0.0);
        assert_eq!(diagnosis.level.level, 1);
        assert!(diagnosis.cross_signals.is_empty());
        assert!(diagnosis.alerts.is_empty());
        assert!(!diagnosis.dual_lock.locked);
    }
}
