//! Dual-lock detection: many critical axes *and* many active cross-signals at once.

use std::collections::BTreeMap;

use crate::config::ScoringThresholds;
use crate::domain::{AxisScore, CrossSignalResult, DualLockResult};

pub fn detect(
    axes: &BTreeMap<String, AxisScore>,
    active_signals: &[CrossSignalResult],
    scoring: &ScoringThresholds,
) -> DualLockResult {
    let critical_axes: Vec<String> = axes
        .values()
        .filter(|a| a.score >= scoring.critical_axis)
        .map(|a| a.axis_id.clone())
        .collect();

    let axes_ok = critical_axes.len() >= scoring.dual_lock_min_critical_axes;
    let signals_ok = active_signals.len() >= scoring.dual_lock_min_active_signals;
    let locked = axes_ok && signals_ok;

    let axes_part = format!(
        "{} critical axes (need {})",
        critical_axes.len(),
        scoring.dual_lock_min_critical_axes
    );
    let signals_part = format!(
        "{} active cross-signals (need {})",
        active_signals.len(),
        scoring.dual_lock_min_active_signals
    );
    let reason = match (axes_ok, signals_ok) {
        (true, true) => format!("locked: {axes_part} and {signals_part}"),
        (false, true) => format!("not locked: only {axes_part}"),
        (true, false) => format!("not locked: only {signals_part}"),
        (false, false) => format!("not locked: only {axes_part}; only {signals_part}"),
    };

    DualLockResult {
        locked,
        critical_axes,
        active_signals: active_signals.len(),
        reason,
    }
}
