//! Acute-shock layer.
//!
//! Seven fixed gauges, split into a leading input group (CAM) and a lagging
//! output group (DLT), are scored 0/1/2 each. From the counts of critical
//! gauges we derive:
//!
//! - a 0..3 alert level (input group only)
//! - continuity (`sustained`) and co-occurrence (`simultaneous`) flags
//! - a per-group two-period blockade state
//!
//! Every call scores its inputs fresh; the previous period, when supplied, is
//! re-scored from its raw readings. No state is kept between calls.

use crate::config::EngineConfig;
use crate::domain::{AcuteDiagnosis, Readings};

pub mod alert;
pub mod blockade;
pub mod gauges;

use alert::StarCounts;

/// Evaluate the acute layer for the current period, optionally against the previous one.
pub fn evaluate_acute(config: &EngineConfig, current: &Readings, previous: Option<&Readings>) -> AcuteDiagnosis {
    let gauges = gauges::score_all(current);
    let counts = StarCounts::from_gauges(&gauges);
    let previous_counts = previous.map(|p| StarCounts::from_gauges(&gauges::score_all(p)));

    let judgement = alert::judge(&counts, previous_counts.as_ref());
    let blockade = blockade::judge(&counts, previous_counts.as_ref());
    let has_data = counts.available >= config.scoring.acute_min_available;

    for g in &gauges {
        tracing::debug!(gauge = g.gauge.id(), value = ?g.value, grade = %g.grade, "acute gauge scored");
    }
    tracing::info!(
        alert_level = judgement.alert_level,
        input_stars = counts.input_stars,
        output_stars = counts.output_stars,
        available = counts.available,
        has_data,
        "acute evaluation complete"
    );

    AcuteDiagnosis {
        alert_level: judgement.alert_level,
        label: judgement.label.to_string(),
        input_stars: counts.input_stars,
        output_stars: counts.output_stars,
        input_warnings: counts.input_warnings,
        sustained: judgement.sustained,
        simultaneous: judgement.simultaneous,
        escalated: judgement.escalated,
        peripheral_warning: judgement.peripheral_warning,
        blockade,
        has_data,
        available: counts.available,
        gauges,
    }
}
