//! Layer priority resolution.
//!
//! The acute and chronic layers are never blended numerically. The final
//! verdict picks one of four outcomes in a fixed order:
//!
//! 1. acute layer missing or without enough data -> `chronic-only`
//! 2. any acute alert (level >= 1)               -> `confirmed-acute` (master alarm)
//! 3. chronic level >= 3                         -> `chronic-hold`
//! 4. otherwise                                  -> `normal`
//!
//! An independent cross-check that reports divergence only annotates the
//! label and raises `satellite_hold`; it never changes the priority.

use crate::domain::{AcuteDiagnosis, CrossCheck, LayerPriority, LayerVerdict, Level};

/// Chronic level at which the chronic layer alone raises a hold.
pub const CHRONIC_HOLD_LEVEL: u8 = 3;

pub fn resolve(acute: Option<&AcuteDiagnosis>, chronic: &Level, cross_check: Option<&CrossCheck>) -> LayerVerdict {
    let chronic_level = chronic.level;
    let acute_level = acute.map(|a| a.alert_level);
    let chronic_severe = chronic_level >= CHRONIC_HOLD_LEVEL;

    let (priority, master_alarm, hold, mut label) = match acute {
        Some(a) if !a.has_data => (
            LayerPriority::ChronicOnly,
            false,
            chronic_severe,
            format!(
                "Insufficient acute data; chronic level {} ({})",
                chronic_level, chronic.name
            ),
        ),
        None => (
            LayerPriority::ChronicOnly,
            false,
            chronic_severe,
            format!(
                "Acute layer unavailable; chronic level {} ({})",
                chronic_level, chronic.name
            ),
        ),
        Some(a) if a.alert_level >= 1 => (
            LayerPriority::ConfirmedAcute,
            true,
            false,
            format!("Acute alert confirmed: {}", a.label),
        ),
        Some(_) if chronic_severe => (
            LayerPriority::ChronicHold,
            false,
            true,
            format!(
                "Chronic hold: level {} ({}) without acute confirmation",
                chronic_level, chronic.name
            ),
        ),
        Some(_) => (LayerPriority::Normal, false, false, "Normal".to_string()),
    };

    let satellite_hold = cross_check.is_some_and(|c| c.diverged);
    if let Some(check) = cross_check.filter(|c| c.diverged) {
        label.push_str(" [divergence detected");
        if let Some(note) = check.note.as_deref().filter(|n| !n.is_empty()) {
            label.push_str(": ");
            label.push_str(note);
        }
        label.push(']');
    }

    tracing::debug!(priority = priority.tag(), master_alarm, hold, satellite_hold, "verdict resolved");

    LayerVerdict {
        master_alarm,
        hold,
        satellite_hold,
        priority,
        label,
        acute_level,
        chronic_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chronic::classify::level_for;
    use crate::domain::{BlockadeResult, BlockadeStatus};

    fn acute(level: u8, has_data: bool) -> AcuteDiagnosis {
        AcuteDiagnosis {
            alert_level: level,
            label: crate::acute::alert::alert_label(level).to_string(),
            input_stars: usize::from(level),
            output_stars: 0,
            input_warnings: 0,
            sustained: false,
            simultaneous: false,
            escalated: false,
            peripheral_warning: false,
            blockade: BlockadeResult {
                cam_blocked: false,
                dlt_blocked: false,
                dual_blockade: false,
                cam_status: BlockadeStatus::Normal,
                dlt_status: BlockadeStatus::Normal,
            },
            has_data,
            available: if has_data { 7 } else { 1 },
            gauges: vec![],
        }
    }

    #[test]
    fn no_data_routes_to_chronic_only() {
        let v = resolve(Some(&acute(3, false)), &level_for(2.2), None);
        assert_eq!(v.priority, LayerPriority::ChronicOnly);
        assert!(v.hold);
        assert!(!v.master_alarm);
        assert!(v.label.contains("Insufficient acute data"));

        let v = resolve(Some(&acute(0, false)), &level_for(1.0), None);
        assert!(!v.hold);
    }

    #[test]
    fn missing_acute_layer_is_chronic_only() {
        let v = resolve(None, &level_for(4.0), None);
        assert_eq!(v.priority, LayerPriority::ChronicOnly);
        assert_eq!(v.acute_level, None);
        assert!(v.hold);
    }

    #[test]
    fn any_acute_signal_preempts_chronic() {
        let v = resolve(Some(&acute(1, true)), &level_for(0.5), None);
        assert_eq!(v.priority, LayerPriority::ConfirmedAcute);
        assert!(v.master_alarm);
        assert_eq!(v.acute_level, Some(1));
        assert_eq!(v.chronic_level, 1);
    }

    #[test]
    fn severe_chronic_without_acute_holds() {
        let v = resolve(Some(&acute(0, true)), &level_for(2.0), None);
        assert_eq!(v.priority, LayerPriority::ChronicHold);
        assert!(v.hold && !v.master_alarm);

        let v = resolve(Some(&acute(0, true)), &level_for(1.9), None);
        assert_eq!(v.priority, LayerPriority::Normal);
        assert!(!v.hold);
    }

    #[test]
    fn divergence_annotates_without_changing_priority() {
        let check = CrossCheck {
            diverged: true,
            note: Some("satellite nightlights".to_string()),
        };
        let v = resolve(Some(&acute(0, true)), &level_for(1.0), Some(&check));
        assert_eq!(v.priority, LayerPriority::Normal);
        assert!(v.satellite_hold);
        assert_eq!(v.label, "Normal [divergence detected: satellite nightlights]");

        let calm = CrossCheck::default();
        let v = resolve(Some(&acute(0, true)), &level_for(1.0), Some(&calm));
        assert!(!v.satellite_hold);
        assert_eq!(v.label, "Normal");
    }
}
