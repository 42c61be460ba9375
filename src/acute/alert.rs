//! Acute alert level, continuity and simultaneity flags.
//!
//! The alert level is driven by critical *input* gauges only; output gauges
//! feed the peripheral-warning and simultaneity flags but never raise the level.

use crate::domain::{AcuteGroup, ScoredAcuteGauge};

pub const ALERT_LABELS: [&str; 4] = ["stage0-normal", "stage1-caution", "stage2-alert", "stage3-crisis"];

/// Critical/caution counts for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarCounts {
    pub input_stars: usize,
    pub output_stars: usize,
    pub input_warnings: usize,
    pub available: usize,
}

impl StarCounts {
    pub fn from_gauges(gauges: &[ScoredAcuteGauge]) -> Self {
        let mut counts = StarCounts::default();
        for g in gauges {
            let Some(score) = g.score else { continue };
            counts.available += 1;
            match (g.group, score) {
                (AcuteGroup::Input, 2) => counts.input_stars += 1,
                (AcuteGroup::Input, 1) => counts.input_warnings += 1,
                (AcuteGroup::Output, 2) => counts.output_stars += 1,
                _ => {}
            }
        }
        counts
    }
}

/// Staircase: 3+ critical inputs -> 3, 2 -> 2, 1 -> 1, none -> 0.
pub fn alert_level(input_stars: usize) -> u8 {
    match input_stars {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => 3,
    }
}

pub fn alert_label(level: u8) -> &'static str {
    ALERT_LABELS[usize::from(level.min(3))]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertJudgement {
    pub alert_level: u8,
    pub label: &'static str,
    pub peripheral_warning: bool,
    pub sustained: bool,
    pub simultaneous: bool,
    pub escalated: bool,
}

/// Judge the current period, optionally against the immediately preceding one.
///
/// `sustained` needs a previous period: a single-period spike never qualifies.
pub fn judge(current: &StarCounts, previous: Option<&StarCounts>) -> AlertJudgement {
    let level = alert_level(current.input_stars);
    let peripheral_warning = level == 0 && current.output_stars >= 1;
    let sustained = previous.is_some_and(|p| current.input_stars >= 1 && p.input_stars >= 1);
    let simultaneous = current.input_stars + current.output_stars >= 2;

    AlertJudgement {
        alert_level: level,
        label: alert_label(level),
        peripheral_warning,
        sustained,
        simultaneous,
        escalated: sustained && simultaneous,
    }
}
