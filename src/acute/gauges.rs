//! Scoring rules for the seven acute gauges.
//!
//! Each gauge maps its reading to 0 (normal), 1 (caution) or 2 (critical).
//! Branches are checked top to bottom; the first match wins.

use crate::domain::{AcuteGauge, Readings, ScoredAcuteGauge, reading};

/// Sign of a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
    Flat,
}

impl Direction {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Direction::Rising
        } else if change < 0.0 {
            Direction::Falling
        } else {
            Direction::Flat
        }
    }
}

pub const GRADE_NORMAL: &str = "normal";
pub const GRADE_CAUTION: &str = "caution";
pub const GRADE_CRITICAL: &str = "critical";
pub const GRADE_MISSING: &str = "N/A";

pub fn grade_label(score: Option<u8>) -> &'static str {
    match score {
        Some(0) => GRADE_NORMAL,
        Some(1) => GRADE_CAUTION,
        Some(_) => GRADE_CRITICAL,
        None => GRADE_MISSING,
    }
}

impl AcuteGauge {
    /// Score a finite reading in the gauge's configured unit.
    pub fn score(self, value: f64) -> u8 {
        match self {
            // Balance in currency units; a surplus is healthy.
            AcuteGauge::CurrentAccount => {
                if value > 0.0 {
                    0
                } else if value >= -50.0 {
                    1
                } else {
                    2
                }
            }
            AcuteGauge::ReservesMom => {
                if value > -5.0 {
                    0
                } else if value >= -10.0 {
                    1
                } else {
                    2
                }
            }
            // Depreciation in %. Any appreciation is normal regardless of size.
            AcuteGauge::ExchangeRateMom => match Direction::of(value) {
                Direction::Falling => 0,
                Direction::Rising | Direction::Flat => {
                    if value < 3.0 {
                        0
                    } else if value <= 7.0 {
                        1
                    } else {
                        2
                    }
                }
            },
            AcuteGauge::RateChangeBp => {
                if value < 10.0 {
                    0
                } else if value <= 30.0 {
                    1
                } else {
                    2
                }
            }
            AcuteGauge::CpiYoy => {
                if value < 3.0 {
                    0
                } else if value <= 5.0 {
                    1
                } else {
                    2
                }
            }
            // A strong rally is only a caution; only a deep fall is critical.
            AcuteGauge::EquityMom => match Direction::of(value) {
                Direction::Rising if value >= 5.0 => 1,
                Direction::Falling if value.abs() >= 10.0 => 2,
                _ => 0,
            },
            AcuteGauge::RetailSalesMom => {
                if value > -2.0 {
                    0
                } else if value >= -5.0 {
                    1
                } else {
                    2
                }
            }
        }
    }
}

/// Score one gauge from a reading set. Missing or non-finite readings are unavailable.
pub fn score_gauge(gauge: AcuteGauge, readings: &Readings) -> ScoredAcuteGauge {
    let value = reading(readings, gauge.id()).filter(|v| v.is_finite());
    let score = value.map(|v| gauge.score(v));
    ScoredAcuteGauge {
        gauge,
        group: gauge.group(),
        value,
        score,
        grade: grade_label(score).to_string(),
        available: score.is_some(),
    }
}

pub fn score_all(readings: &Readings) -> Vec<ScoredAcuteGauge> {
    AcuteGauge::ALL
        .iter()
        .map(|&gauge| score_gauge(gauge, readings))
        .collect()
}
