//! Map one raw reading onto the 0..5 severity scale.

use crate::config::EngineConfig;
use crate::domain::Threshold;
use crate::math::round2;

/// Severity reported when a threshold carries no signal, or an axis has no data.
pub const NEUTRAL_SEVERITY: f64 = 2.5;
pub const MAX_SEVERITY: f64 = 5.0;

/// Normalize `value` against `threshold`.
///
/// Non-inverted: `min` scores 5 (worst) and `max` scores 0. Inverted flips that.
/// Values past either end are clamped. A flat threshold (`min == max`) scores neutral.
pub fn normalize(value: f64, threshold: &Threshold) -> f64 {
    if threshold.max == threshold.min {
        return NEUTRAL_SEVERITY;
    }
    let ratio = (value - threshold.min) / (threshold.max - threshold.min);
    let position = if threshold.invert { ratio } else { 1.0 - ratio };
    round2(position.clamp(0.0, 1.0) * MAX_SEVERITY)
}

/// Normalize a reading for a registry indicator.
///
/// Returns `None` when the id has no registry entry or the value is not finite;
/// callers treat that as "unavailable".
pub fn normalize_indicator(config: &EngineConfig, id: &str, value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let def = config.indicator(id)?;
    Some(normalize(value, &def.threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(min: f64, max: f64, invert: bool) -> Threshold {
        Threshold { min, max, invert }
    }

    #[test]
    fn endpoints_non_inverted() {
        let t = band(-2.0, 5.0, false);
        assert_eq!(normalize(-2.0, &t), 5.0);
        assert_eq!(normalize(5.0, &t), 0.0);
        assert_eq!(normalize(1.5, &t), 2.5);
    }

    #[test]
    fn endpoints_inverted() {
        let t = band(1.0, 8.0, true);
        assert_eq!(normalize(1.0, &t), 0.0);
        assert_eq!(normalize(8.0, &t), 5.0);
    }

    #[test]
    fn clamps_outside_band() {
        let t = band(0.0, 10.0, false);
        assert_eq!(normalize(-100.0, &t), 5.0);
        assert_eq!(normalize(100.0, &t), 0.0);
    }

    #[test]
    fn flat_threshold_is_neutral() {
        let t = band(3.0, 3.0, true);
        assert_eq!(normalize(-1e9, &t), NEUTRAL_SEVERITY);
        assert_eq!(normalize(3.0, &t), NEUTRAL_SEVERITY);
    }

    #[test]
    fn monotone_in_both_directions() {
        let plain = band(-5.0, 6.0, false);
        let inverted = band(-5.0, 6.0, true);
        let mut prev_plain = f64::INFINITY;
        let mut prev_inv = f64::NEG_INFINITY;
        for i in 0..=110 {
            let v = -5.0 + i as f64 * 0.1;
            let s = normalize(v, &plain);
            let si = normalize(v, &inverted);
            assert!(s <= prev_plain, "non-inverted increased at {v}");
            assert!(si >= prev_inv, "inverted decreased at {v}");
            assert!((0.0..=5.0).contains(&s) && (0.0..=5.0).contains(&si));
            prev_plain = s;
            prev_inv = si;
        }
    }

    #[test]
    fn unknown_or_non_finite_is_unavailable() {
        let config = EngineConfig::default();
        assert_eq!(normalize_indicator(&config, "not_a_gauge", 1.0), None);
        assert_eq!(normalize_indicator(&config, "gdp_growth", f64::NAN), None);
        assert_eq!(normalize_indicator(&config, "gdp_growth", 5.0), Some(0.0));
    }
}
