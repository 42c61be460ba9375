//! Rounding and averaging.
//!
//! Every severity the engine reports is rounded to two decimals so that JSON
//! output and threshold comparisons agree with what a reader sees.

/// Round to two decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Arithmetic mean, falling back to `default` for an empty slice.
pub fn mean_or(values: &[f64], default: f64) -> f64 {
    mean(values).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_basic() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(-0.004), -0.0);
    }

    #[test]
    fn mean_handles_empty() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean_or(&[], 2.5), 2.5);
        assert!((mean_or(&[1.0, 2.0, 4.0], 0.0) - 7.0 / 3.0).abs() < 1e-12);
    }
}
