//! Engine configuration: gauge registry, axis and cross-signal tables, scoring thresholds.
//!
//! The configuration is built once at startup (built-in defaults or a JSON
//! override file), validated, and then shared read-only behind an `Arc`.
//! Nothing in the engine mutates it afterwards.

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AcuteGauge, AxisDefinition, CrossSignalDefinition, IndicatorDefinition};
use crate::error::AppError;

pub mod defaults;

/// Environment variable naming a config file used when `--config` is absent.
pub const CONFIG_ENV: &str = "GAUGE_CONFIG";

/// Numeric cut-offs used by the chronic and acute layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    /// Both axes of a pair must be at or above this for the pair to be active.
    pub cross_signal_activation: f64,
    /// Axis score at or above which the axis counts as critical.
    pub critical_axis: f64,
    pub dual_lock_min_critical_axes: usize,
    pub dual_lock_min_active_signals: usize,
    /// Minimum number of acute gauges with readings for the acute layer to count.
    pub acute_min_available: usize,
    /// Worst gauges attached to a critical-axis alert.
    pub alert_top_gauges: usize,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            cross_signal_activation: 2.0,
            critical_axis: 2.5,
            dual_lock_min_critical_axes: 3,
            dual_lock_min_active_signals: 5,
            acute_min_available: 3,
            alert_top_gauges: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub indicators: Vec<IndicatorDefinition>,
    pub axes: Vec<AxisDefinition>,
    pub cross_signals: Vec<CrossSignalDefinition>,
    #[serde(default)]
    pub scoring: ScoringThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indicators: defaults::default_indicators(),
            axes: defaults::default_axes(),
            cross_signals: defaults::default_cross_signals(),
            scoring: ScoringThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path)
            .map_err(|e| AppError::input(format!("Failed to open config '{}': {e}", path.display())))?;
        let config: EngineConfig = serde_json::from_reader(file)
            .map_err(|e| AppError::input(format!("Invalid config JSON '{}': {e}", path.display())))?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            indicators = config.indicators.len(),
            axes = config.axes.len(),
            cross_signals = config.cross_signals.len(),
            "loaded engine config"
        );
        Ok(config)
    }

    /// Resolve the config the binary should use.
    ///
    /// Priority: explicit path > `GAUGE_CONFIG` (from the environment or `.env`) > built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            return Self::from_json_file(path);
        }
        dotenvy::dotenv().ok();
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_json_file(&PathBuf::from(path.trim())),
            _ => Ok(Self::default()),
        }
    }

    pub fn indicator(&self, id: &str) -> Option<&IndicatorDefinition> {
        self.indicators.iter().find(|d| d.id == id)
    }

    pub fn axis(&self, id: &str) -> Option<&AxisDefinition> {
        self.axes.iter().find(|a| a.id == id)
    }

    /// True if `id` is either a registry indicator or one of the acute gauges.
    pub fn knows(&self, id: &str) -> bool {
        self.indicator(id).is_some() || AcuteGauge::from_id(id).is_some()
    }

    /// Check structural consistency of the tables.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut ids = HashSet::new();
        for def in &self.indicators {
            if !ids.insert(def.id.as_str()) {
                return Err(AppError::input(format!("Duplicate indicator id `{}`.", def.id)));
            }
            let t = &def.threshold;
            if !(t.min.is_finite() && t.max.is_finite()) {
                return Err(AppError::input(format!(
                    "Indicator `{}` has a non-finite threshold.",
                    def.id
                )));
            }
            let h = &def.hard_range;
            if !(h.min.is_finite() && h.max.is_finite()) || h.min > h.max {
                return Err(AppError::input(format!(
                    "Indicator `{}` has an invalid hard range [{}, {}].",
                    def.id, h.min, h.max
                )));
            }
            if t.min == t.max {
                tracing::warn!(id = %def.id, "flat threshold; indicator will always score neutral");
            }
        }

        let mut axis_ids = HashSet::new();
        for axis in &self.axes {
            if !axis_ids.insert(axis.id.as_str()) {
                return Err(AppError::input(format!("Duplicate axis id `{}`.", axis.id)));
            }
            for member in &axis.members {
                if self.indicator(member).is_none() {
                    return Err(AppError::input(format!(
                        "Axis `{}` references unknown indicator `{member}`.",
                        axis.id
                    )));
                }
            }
        }

        let mut pair_ids = HashSet::new();
        let mut pairs = HashSet::new();
        for signal in &self.cross_signals {
            if !pair_ids.insert(signal.id.as_str()) {
                return Err(AppError::input(format!("Duplicate cross-signal id `{}`.", signal.id)));
            }
            let [a, b] = &signal.axes;
            for axis in [a, b] {
                if !axis_ids.contains(axis.as_str()) {
                    return Err(AppError::input(format!(
                        "Cross-signal `{}` references unknown axis `{axis}`.",
                        signal.id
                    )));
                }
            }
            if a == b {
                return Err(AppError::input(format!(
                    "Cross-signal `{}` pairs axis `{a}` with itself.",
                    signal.id
                )));
            }
            let key = if a < b { (a.as_str(), b.as_str()) } else { (b.as_str(), a.as_str()) };
            if !pairs.insert(key) {
                return Err(AppError::input(format!(
                    "Cross-signal `{}` duplicates the pair {{{a}, {b}}}.",
                    signal.id
                )));
            }
        }

        Ok(())
    }
}
