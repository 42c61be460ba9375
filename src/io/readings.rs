//! Reading-file ingest and validation.
//!
//! A reading file is a flat JSON object of indicator id to number (or `null`):
//!
//! ```json
//! { "gdp_growth": 1.2, "cpi_yoy": 4.1, "reserves_mom": null }
//! ```
//!
//! Validation never fails the whole file for a bad entry. Unknown ids are
//! dropped, and non-finite or physically impossible values become "missing";
//! each is reported as a `RejectedReading`.

use std::fs::File;
use std::path::Path;

use crate::config::EngineConfig;
use crate::domain::Readings;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedReading {
    pub id: String,
    pub value: f64,
    pub reason: String,
}

/// Validation output: cleaned readings + what was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReadings {
    pub readings: Readings,
    pub rejected: Vec<RejectedReading>,
    /// Entries with an accepted numeric value.
    pub usable: usize,
}

/// Parse a reading file without validating it.
pub fn load_readings(path: &Path) -> Result<Readings, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open readings '{}': {e}", path.display())))?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid readings JSON '{}': {e}", path.display())))
}

/// Check each entry against the registry.
pub fn validate_readings(raw: Readings, config: &EngineConfig) -> ValidatedReadings {
    let mut readings = Readings::new();
    let mut rejected = Vec::new();

    for (id, value) in raw {
        if !config.knows(&id) {
            tracing::warn!(id = %id, "unknown indicator id ignored");
            rejected.push(RejectedReading {
                id,
                value: value.unwrap_or(f64::NAN),
                reason: "unknown indicator id".to_string(),
            });
            continue;
        }

        let Some(v) = value else {
            readings.insert(id, None);
            continue;
        };

        let reason = if !v.is_finite() {
            Some("non-finite value".to_string())
        } else {
            config
                .indicator(&id)
                .filter(|def| !def.hard_range.contains(v))
                .map(|def| {
                    format!(
                        "outside hard range [{}, {}] {}",
                        def.hard_range.min, def.hard_range.max, def.unit
                    )
                })
        };

        match reason {
            Some(reason) => {
                tracing::warn!(id = %id, value = v, reason = %reason, "reading rejected");
                rejected.push(RejectedReading {
                    id: id.clone(),
                    value: v,
                    reason,
                });
                readings.insert(id, None);
            }
            None => {
                readings.insert(id, Some(v));
            }
        }
    }

    let usable = readings.values().filter(|v| v.is_some()).count();
    ValidatedReadings {
        readings,
        rejected,
        usable,
    }
}

/// Load and validate a reading file. A file with nothing usable is an error (exit code 3).
pub fn load_validated(path: &Path, config: &EngineConfig) -> Result<ValidatedReadings, AppError> {
    let validated = validate_readings(load_readings(path)?, config);
    if validated.usable == 0 {
        return Err(AppError::no_data(format!(
            "No usable readings in '{}' ({} rejected).",
            path.display(),
            validated.rejected.len()
        )));
    }
    Ok(validated)
}
