//! Shared diagnosis pipeline used by the `diagnose` and `batch` commands.
//!
//! Workflow: reading files -> validation -> engine (chronic + acute + verdict).
//!
//! The command handlers in `app` only deal with presentation (printing and
//! exporting); everything that produces a `DiagnosisReport` lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::domain::CrossCheck;
use crate::engine::{DiagnosisEngine, DiagnosisReport, DiagnosisRequest};
use crate::error::AppError;
use crate::io::{RejectedReading, load_validated, load_readings, validate_readings};

/// Inputs of a single `gauge diagnose` run.
#[derive(Debug, Clone)]
pub struct DiagnoseOptions {
    pub readings: PathBuf,
    pub previous: Option<PathBuf>,
    pub profile_id: String,
    pub period: String,
    pub acute: bool,
    pub cross_check: Option<CrossCheck>,
}

/// All computed outputs of a single `gauge diagnose` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub report: DiagnosisReport,
    pub rejected: Vec<RejectedReading>,
    pub previous_rejected: Vec<RejectedReading>,
}

/// Default period label: the current calendar month.
pub fn current_period() -> String {
    chrono::Local::now().format("%Y-%m").to_string()
}

pub fn build_engine(config: Arc<EngineConfig>, acute: bool) -> DiagnosisEngine {
    if acute {
        DiagnosisEngine::new(config)
    } else {
        DiagnosisEngine::without_acute(config)
    }
}

/// Execute one diagnosis from reading files.
pub fn run_diagnose(config: Arc<EngineConfig>, options: &DiagnoseOptions) -> Result<RunOutput, AppError> {
    // 1) Current period must carry at least one usable value.
    let current = load_validated(&options.readings, &config)?;

    // 2) The previous period is optional context; an empty one is only logged.
    let previous = match &options.previous {
        Some(path) => {
            let validated = validate_readings(load_readings(path)?, &config);
            if validated.usable == 0 {
                tracing::warn!(path = %path.display(), "previous period has no usable readings");
            }
            Some(validated)
        }
        None => None,
    };

    // 3) Build the request and run both layers.
    let mut request = DiagnosisRequest::new(&options.profile_id, &options.period, current.readings);
    if let Some(prev) = &previous {
        request = request.with_previous(prev.readings.clone());
    }
    if let Some(check) = &options.cross_check {
        request = request.with_cross_check(check.clone());
    }

    let engine = build_engine(config, options.acute);
    let report = engine.diagnose(&request);

    Ok(RunOutput {
        report,
        rejected: current.rejected,
        previous_rejected: previous.map(|p| p.rejected).unwrap_or_default(),
    })
}

/// Profile id for a batch file: its stem, or the full path when there is none.
fn profile_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Diagnose many reading files. Files are read sequentially, evaluated in parallel.
///
/// A file with nothing usable aborts the batch with exit code 3, naming the file.
pub fn run_batch(
    config: Arc<EngineConfig>,
    paths: &[PathBuf],
    period: &str,
) -> Result<Vec<(PathBuf, DiagnosisReport)>, AppError> {
    let mut requests = Vec::with_capacity(paths.len());
    for path in paths {
        let validated = load_validated(path, &config)?;
        if !validated.rejected.is_empty() {
            tracing::warn!(
                path = %path.display(),
                rejected = validated.rejected.len(),
                "batch file has rejected readings"
            );
        }
        requests.push(DiagnosisRequest::new(profile_for(path), period, validated.readings));
    }

    let engine = build_engine(config, true);
    let reports = engine.diagnose_batch(&requests);
    tracing::info!(files = reports.len(), "batch complete");

    Ok(paths.iter().cloned().zip(reports).collect())
}
