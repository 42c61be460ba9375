//! Read/write diagnosis report JSON files.
//!
//! The report JSON is the portable form of one evaluation: both layer
//! diagnoses, the verdict, and the request metadata. Downstream renderers
//! consume it as-is.

use std::fs::File;
use std::path::Path;

use crate::engine::DiagnosisReport;
use crate::error::AppError;

/// Write a report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &DiagnosisReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::internal(format!("Failed to create report JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::internal(format!("Failed to write report JSON: {e}")))?;
    Ok(())
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<DiagnosisReport, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open report JSON '{}': {e}", path.display())))?;
    let report: DiagnosisReport =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid report JSON: {e}")))?;
    Ok(report)
}
