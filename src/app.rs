//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs logging
//! - resolves the engine configuration
//! - runs single or batch diagnoses
//! - prints reports and writes optional exports

use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use crate::cli::{BatchArgs, Command, ConfigArgs, DiagnoseArgs, SampleArgs};
use crate::config::EngineConfig;
use crate::domain::CrossCheck;
use crate::error::AppError;

pub mod logging;
pub mod pipeline;

/// Entry point for the `gauge` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    logging::init(logging::Verbosity::from_flags(cli.verbose, cli.quiet));

    match cli.command {
        Command::Diagnose(args) => handle_diagnose(args),
        Command::Batch(args) => handle_batch(args),
        Command::Sample(args) => handle_sample(args),
        Command::Config(args) => handle_config(args),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Arc<EngineConfig>, AppError> {
    Ok(Arc::new(EngineConfig::resolve(explicit)?))
}

fn handle_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let config = load_config(args.source.config.as_deref())?;
    let options = diagnose_options_from_args(&args);
    let run = pipeline::run_diagnose(config, &options)?;

    if !run.rejected.is_empty() {
        eprint!("{}", crate::report::format_rejected(&run.rejected));
    }
    if !run.previous_rejected.is_empty() {
        eprintln!("Previous period:");
        eprint!("{}", crate::report::format_rejected(&run.previous_rejected));
    }

    if args.json {
        let json = serde_json::to_string_pretty(&run.report)
            .map_err(|e| AppError::internal(format!("Failed to serialize report: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_report(&run.report));
    }

    if let Some(path) = &args.export {
        crate::io::write_report_json(path, &run.report)?;
        tracing::info!(path = %path.display(), "report exported");
    }

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = load_config(args.source.config.as_deref())?;
    let period = args.period.clone().unwrap_or_else(pipeline::current_period);
    let results = pipeline::run_batch(config, &args.files, &period)?;

    for (path, report) in &results {
        println!(
            "{}",
            crate::report::format_batch_line(&path.display().to_string(), report)
        );
    }
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = load_config(args.source.config.as_deref())?;
    let readings = crate::data::generate_readings(&config, args.profile, args.seed)?;
    let json = serde_json::to_string_pretty(&readings)
        .map_err(|e| AppError::internal(format!("Failed to serialize readings: {e}")))?;
    write_or_print(args.out.as_deref(), &json)
}

fn handle_config(args: ConfigArgs) -> Result<(), AppError> {
    let config = load_config(args.source.config.as_deref())?;
    let json = serde_json::to_string_pretty(config.as_ref())
        .map_err(|e| AppError::internal(format!("Failed to serialize config: {e}")))?;
    write_or_print(args.out.as_deref(), &json)
}

fn write_or_print(out: Option<&Path>, json: &str) -> Result<(), AppError> {
    match out {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .map_err(|e| AppError::input(format!("Failed to write '{}': {e}", path.display())))?;
            tracing::info!(path = %path.display(), "written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn diagnose_options_from_args(args: &DiagnoseArgs) -> pipeline::DiagnoseOptions {
    pipeline::DiagnoseOptions {
        readings: args.readings.clone(),
        previous: args.previous.clone(),
        profile_id: args.profile.clone(),
        period: args.period.clone().unwrap_or_else(pipeline::current_period),
        acute: !args.no_acute,
        cross_check: args.diverged.then(|| CrossCheck {
            diverged: true,
            note: args.divergence_note.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    #[test]
    fn options_carry_divergence_and_acute_switch() {
        let cli = Cli::parse_from([
            "gauge", "diagnose", "-r", "now.json", "--period", "2026-09", "--no-acute", "--diverged",
        ]);
        let Command::Diagnose(args) = cli.command else {
            panic!("expected diagnose");
        };
        let options = diagnose_options_from_args(&args);
        assert!(!options.acute);
        assert_eq!(options.period, "2026-09");
        assert_eq!(
            options.cross_check,
            Some(CrossCheck {
                diverged: true,
                note: None
            })
        );
    }

    #[test]
    fn default_period_is_current_month() {
        let cli = Cli::parse_from(["gauge", "diagnose", "-r", "now.json"]);
        let Command::Diagnose(args) = cli.command else {
            panic!("expected diagnose");
        };
        let options = diagnose_options_from_args(&args);
        assert_eq!(options.period.len(), 7);
        assert!(options.acute);
        assert!(options.cross_check.is_none());
    }
}
