//! Command-line parsing for the `gauge` binary.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! scoring engine. Nothing here is needed to use the library.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::data::SampleProfile;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gauge", version, about = "Economic gauge diagnosis: chronic scoring + acute shock alerts")]
pub struct Cli {
    /// Debug-level logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Diagnose one reading file (optionally against the previous period).
    Diagnose(DiagnoseArgs),
    /// Diagnose many reading files in parallel and print one verdict line each.
    Batch(BatchArgs),
    /// Write a synthetic reading file.
    Sample(SampleArgs),
    /// Print the effective engine configuration as JSON.
    Config(ConfigArgs),
}

/// Options shared by every command that needs an engine configuration.
#[derive(Debug, Args, Clone)]
pub struct ConfigSource {
    /// Engine config JSON (defaults to $GAUGE_CONFIG, then built-in tables).
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct DiagnoseArgs {
    /// Current-period readings (JSON object of indicator id -> number|null).
    #[arg(short = 'r', long, value_name = "JSON")]
    pub readings: PathBuf,

    /// Previous-period readings, used for continuity and blockade checks.
    #[arg(short = 'p', long, value_name = "JSON")]
    pub previous: Option<PathBuf>,

    #[command(flatten)]
    pub source: ConfigSource,

    /// Profile identifier echoed into the report.
    #[arg(long, default_value = "default")]
    pub profile: String,

    /// Period label echoed into the report (defaults to the current month).
    #[arg(long)]
    pub period: Option<String>,

    /// Skip the acute layer entirely (verdict becomes chronic-only).
    #[arg(long)]
    pub no_acute: bool,

    /// Mark that an independent cross-check diverged from these readings.
    #[arg(long)]
    pub diverged: bool,

    /// Note attached to the divergence marker.
    #[arg(long, requires = "diverged")]
    pub divergence_note: Option<String>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Also write the report JSON to this path.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// Reading files; each file stem becomes the profile id.
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub source: ConfigSource,

    /// Period label echoed into every report.
    #[arg(long)]
    pub period: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    #[arg(long, value_enum, default_value_t = SampleProfile::Mixed)]
    pub profile: SampleProfile,

    /// Random seed (same seed + profile = same readings).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output path (stdout when omitted).
    #[arg(long, value_name = "JSON")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub source: ConfigSource,
}

#[derive(Debug, Args, Clone)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Output path (stdout when omitted).
    #[arg(long, value_name = "JSON")]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_diagnose_flags() {
        let cli = Cli::parse_from([
            "gauge", "-v", "diagnose", "-r", "now.json", "-p", "prev.json", "--profile", "kr", "--diverged",
            "--divergence-note", "nightlights", "--json",
        ]);
        assert!(cli.verbose);
        let Command::Diagnose(args) = cli.command else {
            panic!("expected diagnose");
        };
        assert_eq!(args.readings, PathBuf::from("now.json"));
        assert_eq!(args.previous, Some(PathBuf::from("prev.json")));
        assert_eq!(args.profile, "kr");
        assert!(args.diverged && args.json);
        assert_eq!(args.divergence_note.as_deref(), Some("nightlights"));
    }

    #[test]
    fn note_requires_diverged() {
        let err = Cli::try_parse_from(["gauge", "diagnose", "-r", "a.json", "--divergence-note", "x"]);
        assert!(err.is_err());
    }

    #[test]
    fn parses_batch_and_sample() {
        let cli = Cli::parse_from(["gauge", "batch", "a.json", "b.json", "--period", "2026-09"]);
        let Command::Batch(args) = cli.command else {
            panic!("expected batch");
        };
        assert_eq!(args.files.len(), 2);

        let cli = Cli::parse_from(["gauge", "sample", "--profile", "stressed", "--seed", "3"]);
        let Command::Sample(args) = cli.command else {
            panic!("expected sample");
        };
        assert_eq!(args.profile, SampleProfile::Stressed);
        assert_eq!(args.seed, 3);
    }
}
