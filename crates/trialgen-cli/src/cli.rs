//! CLI argument definitions for the synthetic patient generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "trialgen",
    version,
    about = "Synthetic clinical-trial patient generator",
    long_about = "Generate synthetic patient records and screen them against\n\
                  trial eligibility criteria.\n\n\
                  Writes a nested JSON document and a flattened CSV export,\n\
                  and prints a cohort summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a batch of synthetic patient records.
    Generate(GenerateArgs),

    /// Show the active eligibility criteria.
    Criteria(CriteriaArgs),

    /// List the built-in reference-data tables.
    Reference,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of patients to generate.
    #[arg(value_name = "COUNT")]
    pub count: usize,

    /// Output directory for generated artifacts.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "synthetic_data")]
    pub output_dir: PathBuf,

    /// Seed for reproducible generation (OS entropy when omitted).
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Artifact format to write.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Patient id prefix.
    #[arg(long = "id-prefix", value_name = "PREFIX", default_value = "P")]
    pub id_prefix: String,

    /// Zero-padded width of the numeric id suffix.
    #[arg(long = "id-width", value_name = "WIDTH", default_value_t = 4)]
    pub id_width: usize,

    /// Criteria JSON file (defaults to the built-in trial criteria).
    #[arg(long = "criteria", value_name = "PATH")]
    pub criteria: Option<PathBuf>,

    /// Generate and summarize without writing artifacts.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Include the real-world benchmark comparison tables.
    #[arg(long = "benchmark")]
    pub benchmark: bool,
}

#[derive(Parser)]
pub struct CriteriaArgs {
    /// Criteria JSON file (defaults to the built-in trial criteria).
    #[arg(long = "criteria", value_name = "PATH")]
    pub criteria: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Csv,
    Both,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults() {
        let cli = Cli::parse_from(["trialgen", "generate", "25"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.count, 25);
        assert_eq!(args.id_prefix, "P");
        assert_eq!(args.id_width, 4);
        assert_eq!(args.output_dir, PathBuf::from("synthetic_data"));
        assert!(!args.dry_run);
    }

    #[test]
    fn generate_accepts_overrides() {
        let cli = Cli::parse_from([
            "trialgen",
            "generate",
            "10",
            "--seed",
            "7",
            "--format",
            "csv",
            "--id-prefix",
            "SUBJ",
            "--id-width",
            "6",
            "--dry-run",
        ]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.seed, Some(7));
        assert!(matches!(args.format, OutputFormatArg::Csv));
        assert_eq!(args.id_prefix, "SUBJ");
        assert_eq!(args.id_width, 6);
        assert!(args.dry_run);
    }
}
