//! Command implementations for the CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use trialgen_core::{BatchConfig, generate_batch};
use trialgen_model::{CriteriaConfig, ReferenceData};
use trialgen_report::{CohortSummary, write_patients_csv, write_patients_json};

use crate::cli::{CriteriaArgs, GenerateArgs, OutputFormatArg};

/// Outcome of one `generate` run, for the summary printer.
pub struct GenerateResult {
    pub output_dir: PathBuf,
    pub json_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
    pub summary: CohortSummary,
    pub show_benchmark: bool,
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let criteria = load_criteria(args.criteria.as_deref())?;
    let mut config = BatchConfig::new(args.count)
        .with_id_format(&args.id_prefix, args.id_width)
        .with_criteria(criteria)
        .with_reference(ReferenceData::builtin());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let span = info_span!("generate", count = args.count);
    let _guard = span.enter();
    let records = generate_batch(&config).context("generate batch")?;
    let summary = CohortSummary::from_records(&records);

    let mut json_path = None;
    let mut csv_path = None;
    if args.dry_run {
        info!("dry run, skipping artifact output");
    } else {
        if matches!(args.format, OutputFormatArg::Json | OutputFormatArg::Both) {
            json_path = Some(
                write_patients_json(&args.output_dir, &records)
                    .context("write JSON artifact")?,
            );
        }
        if matches!(args.format, OutputFormatArg::Csv | OutputFormatArg::Both) {
            csv_path = Some(
                write_patients_csv(&args.output_dir, &records)
                    .context("write CSV artifact")?,
            );
        }
    }

    Ok(GenerateResult {
        output_dir: args.output_dir.clone(),
        json_path,
        csv_path,
        summary,
        show_benchmark: args.benchmark,
    })
}

pub fn run_criteria(args: &CriteriaArgs) -> Result<CriteriaConfig> {
    load_criteria(args.criteria.as_deref())
}

/// Load criteria from a JSON file, or fall back to the built-in trial
/// configuration. Validation failures are fatal before any generation.
fn load_criteria(path: Option<&Path>) -> Result<CriteriaConfig> {
    let criteria = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read criteria file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse criteria file {}", path.display()))?
        }
        None => CriteriaConfig::default(),
    };
    criteria.validate()?;
    Ok(criteria)
}
