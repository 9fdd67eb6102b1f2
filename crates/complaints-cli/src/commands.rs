use std::path::PathBuf;

use anyhow::{Context, Result};
use complaints_ingest::{load_processed, load_raw, write_csv};
use complaints_report::{EdaReport, ReportColumns};
use tracing::{info, info_span};

use crate::cli::{EdaArgs, PreprocessArgs};

/// Shape of a preprocessed table and where it was written.
#[derive(Debug, Clone)]
pub struct PreprocessOutcome {
    pub output_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Report tables and the files they were written to.
#[derive(Debug, Clone)]
pub struct EdaOutcome {
    pub report: EdaReport,
    pub written: Vec<PathBuf>,
}

pub fn run_preprocess(args: &PreprocessArgs) -> Result<PreprocessOutcome> {
    let span = info_span!("preprocess", raw = %args.raw_path.display());
    let _guard = span.enter();
    let window = args.window().context("invalid row window")?;

    let df = load_raw(&args.raw_path, window)
        .with_context(|| format!("load raw complaints from {}", args.raw_path.display()))?;
    write_csv(&df, &args.output_path)
        .with_context(|| format!("write processed complaints to {}", args.output_path.display()))?;

    info!(
        output = %args.output_path.display(),
        rows = df.height(),
        columns = df.width(),
        "preprocess complete"
    );
    Ok(PreprocessOutcome {
        output_path: args.output_path.clone(),
        rows: df.height(),
        columns: df.width(),
    })
}

pub fn run_eda(args: &EdaArgs) -> Result<EdaOutcome> {
    let span = info_span!("eda", processed = %args.processed_path.display());
    let _guard = span.enter();
    let window = args.window().context("invalid row window")?;

    let df = load_processed(&args.processed_path, window).with_context(|| {
        format!(
            "load processed complaints from {}",
            args.processed_path.display()
        )
    })?;
    let report =
        EdaReport::build(&df, &ReportColumns::default(), args.tail).context("build report")?;
    let written = report
        .write_to(&args.out_dir)
        .with_context(|| format!("write report tables to {}", args.out_dir.display()))?;

    Ok(EdaOutcome { report, written })
}
