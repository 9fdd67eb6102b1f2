//! CLI argument definitions for the complaints pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use complaints_ingest::Window;
use complaints_report::DEFAULT_MISSING_TAIL;

#[derive(Parser)]
#[command(
    name = "complaints",
    version,
    about = "Consumer complaints pipeline - preprocess exports and profile them",
    long_about = "Load consumer complaints CSV exports into a clean, typed table.\n\n\
                  `preprocess` normalizes headers and coerces dates and zip codes.\n\
                  `eda` writes summary tables for a preprocessed file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a raw export, normalize and coerce it, and write the processed CSV.
    Preprocess(PreprocessArgs),

    /// Write exploratory summary tables for a processed CSV.
    Eda(EdaArgs),
}

#[derive(Parser)]
pub struct PreprocessArgs {
    /// Raw complaints export.
    #[arg(value_name = "RAW_PATH")]
    pub raw_path: PathBuf,

    /// Destination of the processed CSV.
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// Number of data rows to load ("all" or a count).
    #[arg(long = "rows", value_name = "ROWS", default_value = "all")]
    pub rows: String,

    /// Data rows to skip before loading; the header is always kept.
    #[arg(long = "skip", value_name = "N", default_value = "0")]
    pub skip: String,
}

impl PreprocessArgs {
    /// The requested row window, validated before any file is opened.
    pub fn window(&self) -> complaints_ingest::Result<Window> {
        Window::parse(&self.rows, &self.skip)
    }
}

#[derive(Parser)]
pub struct EdaArgs {
    /// Processed complaints CSV.
    #[arg(value_name = "PROCESSED_PATH")]
    pub processed_path: PathBuf,

    /// Directory for the summary tables.
    #[arg(long = "out-dir", value_name = "DIR", default_value = "results")]
    pub out_dir: PathBuf,

    /// Trailing rows inspected for missing values.
    #[arg(long = "tail", value_name = "N", default_value_t = DEFAULT_MISSING_TAIL)]
    pub tail: usize,

    /// Number of data rows to load ("all" or a count).
    #[arg(long = "rows", value_name = "ROWS", default_value = "all")]
    pub rows: String,

    /// Data rows to skip before loading.
    #[arg(long = "skip", value_name = "N", default_value = "0")]
    pub skip: String,
}

impl EdaArgs {
    /// The requested row window, validated before any file is opened.
    pub fn window(&self) -> complaints_ingest::Result<Window> {
        Window::parse(&self.rows, &self.skip)
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
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
    use complaints_ingest::{IngestError, RowLimit};

    #[test]
    fn test_preprocess_defaults() {
        let cli = Cli::try_parse_from(["complaints", "preprocess", "raw.csv", "out.csv"]).unwrap();
        let Command::Preprocess(args) = cli.command else {
            panic!("expected preprocess");
        };
        assert_eq!(args.window().unwrap(), Window::all());
    }

    #[test]
    fn test_preprocess_window_flags() {
        let cli = Cli::try_parse_from([
            "complaints",
            "preprocess",
            "raw.csv",
            "out.csv",
            "--rows",
            "200000",
            "--skip",
            "100000",
        ])
        .unwrap();
        let Command::Preprocess(args) = cli.command else {
            panic!("expected preprocess");
        };
        assert_eq!(
            args.window().unwrap(),
            Window::new(RowLimit::Rows(200_000), 100_000)
        );
    }

    #[test]
    fn test_rows_flag_rejects_text() {
        let cli = Cli::try_parse_from([
            "complaints",
            "preprocess",
            "raw.csv",
            "out.csv",
            "--rows",
            "lots",
        ])
        .unwrap();
        let Command::Preprocess(args) = cli.command else {
            panic!("expected preprocess");
        };
        let err = args.window().unwrap_err();
        assert!(matches!(err, IngestError::InvalidArgument { .. }));
        assert!(err.to_string().contains("'lots'"));
    }

    #[test]
    fn test_log_presentation_flags() {
        let cli = Cli::try_parse_from([
            "complaints",
            "eda",
            "processed.csv",
            "--log-timestamps",
            "--log-target",
        ])
        .unwrap();
        assert!(cli.log_timestamps);
        assert!(cli.log_target);
    }

    #[test]
    fn test_eda_defaults() {
        let cli = Cli::try_parse_from(["complaints", "eda", "processed.csv"]).unwrap();
        let Command::Eda(args) = cli.command else {
            panic!("expected eda");
        };
        assert_eq!(args.out_dir, PathBuf::from("results"));
        assert_eq!(args.tail, 2000);
        assert_eq!(args.window().unwrap(), Window::all());
    }

    #[test]
    fn test_global_log_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "complaints",
            "eda",
            "processed.csv",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(matches!(cli.log_level, Some(LogLevelArg::Debug)));
    }
}
