//! Command line entry point for the timecard auditor.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use timecard_audit::config::{AuditConfig, ConfigLoader};
use timecard_audit::pipeline::{self, RunPaths};
use timecard_audit::report::ReportFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Flag timecard compliance issues: consecutive days, short breaks, long shifts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Timecard file (comma separated, first line is a header)
    input: PathBuf,

    /// Report file
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Log debug detail (per-employee scans, skipped blank lines)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<AuditConfig> {
    match path {
        Some(path) => Ok(ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?
            .into_config()),
        None => Ok(AuditConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(args.config.as_ref())?;
    let paths = RunPaths {
        input: args.input,
        output: args.output,
    };

    let summary = pipeline::run(&paths, &config, args.format.into());
    if !summary.report_written {
        warn!(output = %paths.output.display(), "Run finished without a report");
    }

    Ok(())
}
