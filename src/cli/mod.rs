pub mod output;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::extractor::languages::{self, Grammar};
use crate::extractor::Extractor;
use crate::walker;

#[derive(Parser)]
#[command(
    name = "codenav",
    about = "Navigate codebase structure using tree-sitter",
    version
)]
pub struct Cli {
    /// File or directory to analyze.
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main CLI entry point.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    languages::check_runtime().context("cannot parse source files")?;

    let path = cli.path;
    if !path.exists() {
        bail!("{} does not exist", path.display());
    }

    let mut extractor = Extractor::new();
    let report = if path.is_file() {
        let Some(grammar) = Grammar::from_path(&path) else {
            bail!("Unsupported file extension: {}", languages::extension(&path));
        };
        walker::extract_single(&path, grammar, &mut extractor)
    } else {
        walker::scan(&path, &mut extractor)
    };

    tracing::info!(files = report.len(), "done");
    output::print_report(&report)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
