use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use h1b_tools::filter;

/// Filter LCA disclosure spreadsheets down to cybersecurity job titles,
/// writing one `<name>_filtered.xlsx` per input.
#[derive(Parser)]
#[command(name = "filter-cyber-jobs", version)]
struct Cli {
    /// Directory containing the LCA disclosure .xlsx files (non-recursive).
    input_dir: PathBuf,

    /// Directory the filtered workbooks are written to (created if absent).
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    let report = filter::filter_dir(&cli.input_dir, &cli.output_dir)?;

    info!(
        "done: {} of {} file(s) filtered, {} rows kept, {} skipped",
        report.processed.len(),
        report.files_seen(),
        report.rows_kept(),
        report.skipped.len()
    );
    Ok(())
}
