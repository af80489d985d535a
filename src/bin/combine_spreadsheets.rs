use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use h1b_tools::combine::{self, DEFAULT_OUTPUT};

/// Merge a directory of H1B disclosure spreadsheets into one workbook.
#[derive(Parser)]
#[command(name = "combine-spreadsheets", version)]
struct Cli {
    /// Directory containing the .xlsx files to merge (non-recursive).
    input_dir: PathBuf,

    /// Path of the combined workbook to write.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    let report = combine::combine_dir(&cli.input_dir, &cli.out)?;

    info!(
        "done: {} file(s) combined, {} skipped, {} rows",
        report.batch.processed.len(),
        report.batch.skipped.len(),
        report.batch.rows_kept()
    );
    Ok(())
}
