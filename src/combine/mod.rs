// src/combine/mod.rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{error, info, warn};

use crate::report::{BatchReport, FileError};
use crate::table::{self, Table};

/// Default name for the combined workbook, written to the working directory.
pub const DEFAULT_OUTPUT: &str = "H1B-combined-2019-24_V2.xlsx";

/// Result of one merge run.
#[derive(Debug, Default)]
pub struct CombineReport {
    pub batch: BatchReport,
    /// Path the combined workbook was written to, if any. `None` when no
    /// input loaded or the output write failed.
    pub written: Option<PathBuf>,
}

/// Merge every spreadsheet in `input_dir` into one workbook at
/// `output_path`. A file that fails to load is logged and skipped; the
/// remaining files are still combined. Zero successful loads writes
/// nothing. A failed output write is logged, not propagated.
#[tracing::instrument(level = "info", skip_all, fields(dir = %input_dir.display()))]
pub fn combine_dir(input_dir: &Path, output_path: &Path) -> Result<CombineReport> {
    let files = table::list_spreadsheets(input_dir)?;
    info!("found {} spreadsheet(s)", files.len());

    let mut report = CombineReport::default();
    let mut loaded: Vec<Table> = Vec::new();

    for path in files {
        info!("processing file: {}", path.display());
        match table::read_first_sheet(&path) {
            Ok(t) => {
                report.batch.record(path, Ok(t.row_count()));
                loaded.push(t);
            }
            Err(err) => {
                error!("error reading {}: {:#}", path.display(), err);
                report.batch.record(path, Err(FileError::Load(err)));
            }
        }
    }

    if loaded.is_empty() {
        warn!("no files were processed; check the input directory and file contents");
        return Ok(report);
    }

    let combined = Table::concat(loaded);
    match table::write_xlsx(output_path, &combined) {
        Ok(()) => {
            info!(
                "combined workbook saved to {} ({} rows)",
                output_path.display(),
                combined.row_count()
            );
            report.written = Some(output_path.to_path_buf());
        }
        Err(err) => {
            error!("error saving combined file: {:#}", err);
        }
    }

    Ok(report)
}
