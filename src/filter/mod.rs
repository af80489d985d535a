// src/filter/mod.rs

mod columns;
mod keywords;

pub use columns::{source_columns, COLUMN_MAP, TITLE_COLUMN};
pub use keywords::{is_cyber_title, CYBER_KEYWORDS};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use crate::report::{BatchReport, FileError};
use crate::table::{self, SheetError, Table};

/// Filter every spreadsheet in `input_dir`, writing one
/// `<stem>_filtered.xlsx` per input into `output_dir` (created if absent).
///
/// Per-file failures are logged and recorded; only output-directory
/// creation and discovery failures propagate.
#[tracing::instrument(level = "info", skip_all, fields(dir = %input_dir.display()))]
pub fn filter_dir(input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {:?}", output_dir))?;

    let files = table::list_spreadsheets(input_dir)?;
    info!("found {} spreadsheet(s)", files.len());

    let mut report = BatchReport::default();
    for path in files {
        info!("processing file: {}", path.display());
        match filter_file(&path, output_dir) {
            Ok(rows) => report.record(path, Ok(rows)),
            Err(err) => {
                error!("error processing file {}: {}", path.display(), err);
                report.record(path, Err(err));
            }
        }
    }
    Ok(report)
}

/// Run one file through the pipeline: load first sheet, keep keyword
/// rows, project the required columns, rename, write. Returns the number
/// of rows kept.
fn filter_file(path: &Path, output_dir: &Path) -> Result<usize, FileError> {
    let full = table::read_first_sheet(path).map_err(FileError::Load)?;

    let matched = retain_cyber_rows(full)?;

    let mut selected = matched.select(&source_columns()).map_err(|err| match err {
        SheetError::MissingColumn(name) => FileError::MissingColumn(name),
        other => FileError::Load(other.into()),
    })?;
    selected.rename(COLUMN_MAP);

    let out_path = filtered_path(path, output_dir);
    info!("saving to {}", out_path.display());
    table::write_xlsx(&out_path, &selected).map_err(FileError::Write)?;
    info!("file saved: {}", out_path.display());
    Ok(selected.row_count())
}

/// Keep the rows whose job title contains a keyword. The title cell is
/// rendered to text before the test, so a missing title tests as "" and
/// never matches.
fn retain_cyber_rows(table: Table) -> Result<Table, FileError> {
    let title_ix = table
        .column_index(TITLE_COLUMN)
        .ok_or_else(|| FileError::MissingColumn(TITLE_COLUMN.to_string()))?;

    let bar = ProgressBar::new(table.rows.len() as u64).with_message("filtering job titles");
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .expect("template should parse")
            .progress_chars("=> "),
    );

    let mut kept = Table::new(table.headers.clone());
    for row in table.rows {
        if is_cyber_title(&row[title_ix].to_string()) {
            kept.rows.push(row);
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    Ok(kept)
}

fn filtered_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    output_dir.join(format!("{}_filtered.xlsx", stem))
}
