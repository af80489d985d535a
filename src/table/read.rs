use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Reader};
use glob::glob;
use tracing::debug;

use super::{Cell, SheetError, Table};

/// Non-recursive listing of the `.xlsx` files directly under `dir`,
/// in alphabetical order.
pub fn list_spreadsheets<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let pattern = dir.join("*.xlsx");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-UTF-8 input directory {:?}", dir))?;

    let mut files = Vec::new();
    for entry in glob(pattern).with_context(|| format!("listing {:?}", dir))? {
        files.push(entry.context("reading directory entry")?);
    }
    Ok(files)
}

/// Load the first sheet of the workbook at `path`. The first row is taken
/// as the header row; every data row is padded to header width.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_first_sheet<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("opening workbook {:?}", path))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::NoSheets)?
        .with_context(|| format!("reading first sheet of {:?}", path))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|c| c.to_string()).collect(),
        None => return Ok(Table::default()),
    };

    let width = headers.len();
    let mut table = Table::new(headers);
    for row in rows {
        let mut cells: Vec<Cell> = row.iter().cloned().map(Cell::from).collect();
        cells.resize(width, Cell::Empty);
        table.rows.push(cells);
    }

    debug!(rows = table.row_count(), "loaded sheet");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::write_xlsx;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_only_top_level_xlsx_files() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("b.xlsx"), b"")?;
        fs::write(dir.path().join("a.xlsx"), b"")?;
        fs::write(dir.path().join("notes.txt"), b"")?;
        fs::create_dir(dir.path().join("nested"))?;
        fs::write(dir.path().join("nested").join("c.xlsx"), b"")?;

        let files = list_spreadsheets(dir.path())?;
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.xlsx", "b.xlsx"]);
        Ok(())
    }

    #[test]
    fn reads_back_typed_cells() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("typed.xlsx");

        let mut table = Table::new(vec!["NAME".into(), "WAGE".into(), "BEGIN_DATE".into()]);
        let begin = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        table.rows.push(vec![
            Cell::Text("Analyst".into()),
            Cell::Float(98500.0),
            Cell::DateTime(begin),
        ]);
        write_xlsx(&path, &table)?;

        let loaded = read_first_sheet(&path)?;
        assert_eq!(loaded.headers, vec!["NAME", "WAGE", "BEGIN_DATE"]);
        assert_eq!(loaded.rows[0][0], Cell::Text("Analyst".into()));
        assert_eq!(loaded.rows[0][1], Cell::Float(98500.0));
        assert_eq!(loaded.rows[0][2], Cell::DateTime(begin));
        Ok(())
    }

    #[test]
    fn garbage_bytes_fail_to_load() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("bad.xlsx");
        fs::write(&path, b"this is not a workbook")?;
        assert!(read_first_sheet(&path).is_err());
        Ok(())
    }

    #[test]
    fn short_rows_are_padded_to_header_width() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("ragged.xlsx");

        let mut table = Table::new(vec!["A".into(), "B".into()]);
        table.rows.push(vec![Cell::Text("only-a".into()), Cell::Empty]);
        write_xlsx(&path, &table)?;

        let loaded = read_first_sheet(&path)?;
        assert_eq!(loaded.rows[0].len(), 2);
        assert_eq!(loaded.rows[0][1], Cell::Empty);
        Ok(())
    }
}
