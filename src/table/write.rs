use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use super::{Cell, Table};

/// Write `table` as a single-sheet workbook at `path`. Date cells get a
/// `yyyy-mm-dd hh:mm:ss` number format; empty cells are left blank.
pub fn write_xlsx<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }

    for (r, row) in table.rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Cell::Empty => {}
                Cell::Bool(b) => {
                    worksheet.write_boolean(r, c, *b)?;
                }
                Cell::Int(i) => {
                    worksheet.write_number(r, c, *i as f64)?;
                }
                Cell::Float(v) => {
                    worksheet.write_number(r, c, *v)?;
                }
                Cell::Text(s) => {
                    worksheet.write_string(r, c, s)?;
                }
                Cell::DateTime(dt) => {
                    worksheet.write_datetime_with_format(r, c, dt, &date_format)?;
                }
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("saving workbook {:?}", path))?;
    debug!(rows = table.row_count(), path = %path.display(), "wrote workbook");
    Ok(())
}
