// src/table/mod.rs

mod cell;
mod read;
mod write;

pub use cell::Cell;
pub use read::{list_spreadsheets, read_first_sheet};
pub use write::write_xlsx;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("workbook has no sheets")]
    NoSheets,
    #[error("missing required column {0:?}")]
    MissingColumn(String),
}

/// An in-memory sheet: a header row plus data rows, one `Cell` per header.
/// Rows are padded to header width on load, so indexing by column is safe.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Concatenate tables in input order. The output column set is the
    /// first-seen union across inputs; rows from tables lacking a column
    /// get `Empty` in that slot. No dedup, no sort, no schema check.
    pub fn concat<I>(tables: I) -> Table
    where
        I: IntoIterator<Item = Table>,
    {
        let parts: Vec<Table> = tables.into_iter().collect();

        let mut headers: Vec<String> = Vec::new();
        for part in &parts {
            for h in &part.headers {
                if !headers.contains(h) {
                    headers.push(h.clone());
                }
            }
        }

        let total: usize = parts.iter().map(|t| t.rows.len()).sum();
        let mut rows = Vec::with_capacity(total);
        for part in parts {
            let indices: Vec<Option<usize>> =
                headers.iter().map(|h| part.column_index(h)).collect();
            for row in part.rows {
                rows.push(
                    indices
                        .iter()
                        .map(|ix| ix.map(|i| row[i].clone()).unwrap_or(Cell::Empty))
                        .collect(),
                );
            }
        }

        Table { headers, rows }
    }

    /// Project onto `columns` in the given order. Any missing column fails
    /// the whole table.
    pub fn select(&self, columns: &[&str]) -> Result<Table, SheetError> {
        let mut indices = Vec::with_capacity(columns.len());
        for &name in columns {
            let ix = self
                .column_index(name)
                .ok_or_else(|| SheetError::MissingColumn(name.to_string()))?;
            indices.push(ix);
        }

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Table {
            headers: columns.iter().map(|s| s.to_string()).collect(),
            rows,
        })
    }

    /// Rename headers per a source→output mapping; values are untouched.
    /// Headers absent from the mapping keep their name.
    pub fn rename(&mut self, mapping: &[(&str, &str)]) {
        for header in &mut self.headers {
            if let Some((_, to)) = mapping.iter().find(|(from, _)| *from == header.as_str()) {
                *header = to.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: Vec<Vec<Cell>>) -> Table {
        Table {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn concat_keeps_every_row() {
        let a = table(
            &["X", "Y"],
            vec![
                vec![Cell::Int(1), Cell::Text("a".into())],
                vec![Cell::Int(2), Cell::Text("b".into())],
            ],
        );
        let b = table(&["X", "Y"], vec![vec![Cell::Int(3), Cell::Text("c".into())]]);

        let combined = Table::concat(vec![a, b]);
        assert_eq!(combined.row_count(), 3);
        assert_eq!(combined.headers, vec!["X", "Y"]);
    }

    #[test]
    fn concat_unions_columns_and_pads_missing() {
        let a = table(&["X"], vec![vec![Cell::Int(1)]]);
        let b = table(&["Y"], vec![vec![Cell::Text("only-y".into())]]);

        let combined = Table::concat(vec![a, b]);
        assert_eq!(combined.headers, vec!["X", "Y"]);
        assert_eq!(combined.rows[0], vec![Cell::Int(1), Cell::Empty]);
        assert_eq!(combined.rows[1], vec![Cell::Empty, Cell::Text("only-y".into())]);
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        let combined = Table::concat(Vec::new());
        assert!(combined.headers.is_empty());
        assert_eq!(combined.row_count(), 0);
    }

    #[test]
    fn select_projects_in_requested_order() {
        let t = table(
            &["A", "B", "C"],
            vec![vec![Cell::Int(1), Cell::Int(2), Cell::Int(3)]],
        );
        let picked = t.select(&["C", "A"]).unwrap();
        assert_eq!(picked.headers, vec!["C", "A"]);
        assert_eq!(picked.rows[0], vec![Cell::Int(3), Cell::Int(1)]);
    }

    #[test]
    fn select_fails_on_missing_column() {
        let t = table(&["A"], vec![vec![Cell::Int(1)]]);
        match t.select(&["A", "B"]) {
            Err(SheetError::MissingColumn(name)) => assert_eq!(name, "B"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn rename_maps_headers_and_leaves_values() {
        let mut t = table(&["EMPLOYER_NAME", "OTHER"], vec![vec![
            Cell::Text("Acme".into()),
            Cell::Int(7),
        ]]);
        t.rename(&[("EMPLOYER_NAME", "Employer Name")]);
        assert_eq!(t.headers, vec!["Employer Name", "OTHER"]);
        assert_eq!(t.rows[0][0], Cell::Text("Acme".into()));
    }
}
