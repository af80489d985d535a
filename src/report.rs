use std::path::PathBuf;

use thiserror::Error;

/// Why one input file was skipped. One variant per failure point of the
/// per-file pipeline: load, required-column projection, output write.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("load error: {0:#}")]
    Load(anyhow::Error),
    #[error("missing required column {0:?}")]
    MissingColumn(String),
    #[error("write error: {0:#}")]
    Write(anyhow::Error),
}

/// Collected per-file results of one batch run. Each input resolves to
/// either the number of rows it contributed or the reason it was skipped.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<(PathBuf, usize)>,
    pub skipped: Vec<(PathBuf, FileError)>,
}

impl BatchReport {
    pub fn record(&mut self, path: PathBuf, outcome: Result<usize, FileError>) {
        match outcome {
            Ok(rows) => self.processed.push((path, rows)),
            Err(err) => self.skipped.push((path, err)),
        }
    }

    pub fn files_seen(&self) -> usize {
        self.processed.len() + self.skipped.len()
    }

    pub fn rows_kept(&self) -> usize {
        self.processed.iter().map(|(_, rows)| rows).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn report_accounts_for_both_outcomes() {
        let mut report = BatchReport::default();
        report.record("a.xlsx".into(), Ok(10));
        report.record("b.xlsx".into(), Ok(5));
        report.record("c.xlsx".into(), Err(FileError::Load(anyhow!("corrupt"))));

        assert_eq!(report.files_seen(), 3);
        assert_eq!(report.rows_kept(), 15);
        assert_eq!(report.processed.len(), 2);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn errors_name_the_failure_point() {
        let err = FileError::MissingColumn("SOC_TITLE".into());
        assert_eq!(err.to_string(), "missing required column \"SOC_TITLE\"");
    }
}
