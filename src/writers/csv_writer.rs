use crate::error::Result;
use crate::models::Table;
use crate::utils::constants::CSV_DELIMITER;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Outcome of a completed write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub rows_written: usize,
}

impl WriteSummary {
    pub fn summary(&self) -> String {
        format!("{} rows written to {}", self.rows_written, self.path.display())
    }
}

pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self {
            delimiter: CSV_DELIMITER,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write the table as UTF-8 delimited text with a header row.
    ///
    /// Output goes to a temporary file beside `path` which is renamed into
    /// place once complete, so a failed write never leaves a partial file.
    pub fn write_table(&self, table: &Table, path: &Path) -> Result<WriteSummary> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(dir)?;

        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(self.delimiter)
                .from_writer(&mut temp_file);

            writer.write_record(table.columns())?;
            for row in table.rows() {
                writer.write_record(table.aligned(row).map(|value| value.to_field()))?;
            }
            writer.flush()?;
        }
        temp_file.flush()?;
        temp_file.persist(path)?;

        let summary = WriteSummary {
            path: path.to_path_buf(),
            rows_written: table.len(),
        };
        info!("{}", summary.summary());
        Ok(summary)
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
