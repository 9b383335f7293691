use crate::analyzers::{CityAnalyzer, CityStatistics};
use crate::error::Result;
use crate::processors::{resolve_name_column, ColumnValidator, DataMerger, Deduplicator, Sorter};
use crate::readers::read_source;
use crate::utils::constants::{
    CITY_LIST_A_FILE, CITY_LIST_B_FILE, CITY_LIST_C_FILE, COMBINED_CITY_LIST_FILE, NAME_COLUMN,
    REPORT_COUNTRY_CODE,
};
use crate::writers::{CsvWriter, WriteSummary};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub write: WriteSummary,
    pub statistics: CityStatistics,
    pub name_column: Option<String>,
}

impl ProcessOutcome {
    pub fn report_lines(&self) -> Vec<String> {
        let file_name = self
            .write
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.write.path.display().to_string());
        self.statistics.report_lines(&file_name)
    }
}

/// Runs the merge pipeline over the three city lists in a data directory.
pub struct CityProcessor {
    data_dir: PathBuf,
    output_file: String,
    country_code: String,
}

impl CityProcessor {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_file: COMBINED_CITY_LIST_FILE.to_string(),
            country_code: REPORT_COUNTRY_CODE.to_string(),
        }
    }

    pub fn with_output_file(mut self, output_file: &str) -> Self {
        self.output_file = output_file.to_string();
        self
    }

    pub fn with_country_code(mut self, country_code: &str) -> Self {
        self.country_code = country_code.to_string();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Input files in source order A, B, C
    pub fn source_paths(&self) -> [PathBuf; 3] {
        [
            self.data_dir.join(CITY_LIST_A_FILE),
            self.data_dir.join(CITY_LIST_B_FILE),
            self.data_dir.join(CITY_LIST_C_FILE),
        ]
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_file)
    }

    /// Read, merge, validate, dedup, sort, write and analyze.
    ///
    /// Returns `ProcessingError::MissingColumns` without touching the output
    /// file when a required column is absent after the merge. Any reader
    /// failure aborts the run before anything is written.
    pub fn run(&self) -> Result<ProcessOutcome> {
        let mut tables = Vec::with_capacity(3);
        for path in self.source_paths() {
            info!(path = %path.display(), "reading source");
            tables.push(read_source(&path)?);
        }

        let merged = DataMerger::new().merge(tables);

        let name_column = resolve_name_column(&merged).map(str::to_string);
        match name_column.as_deref() {
            Some(NAME_COLUMN) => info!(column = NAME_COLUMN, "resolved name column"),
            Some(other) => warn!(
                column = other,
                expected = NAME_COLUMN,
                "name-like column differs from the required key column"
            ),
            None => warn!("no name-like column found in merged sources"),
        }

        ColumnValidator::new().check(&merged)?;

        let deduped = Deduplicator::new().dedup(merged);
        let sorted = Sorter::new().sort(deduped);

        let write = CsvWriter::new().write_table(&sorted, &self.output_path())?;
        let statistics = CityAnalyzer::with_country_code(&self.country_code).analyze(&sorted);

        Ok(ProcessOutcome {
            write,
            statistics,
            name_column,
        })
    }
}
