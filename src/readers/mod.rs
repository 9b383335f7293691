pub mod avro_reader;
pub mod csv_reader;
pub mod json_reader;

pub use avro_reader::AvroReader;
pub use csv_reader::CsvReader;
pub use json_reader::JsonReader;

use crate::error::{ProcessingError, Result};
use crate::models::Table;
use std::path::Path;

/// Supported source formats, detected from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Avro,
    Csv,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(SourceFormat::Json),
            "avro" => Some(SourceFormat::Avro),
            "csv" => Some(SourceFormat::Csv),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| {
                ProcessingError::InvalidFormat(format!(
                    "Unrecognised source format: {}",
                    path.display()
                ))
            })
    }

    pub fn read_table(&self, path: &Path) -> Result<Table> {
        match self {
            SourceFormat::Json => JsonReader::new().read_table(path),
            SourceFormat::Avro => AvroReader::new().read_table(path),
            SourceFormat::Csv => CsvReader::new().read_table(path),
        }
    }
}

/// Read a source file with the reader matching its extension
pub fn read_source(path: &Path) -> Result<Table> {
    SourceFormat::from_path(path)?.read_table(path)
}
