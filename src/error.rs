use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Avro decoding error: {0}")]
    Avro(#[from] apache_avro::Error),

    #[error("File {} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

impl From<tempfile::PersistError> for ProcessingError {
    fn from(err: tempfile::PersistError) -> Self {
        ProcessingError::Io(err.error)
    }
}
