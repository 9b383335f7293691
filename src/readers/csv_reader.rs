use crate::error::{ProcessingError, Result};
use crate::models::{Row, Table, Value};
use crate::utils::constants::CSV_DELIMITER;
use encoding_rs::UTF_8;
use std::path::Path;
use tracing::debug;

/// Inferred type of a delimited-text column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

/// Reader for comma-delimited UTF-8 text with a header row.
pub struct CsvReader {
    delimiter: u8,
}

impl CsvReader {
    pub fn new() -> Self {
        Self {
            delimiter: CSV_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read and decode the whole file, then infer one type per column
    pub fn read_table(&self, path: &Path) -> Result<Table> {
        let bytes = std::fs::read(path)?;

        let (text, had_errors) = UTF_8.decode_with_bom_removal(&bytes);
        if had_errors {
            return Err(ProcessingError::Encoding {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        let mut raw_rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            raw_rows.push(record.iter().map(|field| field.to_string()).collect());
        }

        let kinds: Vec<ColumnKind> = (0..headers.len())
            .map(|index| Self::infer_kind(raw_rows.iter().map(|r| r[index].as_str())))
            .collect();

        let mut table = Table::new(headers.clone());
        for raw in raw_rows {
            let row: Row = headers
                .iter()
                .zip(kinds.iter())
                .zip(raw)
                .map(|((header, kind), cell)| (header.clone(), Self::parse_cell(cell, *kind)))
                .collect();
            table.push_row(row);
        }

        debug!(
            path = %path.display(),
            rows = table.len(),
            columns = table.columns().len(),
            "read CSV source"
        );
        Ok(table)
    }

    /// Int if every non-empty cell is an integer, Float if every one is a number, else Text
    fn infer_kind<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
        let mut kind = ColumnKind::Int;
        for cell in cells.filter(|c| !c.is_empty()) {
            if kind == ColumnKind::Int && cell.parse::<i64>().is_err() {
                kind = ColumnKind::Float;
            }
            if kind == ColumnKind::Float && cell.parse::<f64>().is_err() {
                return ColumnKind::Text;
            }
        }
        kind
    }

    fn parse_cell(cell: String, kind: ColumnKind) -> Value {
        if cell.is_empty() {
            return Value::Null;
        }
        match kind {
            ColumnKind::Int => cell.parse::<i64>().map(Value::Int).unwrap_or(Value::Text(cell)),
            ColumnKind::Float => cell
                .parse::<f64>()
                .map(Value::Float)
                .unwrap_or(Value::Text(cell)),
            ColumnKind::Text => Value::Text(cell),
        }
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}
