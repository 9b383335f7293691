use indexmap::IndexMap;

use super::Value;

/// One record: field name to cell, in column order.
pub type Row = IndexMap<String, Value>;

/// In-memory table produced by the readers and passed through the pipeline.
///
/// A row's position is its index in `rows`, so positions are always a dense
/// zero-based sequence; every step that drops or reorders rows renumbers
/// implicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Build a table from positional cells; every row carries every column.
    pub fn from_cells(columns: &[&str], cells: Vec<Vec<Value>>) -> Self {
        let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let rows = cells
            .into_iter()
            .map(|values| columns.iter().cloned().zip(values).collect())
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Append a row, registering any field names not seen before.
    pub fn push_row(&mut self, row: Row) {
        for key in row.keys() {
            if !self.has_column(key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(row);
    }

    /// Cell lookup; a field the row does not carry reads as `Null`.
    pub fn value<'a>(row: &'a Row, column: &str) -> &'a Value {
        static NULL: Value = Value::Null;
        row.get(column).unwrap_or(&NULL)
    }

    /// Cells of `row` in column order, with `Null` for absent fields.
    pub fn aligned<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = &'a Value> + 'a {
        self.columns
            .iter()
            .map(move |column| Self::value(row, column))
    }
}
