use crate::models::{Row, Table, Value};
use tracing::debug;

pub struct DataMerger;

impl DataMerger {
    pub fn new() -> Self {
        Self
    }

    /// Concatenate tables in the given order.
    ///
    /// Columns are the union of all source columns in order of first
    /// appearance. Every merged row carries every column, with `Null` for
    /// fields its source did not have.
    pub fn merge(&self, tables: Vec<Table>) -> Table {
        let columns = Self::union_columns(&tables);

        let mut rows: Vec<Row> = Vec::with_capacity(tables.iter().map(Table::len).sum());
        for table in tables {
            for mut source_row in table.into_rows() {
                let row: Row = columns
                    .iter()
                    .map(|column| {
                        let value = source_row.swap_remove(column).unwrap_or(Value::Null);
                        (column.clone(), value)
                    })
                    .collect();
                rows.push(row);
            }
        }

        debug!(rows = rows.len(), columns = columns.len(), "merged sources");
        Table::with_rows(columns, rows)
    }

    fn union_columns(tables: &[Table]) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for table in tables {
            for column in table.columns() {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }
        columns
    }
}

impl Default for DataMerger {
    fn default() -> Self {
        Self::new()
    }
}
