use crate::models::Table;
use crate::utils::constants::NAME_COLUMN;

/// Stable ascending sort on a single key column.
pub struct Sorter {
    key: String,
}

impl Sorter {
    pub fn new() -> Self {
        Self::with_key(NAME_COLUMN)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    /// Sort by the key's total order; rows missing the key go last
    pub fn sort(&self, table: Table) -> Table {
        let columns = table.columns().to_vec();
        let mut rows = table.into_rows();

        rows.sort_by(|a, b| Table::value(a, &self.key).cmp(Table::value(b, &self.key)));

        Table::with_rows(columns, rows)
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new()
    }
}
