use crate::models::{Table, Value};
use crate::utils::constants::NAME_COLUMN;
use std::collections::HashSet;
use tracing::debug;

/// First-occurrence deduplication on a single key column.
pub struct Deduplicator {
    key: String,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::with_key(NAME_COLUMN)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    /// Keep the first row for each key value, preserving relative order.
    ///
    /// Rows without the key field share the `Null` key. The key column, when
    /// present, becomes the first column of the result.
    pub fn dedup(&self, table: Table) -> Table {
        let columns = self.key_first(table.columns());
        let before = table.len();

        let mut seen: HashSet<Value> = HashSet::with_capacity(before);
        let rows: Vec<_> = table
            .into_rows()
            .into_iter()
            .filter(|row| seen.insert(Table::value(row, &self.key).clone()))
            .collect();

        debug!(
            key = %self.key,
            kept = rows.len(),
            removed = before - rows.len(),
            "removed duplicate rows"
        );
        Table::with_rows(columns, rows)
    }

    fn key_first(&self, columns: &[String]) -> Vec<String> {
        let mut ordered: Vec<String> = columns.iter().filter(|c| **c == self.key).cloned().collect();
        ordered.extend(columns.iter().filter(|c| **c != self.key).cloned());
        ordered
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keeps_first_occurrence() {
        let table = Table::from_cells(
            &["Name", "Population"],
            vec![
                vec![Value::from("Paris"), Value::Int(2161000)],
                vec![Value::from("Rome"), Value::Int(2873000)],
                vec![Value::from("Paris"), Value::Int(2100000)],
                vec![Value::from("Madrid"), Value::Int(3223000)],
                vec![Value::from("Rome"), Value::Int(1)],
            ],
        );

        let deduped = Deduplicator::new().dedup(table);

        let expected = Table::from_cells(
            &["Name", "Population"],
            vec![
                vec![Value::from("Paris"), Value::Int(2161000)],
                vec![Value::from("Rome"), Value::Int(2873000)],
                vec![Value::from("Madrid"), Value::Int(3223000)],
            ],
        );
        assert_eq!(deduped, expected);
    }

    #[test]
    fn test_key_column_moves_first() {
        let table = Table::from_cells(
            &["CountryCode", "Name", "Population"],
            vec![vec![Value::from("FRA"), Value::from("Paris"), Value::Int(2161000)]],
        );

        let deduped = Deduplicator::new().dedup(table);

        assert_eq!(deduped.columns(), ["Name", "CountryCode", "Population"]);
        assert_eq!(Table::value(&deduped.rows()[0], "CountryCode"), &Value::from("FRA"));
    }

    #[test]
    fn test_missing_key_keeps_column_order() {
        let table = Table::from_cells(&["City", "Population"], vec![]);

        let deduped = Deduplicator::new().dedup(table);

        assert_eq!(deduped.columns(), ["City", "Population"]);
    }

    #[test]
    fn test_keys_are_type_sensitive() {
        let table = Table::from_cells(
            &["Name"],
            vec![
                vec![Value::Int(1)],
                vec![Value::from("1")],
                vec![Value::Null],
                vec![Value::Null],
            ],
        );

        let deduped = Deduplicator::new().dedup(table);

        assert_eq!(deduped.len(), 3);
    }

    #[test]
    fn test_custom_key() {
        let table = Table::from_cells(
            &["Name", "CountryCode"],
            vec![
                vec![Value::from("Recife"), Value::from("BRA")],
                vec![Value::from("Manaus"), Value::from("BRA")],
            ],
        );

        let deduped = Deduplicator::with_key("CountryCode").dedup(table);

        assert_eq!(deduped.len(), 1);
        assert_eq!(Table::value(&deduped.rows()[0], "Name"), &Value::from("Recife"));
    }
}
