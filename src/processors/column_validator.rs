use crate::error::{ProcessingError, Result};
use crate::models::Table;
use crate::utils::constants::REQUIRED_COLUMNS;

/// Presence check for the columns the rest of the pipeline depends on.
pub struct ColumnValidator {
    required: Vec<String>,
}

impl ColumnValidator {
    pub fn new() -> Self {
        Self::with_required(&REQUIRED_COLUMNS)
    }

    pub fn with_required(required: &[&str]) -> Self {
        Self {
            required: required.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Columns that are required but absent, in required order
    pub fn missing_columns(&self, table: &Table) -> Vec<String> {
        self.required
            .iter()
            .filter(|column| !table.has_column(column))
            .cloned()
            .collect()
    }

    pub fn check(&self, table: &Table) -> Result<()> {
        let missing = self.missing_columns(table);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProcessingError::MissingColumns(missing))
        }
    }
}

impl Default for ColumnValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(columns: &[&str]) -> Table {
        Table::new(columns.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_all_required_present() {
        let table = table_with(&["Population", "Name", "Area", "CountryCode"]);

        assert!(ColumnValidator::new().check(&table).is_ok());
    }

    #[test]
    fn test_reports_missing_in_required_order() {
        let table = table_with(&["CityName", "CountryCode"]);

        match ColumnValidator::new().check(&table) {
            Err(ProcessingError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["Name".to_string(), "Population".to_string()]);
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let table = table_with(&["name", "CountryCode", "Population"]);

        assert_eq!(
            ColumnValidator::new().missing_columns(&table),
            vec!["Name".to_string()]
        );
    }
}
