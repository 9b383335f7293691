use crate::models::Table;
use crate::utils::constants::NAME_HINT;

/// First column whose lowercase name contains "name", in column order.
pub fn resolve_name_column(table: &Table) -> Option<&str> {
    table
        .columns()
        .iter()
        .map(String::as_str)
        .find(|column| column.to_lowercase().contains(NAME_HINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_first_match() {
        let table = Table::new(vec![
            "CountryCode".to_string(),
            "CityName".to_string(),
            "Name".to_string(),
        ]);

        assert_eq!(resolve_name_column(&table), Some("CityName"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let table = Table::new(vec!["NAME".to_string()]);

        assert_eq!(resolve_name_column(&table), Some("NAME"));
    }

    #[test]
    fn test_no_match() {
        let table = Table::new(vec!["CountryCode".to_string(), "Population".to_string()]);

        assert_eq!(resolve_name_column(&table), None);
    }
}
