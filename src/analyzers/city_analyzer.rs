use crate::models::{CityRecord, Table};
use crate::utils::constants::{NO_POPULATION_PLACEHOLDER, REPORT_COUNTRY_CODE};
use tracing::{debug, warn};
use validator::Validate;

/// Summary facts about the final city table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityStatistics {
    pub total_rows: usize,
    pub most_populous: Option<String>,
    pub country_code: String,
    pub country_population: i64,
}

impl CityStatistics {
    /// Console report, one entry per line, in fixed order
    pub fn report_lines(&self, output_file_name: &str) -> Vec<String> {
        vec![
            format!(
                "Combined and sorted data written to {} with UTF-8 encoding",
                output_file_name
            ),
            format!("Total number of rows in the result file: {}", self.total_rows),
            format!(
                "City with the most Population: {}",
                self.most_populous
                    .as_deref()
                    .unwrap_or(NO_POPULATION_PLACEHOLDER)
            ),
            format!(
                "Total population of all Cities with code name '{}': {}",
                self.country_code, self.country_population
            ),
        ]
    }
}

pub struct CityAnalyzer {
    country_code: String,
}

impl CityAnalyzer {
    pub fn new() -> Self {
        Self::with_country_code(REPORT_COUNTRY_CODE)
    }

    pub fn with_country_code(country_code: &str) -> Self {
        Self {
            country_code: country_code.to_string(),
        }
    }

    /// Statistics over the final table.
    ///
    /// Rows whose city fields fail validation are left out of the figures
    /// but still counted in `total_rows`; rows without a name never win
    /// `most_populous`.
    pub fn analyze(&self, table: &Table) -> CityStatistics {
        let mut most_populous: Option<(i64, String)> = None;
        let mut country_population: i64 = 0;

        for row in table.rows() {
            let city = CityRecord::from_row(row);
            if let Err(errors) = city.validate() {
                warn!(name = ?city.name, %errors, "skipping row in statistics");
                continue;
            }
            let Some(population) = city.population else {
                continue;
            };

            if let Some(name) = &city.name {
                // Strictly greater keeps the first occurrence on ties
                if most_populous
                    .as_ref()
                    .map_or(true, |(max, _)| population > *max)
                {
                    most_populous = Some((population, name.clone()));
                }
            }

            if city.is_in_country(&self.country_code) {
                country_population = country_population.saturating_add(population);
            }
        }

        let stats = CityStatistics {
            total_rows: table.len(),
            most_populous: most_populous.map(|(_, name)| name),
            country_code: self.country_code.clone(),
            country_population,
        };
        debug!(?stats, "computed city statistics");
        stats
    }
}

impl Default for CityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Value;
    use pretty_assertions::assert_eq;

    fn cities() -> Table {
        Table::from_cells(
            &["Name", "CountryCode", "Population"],
            vec![
                vec![Value::from("Brasilia"), Value::from("BRA"), Value::Int(2500000)],
                vec![Value::from("Delhi"), Value::from("IND"), Value::Int(16787941)],
                vec![Value::from("Mumbai"), Value::from("IND"), Value::Int(16787941)],
                vec![Value::from("Nowhere"), Value::Null, Value::Null],
                vec![Value::from("Sao Paulo"), Value::from("BRA"), Value::Int(12000000)],
            ],
        )
    }

    #[test]
    fn test_analyze() {
        let stats = CityAnalyzer::new().analyze(&cities());

        assert_eq!(
            stats,
            CityStatistics {
                total_rows: 5,
                most_populous: Some("Delhi".to_string()),
                country_code: "BRA".to_string(),
                country_population: 14500000,
            }
        );
    }

    #[test]
    fn test_no_matching_country_sums_to_zero() {
        let stats = CityAnalyzer::with_country_code("ARG").analyze(&cities());

        assert_eq!(stats.country_population, 0);
    }

    #[test]
    fn test_nameless_row_counts_but_never_wins() {
        let table = Table::from_cells(
            &["Name", "CountryCode", "Population"],
            vec![
                vec![Value::from("Lima"), Value::from("PER"), Value::Int(9751000)],
                vec![Value::Null, Value::from("BRA"), Value::Int(99999999)],
            ],
        );

        let stats = CityAnalyzer::new().analyze(&table);

        assert_eq!(stats.total_rows, 2);
        assert_eq!(stats.most_populous.as_deref(), Some("Lima"));
        assert_eq!(stats.country_population, 99999999);
    }

    #[test]
    fn test_negative_population_is_skipped() {
        let table = Table::from_cells(
            &["Name", "CountryCode", "Population"],
            vec![
                vec![Value::from("Recife"), Value::from("BRA"), Value::Int(1653000)],
                vec![Value::from("Nowhere"), Value::from("BRA"), Value::Int(-5)],
            ],
        );

        let stats = CityAnalyzer::new().analyze(&table);

        assert_eq!(stats.total_rows, 2);
        assert_eq!(stats.country_population, 1653000);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(vec!["Name".to_string()]);

        let stats = CityAnalyzer::new().analyze(&table);

        assert_eq!(stats.total_rows, 0);
        assert_eq!(stats.most_populous, None);
        assert_eq!(
            stats.report_lines("CombinedCityList.csv")[2],
            "City with the most Population: n/a"
        );
    }

    #[test]
    fn test_report_lines() {
        let stats = CityStatistics {
            total_rows: 3,
            most_populous: Some("Tokyo".to_string()),
            country_code: "BRA".to_string(),
            country_population: 14500000,
        };

        assert_eq!(
            stats.report_lines("CombinedCityList.csv"),
            vec![
                "Combined and sorted data written to CombinedCityList.csv with UTF-8 encoding",
                "Total number of rows in the result file: 3",
                "City with the most Population: Tokyo",
                "Total population of all Cities with code name 'BRA': 14500000",
            ]
        );
    }
}
