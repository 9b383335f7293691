use validator::Validate;

use super::{Row, Table, Value};
use crate::utils::constants::{COUNTRY_CODE_COLUMN, NAME_COLUMN, POPULATION_COLUMN};

/// Typed view of one row of the final table.
///
/// Every accepted row projects; cells that are missing or not usable as the
/// typed field become `None`.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CityRecord {
    pub name: Option<String>,

    pub country_code: Option<String>,

    #[validate(range(min = 0))]
    pub population: Option<i64>,
}

impl CityRecord {
    pub fn new(
        name: Option<String>,
        country_code: Option<String>,
        population: Option<i64>,
    ) -> Self {
        Self {
            name,
            country_code,
            population,
        }
    }

    /// Project a row onto the required city fields
    pub fn from_row(row: &Row) -> Self {
        let text = |column: &str| match Table::value(row, column) {
            Value::Null => None,
            other => Some(other.to_field()),
        };

        Self::new(
            text(NAME_COLUMN),
            text(COUNTRY_CODE_COLUMN),
            Table::value(row, POPULATION_COLUMN).as_i64(),
        )
    }

    pub fn is_in_country(&self, code: &str) -> bool {
        self.country_code.as_deref() == Some(code)
    }
}
