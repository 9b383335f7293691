/// Input file names
pub const CITY_LIST_A_FILE: &str = "CityListA.json";
pub const CITY_LIST_B_FILE: &str = "CityListB.avro";
pub const CITY_LIST_C_FILE: &str = "CityListC.csv";

/// Output file name
pub const COMBINED_CITY_LIST_FILE: &str = "CombinedCityList.csv";

/// Column names
pub const NAME_COLUMN: &str = "Name";
pub const COUNTRY_CODE_COLUMN: &str = "CountryCode";
pub const POPULATION_COLUMN: &str = "Population";
pub const REQUIRED_COLUMNS: [&str; 3] = [NAME_COLUMN, COUNTRY_CODE_COLUMN, POPULATION_COLUMN];

/// Substring the column resolver looks for (lowercase)
pub const NAME_HINT: &str = "name";

/// Country whose population is totalled in the report
pub const REPORT_COUNTRY_CODE: &str = "BRA";

/// Field delimiter for delimited-text input and output
pub const CSV_DELIMITER: u8 = b',';

/// Console messages
pub const MISSING_COLUMNS_MESSAGE: &str =
    "Error: One or more required columns not found in the combined city list.";
pub const NO_POPULATION_PLACEHOLDER: &str = "n/a";
