pub mod city_processor;
pub mod column_resolver;
pub mod column_validator;
pub mod data_merger;
pub mod deduplicator;
pub mod sorter;

pub use city_processor::{CityProcessor, ProcessOutcome};
pub use column_resolver::resolve_name_column;
pub use column_validator::ColumnValidator;
pub use data_merger::DataMerger;
pub use deduplicator::Deduplicator;
pub use sorter::Sorter;
