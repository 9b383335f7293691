pub mod city_analyzer;

pub use city_analyzer::{CityAnalyzer, CityStatistics};
