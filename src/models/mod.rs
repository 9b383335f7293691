pub mod city;
pub mod table;
pub mod value;

pub use city::CityRecord;
pub use table::{Row, Table};
pub use value::Value;
