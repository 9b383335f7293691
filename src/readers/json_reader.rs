use crate::error::Result;
use crate::models::{Row, Table, Value};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reader for a JSON document holding an array of field-mapping objects.
pub struct JsonReader;

impl JsonReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the whole document; one row per object, columns in order of first appearance
    pub fn read_table(&self, path: &Path) -> Result<Table> {
        let file = File::open(path)?;
        let objects: Vec<IndexMap<String, JsonValue>> =
            serde_json::from_reader(BufReader::new(file))?;

        let mut table = Table::default();
        for object in objects {
            let row: Row = object
                .into_iter()
                .map(|(field, value)| (field, Self::convert_value(value)))
                .collect();
            table.push_row(row);
        }

        debug!(
            path = %path.display(),
            rows = table.len(),
            columns = table.columns().len(),
            "read JSON source"
        );
        Ok(table)
    }

    fn convert_value(value: JsonValue) -> Value {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            JsonValue::String(s) => Value::Text(s),
            nested @ (JsonValue::Array(_) | JsonValue::Object(_)) => {
                Value::Text(nested.to_string())
            }
        }
    }
}

impl Default for JsonReader {
    fn default() -> Self {
        Self::new()
    }
}
