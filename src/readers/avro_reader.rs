use crate::error::{ProcessingError, Result};
use crate::models::{Row, Table, Value};
use apache_avro::types::Value as AvroValue;
use apache_avro::{Reader, Schema};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reader for Avro object container files with an embedded record schema.
pub struct AvroReader;

impl AvroReader {
    pub fn new() -> Self {
        Self
    }

    /// Decode every record in the container into one row each.
    ///
    /// Columns come from the writer schema, so an empty container still
    /// contributes its fields to the merge.
    pub fn read_table(&self, path: &Path) -> Result<Table> {
        let file = File::open(path)?;
        let reader = Reader::new(BufReader::new(file))?;

        let columns = Self::schema_columns(reader.writer_schema())?;
        let mut table = Table::new(columns);

        for datum in reader {
            let row = Self::convert_record(datum?)?;
            table.push_row(row);
        }

        debug!(
            path = %path.display(),
            rows = table.len(),
            columns = table.columns().len(),
            "read Avro source"
        );
        Ok(table)
    }

    fn schema_columns(schema: &Schema) -> Result<Vec<String>> {
        match schema {
            Schema::Record(record) => Ok(record.fields.iter().map(|f| f.name.clone()).collect()),
            other => Err(ProcessingError::InvalidFormat(format!(
                "Avro container must hold records, found schema {:?}",
                other
            ))),
        }
    }

    fn convert_record(datum: AvroValue) -> Result<Row> {
        match datum {
            AvroValue::Record(fields) => fields
                .into_iter()
                .map(|(name, value)| {
                    let value = Self::convert_value(&name, value)?;
                    Ok((name, value))
                })
                .collect(),
            other => Err(ProcessingError::InvalidFormat(format!(
                "Expected Avro record, found {:?}",
                other
            ))),
        }
    }

    fn convert_value(field: &str, value: AvroValue) -> Result<Value> {
        let converted = match value {
            AvroValue::Null => Value::Null,
            AvroValue::Boolean(b) => Value::Bool(b),
            AvroValue::Int(v) => Value::Int(v.into()),
            AvroValue::Long(v) => Value::Int(v),
            AvroValue::Float(v) => Value::Float(v.into()),
            AvroValue::Double(v) => Value::Float(v),
            AvroValue::String(s) => Value::Text(s),
            AvroValue::Enum(_, symbol) => Value::Text(symbol),
            AvroValue::Union(_, inner) => return Self::convert_value(field, *inner),
            AvroValue::Bytes(bytes) | AvroValue::Fixed(_, bytes) => {
                Value::Text(String::from_utf8(bytes).map_err(|_| {
                    ProcessingError::InvalidFormat(format!(
                        "Field '{}' holds bytes that are not UTF-8",
                        field
                    ))
                })?)
            }
            AvroValue::Date(v) | AvroValue::TimeMillis(v) => Value::Int(v.into()),
            AvroValue::TimeMicros(v)
            | AvroValue::TimestampMillis(v)
            | AvroValue::TimestampMicros(v)
            | AvroValue::LocalTimestampMillis(v)
            | AvroValue::LocalTimestampMicros(v) => Value::Int(v),
            other => {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Unsupported Avro value in field '{}': {:?}",
                    field, other
                )))
            }
        };
        Ok(converted)
    }
}

impl Default for AvroReader {
    fn default() -> Self {
        Self::new()
    }
}
