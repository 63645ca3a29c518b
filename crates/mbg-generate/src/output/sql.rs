use mbg_core::{FieldValue, Record};

use crate::errors::GenerationError;
use crate::output::{OutputFormat, RecordSerializer, SqlOptions};

/// Batched `INSERT` script for one table, preceded by a comment header.
#[derive(Debug, Clone, Default)]
pub struct SqlSerializer {
    options: SqlOptions,
}

impl SqlSerializer {
    pub fn new(options: SqlOptions) -> Self {
        Self { options }
    }

    fn rows_per_statement(&self, total: usize) -> usize {
        match self.options.batch_size {
            Some(size) if size > 0 => size,
            _ => total.max(1),
        }
    }
}

impl RecordSerializer for SqlSerializer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Sql
    }

    fn serialize(&self, records: &[Record], target: &str) -> Result<String, GenerationError> {
        let table = target.trim();
        if table.is_empty() {
            return Err(GenerationError::MissingTarget);
        }

        let mut out = format!(
            "-- Generated by MBG\n-- Table: {table}\n-- Records: {}\n",
            records.len()
        );
        let Some(first) = records.first() else {
            return Ok(out);
        };
        let columns: Vec<&str> = first.keys().collect();
        let column_list = columns.join(", ");

        for chunk in records.chunks(self.rows_per_statement(records.len())) {
            let rows: Vec<String> = chunk
                .iter()
                .map(|record| {
                    let values: Vec<String> = columns
                        .iter()
                        .map(|column| sql_literal(record.get(column).unwrap_or(&FieldValue::Null)))
                        .collect();
                    format!("  ({})", values.join(", "))
                })
                .collect();
            out.push_str(&format!(
                "\nINSERT INTO {table} ({column_list}) VALUES\n{};\n",
                rows.join(",\n")
            ));
        }

        Ok(out)
    }
}

/// SQL literal for one value. Strings are single-quoted with embedded quotes
/// doubled; non-finite floats have no literal and render as `NULL`.
pub fn sql_literal(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "NULL".to_string(),
        FieldValue::Bool(true) => "TRUE".to_string(),
        FieldValue::Bool(false) => "FALSE".to_string(),
        FieldValue::Int(value) => value.to_string(),
        FieldValue::Float(value) if value.is_finite() => value.to_string(),
        FieldValue::Float(_) => "NULL".to_string(),
        FieldValue::Text(value) => format!("'{}'", value.replace('\'', "''")),
    }
}
