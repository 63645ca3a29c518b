use std::io;

use mbg_core::Record;

use crate::errors::GenerationError;
use crate::output::{CsvOptions, OutputFormat, RecordSerializer};

/// Delimited text. Columns follow the first record's keys; a value is quoted
/// only when it holds the delimiter, a quote, or a line break, and embedded
/// quotes are doubled. Null renders as an empty field.
#[derive(Debug, Clone, Default)]
pub struct CsvSerializer {
    options: CsvOptions,
}

impl CsvSerializer {
    pub fn new(options: CsvOptions) -> Self {
        Self { options }
    }
}

impl RecordSerializer for CsvSerializer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn serialize(&self, records: &[Record], _target: &str) -> Result<String, GenerationError> {
        let Some(first) = records.first() else {
            return Ok(String::new());
        };
        let columns: Vec<&str> = first.keys().collect();

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.options.delimiter)
            .quote_style(csv::QuoteStyle::Necessary)
            .has_headers(false)
            .from_writer(Vec::new());

        if self.options.header {
            writer.write_record(&columns)?;
        }
        for record in records {
            let row: Vec<String> = columns
                .iter()
                .map(|column| {
                    record
                        .get(column)
                        .map(ToString::to_string)
                        .unwrap_or_default()
                })
                .collect();
            writer.write_record(&row)?;
        }

        writer.flush()?;
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        String::from_utf8(bytes)
            .map_err(|err| GenerationError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}
