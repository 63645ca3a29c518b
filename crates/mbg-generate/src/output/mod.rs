use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use mbg_core::Record;

use crate::errors::GenerationError;

mod atomic;
pub mod csv;
pub mod json;
pub mod sql;

pub use atomic::write_bytes_atomic;

/// Output representations a batch can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Sql,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Sql];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Sql => "sql",
        }
    }

    /// File extension used for default output paths.
    pub fn extension(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| GenerationError::UnknownFormat(value.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOptions {
    /// Indented output when true, a single line otherwise.
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvOptions {
    pub delimiter: u8,
    /// Emit the first record's keys as a header row.
    pub header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqlOptions {
    /// Maximum rows per `INSERT` statement; `None` or 0 puts every row in
    /// one statement.
    pub batch_size: Option<usize>,
}

/// Per-format serializer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputOptions {
    pub json: JsonOptions,
    pub csv: CsvOptions,
    pub sql: SqlOptions,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Replace an existing destination file.
    pub overwrite: bool,
}

/// Result of writing a rendered batch to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub success: bool,
    pub path: PathBuf,
    pub byte_size: u64,
}

/// Renders a batch of records to one output representation.
pub trait RecordSerializer {
    fn format(&self) -> OutputFormat;

    fn serialize(&self, records: &[Record], target: &str) -> Result<String, GenerationError>;

    /// Render and write to `destination`, atomically. Fails with
    /// [`GenerationError::DestinationExists`] when the file exists and
    /// `options.overwrite` is off.
    fn write(
        &self,
        records: &[Record],
        target: &str,
        destination: &Path,
        options: &WriteOptions,
    ) -> Result<WriteOutcome, GenerationError> {
        if !options.overwrite && destination.exists() {
            return Err(GenerationError::DestinationExists(
                destination.to_path_buf(),
            ));
        }

        let text = self.serialize(records, target)?;
        write_bytes_atomic(destination, text.as_bytes())?;
        debug!(
            format = %self.format(),
            path = %destination.display(),
            records = records.len(),
            bytes = text.len(),
            "output written"
        );

        Ok(WriteOutcome {
            success: true,
            path: destination.to_path_buf(),
            byte_size: text.len() as u64,
        })
    }
}

/// Serializer for `format`, configured from `options`.
pub fn serializer_for(format: OutputFormat, options: &OutputOptions) -> Box<dyn RecordSerializer> {
    match format {
        OutputFormat::Json => Box::new(json::JsonSerializer::new(options.json.clone())),
        OutputFormat::Csv => Box::new(csv::CsvSerializer::new(options.csv.clone())),
        OutputFormat::Sql => Box::new(sql::SqlSerializer::new(options.sql.clone())),
    }
}
