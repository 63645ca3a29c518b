use mbg_core::Record;

use crate::errors::GenerationError;
use crate::output::{JsonOptions, OutputFormat, RecordSerializer};

/// Renders the batch as one JSON array of objects.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    options: JsonOptions,
}

impl JsonSerializer {
    pub fn new(options: JsonOptions) -> Self {
        Self { options }
    }
}

impl RecordSerializer for JsonSerializer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn serialize(&self, records: &[Record], _target: &str) -> Result<String, GenerationError> {
        let text = if self.options.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        Ok(text)
    }
}
