//! Record generation for MBG recipes.
//!
//! Compiles a recipe into records through a registry of field-value
//! generators, checks the records against the recipe, and renders them as
//! JSON, CSV, or SQL insert scripts.

pub mod batch;
pub mod budget;
pub mod checks;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod locale;
pub mod model;
pub mod output;
pub mod pattern;

pub use checks::{CheckOutcome, check_records};
pub use engine::{GenerationEngine, RecordGenerator, parse_count, validate_count};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationResult, RecordIssue, ValidationReport};
pub use output::{
    CsvOptions, JsonOptions, OutputFormat, OutputOptions, RecordSerializer, SqlOptions,
    WriteOptions, WriteOutcome, serializer_for,
};
