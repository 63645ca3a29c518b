use std::path::PathBuf;

use thiserror::Error;

use mbg_core::RecipeError;

/// Errors emitted by the generation engine and the serializers.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Recipe(#[from] RecipeError),
    #[error("recipe failed validation: {}", .0.join("; "))]
    ValidationFailure(Vec<String>),
    #[error("invalid record count: {0}")]
    InvalidCount(String),
    #[error("destination \"{}\" already exists; pass overwrite to replace it", .0.display())]
    DestinationExists(PathBuf),
    #[error("unknown output format \"{0}\"; expected json, csv, or sql")]
    UnknownFormat(String),
    #[error("sql output requires a target table name")]
    MissingTarget,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
