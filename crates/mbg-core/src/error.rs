use std::path::PathBuf;

use thiserror::Error;

/// Recipe-level failures. Any of these is fatal to a run.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The recipe file does not exist or cannot be read.
    #[error("recipe file \"{}\" not found", .0.display())]
    NotFound(PathBuf),
    /// The recipe text is not a well-formed recipe document.
    #[error("recipe is not a valid .resep.json document: {0}")]
    ParseFailure(String),
    /// `bahan` is missing, not an object, or empty.
    #[error("recipe has no \"bahan\" fields; nothing to generate")]
    NoFieldsDeclared,
}

/// Convenience alias for results returned by recipe operations.
pub type Result<T> = std::result::Result<T, RecipeError>;
