//! Recipe contracts for MBG.
//!
//! This crate defines the recipe document (`.resep.json`), the typed field
//! declarations a recipe compiles into, the scalar values generated records
//! are made of and the structural validation that runs before generation.

pub mod error;
pub mod field;
pub mod kind;
pub mod recipe;
pub mod validation;
pub mod value;

pub use error::{RecipeError, Result};
pub use field::{FieldDecodeError, FieldDefinition, FieldSpec, decode_field};
pub use kind::FieldKind;
pub use recipe::{Recipe, RecipeDocument, load_recipe};
pub use validation::{IssueSeverity, RecipeValidation, ValidationIssue, validate_recipe};
pub use value::{FieldValue, Record};

/// File suffix used by recipe documents.
pub const RECIPE_SUFFIX: &str = ".resep.json";
