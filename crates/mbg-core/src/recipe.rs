use std::collections::BTreeMap;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RecipeError, Result};
use crate::field::{FieldDefinition, FieldSpec, FieldDecodeError, decode_field};

/// Recipe document as written in a `.resep.json` file.
///
/// `bahan` is kept untyped here so structural validation can report every
/// broken field instead of stopping at the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RecipeDocument {
    /// Menu (dataset) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    /// Delivery target; used as the table name for SQL output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sekolah: Option<String>,
    /// Field declarations, in output order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<BTreeMap<String, FieldSpec>>")]
    pub bahan: Option<Value>,
}

impl RecipeDocument {
    /// Parse recipe JSON text. Unknown top-level keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| RecipeError::ParseFailure(err.to_string()))
    }

    /// Dataset name, `"unknown"` when the recipe has no `menu`.
    pub fn name(&self) -> &str {
        non_blank(self.menu.as_deref()).unwrap_or("unknown")
    }

    /// Delivery target: `sekolah`, then `menu`, then `"data"`.
    pub fn target(&self) -> &str {
        non_blank(self.sekolah.as_deref())
            .or_else(|| non_blank(self.menu.as_deref()))
            .unwrap_or("data")
    }

    /// Raw field declarations when `bahan` is an object.
    pub fn field_entries(&self) -> Option<&Map<String, Value>> {
        self.bahan.as_ref().and_then(Value::as_object)
    }

    /// Type every declared field. Fields that cannot be typed are kept as
    /// [`FieldSpec::Unrecognized`] so unvalidated runs still produce a column.
    pub fn compile(&self) -> Result<Recipe> {
        let entries = self
            .field_entries()
            .filter(|entries| !entries.is_empty())
            .ok_or(RecipeError::NoFieldsDeclared)?;

        let fields = entries
            .iter()
            .map(|(name, raw)| {
                let spec = match decode_field(raw) {
                    Ok(spec) => spec,
                    Err(FieldDecodeError::UnknownKind(tipe)) => FieldSpec::Unrecognized {
                        tipe: Some(tipe),
                    },
                    Err(FieldDecodeError::InvalidConstraint { kind, .. }) => {
                        FieldSpec::Unrecognized {
                            tipe: Some(kind.as_str().to_string()),
                        }
                    }
                    Err(_) => FieldSpec::Unrecognized { tipe: None },
                };
                FieldDefinition::new(name.clone(), spec)
            })
            .collect();

        Ok(Recipe {
            name: self.name().to_string(),
            target: self.target().to_string(),
            fields,
        })
    }
}

/// Compiled recipe: the schema records are generated against.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub target: String,
    pub fields: Vec<FieldDefinition>,
}

impl Recipe {
    /// Parse and compile recipe JSON text without validating it.
    pub fn from_json(raw: &str) -> Result<Self> {
        RecipeDocument::from_json(raw)?.compile()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

/// Read and parse a recipe file.
pub fn load_recipe(path: &Path) -> Result<RecipeDocument> {
    if !path.exists() {
        return Err(RecipeError::NotFound(path.to_path_buf()));
    }
    let content =
        std::fs::read_to_string(path).map_err(|_| RecipeError::NotFound(path.to_path_buf()))?;
    RecipeDocument::from_json(&content)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
