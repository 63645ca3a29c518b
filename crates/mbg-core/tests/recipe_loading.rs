use std::fs;
use std::path::{Path, PathBuf};

use mbg_core::{FieldKind, RecipeError, load_recipe, validate_recipe};

fn recipes_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../recipes")
}

#[test]
fn sample_recipes_load_and_validate() {
    for name in ["users.resep.json", "produk.resep.json"] {
        let document = load_recipe(&recipes_dir().join(name)).expect("load recipe");
        let validation = validate_recipe(&document);
        assert!(
            validation.is_valid(),
            "{name} errors: {:?}",
            validation.error_messages()
        );
        assert!(validation.warnings.is_empty());
    }
}

#[test]
fn compiled_sample_covers_declared_kinds() {
    let document = load_recipe(&recipes_dir().join("produk.resep.json")).expect("load recipe");
    let recipe = document.compile().expect("compile recipe");

    assert_eq!(recipe.name, "produk");
    assert_eq!(recipe.target, "products");
    assert_eq!(recipe.fields.len(), 12);
    assert_eq!(recipe.fields[0].kind(), Some(FieldKind::Sequence));
    assert_eq!(recipe.fields[1].kind(), Some(FieldKind::Pattern));
}

#[test]
fn broken_json_file_is_a_parse_failure() {
    let path = std::env::temp_dir().join("mbg_core_broken.resep.json");
    fs::write(&path, "{ \"menu\": \"rusak\", ").expect("write broken recipe");

    let err = load_recipe(&path).expect_err("broken recipe");
    assert!(matches!(err, RecipeError::ParseFailure(_)));

    let _ = fs::remove_file(&path);
}
