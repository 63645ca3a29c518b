use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use serde_json::json;

use mbg_core::{FieldValue, Recipe, RecipeDocument, RecipeError};
use mbg_generate::{GenerateOptions, GenerationEngine, GenerationError, RecordGenerator};

fn recipe_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../recipes")
        .join(name)
}

fn document(value: serde_json::Value) -> RecipeDocument {
    serde_json::from_value(value).expect("parse recipe document")
}

fn seeded_engine(seed: u64) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions {
        economy: false,
        seed: Some(seed),
    })
}

#[test]
fn records_follow_declared_field_order() {
    let result = seeded_engine(1)
        .run_file(&recipe_path("users.resep.json"), 25)
        .expect("run users recipe");

    assert_eq!(result.records.len(), 25);
    assert_eq!(result.requested, 25);
    assert_eq!(result.menu, "users");
    assert_eq!(result.target, "users");

    let recipe = Recipe::from_json(
        &std::fs::read_to_string(recipe_path("users.resep.json")).expect("read recipe"),
    )
    .expect("compile recipe");
    let expected: Vec<&str> = recipe.field_names().collect();
    for record in &result.records {
        assert_eq!(record.keys().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn sample_recipes_pass_their_own_checks() {
    for name in ["users.resep.json", "produk.resep.json"] {
        let result = seeded_engine(2)
            .run_file(&recipe_path(name), 200)
            .expect("run recipe");
        let report = result.report.expect("report present outside economy mode");
        assert!(report.passed(), "{name}: {:?}", report.issues);
        assert_eq!(report.total_records, 200);
        assert_eq!(report.quality(), 100.0);
    }
}

#[test]
fn same_seed_gives_same_records() {
    let a = seeded_engine(42)
        .run_file(&recipe_path("produk.resep.json"), 10)
        .expect("run a");
    let b = seeded_engine(42)
        .run_file(&recipe_path("produk.resep.json"), 10)
        .expect("run b");
    assert_eq!(a.records, b.records);
}

#[test]
fn sequence_restarts_every_run() {
    let recipe = Recipe::from_json(r#"{"bahan": {"id": {"tipe": "increment", "mulai": 100}}}"#)
        .expect("compile recipe");
    let generator = RecordGenerator::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..2 {
        let records = generator.generate(&recipe, 5, &mut rng).expect("generate");
        let ids: Vec<i64> = records
            .iter()
            .filter_map(|record| record.get("id").and_then(FieldValue::as_i64))
            .collect();
        assert_eq!(ids, vec![100, 101, 102, 103, 104]);
    }
}

#[test]
fn zero_and_negative_counts_are_rejected() {
    let recipe = Recipe::from_json(r#"{"bahan": {"id": {"tipe": "uuid"}}}"#).expect("compile");
    let generator = RecordGenerator::new();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for count in [0, -5] {
        let err = generator
            .generate(&recipe, count, &mut rng)
            .expect_err("count must be rejected");
        assert!(matches!(err, GenerationError::InvalidCount(_)));
    }

    let err = seeded_engine(4)
        .run(&document(json!({"bahan": {"id": {"tipe": "uuid"}}})), 0)
        .expect_err("engine rejects zero");
    assert!(matches!(err, GenerationError::InvalidCount(_)));
}

#[test]
fn generated_values_honor_their_kinds() {
    let recipe = Recipe::from_json(
        r#"{"bahan": {
            "id": {"tipe": "uuid"},
            "skor": {"tipe": "angka", "min": -3, "max": 3},
            "harga": {"tipe": "angka", "min": 1.5, "max": 2.5, "desimal": 1},
            "status": {"tipe": "pilihan", "opsi": ["aktif", "nonaktif", 7]}
        }}"#,
    )
    .expect("compile recipe");
    let uuid_v4 = Regex::new(
        r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
    )
    .expect("regex");
    let options = [
        FieldValue::from("aktif"),
        FieldValue::from("nonaktif"),
        FieldValue::Int(7),
    ];

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let records = RecordGenerator::new()
        .generate(&recipe, 300, &mut rng)
        .expect("generate");
    for record in &records {
        let id = record.get("id").and_then(FieldValue::as_str).expect("uuid text");
        assert!(uuid_v4.is_match(id), "{id}");

        let skor = record.get("skor").and_then(FieldValue::as_i64).expect("integer");
        assert!((-3..=3).contains(&skor));

        let harga = record.get("harga").and_then(FieldValue::as_f64).expect("number");
        assert!((1.5..=2.5).contains(&harga));

        let status = record.get("status").expect("status");
        assert!(options.contains(status), "{status:?}");
    }
}

#[test]
fn pattern_fields_expand_templates() {
    let recipe = Recipe::from_json(
        r#"{"bahan": {"sku": {"tipe": "regex", "pola": "PRD-[A-Z]{3}-\\d{4}"}}}"#,
    )
    .expect("compile recipe");
    let shape = Regex::new(r"^PRD-[A-Z]{3}-\d{4}$").expect("regex");
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let records = RecordGenerator::new()
        .generate(&recipe, 50, &mut rng)
        .expect("generate");
    for record in &records {
        let sku = record.get("sku").and_then(FieldValue::as_str).expect("sku");
        assert!(shape.is_match(sku), "{sku}");
    }
}

#[test]
fn invalid_recipe_fails_unless_economy() {
    let doc = document(json!({
        "menu": "rusak",
        "bahan": {
            "id": {"tipe": "uuid"},
            "rasa": {"tipe": "sambal"},
            "umur": {"tipe": "angka", "min": 9, "max": 1}
        }
    }));

    let err = seeded_engine(7).run(&doc, 3).expect_err("validation failure");
    let GenerationError::ValidationFailure(messages) = err else {
        panic!("expected validation failure, got {err:?}");
    };
    assert_eq!(messages.len(), 2);

    let economy = GenerationEngine::new(GenerateOptions {
        economy: true,
        seed: Some(7),
    });
    let result = economy.run(&doc, 3).expect("economy run");
    assert!(result.report.is_none());
    assert!(result.warnings.is_empty());
    for record in &result.records {
        assert_eq!(record.get("rasa"), Some(&FieldValue::Null));
        let umur = record.get("umur").and_then(FieldValue::as_i64).expect("umur");
        assert!((1..=9).contains(&umur));
    }
}

#[test]
fn recipe_without_fields_is_a_recipe_error() {
    for economy in [false, true] {
        let engine = GenerationEngine::new(GenerateOptions {
            economy,
            seed: Some(8),
        });
        let err = engine
            .run(&document(json!({"menu": "kosong", "bahan": {}})), 5)
            .expect_err("no fields");
        assert!(matches!(
            err,
            GenerationError::Recipe(RecipeError::NoFieldsDeclared)
        ));
    }
}

#[test]
fn risk_warnings_are_returned_with_the_batch() {
    let doc = document(json!({
        "bahan": {"status": {"tipe": "pilihan", "opsi": ["aktif", ""]}}
    }));
    let result = seeded_engine(9).run(&doc, 20).expect("run");
    assert_eq!(result.warnings.len(), 1);
    assert!(result.batch_id.starts_with("MBG-"));
}

#[test]
fn missing_recipe_file_is_not_found() {
    let err = seeded_engine(10)
        .run_file(&recipe_path("tidak_ada.resep.json"), 5)
        .expect_err("missing file");
    assert!(matches!(err, GenerationError::Recipe(RecipeError::NotFound(_))));
}

#[test]
fn lone_bounds_outside_the_defaults_still_pass_checks() {
    let doc = document(json!({
        "menu": "batas",
        "bahan": {
            "n": {"tipe": "angka", "min": 200},
            "m": {"tipe": "angka", "max": -5},
            "d": {"tipe": "tanggal", "dari": "2030-01-01"},
            "w": {"tipe": "waktu", "sampai": "2019-01-01T00:00:00Z"}
        }
    }));
    let result = seeded_engine(1).run(&doc, 50).expect("run recipe");
    let report = result.report.expect("report present outside economy mode");
    assert!(report.passed(), "{:?}", report.issues);

    for record in &result.records {
        let n = record.get("n").and_then(FieldValue::as_i64).expect("n is an integer");
        let m = record.get("m").and_then(FieldValue::as_i64).expect("m is an integer");
        assert!(n >= 200, "{n}");
        assert!(m <= -5, "{m}");
        let d = record.get("d").and_then(FieldValue::as_str).expect("d is text");
        assert!(d >= "2030-01-01", "{d}");
        let w = record.get("w").and_then(FieldValue::as_str).expect("w is text");
        assert!(w <= "2019-01-01T00:00:00.000Z", "{w}");
    }
}
