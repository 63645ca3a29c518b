use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;

use mbg_core::field::parse_date;
use mbg_core::{FieldDefinition, FieldSpec, FieldValue, Recipe, Record};

use crate::model::{RecordIssue, ValidationReport};

static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("Invalid uuid pattern")
});
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+62|0)\d{9,12}$").expect("Invalid phone pattern"));
static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date pattern"));

/// Result of checking a batch against its recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub passed: bool,
    pub report: ValidationReport,
}

/// Re-check generated records against the recipe they were generated from.
///
/// Per-record problems never abort the check; they are collected into the
/// report. An empty value short-circuits the remaining checks for its field.
pub fn check_records(records: &[Record], recipe: &Recipe) -> CheckOutcome {
    let mut report = ValidationReport {
        total_records: records.len() as u64,
        ..ValidationReport::default()
    };

    for (index, record) in records.iter().enumerate() {
        let mut problems = Vec::new();
        for field in &recipe.fields {
            let Some(value) = record.get(&field.name).filter(|value| !value.is_empty()) else {
                report.record_empty(&field.name);
                problems.push(format!("{}: empty value", field.name));
                continue;
            };
            if let Some(problem) = type_problem(field, value) {
                problems.push(problem);
            }
            if let Some(problem) = constraint_problem(field, value) {
                problems.push(problem);
            }
        }

        if problems.is_empty() {
            report.valid_records += 1;
        } else {
            report.invalid_records += 1;
            report.issues.push(RecordIssue { index, problems });
        }
    }

    CheckOutcome {
        passed: report.passed(),
        report,
    }
}

fn type_problem(field: &FieldDefinition, value: &FieldValue) -> Option<String> {
    let name = &field.name;
    let ok = match &field.spec {
        FieldSpec::Uuid => matches_text(value, &UUID_V4),
        FieldSpec::Email { .. } => matches_text(value, &EMAIL),
        FieldSpec::Phone => matches_text(value, &PHONE),
        FieldSpec::Date { .. } => matches_text(value, &DATE),
        FieldSpec::DateTime { .. } => value
            .as_str()
            .is_some_and(|text| DateTime::parse_from_rfc3339(text).is_ok()),
        FieldSpec::Sequence { .. } | FieldSpec::Numeric { .. } => value.is_number(),
        FieldSpec::Boolean { .. } => value.as_bool().is_some(),
        FieldSpec::Choice { .. } | FieldSpec::Unrecognized { .. } => true,
        _ => value.as_str().is_some() || value.is_number(),
    };
    if ok {
        return None;
    }
    Some(format!(
        "{name}: \"{value}\" is not a valid {} value",
        field.spec.tag()
    ))
}

fn constraint_problem(field: &FieldDefinition, value: &FieldValue) -> Option<String> {
    let name = &field.name;
    match &field.spec {
        FieldSpec::Numeric { min, max, .. } => {
            let number = value.as_f64()?;
            if let Some(min) = min.filter(|min| number < *min) {
                return Some(format!("{name}: {value} is below the minimum {min}"));
            }
            if let Some(max) = max.filter(|max| number > *max) {
                return Some(format!("{name}: {value} is above the maximum {max}"));
            }
            None
        }
        FieldSpec::Choice { options } => {
            if options.iter().any(|option| same_value(option, value)) {
                None
            } else {
                Some(format!("{name}: \"{value}\" is not one of the declared options"))
            }
        }
        FieldSpec::Date { from, to } => {
            let date = value.as_str().and_then(parse_date)?;
            if from.is_some_and(|from| date < from) || to.is_some_and(|to| date > to) {
                return Some(format!("{name}: {date} is outside the declared range"));
            }
            None
        }
        FieldSpec::DateTime { from, to } => {
            let instant = value.as_str().and_then(|text| DateTime::parse_from_rfc3339(text).ok())?;
            if from.is_some_and(|from| instant < from) || to.is_some_and(|to| instant > to) {
                return Some(format!("{name}: \"{value}\" is outside the declared range"));
            }
            None
        }
        _ => None,
    }
}

fn matches_text(value: &FieldValue, pattern: &Regex) -> bool {
    value.as_str().is_some_and(|text| pattern.is_match(text))
}

/// Equality that treats `1` and `1.0` as the same number.
fn same_value(option: &FieldValue, value: &FieldValue) -> bool {
    match (option.as_f64(), value.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => option == value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe::from_json(
            r#"{"menu": "siswa", "bahan": {
                "id": {"tipe": "uuid"},
                "umur": {"tipe": "angka", "min": 6, "max": 12},
                "kelas": {"tipe": "pilihan", "opsi": ["1A", "1B", 2]},
                "lahir": {"tipe": "tanggal", "dari": "2013-01-01", "sampai": "2019-12-31"}
            }}"#,
        )
        .expect("compile recipe")
    }

    fn record(id: &str, umur: FieldValue, kelas: FieldValue, lahir: &str) -> Record {
        [
            ("id", FieldValue::from(id)),
            ("umur", umur),
            ("kelas", kelas),
            ("lahir", FieldValue::from(lahir)),
        ]
        .into_iter()
        .collect()
    }

    const ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

    #[test]
    fn conforming_batch_passes() {
        let records = vec![
            record(ID, FieldValue::Int(7), "1A".into(), "2015-03-01"),
            record(ID, FieldValue::Float(12.0), FieldValue::Float(2.0), "2019-12-31"),
        ];
        let outcome = check_records(&records, &recipe());
        assert!(outcome.passed, "{:?}", outcome.report.issues);
        assert_eq!(outcome.report.valid_records, 2);
        assert_eq!(outcome.report.quality(), 100.0);
    }

    #[test]
    fn empty_value_is_counted_and_short_circuits() {
        let records = vec![record("", FieldValue::Int(7), "1A".into(), "2015-03-01")];
        let outcome = check_records(&records, &recipe());
        assert!(!outcome.passed);
        assert_eq!(outcome.report.empty_field_counts.get("id"), Some(&1));
        assert_eq!(outcome.report.issues[0].problems, vec!["id: empty value"]);
    }

    #[test]
    fn type_and_constraint_problems_are_collected() {
        let records = vec![record(
            "not-a-uuid",
            FieldValue::Int(40),
            "3C".into(),
            "2020-01-01",
        )];
        let outcome = check_records(&records, &recipe());
        assert_eq!(outcome.report.invalid_records, 1);
        let problems = &outcome.report.issues[0].problems;
        assert_eq!(problems.len(), 4, "{problems:?}");
        assert!(problems[0].starts_with("id:"));
        assert!(problems[1].contains("above the maximum"));
        assert!(problems[2].contains("not one of the declared options"));
        assert!(problems[3].contains("outside the declared range"));
    }

    #[test]
    fn type_failure_does_not_hide_a_range_violation() {
        let records = vec![record(ID, FieldValue::Int(7), "1A".into(), "2024-06-01T00:00:00Z")];
        let outcome = check_records(&records, &recipe());
        let problems = &outcome.report.issues[0].problems;
        assert_eq!(problems.len(), 2, "{problems:?}");
        assert!(problems[0].starts_with("lahir:"));
        assert!(problems[1].contains("outside the declared range"));
    }

    #[test]
    fn missing_field_counts_as_empty() {
        let records = vec![Record::new()];
        let outcome = check_records(&records, &recipe());
        assert_eq!(outcome.report.empty_field_counts.len(), 4);
        assert_eq!(outcome.report.issues[0].problems.len(), 4);
    }
}
