use regex::Regex;
use serde::Serialize;

use crate::field::{FieldDecodeError, FieldSpec, decode_field};
use crate::recipe::RecipeDocument;
use crate::value::FieldValue;

/// Boolean ratios outside this band are flagged as a data-quality risk.
const MIN_SAFE_TRUE_RATIO: f64 = 0.01;
const MAX_SAFE_TRUE_RATIO: f64 = 0.99;

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with its location in the recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(code: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::Error, code, path, message)
    }

    pub fn warning(
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(IssueSeverity::Warning, code, path, message)
    }

    fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Outcome of structural recipe validation. Warnings never block generation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeValidation {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl RecipeValidation {
    /// Returns true when there are no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|issue| issue.message.clone()).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|issue| issue.message.clone()).collect()
    }

    fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }
}

/// Validate a recipe document's field declarations.
///
/// Every field is checked; a broken field adds an error and validation moves
/// on to the next one. Fields at risk of producing empty data are counted
/// into a single warning.
pub fn validate_recipe(document: &RecipeDocument) -> RecipeValidation {
    let mut report = RecipeValidation::default();

    let Some(entries) = document.field_entries() else {
        report.push_error(ValidationIssue::error(
            "no_fields",
            "/bahan",
            "recipe has no \"bahan\" object; nothing to generate",
        ));
        return report;
    };

    if entries.is_empty() {
        report.push_error(ValidationIssue::error(
            "no_fields",
            "/bahan",
            "recipe \"bahan\" declares no fields",
        ));
        return report;
    }

    let mut at_risk = 0_usize;
    for (name, raw) in entries {
        let path = format!("/bahan/{name}");
        let spec = match decode_field(raw) {
            Ok(spec) => spec,
            Err(err) => {
                let code = match &err {
                    FieldDecodeError::NotAnObject => "invalid_config",
                    FieldDecodeError::MissingKind => "kind_undefined",
                    FieldDecodeError::UnknownKind(_) => "unknown_kind",
                    FieldDecodeError::InvalidConstraint { .. } => {
                        "invalid_constraint"
                    }
                };
                report.push_error(ValidationIssue::error(
                    code,
                    path,
                    format!("field \"{name}\": {err}"),
                ));
                continue;
            }
        };

        validate_constraints(name, &path, &spec, &mut report);

        if has_empty_data_risk(&spec) {
            at_risk += 1;
        }
    }

    if at_risk > 0 {
        report.push_warning(ValidationIssue::warning(
            "empty_data_risk",
            "/bahan",
            format!(
                "found {at_risk} field(s) that may produce empty data; review the recipe"
            ),
        ));
    }

    report
}

fn validate_constraints(name: &str, path: &str, spec: &FieldSpec, report: &mut RecipeValidation) {
    match spec {
        FieldSpec::Choice { options } if options.is_empty() => {
            report.push_error(ValidationIssue::error(
                "choice_without_options",
                format!("{path}/opsi"),
                format!("field \"{name}\": kind pilihan requires a non-empty \"opsi\" array"),
            ));
        }
        FieldSpec::Numeric {
            min: Some(min),
            max: Some(max),
            ..
        } if min > max => {
            report.push_error(ValidationIssue::error(
                "min_above_max",
                path,
                format!("field \"{name}\": min ({min}) must not exceed max ({max})"),
            ));
        }
        FieldSpec::Date {
            from: Some(from),
            to: Some(to),
        } if from > to => {
            report.push_error(ValidationIssue::error(
                "date_range_inverted",
                path,
                format!("field \"{name}\": date \"dari\" ({from}) is after \"sampai\" ({to})"),
            ));
        }
        FieldSpec::DateTime {
            from: Some(from),
            to: Some(to),
        } if from > to => {
            report.push_error(ValidationIssue::error(
                "date_range_inverted",
                path,
                format!(
                    "field \"{name}\": datetime \"dari\" ({}) is after \"sampai\" ({})",
                    from.to_rfc3339(),
                    to.to_rfc3339()
                ),
            ));
        }
        FieldSpec::Reference { from } if from.as_deref().is_none_or(str::is_empty) => {
            report.push_error(ValidationIssue::error(
                "reference_without_source",
                format!("{path}/dari"),
                format!("field \"{name}\": kind referensi requires \"dari\""),
            ));
        }
        FieldSpec::Pattern { pattern } => match pattern.as_deref() {
            None | Some("") => report.push_error(ValidationIssue::error(
                "pattern_missing",
                format!("{path}/pola"),
                format!("field \"{name}\": kind regex requires \"pola\""),
            )),
            Some(pattern) => {
                if let Err(err) = Regex::new(pattern) {
                    report.push_error(ValidationIssue::error(
                        "pattern_invalid",
                        format!("{path}/pola"),
                        format!("field \"{name}\": pattern does not compile: {err}"),
                    ));
                }
            }
        },
        _ => {}
    }
}

fn has_empty_data_risk(spec: &FieldSpec) -> bool {
    match spec {
        FieldSpec::Choice { options } => options.iter().any(FieldValue::is_empty),
        FieldSpec::Boolean {
            true_ratio: Some(ratio),
        } => !(MIN_SAFE_TRUE_RATIO..=MAX_SAFE_TRUE_RATIO).contains(ratio),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(raw: &str) -> RecipeValidation {
        let document = RecipeDocument::from_json(raw).expect("parse recipe");
        validate_recipe(&document)
    }

    #[test]
    fn accepts_well_formed_recipe() {
        let report = validate(
            r#"{"menu": "m", "bahan": {
                "id": {"tipe": "uuid"},
                "umur": {"tipe": "angka", "min": 17, "max": 60},
                "kode": {"tipe": "regex", "pola": "[A-Z]{3}-\\d{4}"}
            }}"#,
        );
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn keeps_checking_after_a_broken_field() {
        let report = validate(
            r#"{"bahan": {
                "a": {"min": 1},
                "b": {"tipe": "soto"},
                "c": {"tipe": "angka", "min": 10, "max": 1},
                "d": {"tipe": "pilihan", "opsi": []}
            }}"#,
        );
        let codes: Vec<&str> = report.errors.iter().map(|issue| issue.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["kind_undefined", "unknown_kind", "min_above_max", "choice_without_options"]
        );
        assert!(report.errors[1].message.contains("soto"));
    }

    #[test]
    fn flags_inverted_date_ranges() {
        let report = validate(
            r#"{"bahan": {
                "lahir": {"tipe": "tanggal", "dari": "2024-12-31", "sampai": "2024-01-01"},
                "login": {"tipe": "waktu", "dari": "2024-02-01T00:00:00Z", "sampai": "2024-01-01T00:00:00Z"}
            }}"#,
        );
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().all(|e| e.code == "date_range_inverted"));
    }

    #[test]
    fn reference_and_pattern_need_their_sources() {
        let report = validate(
            r#"{"bahan": {
                "user_id": {"tipe": "referensi"},
                "kode": {"tipe": "regex"},
                "rusak": {"tipe": "regex", "pola": "([a-z"}
            }}"#,
        );
        let codes: Vec<&str> = report.errors.iter().map(|issue| issue.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["reference_without_source", "pattern_missing", "pattern_invalid"]
        );
    }

    #[test]
    fn risk_warning_counts_fields_without_blocking() {
        let report = validate(
            r#"{"bahan": {
                "status": {"tipe": "pilihan", "opsi": ["aktif", "", null]},
                "vip": {"tipe": "boolean", "rasio_benar": 0.001},
                "aktif": {"tipe": "boolean", "rasio_benar": 0.5}
            }}"#,
        );
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("found 2 field(s)"));
    }

    #[test]
    fn missing_bahan_is_an_error() {
        let report = validate(r#"{"menu": "kosong"}"#);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].code, "no_fields");
    }
}
