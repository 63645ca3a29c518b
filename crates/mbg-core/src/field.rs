use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::kind::FieldKind;
use crate::value::FieldValue;

/// Typed field declaration, keyed by the recipe's `tipe` tag. Each variant
/// carries only the constraints its kind understands; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "tipe")]
pub enum FieldSpec {
    #[serde(rename = "uuid")]
    Uuid,
    #[serde(rename = "increment")]
    Sequence {
        /// First value of the sequence (default 1).
        #[serde(default, rename = "mulai", skip_serializing_if = "Option::is_none")]
        start: Option<i64>,
    },
    #[serde(rename = "angka")]
    Numeric {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        /// Decimal places; 0 produces integers.
        #[serde(default, rename = "desimal", skip_serializing_if = "Option::is_none")]
        decimals: Option<u32>,
    },
    #[serde(rename = "nama_lengkap")]
    FullName,
    #[serde(rename = "nama_depan")]
    FirstName,
    #[serde(rename = "nama_belakang")]
    LastName,
    #[serde(rename = "email")]
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        domain: Option<String>,
    },
    #[serde(rename = "telepon")]
    Phone,
    #[serde(rename = "alamat")]
    Address,
    #[serde(rename = "kota")]
    City,
    #[serde(rename = "provinsi")]
    Province,
    #[serde(rename = "kodepos")]
    PostalCode,
    #[serde(rename = "pilihan")]
    Choice {
        #[serde(default, rename = "opsi")]
        options: Vec<FieldValue>,
    },
    #[serde(rename = "boolean")]
    Boolean {
        /// Probability of `true`, in `[0, 1]` (default 0.5).
        #[serde(default, rename = "rasio_benar", skip_serializing_if = "Option::is_none")]
        true_ratio: Option<f64>,
    },
    #[serde(rename = "tanggal")]
    Date {
        #[serde(
            default,
            rename = "dari",
            deserialize_with = "lenient::date",
            skip_serializing_if = "Option::is_none"
        )]
        #[schemars(with = "Option<String>")]
        from: Option<NaiveDate>,
        #[serde(
            default,
            rename = "sampai",
            deserialize_with = "lenient::date",
            skip_serializing_if = "Option::is_none"
        )]
        #[schemars(with = "Option<String>")]
        to: Option<NaiveDate>,
    },
    #[serde(rename = "waktu")]
    DateTime {
        #[serde(
            default,
            rename = "dari",
            deserialize_with = "lenient::instant",
            skip_serializing_if = "Option::is_none"
        )]
        #[schemars(with = "Option<String>")]
        from: Option<DateTime<Utc>>,
        #[serde(
            default,
            rename = "sampai",
            deserialize_with = "lenient::instant",
            skip_serializing_if = "Option::is_none"
        )]
        #[schemars(with = "Option<String>")]
        to: Option<DateTime<Utc>>,
    },
    #[serde(rename = "paragraf")]
    Paragraph {
        /// Sentences per paragraph (default 5).
        #[serde(default, rename = "kalimat", skip_serializing_if = "Option::is_none")]
        sentences: Option<u32>,
    },
    #[serde(rename = "kalimat")]
    Sentence,
    #[serde(rename = "url")]
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        domain: Option<String>,
    },
    #[serde(rename = "warna")]
    Color,
    #[serde(rename = "perusahaan")]
    Company,
    #[serde(rename = "referensi")]
    Reference {
        /// Recipe or table the value points at.
        #[serde(default, rename = "dari", skip_serializing_if = "Option::is_none")]
        from: Option<String>,
    },
    #[serde(rename = "regex")]
    Pattern {
        #[serde(default, rename = "pola", skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
    },
    /// Declaration that could not be typed. Only reachable when validation
    /// was skipped; generates null.
    #[serde(skip)]
    Unrecognized { tipe: Option<String> },
}

impl FieldSpec {
    pub fn kind(&self) -> Option<FieldKind> {
        let kind = match self {
            FieldSpec::Uuid => FieldKind::Uuid,
            FieldSpec::Sequence { .. } => FieldKind::Sequence,
            FieldSpec::Numeric { .. } => FieldKind::Numeric,
            FieldSpec::FullName => FieldKind::FullName,
            FieldSpec::FirstName => FieldKind::FirstName,
            FieldSpec::LastName => FieldKind::LastName,
            FieldSpec::Email { .. } => FieldKind::Email,
            FieldSpec::Phone => FieldKind::Phone,
            FieldSpec::Address => FieldKind::Address,
            FieldSpec::City => FieldKind::City,
            FieldSpec::Province => FieldKind::Province,
            FieldSpec::PostalCode => FieldKind::PostalCode,
            FieldSpec::Choice { .. } => FieldKind::Choice,
            FieldSpec::Boolean { .. } => FieldKind::Boolean,
            FieldSpec::Date { .. } => FieldKind::Date,
            FieldSpec::DateTime { .. } => FieldKind::DateTime,
            FieldSpec::Paragraph { .. } => FieldKind::Paragraph,
            FieldSpec::Sentence => FieldKind::Sentence,
            FieldSpec::Url { .. } => FieldKind::Url,
            FieldSpec::Color => FieldKind::Color,
            FieldSpec::Company => FieldKind::Company,
            FieldSpec::Reference { .. } => FieldKind::Reference,
            FieldSpec::Pattern { .. } => FieldKind::Pattern,
            FieldSpec::Unrecognized { .. } => return None,
        };
        Some(kind)
    }

    /// Human-readable kind tag, including the raw tag of unrecognized fields.
    pub fn tag(&self) -> &str {
        match (self.kind(), self) {
            (Some(kind), _) => kind.as_str(),
            (None, FieldSpec::Unrecognized { tipe: Some(tipe) }) => tipe.as_str(),
            (None, _) => "undefined",
        }
    }
}

/// A named field of a compiled recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub spec: FieldSpec,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, spec: FieldSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }

    pub fn kind(&self) -> Option<FieldKind> {
        self.spec.kind()
    }
}

/// Why a raw `bahan` entry could not be typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldDecodeError {
    #[error("configuration is not an object")]
    NotAnObject,
    #[error("kind (\"tipe\") undefined")]
    MissingKind,
    #[error("field kind \"{0}\" is not available")]
    UnknownKind(String),
    #[error("invalid {kind} configuration: {message}")]
    InvalidConstraint { kind: FieldKind, message: String },
}

/// Type one raw `bahan` entry.
pub fn decode_field(value: &Value) -> Result<FieldSpec, FieldDecodeError> {
    let Value::Object(map) = value else {
        return Err(FieldDecodeError::NotAnObject);
    };

    let kind = match map.get("tipe") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => {
            return Err(FieldDecodeError::MissingKind);
        }
        Some(Value::String(tag)) if tag.is_empty() => return Err(FieldDecodeError::MissingKind),
        Some(Value::String(tag)) => {
            FieldKind::parse(tag).ok_or_else(|| FieldDecodeError::UnknownKind(tag.clone()))?
        }
        Some(other) => return Err(FieldDecodeError::UnknownKind(other.to_string())),
    };

    serde_json::from_value(value.clone()).map_err(|err| FieldDecodeError::InvalidConstraint {
        kind,
        message: err.to_string(),
    })
}

/// Parse a date bound. Accepts `YYYY-MM-DD` or a full timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_instant(raw).map(|instant| instant.date_naive()))
}

/// Parse an instant bound. Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`
/// (read as UTC), or a bare date (midnight UTC).
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Utc));
    }
    if let Ok(value) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(value.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|value| value.and_utc())
}

mod lenient {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|raw| {
            super::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
        })
        .transpose()
    }

    pub fn instant<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|raw| {
            super::parse_instant(&raw)
                .ok_or_else(|| D::Error::custom(format!("invalid datetime '{raw}'")))
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_constraints_by_kind() {
        let spec = decode_field(&json!({"tipe": "angka", "min": 1, "max": 9, "desimal": 2}))
            .expect("decode angka");
        assert_eq!(
            spec,
            FieldSpec::Numeric {
                min: Some(1.0),
                max: Some(9.0),
                decimals: Some(2),
            }
        );

        let spec = decode_field(&json!({"tipe": "increment", "mulai": 100})).expect("decode");
        assert_eq!(spec, FieldSpec::Sequence { start: Some(100) });
    }

    #[test]
    fn ignores_unknown_keys() {
        let spec = decode_field(&json!({"tipe": "uuid", "catatan": "primary key"}))
            .expect("decode uuid");
        assert_eq!(spec, FieldSpec::Uuid);
    }

    #[test]
    fn reports_missing_and_unknown_kinds() {
        assert_eq!(
            decode_field(&json!({"min": 1})),
            Err(FieldDecodeError::MissingKind)
        );
        assert_eq!(
            decode_field(&json!({"tipe": "rendang"})),
            Err(FieldDecodeError::UnknownKind("rendang".to_string()))
        );
        assert_eq!(decode_field(&json!("uuid")), Err(FieldDecodeError::NotAnObject));
    }

    #[test]
    fn rejects_wrongly_typed_constraints() {
        let result = decode_field(&json!({"tipe": "pilihan", "opsi": "a,b"}));
        assert!(matches!(
            result,
            Err(FieldDecodeError::InvalidConstraint {
                kind: FieldKind::Choice,
                ..
            })
        ));
    }

    #[test]
    fn accepts_lenient_date_bounds() {
        let spec = decode_field(&json!({
            "tipe": "waktu",
            "dari": "2024-01-01",
            "sampai": "2024-06-30T12:00:00Z"
        }))
        .expect("decode waktu");
        let FieldSpec::DateTime { from, to } = spec else {
            panic!("expected datetime spec");
        };
        assert_eq!(from.map(|v| v.to_rfc3339()), Some("2024-01-01T00:00:00+00:00".to_string()));
        assert_eq!(to.map(|v| v.to_rfc3339()), Some("2024-06-30T12:00:00+00:00".to_string()));
    }
}
