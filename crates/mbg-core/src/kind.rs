use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed set of field kinds a recipe may declare in `tipe`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum FieldKind {
    #[serde(rename = "uuid")]
    Uuid,
    #[serde(rename = "increment")]
    Sequence,
    #[serde(rename = "angka")]
    Numeric,
    #[serde(rename = "nama_lengkap")]
    FullName,
    #[serde(rename = "nama_depan")]
    FirstName,
    #[serde(rename = "nama_belakang")]
    LastName,
    #[serde(rename = "email")]
    Email,
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
    Choice,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "tanggal")]
    Date,
    #[serde(rename = "waktu")]
    DateTime,
    #[serde(rename = "paragraf")]
    Paragraph,
    #[serde(rename = "kalimat")]
    Sentence,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "warna")]
    Color,
    #[serde(rename = "perusahaan")]
    Company,
    #[serde(rename = "referensi")]
    Reference,
    #[serde(rename = "regex")]
    Pattern,
}

impl FieldKind {
    pub const ALL: [FieldKind; 23] = [
        Self::Uuid,
        Self::Sequence,
        Self::Numeric,
        Self::FullName,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::City,
        Self::Province,
        Self::PostalCode,
        Self::Choice,
        Self::Boolean,
        Self::Date,
        Self::DateTime,
        Self::Paragraph,
        Self::Sentence,
        Self::Url,
        Self::Color,
        Self::Company,
        Self::Reference,
        Self::Pattern,
    ];

    /// Parse the `tipe` tag used in recipe documents.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Sequence => "increment",
            Self::Numeric => "angka",
            Self::FullName => "nama_lengkap",
            Self::FirstName => "nama_depan",
            Self::LastName => "nama_belakang",
            Self::Email => "email",
            Self::Phone => "telepon",
            Self::Address => "alamat",
            Self::City => "kota",
            Self::Province => "provinsi",
            Self::PostalCode => "kodepos",
            Self::Choice => "pilihan",
            Self::Boolean => "boolean",
            Self::Date => "tanggal",
            Self::DateTime => "waktu",
            Self::Paragraph => "paragraf",
            Self::Sentence => "kalimat",
            Self::Url => "url",
            Self::Color => "warna",
            Self::Company => "perusahaan",
            Self::Reference => "referensi",
            Self::Pattern => "regex",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_parse() {
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FieldKind::parse("nasi_goreng"), None);
    }

    #[test]
    fn serde_tag_matches_as_str() {
        for kind in FieldKind::ALL {
            let encoded = serde_json::to_value(kind).expect("serialize kind");
            assert_eq!(encoded, serde_json::Value::String(kind.as_str().to_string()));
        }
    }
}
