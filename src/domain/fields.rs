//! The fixed set of company fields carried from an aggregate record into its
//! company projection, with the value used when a key is absent.

use serde_json::{Map, Value};

pub const CANDIDATES_FIELD: &str = "matched_candidates";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    EmptyString,
    EmptyList,
    EmptyMap,
    False,
}

impl FieldDefault {
    pub fn value(self) -> Value {
        match self {
            FieldDefault::EmptyString => Value::String(String::new()),
            FieldDefault::EmptyList => Value::Array(Vec::new()),
            FieldDefault::EmptyMap => Value::Object(Map::new()),
            FieldDefault::False => Value::Bool(false),
        }
    }
}

/// Company fields in output order. `id` is assigned separately.
pub const COMPANY_FIELDS: &[(&str, FieldDefault)] = &[
    ("företagsnamn", FieldDefault::EmptyString),
    ("företagswebb", FieldDefault::EmptyString),
    ("organisationsnummer", FieldDefault::EmptyString),
    ("sökterm", FieldDefault::EmptyList),
    ("annons_url", FieldDefault::EmptyString),
    ("titel", FieldDefault::EmptyString),
    ("beskrivning", FieldDefault::EmptyString),
    ("Techstack", FieldDefault::EmptyString),
    ("Produkt", FieldDefault::EmptyString),
    ("Företagsstruktur", FieldDefault::EmptyString),
    ("Ekonomi", FieldDefault::EmptyString),
    ("Ekonomisiffor", FieldDefault::EmptyMap),
    ("kontakter", FieldDefault::EmptyList),
    ("social_links", FieldDefault::EmptyMap),
    ("recruitmentcompany", FieldDefault::False),
    ("consultantcompany", FieldDefault::False),
];

/// Value of `key` in `record`, or the typed default when the key is absent.
/// A present key is returned as-is, even when it holds `null`.
pub fn field_or_default(record: &Map<String, Value>, key: &str, default: FieldDefault) -> Value {
    record.get(key).cloned().unwrap_or_else(|| default.value())
}

pub fn default_for(key: &str) -> Option<FieldDefault> {
    COMPANY_FIELDS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, default)| *default)
}
