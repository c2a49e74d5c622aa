//! # Form Store
//!
//! Process-lifetime mapping from a dialog's window name to the field values
//! it last saved. Saves replace the whole record; there is no merge, no
//! deletion and no persistence across runs.
//!
//! The store is an owned value (see [`crate::session::Session`]) rather than a
//! global, and is lent to the dialog host when a dialog opens or closes.
//!
//! ## Example
//!
//! ```rust
//! use bicca_core::form_store::{FieldValue, FormRecord, FormStore};
//!
//! let mut store = FormStore::new();
//! assert!(store.get("Foundation").is_empty());
//!
//! let mut record = FormRecord::new();
//! record.insert("pile_count".to_string(), FieldValue::Integer(12));
//! store.save("Foundation", record);
//!
//! assert_eq!(store.get("Foundation")["pile_count"], FieldValue::Integer(12));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single scalar entered into a form field.
///
/// Untagged so a [`FormRecord`] serializes as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Interpret raw text typed by the user.
    ///
    /// `true`/`false` become booleans, integer literals become integers,
    /// other numeric literals become numbers and everything else is kept as
    /// text. Never fails.
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "true" => return FieldValue::Bool(true),
            "false" => return FieldValue::Bool(false),
            _ => {}
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return FieldValue::Integer(i);
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => FieldValue::Number(n),
            _ => FieldValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Field name to value. No schema, no required fields.
pub type FormRecord = BTreeMap<String, FieldValue>;

#[derive(Debug, Clone)]
struct StoredRecord {
    fields: FormRecord,
    saved_at: DateTime<Utc>,
}

/// Window name to last-saved [`FormRecord`].
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    records: HashMap<String, StoredRecord>,
}

impl FormStore {
    /// Create an empty store.
    pub fn new() -> Self {
        FormStore::default()
    }

    /// Replace the record for `window_name` in full.
    pub fn save(&mut self, window_name: impl Into<String>, data: FormRecord) {
        self.records.insert(
            window_name.into(),
            StoredRecord {
                fields: data,
                saved_at: Utc::now(),
            },
        );
    }

    /// The last record saved for `window_name`, or an empty record.
    pub fn get(&self, window_name: &str) -> FormRecord {
        self.records
            .get(window_name)
            .map(|r| r.fields.clone())
            .unwrap_or_default()
    }

    /// When `window_name` was last saved.
    pub fn last_saved(&self, window_name: &str) -> Option<DateTime<Utc>> {
        self.records.get(window_name).map(|r| r.saved_at)
    }

    /// Number of window names with a saved record
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, FieldValue)]) -> FormRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_get_missing_is_empty() {
        let store = FormStore::new();
        assert!(store.get("Foundation").is_empty());
        assert!(store.last_saved("Foundation").is_none());
    }

    #[test]
    fn test_save_overwrites_without_merge() {
        let mut store = FormStore::new();
        store.save("Foundation", record(&[("x", FieldValue::Integer(1))]));
        store.save("Foundation", record(&[("y", FieldValue::Integer(2))]));

        let got = store.get("Foundation");
        assert_eq!(got, record(&[("y", FieldValue::Integer(2))]));
        assert!(!got.contains_key("x"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_save_matches_missing_key() {
        let mut store = FormStore::new();
        store.save("Financial", FormRecord::new());
        assert_eq!(store.get("Financial"), store.get("Maintenance"));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = FormStore::new();
        store.save("Foundation", record(&[("depth", FieldValue::Number(2.5))]));
        assert!(store.get("Sub-Structure").is_empty());
        assert!(store.last_saved("Foundation").is_some());
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(FieldValue::parse_lenient("true"), FieldValue::Bool(true));
        assert_eq!(FieldValue::parse_lenient(" 42 "), FieldValue::Integer(42));
        assert_eq!(FieldValue::parse_lenient("2.75"), FieldValue::Number(2.75));
        assert_eq!(
            FieldValue::parse_lenient("C30/37 concrete"),
            FieldValue::Text("C30/37 concrete".to_string())
        );
        assert_eq!(FieldValue::parse_lenient("NaN"), FieldValue::Text("NaN".to_string()));
    }

    #[test]
    fn test_record_serializes_flat() {
        let rec = record(&[
            ("count", FieldValue::Integer(3)),
            ("material", FieldValue::from("steel")),
        ]);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"count":3,"material":"steel"}"#);
    }
}
