//! Core types for SiteDesk
//!
//! Backend records are kept as loosely typed JSON maps: every page only ever
//! projects them into display strings, so there is no per-entity struct.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// Records
// ============================================================================

/// One entity record as returned by a collection endpoint
pub type Record = Map<String, Value>;

/// Server-assigned record identifier
///
/// Kept as the string the table displays, since the selected row is
/// captured from rendered cells rather than from the typed record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create an identifier from its display form (surrounding whitespace trimmed)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Identifier as it appears in URLs and cells
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

// ============================================================================
// Projections
// ============================================================================

/// Render a JSON value the way a table cell shows it
///
/// Strings are shown verbatim, numbers and booleans in their JSON form,
/// `null` as an empty cell. Objects show their `name` member if present.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => map.get("name").map(display_value).unwrap_or_default(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Follow a dotted path (`["type", "name"]`) into a record
pub fn lookup_path<'a, S: AsRef<str>>(record: &'a Record, path: &[S]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = record.get(first.as_ref())?;
    for segment in rest {
        current = current.as_object()?.get(segment.as_ref())?;
    }
    Some(current)
}

/// Format a backend timestamp or date as `dd.mm.yyyy`
///
/// Accepts RFC 3339 timestamps and plain `yyyy-mm-dd` dates. Anything else
/// is returned unchanged.
pub fn format_date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%d.%m.%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}

/// First `len` characters of a string (`"08:15:02.123456"` -> `"08:15:02"`)
pub fn time_prefix(raw: &str, len: usize) -> String {
    raw.chars().take(len).collect()
}

/// Label used for a record inside a selection control
///
/// Mirrors the reference option rule: `name`, then `login`, then `id`.
pub fn option_label(record: &Record) -> Option<String> {
    ["name", "login", "id"]
        .iter()
        .filter_map(|key| record.get(*key))
        .map(display_value)
        .find(|label| !label.is_empty())
}

// ============================================================================
// Status
// ============================================================================

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// Short label for terminal and status bar output
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Success => "ok",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("Cement")), "Cement");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!({"id": 1, "name": "Site A"})), "Site A");
        assert_eq!(display_value(&json!({"id": 1})), "");
    }

    #[test]
    fn test_lookup_path() {
        let rec = record(json!({
            "id": 7,
            "type": {"name": "Repair"},
            "status": null
        }));
        assert_eq!(lookup_path(&rec, &["type", "name"]), Some(&json!("Repair")));
        assert_eq!(lookup_path(&rec, &["status", "name"]), None);
        assert_eq!(lookup_path(&rec, &["missing"]), None);
        assert_eq!(lookup_path::<&str>(&rec, &[]), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05T14:30:00+03:00"), "05.03.2024");
        assert_eq!(format_date("2024-03-05T14:30:00.123456Z"), "05.03.2024");
        assert_eq!(format_date("2024-12-31"), "31.12.2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_time_prefix() {
        assert_eq!(time_prefix("08:15:02.123456", 8), "08:15:02");
        assert_eq!(time_prefix("08:15", 8), "08:15");
    }

    #[test]
    fn test_option_label_fallbacks() {
        assert_eq!(
            option_label(&record(json!({"id": 1, "name": "Foreman"}))),
            Some("Foreman".to_string())
        );
        assert_eq!(
            option_label(&record(json!({"id": 2, "login": "admin"}))),
            Some("admin".to_string())
        );
        assert_eq!(option_label(&record(json!({"id": 3}))), Some("3".to_string()));
        assert_eq!(option_label(&record(json!({}))), None);
    }

    #[test]
    fn test_record_id() {
        let id = RecordId::new(" 12 ");
        assert_eq!(id.as_str(), "12");
        assert_eq!(id.to_string(), "12");
        assert_eq!(RecordId::from(5u64).as_str(), "5");
        assert!(RecordId::new("").is_empty());
    }
}
