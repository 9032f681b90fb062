//! Table column definitions
//!
//! A `Column` turns one backend record into the text of one table cell.
//! Projections are lossy and the selected row is later captured
//! from these strings, not from the typed record.

use serde::{Deserialize, Serialize};
use sitedesk_core::{Record, display_value, format_date, lookup_path, time_prefix};

// ============================================================================
// CellFormat
// ============================================================================

/// How a looked-up value is turned into cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "len")]
pub enum CellFormat {
    /// The value's display form
    #[default]
    Plain,
    /// A timestamp or date rendered as `dd.mm.yyyy`
    Date,
    /// The first N characters (`HH:MM:SS` out of a time with microseconds)
    TimePrefix(usize),
    /// A fixed run of asterisks, the value is never shown
    Masked(usize),
}

// ============================================================================
// Column
// ============================================================================

/// One table column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Key under which the selected row stores this cell
    pub key: String,

    /// Header text
    pub label: String,

    /// Path into the record (`["type", "name"]` for a nested reference)
    pub path: Vec<String>,

    /// Cell formatting
    #[serde(default)]
    pub format: CellFormat,
}

impl Column {
    /// Column showing the record field of the same name
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            path: vec![key.clone()],
            key,
            label: label.into(),
            format: CellFormat::Plain,
        }
    }

    /// Column showing a nested member, e.g. the `name` of a reference
    pub fn nested(key: impl Into<String>, label: impl Into<String>, path: &[&str]) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            path: path.iter().map(|s| s.to_string()).collect(),
            format: CellFormat::Plain,
        }
    }

    /// Column that never reveals its value
    pub fn masked(key: impl Into<String>, label: impl Into<String>, len: usize) -> Self {
        Self::new(key, label).with_format(CellFormat::Masked(len))
    }

    /// Set the cell format
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Project a record into this column's cell text
    ///
    /// Missing values, including absent nested references, render as an
    /// empty cell.
    pub fn project(&self, record: &Record) -> String {
        if let CellFormat::Masked(len) = self.format {
            return "*".repeat(len);
        }

        let Some(value) = lookup_path(record, &self.path) else {
            return String::new();
        };
        let text = display_value(value);

        match self.format {
            CellFormat::Plain | CellFormat::Masked(_) => text,
            CellFormat::Date => format_date(&text),
            CellFormat::TimePrefix(len) => time_prefix(&text, len),
        }
    }

    /// Whether this column reads through a nested reference
    pub fn is_nested(&self) -> bool {
        self.path.len() > 1
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_plain_column() {
        let col = Column::new("amount", "Amount");
        assert_eq!(col.project(&record(json!({"amount": "50.00"}))), "50.00");
        assert_eq!(col.project(&record(json!({"amount": 50}))), "50");
        assert_eq!(col.project(&record(json!({}))), "");
        assert!(!col.is_nested());
    }

    #[test]
    fn test_nested_reference_column() {
        let col = Column::nested("type", "Type", &["type", "name"]);
        assert!(col.is_nested());
        assert_eq!(
            col.project(&record(json!({"type": {"id": 2, "name": "Repair"}}))),
            "Repair"
        );
        assert_eq!(col.project(&record(json!({"type": null}))), "");
        assert_eq!(col.project(&record(json!({}))), "");
    }

    #[test]
    fn test_date_column() {
        let col = Column::new("date", "Date").with_format(CellFormat::Date);
        assert_eq!(
            col.project(&record(json!({"date": "2024-06-01T09:00:00Z"}))),
            "01.06.2024"
        );
    }

    #[test]
    fn test_time_prefix_column() {
        let col = Column::new("endTime", "End").with_format(CellFormat::TimePrefix(8));
        assert_eq!(
            col.project(&record(json!({"endTime": "17:45:10.552301"}))),
            "17:45:10"
        );
        assert_eq!(col.project(&record(json!({"endTime": null}))), "");
    }

    #[test]
    fn test_masked_column() {
        let col = Column::masked("password", "Password", 8);
        assert_eq!(col.project(&record(json!({"login": "admin"}))), "********");
    }
}
