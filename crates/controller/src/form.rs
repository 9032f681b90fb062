//! Form input state

use serde_json::{Map, Value};
use sitedesk_schema::FormField;

/// Current values of one add or edit form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<(String, String)>,
}

impl FormState {
    /// Empty inputs for the given fields
    pub fn for_fields(fields: &[FormField]) -> Self {
        Self {
            entries: fields
                .iter()
                .map(|f| (f.key.clone(), String::new()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an input; returns `false` when the form has no such field
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Empty one input; returns `false` when the form has no such field
    pub fn clear(&mut self, key: &str) -> bool {
        self.set(key, String::new())
    }

    /// Empty every input
    pub fn clear_all(&mut self) {
        for (_, value) in &mut self.entries {
            value.clear();
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON body with every input as a string, optionally trimmed
    pub fn to_payload(&self, trim: bool) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| {
                let v = if trim { v.trim() } else { v.as_str() };
                (k.clone(), Value::String(v.to_string()))
            })
            .collect();
        Value::Object(map)
    }
}
