//! Case-insensitive substring search across every field of a record.

use serde::Serialize;
use serde_json::Value;

/// Search needle applied to a collection view.
///
/// An empty term matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Creates a search term. The term is used as given, without trimming.
    pub fn new(term: impl Into<String>) -> Self {
        let raw = term.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// Returns the term as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if the term filters nothing.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns `true` if any top-level field of `record` contains the term.
    pub fn matches<R: Serialize>(&self, record: &R) -> bool {
        if self.is_empty() {
            return true;
        }
        match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map.values().any(|value| self.matches_value(value)),
            Ok(other) => self.matches_value(&other),
            Err(e) => {
                tracing::warn!("Record could not be serialized for search: {}", e);
                false
            }
        }
    }

    fn matches_value(&self, value: &Value) -> bool {
        display_value(value).to_lowercase().contains(&self.folded)
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SearchTerm {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Renders a field value the way a user would read it in a table cell.
///
/// Whole floats drop their fraction (`12.0` reads as `12`). Arrays join their
/// elements with `,`; nested objects fall back to compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(float) if n.is_f64() => float.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}
