// File: form-builder/src/field.rs
// Purpose: Form field descriptors produced by the extractor

use crate::value::Value;
use serde::Serialize;

/// One renderable form field
///
/// Built fresh on every extraction. `errors` is left empty by the extractor
/// and filled in by [`render`](crate::render) from the caller's error list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Field {
    /// Human-readable caption
    pub label: String,
    /// Dotted path used for submission and error matching (e.g. `Address.Street`)
    pub name: String,
    /// HTML input type
    #[serde(rename = "type")]
    pub field_type: String,
    pub placeholder: String,
    pub value: Value,
    pub errors: Vec<String>,
}

impl Field {
    /// Default descriptor for a leaf member
    ///
    /// Label and placeholder take the member's declared name; `name` is the
    /// full dotted path.
    pub fn new(member: &str, name: String, field_type: &str, value: Value) -> Self {
        Self {
            label: member.to_string(),
            name,
            field_type: field_type.to_string(),
            placeholder: member.to_string(),
            value,
            errors: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
