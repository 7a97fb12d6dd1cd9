// File: form-builder/src/error.rs
// Purpose: Errors raised while extracting or rendering form fields

use thiserror::Error;

/// Everything that can abort an extraction or render call
///
/// None of these are recoverable: the call that hits one returns no fields
/// and no markup.
#[derive(Debug, Error)]
pub enum FormError {
    /// The value handed to the extractor is not a record
    #[error("only structs are supported, got `{type_name}`")]
    InvalidInput { type_name: &'static str },

    /// A tag clause is not a single `key=value` pair
    #[error("malformed form tag on `{member}`: clause `{clause}` is not of the form key=value")]
    MalformedTag { member: String, clause: String },

    /// A tag key outside label/name/type/placeholder, in strict mode
    #[error("unknown form tag key `{key}` on `{member}`")]
    UnknownTagKey { member: String, key: String },

    /// The template failed for one field
    #[error("failed to render field `{field}`")]
    Render {
        field: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T, E = FormError> = std::result::Result<T, E>;
