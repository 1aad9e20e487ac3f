//! Error types for the presence layer and its backends.

/// A [`Value`](crate::Value) did not have the variant a caller expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Misuse of the [`FieldPresence`](crate::FieldPresence) interface.
///
/// Both variants are programming errors and are reported to the caller
/// immediately; they are never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PresenceError {
    /// The record has no field with the requested name.
    #[error("record '{record}' has no field named '{field}'")]
    UnknownField { record: String, field: String },

    /// A value of the wrong type was supplied to a field setter.
    #[error("type mismatch for field '{record}.{field}': {source}")]
    TypeMismatch {
        record: String,
        field: String,
        #[source]
        source: ValueTypeError,
    },
}

impl PresenceError {
    pub fn unknown_field(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            record: record.into(),
            field: field.into(),
        }
    }

    pub fn type_mismatch(
        record: impl Into<String>,
        field: impl Into<String>,
        source: ValueTypeError,
    ) -> Self {
        Self::TypeMismatch {
            record: record.into(),
            field: field.into(),
            source,
        }
    }
}

/// A record schema ([`FieldDefs`](crate::FieldDefs)) is structurally invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("field name must not be empty (tag {tag})")]
    EmptyName { tag: u32 },

    #[error("duplicate field name '{name}'")]
    DuplicateName { name: String },

    #[error("duplicate tag {tag} on fields '{first}' and '{second}'")]
    DuplicateTag {
        tag: u32,
        first: String,
        second: String,
    },

    /// Tag numbers start at 1.
    #[error("invalid tag {tag} on field '{name}'")]
    InvalidTag { name: String, tag: u32 },

    #[error("default value of field '{name}' does not match its type: {source}")]
    DefaultType {
        name: String,
        #[source]
        source: ValueTypeError,
    },
}

/// Error returned by [`PresenceBackend`](crate::PresenceBackend)
/// implementations.
///
/// A backend that returns an error while deserializing must leave the target
/// record untouched.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The record schema cannot be represented by this backend.
    #[error("invalid schema for record '{record}': {detail}")]
    SchemaInvalid { record: String, detail: String },

    /// The record could not be encoded.
    #[error("failed to encode record '{record}': {source}")]
    Encode {
        record: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Input bytes could not be decoded.
    #[error("failed to decode record '{record}': {source}")]
    Decode {
        record: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Decoded data did not fit the record.
    #[error(transparent)]
    Presence(#[from] PresenceError),
}

impl BackendError {
    pub fn schema_invalid(record: impl Into<String>, detail: impl ToString) -> Self {
        Self::SchemaInvalid {
            record: record.into(),
            detail: detail.to_string(),
        }
    }
}
