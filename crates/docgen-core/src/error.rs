//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout docgen. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Schema structure errors are raised when a schema is loaded, before any
//!   data is touched, and name the offending key.
//! - Validation errors name the offending key and value.
//! - There is no "missing data" error: absent data flows through as an
//!   empty string and is judged by the rule attached to the field.
//! - The first error aborts a walk. Errors are never aggregated.

use thiserror::Error;

/// Top-level error type for docgen.
#[derive(Error, Debug)]
pub enum DocgenError {
    /// The schema itself is malformed.
    #[error("schema structure error: {0}")]
    SchemaStructure(#[from] SchemaStructureError),

    /// A scalar value was rejected by its rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The output document could not be serialized.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Builder configuration is inconsistent with the requested operation.
    #[error("configuration error: {0}")]
    Config(String),

    /// A schema, configuration, or data file could not be loaded.
    #[error("load error for '{path}': {reason}")]
    Load {
        /// Path of the file that failed to load.
        path: String,
        /// Reason the file could not be loaded.
        reason: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error in the shape of a schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaStructureError {
    /// A key, or the remainder of a key after its prefix, is empty.
    #[error("empty schema key (raw key: {key:?})")]
    EmptyKey {
        /// The raw key as written in the schema.
        key: String,
    },

    /// The optional marker appears more than once.
    #[error("optional marker repeated in key {key}")]
    RepeatedOptional {
        /// The raw key as written in the schema.
        key: String,
    },

    /// A record-list key does not split into `container:item`.
    #[error("key of record list {key} must contain 2 non-empty parts, found {segments}")]
    MalformedRecordListKey {
        /// The raw key as written in the schema.
        key: String,
        /// Number of `:`-separated segments after the prefix.
        segments: usize,
    },

    /// A schema value is neither a rule string nor a nested schema.
    #[error("expects string rule or nested schema for {key}, found {found}")]
    UnexpectedValue {
        /// The raw key as written in the schema.
        key: String,
        /// JSON type name of the value found.
        found: &'static str,
    },

    /// The key's directive cannot carry the kind of value it was given.
    #[error("directive mismatch for {key}: {reason}")]
    DirectiveMismatch {
        /// The raw key as written in the schema.
        key: String,
        /// What the directive requires.
        reason: &'static str,
    },

    /// A `/regex/` rule does not compile.
    #[error("invalid pattern {pattern} for key {key}: {reason}")]
    InvalidPattern {
        /// The raw key as written in the schema.
        key: String,
        /// The pattern after delimiter stripping.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// The schema root (or a nested schema) is not a mapping.
    #[error("schema must be a mapping, found {found}")]
    NotAMapping {
        /// JSON type name of the value found.
        found: &'static str,
    },
}

/// Error raised when a scalar value does not satisfy its rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not fully consumed by the rule's pattern.
    #[error("invalid value {value} for key {key} (pattern {pattern})")]
    PatternMismatch {
        /// The schema key the value was validated for.
        key: String,
        /// The rejected value.
        value: String,
        /// The pattern after delimiter stripping.
        pattern: String,
    },
}

/// Error while serializing an output document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The XML writer failed.
    #[error("xml write failed: {0}")]
    Write(String),

    /// The serialized bytes are not valid UTF-8.
    #[error("serialized document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// JSON type name used in diagnostics.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
