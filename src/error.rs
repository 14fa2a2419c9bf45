//! Error types for xsd-checkr
//!
//! Only outright failures to read or parse an input document are surfaced
//! through these types. Schema violations discovered during validation are
//! not errors in this sense; they are collected as plain messages in a
//! [`crate::model::ValidationResult`].

use thiserror::Error;

/// Result type alias using the xsd-checkr [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xsd-checkr operations
#[derive(Error, Debug)]
pub enum Error {
    /// XML parsing error (malformed document or schema text)
    #[error("XML error: {0}")]
    Xml(String),

    /// Schema extraction error (schema text is well-formed XML but not a schema)
    #[error("schema error: {0}")]
    Schema(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
