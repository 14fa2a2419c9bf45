//! # xsd-checkr
//!
//! XML document validation against XML Schema (XSD) definitions.
//!
//! The crate turns a textual schema into a structured model, resolves all
//! type references, extensions and restrictions in that model, then walks an
//! XML document tree checking it against the resolved schema and collecting
//! human-readable violation messages.
//!
//! ## Features
//!
//! - Type reference, extension and restriction resolution with caching
//! - Element, attribute, facet and occurrence validation
//! - Choice group validation
//! - Namespace-aware root element lookup
//!
//! ## Example
//!
//! ```rust,ignore
//! use xsd_checkr::Validator;
//!
//! let validator = Validator::new();
//! let result = validator.validate(xml_text, xsd_text);
//!
//! if !result.valid {
//!     for error in &result.errors {
//!         eprintln!("{}", error);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod names;

// Document and schema models
pub mod documents;
pub mod model;

// Schema text -> raw schema model
pub mod extractor;

// Raw schema model -> resolved schema model
pub mod resolver;

// Resolved schema model + document -> validation result
pub mod validation;

// Re-exports for convenience
pub use error::{Error, Result};
pub use model::{Schema, SchemaElement, ValidationResult};
pub use resolver::SchemaResolver;
pub use validation::Validator;

/// Version of the xsd-checkr library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XML Schema namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Validate an XML document against an XSD schema with a default [`Validator`].
pub fn validate(xml: &str, xsd: &str) -> ValidationResult {
    Validator::new().validate(xml, xsd)
}
