//! Validation checks
//!
//! One module per check. Node-level checks run in this order: abstract,
//! typing, attributes, constraints, required children. The occurrence check
//! is global (per instance group), and the roots check runs once per
//! document.

pub mod abstract_element;
pub mod attributes;
pub mod constraints;
pub mod occurrence;
pub mod required_children;
pub mod roots;
pub mod typing;

pub use abstract_element::validate_abstract;
pub use attributes::validate_attributes;
pub use constraints::validate_constraints;
pub use occurrence::validate_occurrence;
pub use required_children::validate_required_children;
pub use roots::validate_root_elements;
pub use typing::validate_type;

use once_cell::sync::Lazy;
use regex::Regex;

// Lexical forms of the built-in types checked by the typing and attribute
// steps.
pub(crate) static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());
pub(crate) static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());
pub(crate) static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Lexical check for the boolean built-in
pub(crate) fn is_boolean_literal(text: &str) -> bool {
    matches!(text, "true" | "false" | "1" | "0")
}
