//! Abstract element check
//!
//! An abstract element must never appear in an instance document.

use crate::documents::Element;
use crate::model::SchemaElement;

/// Reject instances of abstract schema elements
pub fn validate_abstract(_node: &Element, schema: &SchemaElement) -> Vec<String> {
    if schema.is_abstract == Some(true) {
        vec![format!(
            "Element <{}> is abstract and cannot be used directly in an instance document.",
            schema.name
        )]
    } else {
        Vec::new()
    }
}
