//! Attribute checks
//!
//! Required attributes must be present and non-blank, fixed attributes must
//! carry their fixed value, and integer/boolean typed attributes must hold
//! a conforming lexical value.

use super::{is_boolean_literal, INTEGER_RE};
use crate::documents::Element;
use crate::model::{AttributeUse, SchemaElement};
use crate::names;

/// Check a node's attributes against the schema element's declarations
pub fn validate_attributes(node: &Element, schema: &SchemaElement) -> Vec<String> {
    let Some(attributes) = &schema.attributes else {
        return Vec::new();
    };

    let mut errors = Vec::new();

    for attr in attributes {
        let value = node.get_attribute(&attr.name);

        // A blank required attribute counts as missing
        if attr.usage == AttributeUse::Required && value.map_or(true, |v| v.trim().is_empty()) {
            errors.push(format!(
                "Missing required attribute '{}' in element <{}>.",
                attr.name, schema.name
            ));
        }

        if let (Some(fixed), Some(value)) = (&attr.fixed, value) {
            if value != fixed.as_str() {
                errors.push(format!(
                    "Attribute '{}' in element <{}> must be fixed to '{}', but found '{}'.",
                    attr.name, schema.name, fixed, value
                ));
            }
        }

        if let Some(value) = value {
            if !value.trim().is_empty() {
                match attr.type_name.as_deref().and_then(names::builtin_local) {
                    Some("integer") if !INTEGER_RE.is_match(value) => errors.push(format!(
                        "Attribute '{}' in element <{}> must be an integer, but found '{}'.",
                        attr.name, schema.name, value
                    )),
                    Some("boolean") if !is_boolean_literal(value) => errors.push(format!(
                        "Attribute '{}' in element <{}> must be a boolean (true/false/1/0), but found '{}'.",
                        attr.name, schema.name, value
                    )),
                    _ => {}
                }
            }
        }
    }

    errors
}
