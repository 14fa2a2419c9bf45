//! String constraint check
//!
//! Re-checks pattern and length facets specifically for string-typed
//! elements, with its own message wording. This overlaps with the facet
//! checks in the typing step on purpose; both may fire for the same
//! violation.

use crate::documents::Element;
use crate::model::SchemaElement;
use crate::names;
use regex::Regex;

/// Check pattern and length facets on string-typed elements
pub fn validate_constraints(node: &Element, schema: &SchemaElement) -> Vec<String> {
    let mut errors = Vec::new();

    if schema.pattern.is_none() && schema.min_length.is_none() && schema.max_length.is_none() {
        return errors;
    }

    if schema.type_name.as_deref().and_then(names::builtin_local) != Some("string") {
        return errors;
    }

    let content = node.text_content();
    let text = content.trim();

    if let Some(pattern) = &schema.pattern {
        match Regex::new(pattern) {
            Ok(regex) => {
                if !regex.is_match(text) {
                    errors.push(format!(
                        "Element <{}> does not match the pattern /{}/, found \"{}\".",
                        schema.name, pattern, text
                    ));
                }
            }
            Err(_) => log::warn!(
                "invalid pattern \"{}\" for element <{}>, skipping constraint check",
                pattern,
                schema.name
            ),
        }
    }

    let length = text.chars().count();
    if let Some(min_length) = schema.min_length {
        if length < min_length {
            errors.push(format!(
                "Element <{}> must be at least length {}, found length {}.",
                schema.name, min_length, length
            ));
        }
    }
    if let Some(max_length) = schema.max_length {
        if length > max_length {
            errors.push(format!(
                "Element <{}> must be at most length {}, found length {}.",
                schema.name, max_length, length
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with_text(name: &str, text: &str) -> Element {
        let mut node = Element::new(name);
        node.text = Some(text.to_string());
        node
    }

    fn string_schema(name: &str) -> SchemaElement {
        SchemaElement {
            type_name: Some("xs:string".to_string()),
            ..SchemaElement::named(name)
        }
    }

    #[test]
    fn test_pattern_violation_wording() {
        let schema = SchemaElement {
            pattern: Some("^[0-9]+$".to_string()),
            ..string_schema("Zip")
        };

        let errors = validate_constraints(&node_with_text("Zip", "abc"), &schema);
        assert_eq!(
            errors,
            vec!["Element <Zip> does not match the pattern /^[0-9]+$/, found \"abc\".".to_string()]
        );
    }

    #[test]
    fn test_length_violation_wording() {
        let schema = SchemaElement {
            min_length: Some(3),
            max_length: Some(5),
            ..string_schema("Code")
        };

        let errors = validate_constraints(&node_with_text("Code", "ab"), &schema);
        assert_eq!(
            errors,
            vec!["Element <Code> must be at least length 3, found length 2.".to_string()]
        );

        let errors = validate_constraints(&node_with_text("Code", "abcdef"), &schema);
        assert_eq!(
            errors,
            vec!["Element <Code> must be at most length 5, found length 6.".to_string()]
        );
    }

    #[test]
    fn test_non_string_types_are_skipped() {
        let schema = SchemaElement {
            type_name: Some("xs:integer".to_string()),
            pattern: Some("^[0-9]+$".to_string()),
            ..SchemaElement::named("Qty")
        };
        assert!(validate_constraints(&node_with_text("Qty", "abc"), &schema).is_empty());
    }

    #[test]
    fn test_no_facets_no_checks() {
        let schema = string_schema("Note");
        assert!(validate_constraints(&node_with_text("Note", "anything"), &schema).is_empty());
    }
}
