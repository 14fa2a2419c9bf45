//! Occurrence check
//!
//! Runs once per group of sibling instances of one schema element, checking
//! the instance count against the declared bounds. Bounds the schema left
//! unspecified are not checked here.

use crate::documents::Element;
use crate::model::{MaxOccurs, SchemaElement};

/// Check an instance count against minOccurs/maxOccurs
pub fn validate_occurrence(nodes: &[&Element], schema: &SchemaElement) -> Vec<String> {
    let mut errors = Vec::new();
    let count = nodes.len() as u32;

    if let Some(min_occurs) = schema.min_occurs {
        if count < min_occurs {
            errors.push(format!(
                "Element {} occurs {} times, but should occur at least {} times.",
                schema.name, count, min_occurs
            ));
        }
    }

    if let Some(MaxOccurs::Bounded(max_occurs)) = schema.max_occurs {
        if count > max_occurs {
            errors.push(format!(
                "Element {} occurs {} times, but should occur at most {} times.",
                schema.name, count, max_occurs
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instances(count: usize) -> Vec<Element> {
        (0..count).map(|_| Element::new("entry")).collect()
    }

    #[test]
    fn test_too_few_occurrences() {
        let schema = SchemaElement {
            min_occurs: Some(1),
            ..SchemaElement::named("entry")
        };

        let errors = validate_occurrence(&[], &schema);
        assert_eq!(
            errors,
            vec!["Element entry occurs 0 times, but should occur at least 1 times.".to_string()]
        );
    }

    #[test]
    fn test_too_many_occurrences() {
        let schema = SchemaElement {
            max_occurs: Some(MaxOccurs::Bounded(2)),
            ..SchemaElement::named("entry")
        };

        let nodes = instances(3);
        let refs: Vec<&Element> = nodes.iter().collect();
        let errors = validate_occurrence(&refs, &schema);
        assert_eq!(
            errors,
            vec!["Element entry occurs 3 times, but should occur at most 2 times.".to_string()]
        );
    }

    #[test]
    fn test_within_bounds() {
        let schema = SchemaElement {
            min_occurs: Some(1),
            max_occurs: Some(MaxOccurs::Bounded(3)),
            ..SchemaElement::named("entry")
        };

        let nodes = instances(2);
        let refs: Vec<&Element> = nodes.iter().collect();
        assert!(validate_occurrence(&refs, &schema).is_empty());
    }

    #[test]
    fn test_unbounded_max_is_never_exceeded() {
        let schema = SchemaElement {
            max_occurs: Some(MaxOccurs::Unbounded),
            ..SchemaElement::named("entry")
        };

        let nodes = instances(50);
        let refs: Vec<&Element> = nodes.iter().collect();
        assert!(validate_occurrence(&refs, &schema).is_empty());
    }

    #[test]
    fn test_unspecified_bounds_are_not_checked() {
        let schema = SchemaElement::named("entry");
        assert!(validate_occurrence(&[], &schema).is_empty());
    }
}
