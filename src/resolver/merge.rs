//! Property merging
//!
//! Pure functions combining two property sets under a fixed precedence
//! rule: when a type definition is merged into a referencing element, the
//! definition supplies the structure (children, choices) and the element's
//! own facet values win over the definition's.

use crate::model::{AttributeDef, SchemaElement};
use indexmap::IndexMap;

/// Merge two attribute lists; `overriding` wins on name collision.
///
/// Base attributes keep their declaration order, overriding attributes
/// replace in place or append. Returns `None` only when both inputs are
/// empty or absent.
pub fn merge_attributes(
    base: Option<&[AttributeDef]>,
    overriding: Option<&[AttributeDef]>,
) -> Option<Vec<AttributeDef>> {
    let base = base.unwrap_or_default();
    let overriding = overriding.unwrap_or_default();
    if base.is_empty() && overriding.is_empty() {
        return None;
    }

    let mut merged: IndexMap<String, AttributeDef> = base
        .iter()
        .map(|attr| (attr.name.clone(), attr.clone()))
        .collect();
    for attr in overriding {
        merged.insert(attr.name.clone(), attr.clone());
    }

    Some(merged.into_values().collect())
}

/// Merge a resolved type definition into the element that references it.
///
/// The definition's children and choices replace the element's when
/// non-empty; attributes merge with the element's own overriding the
/// definition's; every scalar facet takes the element's own value when
/// present, the definition's otherwise. The element's `type` becomes the
/// definition's (the innermost built-in propagated up the chain), and any
/// extension/restriction markers are cleared.
pub fn merge_type_definition(element: SchemaElement, type_def: &SchemaElement) -> SchemaElement {
    let mut result = element;

    if type_def.children.as_ref().is_some_and(|c| !c.is_empty()) {
        result.children = type_def.children.clone();
    }
    if type_def.choices.as_ref().is_some_and(|c| !c.is_empty()) {
        result.choices = type_def.choices.clone();
    }

    let merged_attributes =
        merge_attributes(type_def.attributes.as_deref(), result.attributes.as_deref());
    result.attributes = merged_attributes;

    result.type_name = type_def.type_name.clone();
    result.enumeration = result.enumeration.or_else(|| type_def.enumeration.clone());
    result.pattern = result.pattern.or_else(|| type_def.pattern.clone());
    result.min_length = result.min_length.or(type_def.min_length);
    result.max_length = result.max_length.or(type_def.max_length);
    result.min_inclusive = result.min_inclusive.or(type_def.min_inclusive);
    result.max_inclusive = result.max_inclusive.or(type_def.max_inclusive);
    result.min_exclusive = result.min_exclusive.or(type_def.min_exclusive);
    result.max_exclusive = result.max_exclusive.or(type_def.max_exclusive);
    result.is_abstract = result.is_abstract.or(type_def.is_abstract);

    result.extension = None;
    result.restriction = None;

    result
}

/// Concatenate two optional lists, base entries first
pub(crate) fn concat<T>(base: Option<Vec<T>>, extra: Option<Vec<T>>) -> Option<Vec<T>> {
    match (base, extra) {
        (None, None) => None,
        (base, extra) => {
            let mut merged = base.unwrap_or_default();
            merged.extend(extra.unwrap_or_default());
            Some(merged)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeUse;
    use proptest::prelude::*;

    fn attr(name: &str, usage: AttributeUse) -> AttributeDef {
        AttributeDef {
            name: name.to_string(),
            usage,
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_attributes_overriding_wins() {
        let base = vec![attr("a", AttributeUse::Required)];
        let overriding = vec![attr("a", AttributeUse::Optional)];

        let merged = merge_attributes(Some(&base), Some(&overriding)).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "a");
        assert_eq!(merged[0].usage, AttributeUse::Optional);
    }

    #[test]
    fn test_merge_attributes_keeps_base_order() {
        let base = vec![
            attr("a", AttributeUse::Optional),
            attr("b", AttributeUse::Optional),
        ];
        let overriding = vec![
            attr("b", AttributeUse::Required),
            attr("c", AttributeUse::Optional),
        ];

        let merged = merge_attributes(Some(&base), Some(&overriding)).unwrap();
        let names: Vec<&str> = merged.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(merged[1].usage, AttributeUse::Required);
    }

    #[test]
    fn test_merge_attributes_none_when_both_empty() {
        assert!(merge_attributes(None, None).is_none());
        assert!(merge_attributes(Some(&[]), Some(&[])).is_none());
    }

    #[test]
    fn test_merge_type_definition_structure_and_facets() {
        let element = SchemaElement {
            type_name: Some("ItemType".to_string()),
            pattern: Some("own".to_string()),
            ..SchemaElement::named("item")
        };
        let type_def = SchemaElement {
            type_name: Some("xs:string".to_string()),
            children: Some(vec![SchemaElement::named("label")]),
            pattern: Some("inherited".to_string()),
            max_length: Some(10),
            ..SchemaElement::named("ItemType")
        };

        let merged = merge_type_definition(element, &type_def);
        assert_eq!(merged.name, "item");
        assert_eq!(merged.children.as_ref().unwrap()[0].name, "label");
        // Element's own facet wins, missing facets come from the definition
        assert_eq!(merged.pattern.as_deref(), Some("own"));
        assert_eq!(merged.max_length, Some(10));
        // The reference is replaced by the definition's resolved type
        assert_eq!(merged.type_name.as_deref(), Some("xs:string"));
        assert!(merged.extension.is_none());
        assert!(merged.restriction.is_none());
    }

    #[test]
    fn test_merge_type_definition_keeps_element_children_when_def_has_none() {
        let element = SchemaElement {
            children: Some(vec![SchemaElement::named("kept")]),
            ..SchemaElement::named("item")
        };
        let type_def = SchemaElement::named("EmptyType");

        let merged = merge_type_definition(element, &type_def);
        assert_eq!(merged.children.as_ref().unwrap()[0].name, "kept");
    }

    #[test]
    fn test_concat_base_first() {
        let merged = concat(Some(vec![1, 2]), Some(vec![3])).unwrap();
        assert_eq!(merged, vec![1, 2, 3]);
        assert_eq!(concat::<u32>(None, None), None);
        assert_eq!(concat(None, Some(vec![9])).unwrap(), vec![9]);
    }

    proptest! {
        #[test]
        fn prop_merged_attribute_names_are_unique(
            base_names in proptest::collection::vec("[a-d]", 0..6),
            over_names in proptest::collection::vec("[a-d]", 0..6),
        ) {
            let base: Vec<AttributeDef> =
                base_names.iter().map(|n| attr(n, AttributeUse::Required)).collect();
            let overriding: Vec<AttributeDef> =
                over_names.iter().map(|n| attr(n, AttributeUse::Optional)).collect();

            if let Some(merged) = merge_attributes(Some(&base), Some(&overriding)) {
                let mut names: Vec<&str> = merged.iter().map(|a| a.name.as_str()).collect();
                names.sort_unstable();
                names.dedup();
                prop_assert_eq!(names.len(), merged.len());

                // Every name present in `overriding` must carry its use flag
                for attr in &merged {
                    if over_names.iter().any(|n| *n == attr.name) {
                        prop_assert_eq!(attr.usage, AttributeUse::Optional);
                    }
                }
            } else {
                prop_assert!(base.is_empty() && overriding.is_empty());
            }
        }
    }
}
