//! Type registry
//!
//! The registry owns read access to the raw, unresolved schema and answers
//! "what is the definition of type X" by local name. Every hit is returned
//! as an owned deep copy so resolution can never mutate the registry's
//! source of truth.

use crate::model::{Schema, SchemaElement};
use crate::names;

/// Lookup of raw type definitions in a schema
#[derive(Debug)]
pub struct TypeRegistry<'s> {
    schema: &'s Schema,
}

impl<'s> TypeRegistry<'s> {
    /// Create a registry over a raw schema
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// The schema this registry reads from
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Look up a type definition by its possibly-prefixed name.
    ///
    /// Built-in names under a reserved schema prefix are never found; they
    /// are primitives, not resolvable user types. Otherwise the local name
    /// is tried against the named-types map first, then against top-level
    /// elements. The returned definition is an independent copy.
    pub fn lookup(&self, type_name: &str) -> Option<SchemaElement> {
        let (prefix, local) = names::split_qname(type_name);
        if prefix.is_some_and(names::is_reserved_prefix) {
            return None;
        }

        if let Some(type_def) = self.schema.types.get(local) {
            return Some(type_def.clone());
        }

        self.schema
            .elements
            .iter()
            .find(|element| element.name == local)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Schema;

    fn sample_schema() -> Schema {
        let mut schema = Schema::default();
        schema.types.insert(
            "ItemType".to_string(),
            SchemaElement {
                children: Some(vec![SchemaElement::named("label")]),
                ..SchemaElement::named("ItemType")
            },
        );
        schema.elements.push(SchemaElement::named("Order"));
        schema
    }

    #[test]
    fn test_builtin_types_are_never_found() {
        let schema = sample_schema();
        let registry = TypeRegistry::new(&schema);
        assert!(registry.lookup("xs:string").is_none());
        assert!(registry.lookup("xsd:integer").is_none());
    }

    #[test]
    fn test_lookup_strips_prefix() {
        let schema = sample_schema();
        let registry = TypeRegistry::new(&schema);
        assert!(registry.lookup("tns:ItemType").is_some());
        assert!(registry.lookup("ItemType").is_some());
    }

    #[test]
    fn test_lookup_falls_back_to_top_level_elements() {
        let schema = sample_schema();
        let registry = TypeRegistry::new(&schema);
        assert_eq!(registry.lookup("Order").unwrap().name, "Order");
        assert!(registry.lookup("Missing").is_none());
    }

    #[test]
    fn test_lookup_returns_independent_copies() {
        let schema = sample_schema();
        let registry = TypeRegistry::new(&schema);

        let mut first = registry.lookup("ItemType").unwrap();
        first.children.as_mut().unwrap().clear();
        first.name = "mutated".to_string();

        let second = registry.lookup("ItemType").unwrap();
        assert_eq!(second.name, "ItemType");
        assert_eq!(second.children.as_ref().unwrap().len(), 1);
    }
}
