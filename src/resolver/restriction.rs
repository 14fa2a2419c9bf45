//! Type restriction resolution (`<restriction base="X">`)

use super::SchemaResolver;
use crate::model::{Restriction, SchemaElement};
use crate::names;

impl SchemaResolver<'_> {
    /// Resolve an element's restriction marker.
    ///
    /// With a resolvable base, the result starts from the resolved base's
    /// full property set and every facet the restriction specifies
    /// overwrites the inherited value; omitted facets keep the base's.
    /// `type` is inherited from the base; name, namespace and occurrence
    /// bounds come from the restricting element itself.
    ///
    /// When the base cannot be found, the restriction's facets are applied
    /// directly onto the element. A built-in base additionally becomes the
    /// element's type, so facets restricting a primitive stay checkable.
    pub(crate) fn resolve_restriction(&mut self, mut element: SchemaElement) -> SchemaElement {
        let Some(restriction) = element.restriction.take() else {
            return element;
        };

        let Some(base) = self.resolve_base(&restriction.base) else {
            apply_facets(&mut element, &restriction);
            if names::is_builtin(&restriction.base) {
                element.type_name = Some(restriction.base.clone());
            }
            return element;
        };

        let mut result = base;
        apply_facets(&mut result, &restriction);

        result.name = element.name;
        result.namespace = element.namespace;
        result.min_occurs = element.min_occurs;
        result.max_occurs = element.max_occurs;
        result.is_abstract = element.is_abstract.or(result.is_abstract);
        result.extension = None;
        result.restriction = None;

        result
    }
}

/// Overwrite every facet the restriction specifies; restriction values
/// always win over inherited ones.
fn apply_facets(element: &mut SchemaElement, restriction: &Restriction) {
    if restriction.enumeration.is_some() {
        element.enumeration = restriction.enumeration.clone();
    }
    if restriction.pattern.is_some() {
        element.pattern = restriction.pattern.clone();
    }
    if restriction.min_length.is_some() {
        element.min_length = restriction.min_length;
    }
    if restriction.max_length.is_some() {
        element.max_length = restriction.max_length;
    }
    if restriction.min_inclusive.is_some() {
        element.min_inclusive = restriction.min_inclusive;
    }
    if restriction.max_inclusive.is_some() {
        element.max_inclusive = restriction.max_inclusive;
    }
    if restriction.min_exclusive.is_some() {
        element.min_exclusive = restriction.min_exclusive;
    }
    if restriction.max_exclusive.is_some() {
        element.max_exclusive = restriction.max_exclusive;
    }
}
