//! Type extension resolution (`<extension base="X">`)

use super::{merge, SchemaResolver};
use crate::model::SchemaElement;

impl SchemaResolver<'_> {
    /// Resolve an element's extension marker.
    ///
    /// With a resolvable base, the result starts from the resolved base:
    /// base children/choices first with the extension's own appended,
    /// attributes merged with the extension overriding, `type` inherited
    /// from the base. Name, namespace and occurrence bounds always come
    /// from the extending element itself.
    ///
    /// When the base cannot be found, only the extension's direct content
    /// is merged into the element; no inherited members.
    pub(crate) fn resolve_extension(&mut self, mut element: SchemaElement) -> SchemaElement {
        let Some(extension) = element.extension.take() else {
            return element;
        };

        let Some(base) = self.resolve_base(&extension.base) else {
            element.children = merge::concat(element.children.take(), extension.children);
            element.choices = merge::concat(element.choices.take(), extension.choices);
            element.attributes = merge::merge_attributes(
                element.attributes.as_deref(),
                extension.attributes.as_deref(),
            );
            return element;
        };

        SchemaElement {
            name: element.name,
            namespace: element.namespace,
            min_occurs: element.min_occurs,
            max_occurs: element.max_occurs,
            children: merge::concat(base.children, extension.children),
            choices: merge::concat(base.choices, extension.choices),
            attributes: merge::merge_attributes(
                base.attributes.as_deref(),
                extension.attributes.as_deref(),
            ),
            type_name: base.type_name,
            enumeration: base.enumeration,
            pattern: base.pattern,
            min_length: base.min_length,
            max_length: base.max_length,
            min_inclusive: base.min_inclusive,
            max_inclusive: base.max_inclusive,
            min_exclusive: base.min_exclusive,
            max_exclusive: base.max_exclusive,
            is_abstract: element.is_abstract.or(base.is_abstract),
            mixed: base.mixed,
            extension: None,
            restriction: None,
        }
    }
}
