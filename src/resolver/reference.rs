//! Type reference resolution (`type="X"`)

use super::cache::ResolutionCache;
use super::{merge, SchemaResolver};
use crate::model::SchemaElement;
use crate::names;

impl SchemaResolver<'_> {
    /// Resolve an element's `type` reference against the registry.
    ///
    /// Elements without a type, or typed with a built-in, are returned
    /// unchanged. A reference that cannot be found in the registry is also
    /// returned unchanged; an unresolvable type is a schema-authoring issue
    /// the structural checks surface indirectly, not a hard failure.
    ///
    /// The provisional cache insert before recursion is what stops mutually
    /// referencing types from recursing forever; a genuinely circular chain
    /// sees the partially resolved definition on its second encounter.
    pub(crate) fn resolve_type_reference(&mut self, element: SchemaElement) -> SchemaElement {
        let Some(type_name) = element.type_name.clone() else {
            return element;
        };
        if names::is_builtin(&type_name) {
            return element;
        }

        let key = ResolutionCache::key(&type_name);

        if let Some(cached) = self.cache.get(&key) {
            let cached = cached.clone();
            return merge::merge_type_definition(element, &cached);
        }

        let Some(type_def) = self.registry.lookup(&type_name) else {
            return element;
        };

        self.cache.insert_provisional(key.clone(), type_def.clone());
        let resolved = self.resolve_element(type_def);
        self.cache.insert_resolved(key, resolved.clone());

        merge::merge_type_definition(element, &resolved)
    }
}
