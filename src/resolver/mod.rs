//! Schema resolution engine
//!
//! Turns the raw, partially-parsed schema graph into a fully self-contained,
//! inheritance-flattened schema. Three strategies handle the three schema
//! constructs — a `type="..."` reference, an `<extension base="...">` and a
//! `<restriction base="...">` — and the [`SchemaResolver`] orchestrates
//! them, recursing into children and choice branches so that a type pulled
//! in through any construct has its own nested references resolved before
//! it is handed back.
//!
//! The strategies live in their own modules as `impl SchemaResolver`
//! blocks; the orchestrator owns the registry and the per-run cache, so the
//! mutual dependency between orchestrator and strategies is an ordinary
//! method call rather than a wired-up object graph.

pub mod cache;
pub mod merge;
pub mod registry;

mod extension;
mod reference;
mod restriction;

pub use cache::{CacheEntry, ResolutionCache};
pub use registry::TypeRegistry;

use crate::model::{Schema, SchemaElement};

/// Orchestrates type reference, extension and restriction resolution
#[derive(Debug)]
pub struct SchemaResolver<'s> {
    pub(crate) registry: TypeRegistry<'s>,
    pub(crate) cache: ResolutionCache,
}

impl<'s> SchemaResolver<'s> {
    /// Create a resolver over a raw schema
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            registry: TypeRegistry::new(schema),
            cache: ResolutionCache::new(),
        }
    }

    /// Resolve every top-level element of the schema.
    ///
    /// The cache is cleared first; memoization holds within one call, never
    /// across calls.
    pub fn resolve_all(&mut self) -> Vec<SchemaElement> {
        self.cache.clear();
        let elements = self.registry.schema().elements.clone();
        elements
            .into_iter()
            .map(|element| self.resolve_element(element))
            .collect()
    }

    /// Resolve a single caller-supplied element.
    ///
    /// Clears the cache first, exactly like [`Self::resolve_all`].
    pub fn resolve_one(&mut self, element: &SchemaElement) -> SchemaElement {
        self.cache.clear();
        self.resolve_element(element.clone())
    }

    /// Resolve one element and, recursively, its children and choice
    /// branches.
    pub(crate) fn resolve_element(&mut self, element: SchemaElement) -> SchemaElement {
        let original_children = element.children.clone();
        let mut resolved = element;

        if resolved.type_name.is_some()
            && resolved.extension.is_none()
            && resolved.restriction.is_none()
        {
            resolved = self.resolve_type_reference(resolved);
        }

        if resolved.extension.is_some() {
            resolved = self.resolve_extension(resolved);

            // The extension replaced any pre-extension children, but their
            // type references are still resolved for the cache side effects;
            // the results are discarded.
            if let Some(children) = original_children {
                for child in children {
                    if child.type_name.is_some() {
                        self.resolve_type_reference(child);
                    }
                }
            }
        } else if resolved.restriction.is_some() {
            resolved = self.resolve_restriction(resolved);
        }

        if let Some(children) = resolved.children.take() {
            resolved.children = Some(
                children
                    .into_iter()
                    .map(|child| self.resolve_element(child))
                    .collect(),
            );
        }

        if let Some(choices) = resolved.choices.take() {
            resolved.choices = Some(
                choices
                    .into_iter()
                    .map(|mut choice| {
                        choice.elements = choice
                            .elements
                            .into_iter()
                            .map(|branch| self.resolve_element(branch))
                            .collect();
                        choice
                    })
                    .collect(),
            );
        }

        resolved
    }

    /// Resolve the base type behind an extension or restriction.
    ///
    /// Registry miss means `None` (built-ins included). Otherwise the cached
    /// definition is reused when present, and a fresh resolution follows the
    /// same provisional-insert pattern as the type reference strategy.
    pub(crate) fn resolve_base(&mut self, base_name: &str) -> Option<SchemaElement> {
        let base_def = self.registry.lookup(base_name)?;

        let key = ResolutionCache::key(base_name);
        if let Some(cached) = self.cache.get(&key) {
            return Some(cached.clone());
        }

        self.cache.insert_provisional(key.clone(), base_def.clone());
        let resolved = self.resolve_element(base_def);
        self.cache.insert_resolved(key, resolved.clone());
        Some(resolved)
    }
}
