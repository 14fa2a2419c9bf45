//! Resolution cache
//!
//! A memo table from normalized type name to resolved element definition,
//! shared by all resolution strategies within one top-level run and cleared
//! at the start of the next. Keys are normalized to the local name only, so
//! differently-prefixed references to the same local name share one entry.
//!
//! Entries are tagged: a `Provisional` entry is inserted before recursing
//! into a type definition and acts as the guard value that stops circular
//! reference chains; it is overwritten with the `Resolved` entry once the
//! recursion completes. Callers must treat returned elements as immutable,
//! since one entry may back multiple unrelated elements in the same run.

use crate::model::SchemaElement;
use crate::names;
use std::collections::HashMap;

/// State of one cached type definition
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry {
    /// Inserted before recursion; a circular chain sees this partial value
    Provisional(SchemaElement),
    /// Final, fully resolved definition
    Resolved(SchemaElement),
}

impl CacheEntry {
    /// The cached element, regardless of state
    pub fn element(&self) -> &SchemaElement {
        match self {
            CacheEntry::Provisional(element) | CacheEntry::Resolved(element) => element,
        }
    }
}

/// Per-run memo table for resolved type definitions
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<String, CacheEntry>,
}

impl ResolutionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized cache key for a type reference: the local name only
    pub fn key(type_name: &str) -> String {
        names::local_name(type_name).to_string()
    }

    /// Get a cached definition by normalized key
    pub fn get(&self, key: &str) -> Option<&SchemaElement> {
        self.entries.get(key).map(CacheEntry::element)
    }

    /// Whether the entry for `key` has been finalized
    pub fn is_resolved(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(CacheEntry::Resolved(_)))
    }

    /// Insert the guard entry for a type about to be resolved
    pub fn insert_provisional(&mut self, key: String, element: SchemaElement) {
        self.entries.insert(key, CacheEntry::Provisional(element));
    }

    /// Insert (or finalize) the fully resolved definition
    pub fn insert_resolved(&mut self, key: String, element: SchemaElement) {
        self.entries.insert(key, CacheEntry::Resolved(element));
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries; called at the start of every top-level run
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
