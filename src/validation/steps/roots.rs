//! Required root elements check
//!
//! Runs once per document, before the element walk: every top-level schema
//! element with an effective minimum occurrence above zero must be present
//! in the document often enough. Lookup is namespace-qualified when the
//! schema element declares a namespace.

use crate::documents::Document;
use crate::model::SchemaElement;

/// Check that every required top-level element appears in the document
pub fn validate_root_elements(doc: &Document, elements: &[SchemaElement]) -> Vec<String> {
    let mut errors = Vec::new();

    for element in elements {
        // Explicitly optional top-level elements are skipped; an
        // unspecified bound means required-once.
        if element.min_occurs == Some(0) {
            continue;
        }
        let min_occurs = element.effective_min_occurs();

        let count = match &element.namespace {
            Some(namespace) => doc.elements_by_name_ns(namespace, &element.name).len(),
            None => doc.elements_by_name(&element.name).len(),
        } as u32;

        if count < min_occurs {
            let reason = if count == 0 {
                "is missing"
            } else {
                "has insufficient occurrences"
            };
            errors.push(format!(
                "Root element <{}> is required in the document but {}.",
                element.name, reason
            ));
        }
    }

    errors
}
