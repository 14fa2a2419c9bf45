//! Required children check
//!
//! For every declared child, the node must carry at least the child's
//! effective minimum number of matching element children. Names are matched
//! case-insensitively by local name.

use crate::documents::Element;
use crate::model::SchemaElement;

/// Check that a node carries all of its required children
pub fn validate_required_children(node: &Element, schema: &SchemaElement) -> Vec<String> {
    let Some(children) = &schema.children else {
        return Vec::new();
    };

    let mut errors = Vec::new();

    for child_def in children {
        let min_occurs = child_def.effective_min_occurs();
        let matching = node
            .children
            .iter()
            .filter(|child| child.name.eq_ignore_ascii_case(&child_def.name))
            .count() as u32;

        if matching < min_occurs {
            let reason = if matching == 0 {
                "is missing"
            } else {
                "has insufficient occurrences"
            };
            errors.push(format!(
                "Element <{}> is required inside <{}> but {}.",
                child_def.name, schema.name, reason
            ));
        }
    }

    errors
}
