//! Schema data model
//!
//! The model is used both for the raw schema produced by the extractor and
//! for the resolved schema produced by the resolution engine. A resolved
//! [`SchemaElement`] never carries an `extension` or `restriction` marker;
//! resolution always clears both.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upper occurrence bound: a count or the `unbounded` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxOccurs {
    /// At most this many occurrences
    Bounded(u32),
    /// No upper bound
    Unbounded,
}

impl MaxOccurs {
    /// The bound, if there is one
    pub fn bound(&self) -> Option<u32> {
        match self {
            MaxOccurs::Bounded(n) => Some(*n),
            MaxOccurs::Unbounded => None,
        }
    }
}

/// Whether an attribute must be present on its element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeUse {
    /// The attribute must be present and non-blank
    Required,
    /// The attribute may be absent
    #[default]
    Optional,
}

/// Attribute declaration on a schema element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeDef {
    /// Attribute name
    pub name: String,
    /// Optional namespace URI
    pub namespace: Option<String>,
    /// Type name (e.g. `xs:string`, `xs:integer`)
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Required or optional
    #[serde(rename = "use")]
    pub usage: AttributeUse,
    /// Fixed value the attribute must carry when present
    pub fixed: Option<String>,
    /// Default value
    #[serde(rename = "default")]
    pub default_value: Option<String>,
}

/// Choice group: exactly one of the branch elements must be present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Choice {
    /// Candidate branch elements
    pub elements: Vec<SchemaElement>,
    /// Declared lower bound (not consulted during validation)
    pub min_occurs: Option<u32>,
    /// Declared upper bound (not consulted during validation)
    pub max_occurs: Option<MaxOccurs>,
}

/// Unresolved `<extension base="...">` marker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    /// Base type name
    pub base: String,
    /// Children the extension appends to the base's
    pub children: Option<Vec<SchemaElement>>,
    /// Choice groups the extension appends to the base's
    pub choices: Option<Vec<Choice>>,
    /// Attributes the extension adds (overriding the base's by name)
    pub attributes: Option<Vec<AttributeDef>>,
}

/// Unresolved `<restriction base="...">` marker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restriction {
    /// Base type name
    pub base: String,
    /// Enumeration facet override
    pub enumeration: Option<Vec<String>>,
    /// Pattern facet override
    pub pattern: Option<String>,
    /// Minimum length facet override
    pub min_length: Option<usize>,
    /// Maximum length facet override
    pub max_length: Option<usize>,
    /// Inclusive lower bound facet override
    pub min_inclusive: Option<Decimal>,
    /// Inclusive upper bound facet override
    pub max_inclusive: Option<Decimal>,
    /// Exclusive lower bound facet override
    pub min_exclusive: Option<Decimal>,
    /// Exclusive upper bound facet override
    pub max_exclusive: Option<Decimal>,
}

/// Schema element declaration, raw or resolved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaElement {
    /// Element name
    pub name: String,
    /// Optional namespace URI
    pub namespace: Option<String>,
    /// Type reference; after resolution, the innermost built-in type name
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Lower occurrence bound; `None` when the schema left it unspecified
    pub min_occurs: Option<u32>,
    /// Upper occurrence bound
    pub max_occurs: Option<MaxOccurs>,
    /// Declared attributes
    pub attributes: Option<Vec<AttributeDef>>,
    /// Child elements in declaration order
    pub children: Option<Vec<SchemaElement>>,
    /// Choice groups (only the first is validated)
    pub choices: Option<Vec<Choice>>,
    /// Enumeration of allowed literal values
    pub enumeration: Option<Vec<String>>,
    /// Regular expression the text content must match
    pub pattern: Option<String>,
    /// Minimum text length
    pub min_length: Option<usize>,
    /// Maximum text length
    pub max_length: Option<usize>,
    /// Inclusive lower bound for numeric content
    pub min_inclusive: Option<Decimal>,
    /// Inclusive upper bound for numeric content
    pub max_inclusive: Option<Decimal>,
    /// Exclusive lower bound for numeric content
    pub min_exclusive: Option<Decimal>,
    /// Exclusive upper bound for numeric content
    pub max_exclusive: Option<Decimal>,
    /// Unresolved extension marker; cleared by resolution
    pub extension: Option<Extension>,
    /// Unresolved restriction marker; cleared by resolution
    pub restriction: Option<Restriction>,
    /// Abstract elements may not appear in instance documents
    #[serde(rename = "abstract")]
    pub is_abstract: Option<bool>,
    /// Mixed-content flag
    pub mixed: Option<bool>,
}

impl SchemaElement {
    /// Create an element with the given name and everything else unset
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Lower occurrence bound as used by validation (1 when unspecified)
    pub fn effective_min_occurs(&self) -> u32 {
        self.min_occurs.unwrap_or(1)
    }
}

/// A parsed schema: top-level elements plus global named types
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Target namespace of the schema document
    pub target_namespace: Option<String>,
    /// Top-level element declarations in document order
    pub elements: Vec<SchemaElement>,
    /// Global named type definitions, keyed by type name
    pub types: IndexMap<String, SchemaElement>,
}

/// Outcome of validating one document against one schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no violations were found
    pub valid: bool,
    /// All violation messages, in check order
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Build a result from a collected error list
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_min_occurs_defaults_to_one() {
        let element = SchemaElement::named("item");
        assert_eq!(element.effective_min_occurs(), 1);

        let optional = SchemaElement {
            min_occurs: Some(0),
            ..SchemaElement::named("item")
        };
        assert_eq!(optional.effective_min_occurs(), 0);
    }

    #[test]
    fn test_max_occurs_bound() {
        assert_eq!(MaxOccurs::Bounded(3).bound(), Some(3));
        assert_eq!(MaxOccurs::Unbounded.bound(), None);
    }

    #[test]
    fn test_validation_result_from_errors() {
        assert!(ValidationResult::from_errors(vec![]).valid);
        assert!(!ValidationResult::from_errors(vec!["boom".into()]).valid);
    }

    #[test]
    fn test_schema_element_serde_round_trip() {
        let element = SchemaElement {
            type_name: Some("xs:string".into()),
            min_occurs: Some(1),
            max_occurs: Some(MaxOccurs::Unbounded),
            enumeration: Some(vec!["a".into(), "b".into()]),
            is_abstract: Some(true),
            ..SchemaElement::named("item")
        };

        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"type\":\"xs:string\""));
        assert!(json.contains("\"abstract\":true"));

        let back: SchemaElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }
}
