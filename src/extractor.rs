//! Raw schema extraction
//!
//! This module walks an XSD document into the unresolved [`Schema`] model:
//! top-level `<element>`, `<complexType>` and `<simpleType>` declarations,
//! with sequence/all/choice content flattened into children and choice
//! groups, inline simple-type restrictions applied onto their elements, and
//! `extension`/`restriction` markers left for the resolution engine.
//!
//! No cross-node resolution happens here; `type="..."` references and
//! extension/restriction bases are recorded as written.

use crate::documents::{Document, Element};
use crate::error::{Error, Result};
use crate::model::{
    AttributeDef, AttributeUse, Choice, Extension, MaxOccurs, Restriction, Schema, SchemaElement,
};
use crate::names;
use crate::XSD_NAMESPACE;
use indexmap::IndexMap;
use rust_decimal::Decimal;

impl Schema {
    /// Parse an XSD schema from a string into the raw, unresolved model
    pub fn from_string(xsd: &str) -> Result<Self> {
        let doc = Document::from_string(xsd)?;
        let root = doc
            .root()
            .ok_or_else(|| Error::Schema("no document element found".to_string()))?;

        let mut elements = Vec::new();
        let mut types = IndexMap::new();

        for node in xsd_nodes(root) {
            match node.local_name() {
                "element" => {
                    if let Some(element) = parse_element_decl(node, None) {
                        elements.push(element);
                    }
                }
                "complexType" => {
                    if let Some(type_def) = parse_complex_type_decl(node) {
                        types.insert(type_def.name.clone(), type_def);
                    }
                }
                "simpleType" => {
                    if let Some(type_def) = parse_simple_type_decl(node) {
                        types.insert(type_def.name.clone(), type_def);
                    }
                }
                _ => {}
            }
        }

        let target_namespace = root.get_attribute("targetNamespace").map(String::from);
        if let Some(namespace) = &target_namespace {
            apply_namespace(&mut elements, namespace);
        }

        Ok(Schema {
            target_namespace,
            elements,
            types,
        })
    }
}

/// Direct children of `parent` that belong to the schema vocabulary
fn xsd_nodes(parent: &Element) -> impl Iterator<Item = &Element> {
    parent.children.iter().filter(|child| {
        child.namespace.is_none() || child.namespace.as_deref() == Some(XSD_NAMESPACE)
    })
}

fn xsd_children<'a>(parent: &'a Element, local: &'a str) -> impl Iterator<Item = &'a Element> {
    xsd_nodes(parent).filter(move |child| child.local_name() == local)
}

fn first_xsd_child<'a>(parent: &'a Element, local: &str) -> Option<&'a Element> {
    xsd_nodes(parent).find(|child| child.local_name() == local)
}

/// Parse an `<element>` declaration.
///
/// `min_default` is the lower bound assumed when `minOccurs` is absent:
/// `None` for top-level elements (left unspecified for the validator to
/// default), `Some(1)` for nested children and `Some(0)` inside a choice.
fn parse_element_decl(node: &Element, min_default: Option<u32>) -> Option<SchemaElement> {
    let name = node.get_attribute("name")?;
    let mut element = SchemaElement::named(name);
    element.type_name = node.get_attribute("type").map(String::from);

    element.min_occurs = match node.get_attribute("minOccurs") {
        Some(value) => Some(value.parse().unwrap_or(0)),
        None => min_default,
    };
    element.max_occurs = Some(parse_max_occurs(node.get_attribute("maxOccurs")));

    if node.get_attribute("abstract") == Some("true") {
        element.is_abstract = Some(true);
    }

    if let Some(simple_type) = first_xsd_child(node, "simpleType") {
        apply_simple_type(simple_type, &mut element);
    }
    if let Some(complex_type) = first_xsd_child(node, "complexType") {
        apply_complex_type(complex_type, &mut element);
    }

    Some(element)
}

fn parse_max_occurs(value: Option<&str>) -> MaxOccurs {
    match value {
        Some("unbounded") => MaxOccurs::Unbounded,
        Some(value) => MaxOccurs::Bounded(value.parse().unwrap_or(1)),
        None => MaxOccurs::Bounded(1),
    }
}

/// Parse a named top-level `<complexType>` into an element-shaped definition
fn parse_complex_type_decl(node: &Element) -> Option<SchemaElement> {
    let name = node.get_attribute("name")?;
    let mut type_def = SchemaElement::named(name);
    if node.get_attribute("abstract") == Some("true") {
        type_def.is_abstract = Some(true);
    }
    apply_complex_type(node, &mut type_def);
    Some(type_def)
}

/// Parse a named top-level `<simpleType>` into an element-shaped definition
fn parse_simple_type_decl(node: &Element) -> Option<SchemaElement> {
    let name = node.get_attribute("name")?;
    let mut type_def = SchemaElement::named(name);
    apply_simple_type(node, &mut type_def);
    Some(type_def)
}

/// Apply an inline `<simpleType>` restriction onto its element.
///
/// A built-in base is flattened directly: the element takes the base as its
/// type and the facets are applied in place. A user-defined base becomes an
/// unresolved restriction marker.
fn apply_simple_type(simple_type: &Element, element: &mut SchemaElement) {
    let Some(restriction) = first_xsd_child(simple_type, "restriction") else {
        return;
    };
    let facets = parse_facets(restriction);
    match restriction.get_attribute("base") {
        Some(base) if names::is_builtin(base) => {
            element.type_name = Some(base.to_string());
            facets.apply_to(element);
        }
        Some(base) => {
            element.restriction = Some(facets.into_restriction(base.to_string()));
        }
        None => facets.apply_to(element),
    }
}

/// Apply an inline `<complexType>` onto its element: content model,
/// attributes, flags and any extension/restriction marker.
fn apply_complex_type(complex_type: &Element, element: &mut SchemaElement) {
    if complex_type.get_attribute("mixed") == Some("true") {
        element.mixed = Some(true);
    }

    let (children, choices) = parse_content_model(complex_type);
    if !children.is_empty() {
        element.children = Some(children);
    }
    if !choices.is_empty() {
        element.choices = Some(choices);
    }

    let attributes = parse_attributes(complex_type);
    if !attributes.is_empty() {
        element.attributes = Some(attributes);
    }

    for content_name in ["complexContent", "simpleContent"] {
        if let Some(content) = first_xsd_child(complex_type, content_name) {
            if let Some(extension) = first_xsd_child(content, "extension") {
                element.extension = parse_extension(extension);
            } else if let Some(restriction) = first_xsd_child(content, "restriction") {
                element.restriction = parse_restriction_marker(restriction);
            }
        }
    }
}

/// Flatten sequence/all groups and choice groups into children and choices
fn parse_content_model(container: &Element) -> (Vec<SchemaElement>, Vec<Choice>) {
    let mut children = Vec::new();
    let mut choices = Vec::new();

    for group_name in ["sequence", "all"] {
        for group in xsd_children(container, group_name) {
            for node in xsd_nodes(group) {
                match node.local_name() {
                    "element" => {
                        if let Some(child) = parse_element_decl(node, Some(1)) {
                            children.push(child);
                        }
                    }
                    "choice" => {
                        if let Some(choice) = parse_choice(node) {
                            choices.push(choice);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    for node in xsd_children(container, "choice") {
        if let Some(choice) = parse_choice(node) {
            choices.push(choice);
        }
    }

    (children, choices)
}

fn parse_choice(node: &Element) -> Option<Choice> {
    let elements: Vec<SchemaElement> = xsd_children(node, "element")
        .filter_map(|branch| parse_element_decl(branch, Some(0)))
        .collect();
    if elements.is_empty() {
        return None;
    }
    Some(Choice {
        elements,
        min_occurs: node
            .get_attribute("minOccurs")
            .and_then(|v| v.parse().ok()),
        max_occurs: node
            .get_attribute("maxOccurs")
            .map(|v| parse_max_occurs(Some(v))),
    })
}

fn parse_attributes(container: &Element) -> Vec<AttributeDef> {
    xsd_children(container, "attribute")
        .filter_map(parse_attribute)
        .collect()
}

fn parse_attribute(node: &Element) -> Option<AttributeDef> {
    let name = node.get_attribute("name")?;
    Some(AttributeDef {
        name: name.to_string(),
        namespace: None,
        type_name: Some(node.get_attribute("type").unwrap_or("xs:string").to_string()),
        usage: match node.get_attribute("use") {
            Some("required") => AttributeUse::Required,
            _ => AttributeUse::Optional,
        },
        fixed: node.get_attribute("fixed").map(String::from),
        default_value: node.get_attribute("default").map(String::from),
    })
}

fn parse_extension(node: &Element) -> Option<Extension> {
    let base = node.get_attribute("base")?.to_string();
    let (children, choices) = parse_content_model(node);
    let attributes = parse_attributes(node);
    Some(Extension {
        base,
        children: (!children.is_empty()).then_some(children),
        choices: (!choices.is_empty()).then_some(choices),
        attributes: (!attributes.is_empty()).then_some(attributes),
    })
}

fn parse_restriction_marker(node: &Element) -> Option<Restriction> {
    let base = node.get_attribute("base")?.to_string();
    Some(parse_facets(node).into_restriction(base))
}

/// Facet values read from a `<restriction>` body
#[derive(Default)]
struct FacetSet {
    enumeration: Option<Vec<String>>,
    pattern: Option<String>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min_inclusive: Option<Decimal>,
    max_inclusive: Option<Decimal>,
    min_exclusive: Option<Decimal>,
    max_exclusive: Option<Decimal>,
}

fn parse_facets(restriction: &Element) -> FacetSet {
    let enumeration: Vec<String> = xsd_children(restriction, "enumeration")
        .filter_map(|node| node.get_attribute("value"))
        .map(String::from)
        .collect();

    FacetSet {
        enumeration: (!enumeration.is_empty()).then_some(enumeration),
        pattern: facet_value(restriction, "pattern").map(String::from),
        min_length: facet_value(restriction, "minLength").and_then(|v| v.parse().ok()),
        max_length: facet_value(restriction, "maxLength").and_then(|v| v.parse().ok()),
        min_inclusive: facet_value(restriction, "minInclusive").and_then(|v| v.parse().ok()),
        max_inclusive: facet_value(restriction, "maxInclusive").and_then(|v| v.parse().ok()),
        min_exclusive: facet_value(restriction, "minExclusive").and_then(|v| v.parse().ok()),
        max_exclusive: facet_value(restriction, "maxExclusive").and_then(|v| v.parse().ok()),
    }
}

fn facet_value<'a>(restriction: &'a Element, facet: &str) -> Option<&'a str> {
    first_xsd_child(restriction, facet).and_then(|node| node.get_attribute("value"))
}

impl FacetSet {
    fn apply_to(self, element: &mut SchemaElement) {
        if self.enumeration.is_some() {
            element.enumeration = self.enumeration;
        }
        if self.pattern.is_some() {
            element.pattern = self.pattern;
        }
        if self.min_length.is_some() {
            element.min_length = self.min_length;
        }
        if self.max_length.is_some() {
            element.max_length = self.max_length;
        }
        if self.min_inclusive.is_some() {
            element.min_inclusive = self.min_inclusive;
        }
        if self.max_inclusive.is_some() {
            element.max_inclusive = self.max_inclusive;
        }
        if self.min_exclusive.is_some() {
            element.min_exclusive = self.min_exclusive;
        }
        if self.max_exclusive.is_some() {
            element.max_exclusive = self.max_exclusive;
        }
    }

    fn into_restriction(self, base: String) -> Restriction {
        Restriction {
            base,
            enumeration: self.enumeration,
            pattern: self.pattern,
            min_length: self.min_length,
            max_length: self.max_length,
            min_inclusive: self.min_inclusive,
            max_inclusive: self.max_inclusive,
            min_exclusive: self.min_exclusive,
            max_exclusive: self.max_exclusive,
        }
    }
}

/// Recursively stamp the target namespace onto elements and their children
fn apply_namespace(elements: &mut [SchemaElement], namespace: &str) {
    for element in elements {
        element.namespace = Some(namespace.to_string());
        if let Some(children) = &mut element.children {
            apply_namespace(children, namespace);
        }
    }
}
