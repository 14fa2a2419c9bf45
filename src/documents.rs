//! XML document handling
//!
//! This module parses XML text into a tree of [`Element`] nodes with
//! resolved namespaces, ordered child elements and text content. Malformed
//! input is reported as a hard error rather than a partial tree.

use crate::error::{Error, Result};
use crate::names;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

/// XML element in the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Local name of the element (prefix stripped)
    pub name: String,
    /// Resolved namespace URI, if the element is in a namespace
    pub namespace: Option<String>,
    /// Attributes by local name (namespace declarations excluded)
    pub attributes: HashMap<String, String>,
    /// Text content directly inside this element
    pub text: Option<String>,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Create a new element with no namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            attributes: HashMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Get the local name of the element
    pub fn local_name(&self) -> &str {
        &self.name
    }

    /// Get an attribute value by local name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Concatenated text content of this element and all its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Iterate over direct children with the given local name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child with the given local name
    pub fn first_child_named(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Count descendant elements (excluding self) with the given local name
    pub fn count_descendants(&self, name: &str) -> usize {
        self.children
            .iter()
            .map(|c| usize::from(c.name == name) + c.count_descendants(name))
            .sum()
    }
}

/// In-scope namespace bindings at one point of the parse
#[derive(Debug, Clone, Default)]
struct NsBindings {
    /// Default namespace (no prefix), None when unset or reset via xmlns=""
    default_ns: Option<String>,
    /// Mapping from prefix to namespace URI
    prefixes: HashMap<String, String>,
}

/// XML document representation
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Root element of the document
    pub root: Option<Element>,
}

impl Document {
    /// Parse an XML document from a string
    pub fn from_string(xml: &str) -> Result<Self> {
        Self::parse(xml.as_bytes())
    }

    /// Parse an XML document from bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.trim_text(true);

        let mut root: Option<Element> = None;
        let mut element_stack: Vec<Element> = Vec::new();
        let mut scope_stack: Vec<NsBindings> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let (element, bindings) = Self::parse_element(&e, &scope_stack)?;
                    scope_stack.push(bindings);
                    element_stack.push(element);
                }
                Ok(Event::End(_)) => {
                    scope_stack.pop();
                    if let Some(current) = element_stack.pop() {
                        if let Some(parent) = element_stack.last_mut() {
                            parent.children.push(current);
                        } else if root.is_none() {
                            root = Some(current);
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    let (element, _) = Self::parse_element(&e, &scope_stack)?;
                    if let Some(parent) = element_stack.last_mut() {
                        parent.children.push(element);
                    } else if root.is_none() {
                        root = Some(element);
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some(current) = element_stack.last_mut() {
                        let text = e
                            .unescape()
                            .map_err(|e| Error::Xml(format!("failed to unescape text: {}", e)))?;
                        if !text.trim().is_empty() {
                            match &mut current.text {
                                Some(existing) => existing.push_str(&text),
                                None => current.text = Some(text.into_owned()),
                            }
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!(
                        "error parsing XML at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {} // Ignore comments, processing instructions, declarations
            }
            buf.clear();
        }

        Ok(Document { root })
    }

    /// Parse an element and its namespace declarations from a start event
    fn parse_element(start: &BytesStart, scopes: &[NsBindings]) -> Result<(Element, NsBindings)> {
        let raw_name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| Error::Xml(format!("invalid element name: {}", e)))?
            .to_string();

        // New scope inherits everything in scope and applies local declarations
        let mut bindings = scopes.last().cloned().unwrap_or_default();
        let mut attributes = HashMap::new();

        for attr_result in start.attributes() {
            let attr =
                attr_result.map_err(|e| Error::Xml(format!("failed to parse attribute: {}", e)))?;

            let attr_name = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| Error::Xml(format!("invalid attribute name: {}", e)))?;

            let attr_value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(format!("failed to unescape attribute value: {}", e)))?
                .to_string();

            if attr_name == "xmlns" {
                bindings.default_ns = (!attr_value.is_empty()).then_some(attr_value);
            } else if let Some(prefix) = attr_name.strip_prefix("xmlns:") {
                bindings.prefixes.insert(prefix.to_string(), attr_value);
            } else {
                let (_, local) = names::split_qname(attr_name);
                attributes.insert(local.to_string(), attr_value);
            }
        }

        let (prefix, local) = names::split_qname(&raw_name);
        let namespace = match prefix {
            Some(p) => bindings.prefixes.get(p).cloned(),
            None => bindings.default_ns.clone(),
        };

        let element = Element {
            name: local.to_string(),
            namespace,
            attributes,
            text: None,
            children: Vec::new(),
        };
        Ok((element, bindings))
    }

    /// Get the root element
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// All elements in the document (root included) with the given local name
    pub fn elements_by_name(&self, name: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            collect_matching(root, &mut out, &|e| e.name == name);
        }
        out
    }

    /// All elements with the given namespace URI and local name
    pub fn elements_by_name_ns(&self, namespace: &str, name: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            collect_matching(root, &mut out, &|e| {
                e.name == name && e.namespace.as_deref() == Some(namespace)
            });
        }
        out
    }
}

fn collect_matching<'a>(
    element: &'a Element,
    out: &mut Vec<&'a Element>,
    predicate: &dyn Fn(&Element) -> bool,
) {
    if predicate(element) {
        out.push(element);
    }
    for child in &element.children {
        collect_matching(child, out, predicate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_xml() {
        let xml = r#"<root><child>text</child></root>"#;
        let doc = Document::from_string(xml).unwrap();

        let root = doc.root().unwrap();
        assert_eq!(root.local_name(), "root");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].local_name(), "child");
        assert_eq!(root.children[0].text.as_deref(), Some("text"));
    }

    #[test]
    fn test_parse_with_attributes() {
        let xml = r#"<root attr1="value1" attr2="value2"><child/></root>"#;
        let doc = Document::from_string(xml).unwrap();

        let root = doc.root().unwrap();
        assert_eq!(root.get_attribute("attr1"), Some("value1"));
        assert_eq!(root.get_attribute("attr2"), Some("value2"));
        assert_eq!(root.get_attribute("missing"), None);
    }

    #[test]
    fn test_default_namespace_resolution() {
        let xml = r#"<root xmlns="http://example.com"><child/></root>"#;
        let doc = Document::from_string(xml).unwrap();

        let root = doc.root().unwrap();
        assert_eq!(root.namespace.as_deref(), Some("http://example.com"));
        assert_eq!(
            root.children[0].namespace.as_deref(),
            Some("http://example.com")
        );
    }

    #[test]
    fn test_prefixed_namespace_resolution() {
        let xml = r#"<p:root xmlns:p="http://example.com/p"><p:child/><other/></p:root>"#;
        let doc = Document::from_string(xml).unwrap();

        let root = doc.root().unwrap();
        assert_eq!(root.local_name(), "root");
        assert_eq!(root.namespace.as_deref(), Some("http://example.com/p"));
        assert_eq!(
            root.children[0].namespace.as_deref(),
            Some("http://example.com/p")
        );
        assert_eq!(root.children[1].namespace, None);
    }

    #[test]
    fn test_text_content_trims_to_descendants() {
        let xml = r#"<a>x<b>y</b></a>"#;
        let doc = Document::from_string(xml).unwrap();
        assert_eq!(doc.root().unwrap().text_content(), "xy");
    }

    #[test]
    fn test_elements_by_name_includes_root() {
        let xml = r#"<item><box><item/></box><item/></item>"#;
        let doc = Document::from_string(xml).unwrap();
        assert_eq!(doc.elements_by_name("item").len(), 3);
        assert_eq!(doc.elements_by_name("box").len(), 1);
    }

    #[test]
    fn test_elements_by_name_ns() {
        let xml = r#"<root xmlns="urn:a"><x/><y xmlns="urn:b"><x/></y></root>"#;
        let doc = Document::from_string(xml).unwrap();
        assert_eq!(doc.elements_by_name_ns("urn:a", "x").len(), 1);
        assert_eq!(doc.elements_by_name_ns("urn:b", "x").len(), 1);
        assert_eq!(doc.elements_by_name_ns("urn:c", "x").len(), 0);
    }

    #[test]
    fn test_count_descendants_excludes_self() {
        let xml = r#"<a><a/><b><a/></b></a>"#;
        let doc = Document::from_string(xml).unwrap();
        assert_eq!(doc.root().unwrap().count_descendants("a"), 2);
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = Document::from_string("<root><child></root>");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input_has_no_root() {
        let doc = Document::from_string("").unwrap();
        assert!(doc.root().is_none());
    }
}
