//! Qualified name utilities
//!
//! This module provides splitting of possibly-prefixed names and
//! classification of built-in schema types. Names under the reserved schema
//! prefixes (`xs`, `xsd`) denote primitives and are never looked up as user
//! types.

/// Reserved prefixes for the XML Schema namespace
pub const RESERVED_PREFIXES: [&str; 2] = ["xs", "xsd"];

/// Split a qualified name into prefix and local name on the first colon
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    match qname.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, qname),
    }
}

/// Get the local part of a qualified name
pub fn local_name(qname: &str) -> &str {
    split_qname(qname).1
}

/// Check whether a prefix is one of the reserved schema prefixes
pub fn is_reserved_prefix(prefix: &str) -> bool {
    RESERVED_PREFIXES.contains(&prefix)
}

/// Check whether a type name denotes a built-in schema type
///
/// A name is built-in when it carries a reserved schema prefix
/// (e.g. `xs:string`, `xsd:integer`). Built-in types are never resolvable
/// through the type registry.
pub fn is_builtin(type_name: &str) -> bool {
    match split_qname(type_name) {
        (Some(prefix), _) => is_reserved_prefix(prefix),
        (None, _) => false,
    }
}

/// Get the local name of a built-in type reference, if it is one
pub fn builtin_local(type_name: &str) -> Option<&str> {
    match split_qname(type_name) {
        (Some(prefix), local) if is_reserved_prefix(prefix) => Some(local),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_qname() {
        assert_eq!(split_qname("xs:string"), (Some("xs"), "string"));
        assert_eq!(split_qname("ItemType"), (None, "ItemType"));
        assert_eq!(split_qname("a:b:c"), (Some("a"), "b:c"));
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("tns:Order"), "Order");
        assert_eq!(local_name("Order"), "Order");
    }

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin("xs:string"));
        assert!(is_builtin("xsd:integer"));
        assert!(!is_builtin("tns:Order"));
        assert!(!is_builtin("string"));
    }

    #[test]
    fn test_builtin_local() {
        assert_eq!(builtin_local("xs:date"), Some("date"));
        assert_eq!(builtin_local("xsd:boolean"), Some("boolean"));
        assert_eq!(builtin_local("myns:date"), None);
        assert_eq!(builtin_local("date"), None);
    }
}
