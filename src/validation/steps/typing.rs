//! Type check
//!
//! Enforces the facets and built-in type lexical forms on an element's text
//! content. All checks are skipped for untyped elements; enumeration,
//! pattern and length facets apply regardless of which type is declared,
//! while lexical and range checks dispatch on the built-in local name.

use super::{is_boolean_literal, DATE_RE, DECIMAL_RE, INTEGER_RE};
use crate::documents::Element;
use crate::model::SchemaElement;
use crate::names;
use regex::Regex;
use rust_decimal::Decimal;

/// Check an element's text content against its declared type and facets
pub fn validate_type(node: &Element, schema: &SchemaElement) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(type_name) = schema.type_name.as_deref() else {
        return errors;
    };

    let content = node.text_content();
    let text = content.trim();

    if let Some(enumeration) = &schema.enumeration {
        if !enumeration.is_empty() && !enumeration.iter().any(|value| value == text) {
            errors.push(format!(
                "Element <{}> must be one of [{}], but found \"{}\".",
                schema.name,
                enumeration.join(", "),
                text
            ));
        }
    }

    if let Some(pattern) = &schema.pattern {
        match Regex::new(pattern) {
            Ok(regex) => {
                if !regex.is_match(text) {
                    errors.push(format!(
                        "Element <{}> must match pattern \"{}\", but found \"{}\".",
                        schema.name, pattern, text
                    ));
                }
            }
            Err(_) => log::warn!(
                "invalid pattern \"{}\" for element <{}>, skipping pattern check",
                pattern,
                schema.name
            ),
        }
    }

    let length = text.chars().count();
    if let Some(min_length) = schema.min_length {
        if length < min_length {
            errors.push(format!(
                "Element <{}> must have a minimum length of {}, but found length {}.",
                schema.name, min_length, length
            ));
        }
    }
    if let Some(max_length) = schema.max_length {
        if length > max_length {
            errors.push(format!(
                "Element <{}> must have a maximum length of {}, but found length {}.",
                schema.name, max_length, length
            ));
        }
    }

    match names::builtin_local(type_name) {
        Some("integer") => {
            if !INTEGER_RE.is_match(text) {
                errors.push(format!(
                    "Element <{}> must be an integer, but found \"{}\".",
                    schema.name, text
                ));
            } else if let Ok(value) = text.parse::<Decimal>() {
                check_numeric_bounds(&value, schema, &mut errors);
            }
        }
        Some("decimal") | Some("float") | Some("double") => {
            if !DECIMAL_RE.is_match(text) {
                errors.push(format!(
                    "Element <{}> must be a decimal number, but found \"{}\".",
                    schema.name, text
                ));
            } else if let Ok(value) = text.parse::<Decimal>() {
                check_numeric_bounds(&value, schema, &mut errors);
            }
        }
        Some("boolean") => {
            if !is_boolean_literal(text) {
                errors.push(format!(
                    "Element <{}> must be a boolean (true/false/1/0), but found \"{}\".",
                    schema.name, text
                ));
            }
        }
        Some("date") => {
            if !DATE_RE.is_match(text) {
                errors.push(format!(
                    "Element <{}> must be a valid date (YYYY-MM-DD), but found \"{}\".",
                    schema.name, text
                ));
            }
        }
        // Strings accept any value; unresolved custom types are left to the
        // structural checks.
        _ => {}
    }

    errors
}

fn check_numeric_bounds(value: &Decimal, schema: &SchemaElement, errors: &mut Vec<String>) {
    if let Some(min) = schema.min_inclusive {
        if *value < min {
            errors.push(format!(
                "Element <{}> must have a value greater than or equal to {}, but found {}.",
                schema.name, min, value
            ));
        }
    }
    if let Some(max) = schema.max_inclusive {
        if *value > max {
            errors.push(format!(
                "Element <{}> must have a value less than or equal to {}, but found {}.",
                schema.name, max, value
            ));
        }
    }
    if let Some(min) = schema.min_exclusive {
        if *value <= min {
            errors.push(format!(
                "Element <{}> must have a value greater than {}, but found {}.",
                schema.name, min, value
            ));
        }
    }
    if let Some(max) = schema.max_exclusive {
        if *value >= max {
            errors.push(format!(
                "Element <{}> must have a value less than {}, but found {}.",
                schema.name, max, value
            ));
        }
    }
}
