//! Validation engine
//!
//! The [`Validator`] coordinates one validation run: parse the schema,
//! resolve it, parse the document, check required root elements, then walk
//! schema and document in lock-step running the node and global pipelines.
//! Structural violations are collected in full; only an outright parse
//! failure of either input short-circuits, and even that is caught at the
//! boundary and wrapped into the result.

pub mod pipeline;
pub mod steps;

use std::fs;
use std::path::Path;

use crate::documents::{Document, Element};
use crate::error::{Error, Result};
use crate::model::{Choice, Schema, SchemaElement, ValidationResult};
use crate::resolver::SchemaResolver;
use pipeline::{GlobalPipeline, NodePipeline};

/// Validates XML documents against XSD schemas
#[derive(Debug)]
pub struct Validator {
    node_pipeline: NodePipeline,
    global_pipeline: GlobalPipeline,
}

impl Validator {
    /// Create a validator with the standard check pipelines
    pub fn new() -> Self {
        Self {
            node_pipeline: NodePipeline::new()
                .add_step(steps::validate_abstract)
                .add_step(steps::validate_type)
                .add_step(steps::validate_attributes)
                .add_step(steps::validate_constraints)
                .add_step(steps::validate_required_children),
            global_pipeline: GlobalPipeline::new().add_step(steps::validate_occurrence),
        }
    }

    /// Validate an XML document against an XSD schema.
    ///
    /// Parse failures of either input never escape as errors; they come
    /// back as a single wrapped message with `valid = false`.
    pub fn validate(&self, xml: &str, xsd: &str) -> ValidationResult {
        match self.run(xml, xsd) {
            Ok(result) => result,
            Err(err) => ValidationResult {
                valid: false,
                errors: vec![format!("Validation error: {}", err)],
            },
        }
    }

    /// Validate an XML file against an XSD schema file
    pub fn validate_files(
        &self,
        xml_path: impl AsRef<Path>,
        xsd_path: impl AsRef<Path>,
    ) -> ValidationResult {
        let read = |path: &Path| fs::read_to_string(path).map_err(Error::from);
        match (read(xml_path.as_ref()), read(xsd_path.as_ref())) {
            (Ok(xml), Ok(xsd)) => self.validate(&xml, &xsd),
            (Err(err), _) | (_, Err(err)) => ValidationResult {
                valid: false,
                errors: vec![format!("Validation error: {}", err)],
            },
        }
    }

    fn run(&self, xml: &str, xsd: &str) -> Result<ValidationResult> {
        let schema = Schema::from_string(xsd)?;
        let mut resolver = SchemaResolver::new(&schema);
        let elements = resolver.resolve_all();

        let doc = Document::from_string(xml)?;
        if doc.root().is_none() {
            return Err(Error::Xml("no document element found".to_string()));
        }

        let mut errors = steps::validate_root_elements(&doc, &elements);
        errors.extend(self.validate_elements(&doc, &elements));

        Ok(ValidationResult::from_errors(errors))
    }

    /// Validate every schema element against its matching document nodes
    fn validate_elements(&self, doc: &Document, elements: &[SchemaElement]) -> Vec<String> {
        let mut errors = Vec::new();

        for schema_element in elements {
            let nodes = match &schema_element.namespace {
                Some(namespace) => doc.elements_by_name_ns(namespace, &schema_element.name),
                None => doc.elements_by_name(&schema_element.name),
            };

            errors.extend(self.global_pipeline.execute(&nodes, schema_element));
            for node in &nodes {
                errors.extend(self.validate_node(node, schema_element));
            }
        }

        errors
    }

    /// Validate one element instance: node pipeline, first choice group,
    /// then declared children in declaration order. Every declared child is
    /// occurrence-checked over its (possibly empty) match set, but only
    /// matched instances are descended into; the required-children step
    /// already reported absences.
    fn validate_node(&self, node: &Element, schema_element: &SchemaElement) -> Vec<String> {
        let mut errors = self.node_pipeline.execute(node, schema_element);

        if let Some(choice) = schema_element.choices.as_ref().and_then(|c| c.first()) {
            errors.extend(self.validate_choice(node, choice));
        }

        if let Some(children) = &schema_element.children {
            for child_schema in children {
                let matched: Vec<&Element> = node
                    .children
                    .iter()
                    .filter(|child| child.name.eq_ignore_ascii_case(&child_schema.name))
                    .collect();

                errors.extend(self.global_pipeline.execute(&matched, child_schema));
                for child in &matched {
                    errors.extend(self.validate_node(child, child_schema));
                }
            }
        }

        errors
    }

    /// Exactly one branch of the choice must be present among the node's
    /// descendants. Only the first declared choice group is validated.
    fn validate_choice(&self, node: &Element, choice: &Choice) -> Vec<String> {
        let matches: usize = choice
            .elements
            .iter()
            .map(|branch| node.count_descendants(&branch.name))
            .sum();

        if matches == 1 {
            return Vec::new();
        }

        let names: Vec<&str> = choice
            .elements
            .iter()
            .map(|branch| branch.name.as_str())
            .collect();
        vec![format!(
            "Choice error: Expected exactly one of [{}], but found {}.",
            names.join(", "),
            matches
        )]
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
