//! Validation pipelines
//!
//! A pipeline is an ordered list of independent checks whose outputs are
//! concatenated in registration order; the order and wording of emitted
//! messages are part of the observable contract. Node pipelines run once
//! per matched element instance, global pipelines once per group of sibling
//! instances.

use crate::documents::Element;
use crate::model::SchemaElement;

/// A check over one element instance
pub type NodeStep = fn(&Element, &SchemaElement) -> Vec<String>;

/// A check over the full set of sibling instances of one schema element
pub type GlobalStep = fn(&[&Element], &SchemaElement) -> Vec<String>;

/// Ordered list of node-level checks
#[derive(Debug, Default)]
pub struct NodePipeline {
    steps: Vec<NodeStep>,
}

impl NodePipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check; checks run in the order they were added
    pub fn add_step(mut self, step: NodeStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Run every check and concatenate the emitted messages
    pub fn execute(&self, node: &Element, schema: &SchemaElement) -> Vec<String> {
        self.steps
            .iter()
            .flat_map(|step| step(node, schema))
            .collect()
    }
}

/// Ordered list of global checks
#[derive(Debug, Default)]
pub struct GlobalPipeline {
    steps: Vec<GlobalStep>,
}

impl GlobalPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check; checks run in the order they were added
    pub fn add_step(mut self, step: GlobalStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Run every check and concatenate the emitted messages
    pub fn execute(&self, nodes: &[&Element], schema: &SchemaElement) -> Vec<String> {
        self.steps
            .iter()
            .flat_map(|step| step(nodes, schema))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_step(_node: &Element, schema: &SchemaElement) -> Vec<String> {
        vec![format!("first:{}", schema.name)]
    }

    fn second_step(_node: &Element, schema: &SchemaElement) -> Vec<String> {
        vec![format!("second:{}", schema.name)]
    }

    fn counting_step(nodes: &[&Element], _schema: &SchemaElement) -> Vec<String> {
        vec![format!("count:{}", nodes.len())]
    }

    #[test]
    fn test_node_pipeline_preserves_step_order() {
        let pipeline = NodePipeline::new().add_step(first_step).add_step(second_step);
        let node = Element::new("n");
        let schema = SchemaElement::named("n");

        let errors = pipeline.execute(&node, &schema);
        assert_eq!(errors, vec!["first:n".to_string(), "second:n".to_string()]);
    }

    #[test]
    fn test_empty_pipeline_emits_nothing() {
        let pipeline = NodePipeline::new();
        let node = Element::new("n");
        let schema = SchemaElement::named("n");
        assert!(pipeline.execute(&node, &schema).is_empty());
    }

    #[test]
    fn test_global_pipeline_sees_all_instances() {
        let pipeline = GlobalPipeline::new().add_step(counting_step);
        let a = Element::new("x");
        let b = Element::new("x");
        let schema = SchemaElement::named("x");

        let errors = pipeline.execute(&[&a, &b], &schema);
        assert_eq!(errors, vec!["count:2".to_string()]);
    }
}
