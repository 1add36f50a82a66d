//! Normalized selectable options.

use serde::{Deserialize, Serialize};

use crate::graphql::types::{AttributeNode, ChannelNode, Edge, NamedNode};

/// A selectable `{label, value}` unit. No identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// An attribute with its resolved choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeEntry {
    pub slug: String,
    pub value: String,
    pub label: String,
    pub input_type: Option<String>,
    pub choices: Vec<ItemOption>,
}

impl From<&NamedNode> for ItemOption {
    fn from(node: &NamedNode) -> Self {
        Self { label: node.name.clone().unwrap_or_default(), value: node.id.clone(), slug: node.slug.clone() }
    }
}

impl From<&ChannelNode> for ItemOption {
    fn from(node: &ChannelNode) -> Self {
        Self { label: node.name.clone(), value: node.id.clone(), slug: Some(node.slug.clone()) }
    }
}

impl From<&AttributeNode> for AttributeEntry {
    fn from(node: &AttributeNode) -> Self {
        let choices = node
            .choices
            .as_ref()
            .map(|c| options_from_edges(&c.edges))
            .unwrap_or_default();
        Self {
            slug: node.slug.clone(),
            value: node.id.clone(),
            label: node.name.clone().unwrap_or_default(),
            input_type: node.input_type.clone(),
            choices,
        }
    }
}

/// Normalize an edge list into options, preserving source order.
#[must_use]
pub fn options_from_edges(edges: &[Edge<NamedNode>]) -> Vec<ItemOption> {
    edges.iter().map(|edge| ItemOption::from(&edge.node)).collect()
}

#[cfg(test)]
#[path = "option_test.rs"]
mod tests;
