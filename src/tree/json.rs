//! Load a hierarchy from nested JSON of the shape
//! `{"name": "...", "value": 1.0, "children": [...]}`.
//! `size` is accepted as an alias for `value`; only leaf values are read.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::adorn;
use super::arena::{CutTree, Node, NodeId};

#[derive(Debug, Deserialize)]
pub struct JsonNode {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "size")]
    pub value: f64,
    #[serde(default)]
    pub children: Vec<JsonNode>,
}

/// Parse and annotate a hierarchy. Rejects trees whose total weight is not positive.
pub fn from_json_str(input: &str) -> Result<CutTree> {
    let root: JsonNode = serde_json::from_str(input).context("Failed to parse hierarchy JSON")?;
    let mut tree = from_json_node(root);
    adorn(&mut tree);

    let total = tree.get(tree.root).value;
    anyhow::ensure!(
        total.is_finite() && total > 0.0,
        "Hierarchy has no positive total weight (got {})",
        total
    );
    Ok(tree)
}

pub fn from_json_file(path: &std::path::Path) -> Result<CutTree> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    from_json_str(&text).with_context(|| format!("Invalid hierarchy in {}", path.display()))
}

/// Copy a parsed hierarchy into an arena without recursion.
pub fn from_json_node(root: JsonNode) -> CutTree {
    let mut tree = CutTree::new(&root.name);
    tree.get_mut(tree.root).weight = root.value;

    let mut stack: Vec<(NodeId, Vec<JsonNode>)> = vec![(tree.root, root.children)];
    while let Some((parent, children)) = stack.pop() {
        for child in children {
            let id = tree.add_child(parent, Node::leaf(&child.name, child.value));
            if !child.children.is_empty() {
                stack.push((id, child.children));
            }
        }
    }
    tree
}
