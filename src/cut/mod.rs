pub mod threshold;

use crate::model::DescriptionLength;
use crate::tree::arena::{CutTree, NodeId};

pub use self::threshold::{find_sunburst_cut, search_thresholds, SunburstConfig, ThresholdSearch};

/// A selected cut with its description lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    /// Members in left-to-right tree order
    pub members: Vec<NodeId>,
    pub ddl: f64,
    pub pdl: f64,
}

impl Cut {
    /// Total description length.
    pub fn dl(&self) -> f64 {
        self.ddl + self.pdl
    }

    fn single<M: DescriptionLength + ?Sized>(tree: &CutTree, node: NodeId, total: f64, model: &M) -> Self {
        let members = vec![node];
        let ddl = model.ddl(tree, &members, total);
        let pdl = model.pdl(tree, &members);
        Cut { members, ddl, pdl }
    }
}

/// Minimum-description-length cut of the subtree at `node`.
///
/// Post-order: each subtree either collapses to itself or keeps the
/// concatenation of its children's cuts, whichever is cheaper. Ties collapse.
/// The node flagged `is_root` always expands, so a tree with two or more
/// leaves never reduces to its root alone.
pub fn find_cut<M: DescriptionLength + ?Sized>(
    tree: &CutTree,
    node: NodeId,
    total: f64,
    model: &M,
    is_root: bool,
) -> Cut {
    let root_cut = Cut::single(tree, node, total, model);
    if tree.get(node).is_leaf() {
        return root_cut;
    }

    let mut children_cut = Cut {
        members: Vec::new(),
        ddl: 0.0,
        pdl: 0.0,
    };
    for child in tree.children(node) {
        let sub = find_cut(tree, child, total, model, false);
        children_cut.members.extend(sub.members);
        children_cut.ddl += sub.ddl;
        children_cut.pdl += sub.pdl;
    }

    if root_cut.dl() <= children_cut.dl() && !is_root {
        root_cut
    } else {
        children_cut
    }
}

/// Best cut of the whole tree, with the root's value as the sample total.
pub fn find_root_cut<M: DescriptionLength + ?Sized>(tree: &CutTree, model: &M) -> Cut {
    let total = tree.get(tree.root).value;
    if total.is_nan() || total <= 0.0 {
        tracing::warn!("Cut requested on a tree with total weight {}", total);
    }
    find_cut(tree, tree.root, total, model, true)
}

/// Whether the leaf sets under `members` partition the leaves under `root`
/// exactly: nothing missing, nothing covered twice, nothing from outside.
pub fn is_partition(tree: &CutTree, root: NodeId, members: &[NodeId]) -> bool {
    let mut expected = vec![false; tree.len()];
    let leaves = tree.leaves(root);
    for &leaf in &leaves {
        expected[leaf.index()] = true;
    }

    let mut seen = vec![false; tree.len()];
    let mut covered = 0usize;
    for &member in members {
        for leaf in tree.leaves(member) {
            if !expected[leaf.index()] || seen[leaf.index()] {
                return false;
            }
            seen[leaf.index()] = true;
            covered += 1;
        }
    }
    covered == leaves.len()
}
