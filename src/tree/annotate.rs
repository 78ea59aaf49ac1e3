use super::arena::{CutTree, Node, NodeId};

/// Writes `depth`, `parent`, `value` and `n_leaves` onto every node of a tree.
///
/// The accessor maps a leaf to its own scalar weight. It is applied once here,
/// so the description-length models only ever read `value` and `n_leaves`.
pub struct Annotator<F> {
    value: F,
}

impl Default for Annotator<fn(&Node) -> f64> {
    fn default() -> Self {
        fn own_weight(node: &Node) -> f64 {
            node.weight
        }
        Self { value: own_weight }
    }
}

impl<F> Annotator<F>
where
    F: Fn(&Node) -> f64,
{
    pub fn new(value: F) -> Self {
        Self { value }
    }

    /// Annotate in place and hand the tree back for chaining.
    /// Tree shape is never changed; only annotation fields are overwritten.
    pub fn adorn<'t>(&self, tree: &'t mut CutTree) -> &'t mut CutTree {
        let order = assign_depths(tree);

        // Children are discovered after their parent, so walking the discovery
        // order backwards finishes every child before its parent.
        for &id in order.iter().rev() {
            if tree.get(id).is_leaf() {
                let weight = (self.value)(tree.get(id));
                let node = tree.get_mut(id);
                node.value = weight;
                node.n_leaves = 1;
                continue;
            }

            let mut value = 0.0;
            let mut n_leaves = 0u32;
            for child in tree.children(id) {
                let child = tree.get(child);
                value += child.value;
                n_leaves += if child.is_leaf() { 1 } else { child.n_leaves };
            }
            let node = tree.get_mut(id);
            node.value = value;
            node.n_leaves = n_leaves;
        }

        tracing::debug!(
            "Annotated {} nodes: root value={}, leaves={}",
            order.len(),
            tree.get(tree.root).value,
            tree.get(tree.root).n_leaves
        );
        tree
    }
}

/// Annotate with the default accessor (each leaf's stored `weight`).
pub fn adorn(tree: &mut CutTree) -> &mut CutTree {
    Annotator::<fn(&Node) -> f64>::default().adorn(tree)
}

/// Recompute only `depth`, `parent` and `n_leaves`, leaving `value` untouched.
/// For hierarchies whose values were already aggregated upstream.
pub fn adorn_leaf_counts(tree: &mut CutTree) -> &mut CutTree {
    let order = assign_depths(tree);
    for &id in &order {
        tree.get_mut(id).n_leaves = 0;
    }
    for &id in order.iter().skip(1).rev() {
        let node = tree.get(id);
        let add = if node.is_leaf() { 1 } else { node.n_leaves };
        let parent = node.parent;
        if let Some(parent) = parent {
            tree.get_mut(parent).n_leaves += add;
        }
    }
    let root = tree.root;
    if tree.get(root).is_leaf() {
        tree.get_mut(root).n_leaves = 1;
    }
    tree
}

/// Top-down pass: root depth 0, every child one below its parent.
/// Returns nodes in discovery order (root first).
fn assign_depths(tree: &mut CutTree) -> Vec<NodeId> {
    let root = tree.root;
    {
        let node = tree.get_mut(root);
        node.depth = 0;
        node.parent = None;
    }

    let mut stack = vec![root];
    let mut order = Vec::with_capacity(tree.len());
    while let Some(id) = stack.pop() {
        let depth = tree.get(id).depth;
        let children: Vec<NodeId> = tree.children(id).collect();
        for child in children {
            let node = tree.get_mut(child);
            node.depth = depth + 1;
            node.parent = Some(id);
            stack.push(child);
        }
        order.push(id);
    }
    order
}
