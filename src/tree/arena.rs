use compact_str::CompactString;

/// Index into the arena `Vec<Node>`. Uses u32 to save memory (supports up to ~4 billion nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: u32 = u32::MAX;

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node of the hierarchy, stored in a flat arena.
/// Uses sibling-list representation: each node has `first_child` and `next_sibling`.
#[derive(Debug, Clone)]
pub struct Node {
    /// Display name (not a full path)
    pub name: CompactString,
    /// Own scalar weight. Only meaningful for leaves; read by the annotator's accessor.
    pub weight: f64,
    /// Aggregated weight: own weight for a leaf, sum of descendant leaf weights otherwise.
    /// Written by the annotator.
    pub value: f64,
    /// Number of descendant leaves (1 for a leaf). Written by the annotator.
    pub n_leaves: u32,
    /// Parent node index (None for root). Lookup only, never ownership.
    pub parent: Option<NodeId>,
    /// First child node index (None for leaves)
    pub first_child: Option<NodeId>,
    /// Last child node index, kept so appends preserve insertion order
    pub last_child: Option<NodeId>,
    /// Next sibling node index (None if last child)
    pub next_sibling: Option<NodeId>,
    /// Depth in the tree (root = 0)
    pub depth: u16,
}

impl Node {
    /// A detached leaf with the given own weight.
    pub fn leaf(name: &str, weight: f64) -> Self {
        Node {
            name: CompactString::new(name),
            weight,
            value: 0.0,
            n_leaves: 0,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            depth: 0,
        }
    }

    /// A detached inner node. Its value comes from its children once annotated.
    pub fn group(name: &str) -> Self {
        Self::leaf(name, 0.0)
    }

    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }
}

/// The hierarchy stored as a flat arena of nodes.
#[derive(Debug, Clone)]
pub struct CutTree {
    /// All nodes in contiguous memory
    pub nodes: Vec<Node>,
    /// Root node index
    pub root: NodeId,
}

impl CutTree {
    /// Create a tree holding only a root node.
    pub fn new(root_name: &str) -> Self {
        CutTree {
            nodes: vec![Node::group(root_name)],
            root: NodeId(0),
        }
    }

    /// Add a child node under the given parent, after its existing children.
    /// Returns the new node's ID.
    pub fn add_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let new_id = NodeId(self.nodes.len() as u32);
        node.parent = Some(parent);
        node.depth = self.nodes[parent.index()].depth + 1;
        node.next_sibling = None;

        // Append to parent's child list (O(1) via last_child)
        match self.nodes[parent.index()].last_child {
            Some(last) => self.nodes[last.index()].next_sibling = Some(new_id),
            None => self.nodes[parent.index()].first_child = Some(new_id),
        }
        self.nodes[parent.index()].last_child = Some(new_id);

        self.nodes.push(node);
        new_id
    }

    /// Convenience: append a leaf with the given weight.
    pub fn add_leaf(&mut self, parent: NodeId, name: &str, weight: f64) -> NodeId {
        self.add_child(parent, Node::leaf(name, weight))
    }

    /// Convenience: append an inner node.
    pub fn add_group(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.add_child(parent, Node::group(name))
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty (only root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over children of a node, in insertion order.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        ChildIter {
            tree: self,
            current: self.nodes[parent.index()].first_child,
        }
    }

    /// Leaves of the subtree rooted at `root`, left to right.
    pub fn leaves(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if self.get(id).is_leaf() {
                out.push(id);
                continue;
            }
            let mut kids: Vec<NodeId> = self.children(id).collect();
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Deepest `depth` found anywhere in the subtree rooted at `root`.
    pub fn max_depth(&self, root: NodeId) -> u16 {
        let mut deepest = self.get(root).depth;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            deepest = deepest.max(self.get(id).depth);
            stack.extend(self.children(id));
        }
        deepest
    }

    /// Slash-separated names from the root down to `id`.
    pub fn path(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            parts.push(node.name.as_str());
            current = node.parent;
        }
        parts.reverse();
        parts.join("/")
    }
}

/// Iterator over the children of a node.
pub struct ChildIter<'a> {
    tree: &'a CutTree,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.nodes[id.index()].next_sibling;
        Some(id)
    }
}
