use super::{ddl_base, pn, Class, DescriptionLength};
use crate::cut::{find_cut, Cut};
use crate::tree::arena::{CutTree, Node, NodeId};

/// Probability assigned to elements too small to read.
pub const MIN_PROBABILITY: f64 = 1e-12;

/// Configuration for the treemap model.
#[derive(Debug, Clone, Copy)]
pub struct TreemapConfig {
    /// Drawing surface width (px)
    pub width: f64,
    /// Drawing surface height (px)
    pub height: f64,
    /// Minimum legible box area (px²); 10×10 by default
    pub min_area: f64,
}

impl Default for TreemapConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            min_area: 100.0,
        }
    }
}

/// Area-budgeted model: every cut member becomes one rectangle whose area is
/// proportional to its value.
#[derive(Debug, Clone, Copy)]
pub struct TreemapModel {
    pub display_area: f64,
    pub min_area: f64,
}

impl From<TreemapConfig> for TreemapModel {
    fn from(config: TreemapConfig) -> Self {
        Self {
            display_area: config.width * config.height,
            min_area: config.min_area,
        }
    }
}

impl TreemapModel {
    pub fn new(display_area: f64) -> Self {
        Self {
            display_area,
            min_area: TreemapConfig::default().min_area,
        }
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    /// Pixel area of `node` when the whole display shows `total`.
    pub fn area(&self, node: &Node, total: f64) -> f64 {
        self.display_area * node.value / total
    }

    /// Frequency and probability for one node. Sub-legible areas are clamped
    /// to [`MIN_PROBABILITY`] instead of their true share.
    pub fn class(&self, node: &Node, total: f64) -> Class {
        let area = self.area(node, total);
        let share = if area.floor() <= self.min_area {
            MIN_PROBABILITY
        } else {
            area.round() / self.display_area
        };
        Class {
            f: area,
            p: pn(share, node.n_leaves.max(1) as f64),
        }
    }

    /// Best cut of the subtree at `root`, sized against that subtree's value.
    pub fn find_cut(&self, tree: &CutTree, root: NodeId) -> Vec<NodeId> {
        self.find_scored_cut(tree, root).members
    }

    pub fn find_scored_cut(&self, tree: &CutTree, root: NodeId) -> Cut {
        let total = tree.get(root).value;
        find_cut(tree, root, total, self, true)
    }
}

impl DescriptionLength for TreemapModel {
    fn ddl(&self, tree: &CutTree, cut: &[NodeId], total: f64) -> f64 {
        let classes: Vec<Class> = cut
            .iter()
            .map(|&id| self.class(tree.get(id), total))
            .collect();
        ddl_base(&classes)
    }

    /// Position and size of every visible element.
    fn pdl(&self, _tree: &CutTree, cut: &[NodeId]) -> f64 {
        2.0 * cut.len() as f64 * self.display_area.log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cut::is_partition;
    use crate::tree::adorn;

    #[test]
    fn tiny_leaf_gets_floor_probability() {
        let mut tree = CutTree::new("root");
        let big = tree.add_leaf(tree.root, "big", 99_999.0);
        let tiny = tree.add_leaf(tree.root, "tiny", 1.0);
        adorn(&mut tree);

        let model = TreemapModel::new(1_000_000.0);
        let total = tree.get(tree.root).value;

        let class = model.class(tree.get(tiny), total);
        assert!((class.f - 10.0).abs() < 1e-9);
        assert_eq!(class.p, MIN_PROBABILITY);

        let class = model.class(tree.get(big), total);
        assert!((class.p - 999_990.0 / 1_000_000.0).abs() < 1e-12);
    }

    #[test]
    fn threshold_area_is_still_illegible() {
        let mut tree = CutTree::new("root");
        tree.add_leaf(tree.root, "big", 9_999.0);
        let edge = tree.add_leaf(tree.root, "edge", 1.0);
        adorn(&mut tree);

        // 1e6 * 1 / 1e4 = 100 px², exactly the minimum
        let model = TreemapModel::new(1_000_000.0);
        assert_eq!(model.class(tree.get(edge), 10_000.0).p, MIN_PROBABILITY);
    }

    #[test]
    fn structure_cost_grows_with_cut_size() {
        let mut tree = CutTree::new("root");
        let a = tree.add_leaf(tree.root, "a", 1.0);
        let b = tree.add_leaf(tree.root, "b", 1.0);
        adorn(&mut tree);

        let model = TreemapModel::new(1024.0);
        assert_eq!(model.pdl(&tree, &[a]), 20.0);
        assert_eq!(model.pdl(&tree, &[a, b]), 40.0);
    }

    #[test]
    fn small_display_summarizes_deep_tree() {
        let mut tree = CutTree::new("root");
        for g in 0..4 {
            let group = tree.add_group(tree.root, &format!("g{g}"));
            for l in 0..50 {
                tree.add_leaf(group, &format!("g{g}-{l}"), (l + 1) as f64);
            }
        }
        adorn(&mut tree);

        let model: TreemapModel = TreemapConfig {
            width: 100.0,
            height: 100.0,
            ..Default::default()
        }
        .into();
        let cut = model.find_cut(&tree, tree.root);
        assert!(is_partition(&tree, tree.root, &cut));
        assert_eq!(cut.len(), 4);
    }
}
