use std::f64::consts::PI;

use super::{ddl_base, Class, DescriptionLength};
use crate::tree::arena::{CutTree, NodeId};

/// Area of a disk sector spanning `angle` radians.
pub fn disk_sector_area(angle: f64, radius: f64) -> f64 {
    angle * radius * radius / 2.0
}

/// Angle-budgeted model for one fixed depth threshold.
///
/// Rings are `level_width` pixels thick. A node at depth `d` is visible when
/// its arc on ring `d` is at least one pixel long.
#[derive(Debug, Clone)]
pub struct SunburstModel {
    pub radius: f64,
    pub depth_threshold: u16,
    pub level_width: f64,
    pub node_pdl_cost: f64,
    /// Smallest visible probability per depth, indexed by absolute depth
    pub min_visible: Vec<f64>,
}

impl SunburstModel {
    /// Model for the subtree at `root` drawn in a disk of `radius` pixels,
    /// showing at most down to `depth_threshold`.
    pub fn new(tree: &CutTree, root: NodeId, radius: f64, depth_threshold: u16) -> Self {
        let root_depth = tree.get(root).depth;
        let n_levels = depth_threshold.saturating_sub(root_depth) as f64 + 1.0;
        let level_width = radius / n_levels;

        let deepest = tree.max_depth(root);
        let min_visible = (0..=deepest)
            .map(|d| 1.0 / (2.0 * PI * (d as f64 + 1.0) * level_width))
            .collect();

        Self {
            radius,
            depth_threshold,
            level_width,
            node_pdl_cost: 2.0 * (2.0 * radius).log2(),
            min_visible,
        }
    }

    fn min_visible_at(&self, depth: u16) -> f64 {
        self.min_visible
            .get(depth as usize)
            .or_else(|| self.min_visible.last())
            .copied()
            .unwrap_or(0.0)
    }

    fn sector(&self, p: f64) -> f64 {
        disk_sector_area(p * 2.0 * PI, self.radius)
    }
}

impl DescriptionLength for SunburstModel {
    fn ddl(&self, tree: &CutTree, cut: &[NodeId], total: f64) -> f64 {
        if cut
            .iter()
            .any(|&id| tree.get(id).depth > self.depth_threshold)
        {
            return f64::INFINITY;
        }

        let mut classes = Vec::with_capacity(cut.len());
        // (probability, leaves) of members too thin to draw
        let mut hidden = Vec::new();
        let mut pooled_p = 0.0;
        let mut pooled_leaves = 0.0;

        for &id in cut {
            let node = tree.get(id);
            let p = node.value / total;
            let leaves = node.n_leaves.max(1) as f64;
            if node.value > 0.0 && p >= self.min_visible_at(node.depth) {
                classes.push(Class {
                    f: self.sector(p),
                    p: p / leaves,
                });
            } else {
                pooled_p += p;
                pooled_leaves += leaves;
                hidden.push(p);
            }
        }

        if !hidden.is_empty() {
            let pooled = pooled_p / pooled_leaves;
            classes.extend(hidden.into_iter().map(|p| Class {
                f: self.sector(p),
                p: pooled,
            }));
        }

        ddl_base(&classes)
    }

    fn pdl(&self, _tree: &CutTree, cut: &[NodeId]) -> f64 {
        cut.len() as f64 * self.node_pdl_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::adorn;

    fn fan() -> (CutTree, [NodeId; 3], NodeId) {
        let mut tree = CutTree::new("root");
        let a = tree.add_leaf(tree.root, "a", 1000.0);
        let b = tree.add_leaf(tree.root, "b", 1.0);
        let c = tree.add_group(tree.root, "c");
        let deep = tree.add_group(c, "c1");
        let leaf = tree.add_leaf(deep, "c11", 1.0);
        adorn(&mut tree);
        (tree, [a, b, c], leaf)
    }

    #[test]
    fn visibility_table_follows_ring_radius() {
        let (tree, _, _) = fan();
        let model = SunburstModel::new(&tree, tree.root, 100.0, 2);
        let width = 100.0 / 3.0;
        assert!((model.level_width - width).abs() < 1e-12);
        assert_eq!(model.min_visible.len(), 4);
        for (d, &p) in model.min_visible.iter().enumerate() {
            let expected = 1.0 / (2.0 * PI * (d as f64 + 1.0) * width);
            assert!((p - expected).abs() < 1e-15);
        }
        assert!((model.node_pdl_cost - 2.0 * 200f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn members_past_threshold_are_unbounded() {
        let (tree, _, leaf) = fan();
        let model = SunburstModel::new(&tree, tree.root, 100.0, 2);
        let total = tree.get(tree.root).value;
        let ddl = model.ddl(&tree, &[leaf], total);
        assert!(ddl.is_infinite() && ddl > 0.0);
    }

    #[test]
    fn thin_members_share_a_pooled_probability() {
        let (tree, [a, b, c], _) = fan();
        let model = SunburstModel::new(&tree, tree.root, 100.0, 2);
        let total = tree.get(tree.root).value;

        let pb = 1.0 / total;
        assert!(pb < model.min_visible[1]);

        // b and c are both one unit wide: pooled p = 2/total over 2 leaves
        let pooled = (2.0 / total) / 2.0;
        let expected = -2.0 * model.sector(pb) * pooled.log2();
        let ddl = model.ddl(&tree, &[b, c], total);
        assert!((ddl - expected).abs() < 1e-9);
        assert!(ddl.is_finite() && ddl > 0.0);

        let pa = 1000.0 / total;
        let visible = model.ddl(&tree, &[a], total);
        assert!((visible + model.sector(pa) * pa.log2()).abs() < 1e-9);
    }

    #[test]
    fn zero_weight_member_costs_nothing() {
        let mut tree = CutTree::new("root");
        tree.add_leaf(tree.root, "full", 4.0);
        let empty = tree.add_leaf(tree.root, "empty", 0.0);
        adorn(&mut tree);
        let model = SunburstModel::new(&tree, tree.root, 50.0, 1);
        let ddl = model.ddl(&tree, &[empty], 4.0);
        assert_eq!(ddl, 0.0);
        assert_eq!(model.pdl(&tree, &[empty]), model.node_pdl_cost);
    }
}
