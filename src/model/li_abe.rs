use super::{ddl_base, pc, pn, Class, DescriptionLength};
use crate::tree::arena::{CutTree, NodeId};

/// Li & Abe (1998) tree-cut model over a sample of `sample_size` observations.
#[derive(Debug, Clone, Copy)]
pub struct LiAbe {
    pub sample_size: f64,
}

impl LiAbe {
    pub fn new(sample_size: f64) -> Self {
        Self { sample_size }
    }

    pub fn classes(&self, tree: &CutTree, cut: &[NodeId], total: f64) -> Vec<Class> {
        cut.iter()
            .map(|&id| {
                let node = tree.get(id);
                Class {
                    f: node.value,
                    p: pn(pc(node.value, total), node.n_leaves.max(1) as f64),
                }
            })
            .collect()
    }
}

impl DescriptionLength for LiAbe {
    fn ddl(&self, tree: &CutTree, cut: &[NodeId], total: f64) -> f64 {
        ddl_base(&self.classes(tree, cut, total))
    }

    /// `k·log2(|S|)/2` with `k = |cut| - 1` free parameters.
    fn pdl(&self, _tree: &CutTree, cut: &[NodeId]) -> f64 {
        let k = cut.len() as f64 - 1.0;
        k * self.sample_size.log2() / 2.0
    }
}

/// Wagner (2000) reweighting of Li & Abe: `pdl + c·(log2|S|/|S|)·ddl`.
/// Larger `weight` favours deeper, more detailed cuts; `0` leaves only `pdl`.
#[derive(Debug, Clone, Copy)]
pub struct Wagner {
    pub base: LiAbe,
    pub weight: f64,
}

impl Wagner {
    pub fn new(sample_size: f64, weight: f64) -> Self {
        Self {
            base: LiAbe::new(sample_size),
            weight,
        }
    }

    fn scale(&self) -> f64 {
        let s = self.base.sample_size;
        self.weight * s.log2() / s
    }
}

impl DescriptionLength for Wagner {
    fn ddl(&self, tree: &CutTree, cut: &[NodeId], total: f64) -> f64 {
        if self.weight == 0.0 {
            return 0.0;
        }
        self.scale() * self.base.ddl(tree, cut, total)
    }

    fn pdl(&self, tree: &CutTree, cut: &[NodeId]) -> f64 {
        self.base.pdl(tree, cut)
    }
}
