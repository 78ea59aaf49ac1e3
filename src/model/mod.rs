//! Description-length models scoring candidate cuts.
//!
//! Every model answers two questions about a cut: how many bits the data
//! costs when the cut stands in for finer detail (`ddl`), and how many bits
//! the cut's own structure costs (`pdl`). The optimizer in [`crate::cut`]
//! only ever sees this pair.

pub mod li_abe;
pub mod sunburst;
pub mod treemap;

use crate::tree::arena::{CutTree, NodeId};

pub use self::li_abe::{LiAbe, Wagner};
pub use self::sunburst::SunburstModel;
pub use self::treemap::TreemapModel;

/// Strategy seam between the optimizer and the concrete models.
pub trait DescriptionLength {
    /// Bits to encode the data given `cut` as the coarse-grained model.
    fn ddl(&self, tree: &CutTree, cut: &[NodeId], total: f64) -> f64;

    /// Bits to encode the structure of `cut` itself.
    fn pdl(&self, tree: &CutTree, cut: &[NodeId]) -> f64;
}

/// One encoded class: its frequency `f` and its probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Class {
    pub f: f64,
    pub p: f64,
}

/// Empirical probability of a class of total weight `f` within sample size `s`.
pub fn pc(f: f64, s: f64) -> f64 {
    f / s
}

/// Probability spread evenly over the `c` leaves of a class (1 for a leaf).
pub fn pn(pc: f64, c: f64) -> f64 {
    pc / c
}

/// `-Σ log2(p)·f`. Zero-probability classes contribute nothing.
pub fn ddl_base(classes: &[Class]) -> f64 {
    let mut bits = 0.0;
    for class in classes {
        if class.p > 0.0 {
            bits += class.p.log2() * class.f;
        }
    }
    -bits
}

/// Tagged set of every available model.
#[derive(Debug, Clone)]
pub enum Model {
    LiAbe(LiAbe),
    Wagner(Wagner),
    Treemap(TreemapModel),
    Sunburst(SunburstModel),
}

impl DescriptionLength for Model {
    fn ddl(&self, tree: &CutTree, cut: &[NodeId], total: f64) -> f64 {
        match self {
            Model::LiAbe(m) => m.ddl(tree, cut, total),
            Model::Wagner(m) => m.ddl(tree, cut, total),
            Model::Treemap(m) => m.ddl(tree, cut, total),
            Model::Sunburst(m) => m.ddl(tree, cut, total),
        }
    }

    fn pdl(&self, tree: &CutTree, cut: &[NodeId]) -> f64 {
        match self {
            Model::LiAbe(m) => m.pdl(tree, cut),
            Model::Wagner(m) => m.pdl(tree, cut),
            Model::Treemap(m) => m.pdl(tree, cut),
            Model::Sunburst(m) => m.pdl(tree, cut),
        }
    }
}
