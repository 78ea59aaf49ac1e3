use rayon::prelude::*;

use super::{find_cut, Cut};
use crate::model::SunburstModel;
use crate::tree::arena::{CutTree, NodeId};

/// Configuration for sunburst cuts.
#[derive(Debug, Clone, Copy)]
pub struct SunburstConfig {
    /// Disk radius (px)
    pub radius: f64,
    /// Deepest ring to consider; `None` uses the tree's own depth
    pub max_depth: Option<u16>,
}

impl Default for SunburstConfig {
    fn default() -> Self {
        Self {
            radius: 400.0,
            max_depth: None,
        }
    }
}

/// Outcome of trying every depth threshold.
#[derive(Debug, Clone)]
pub struct ThresholdSearch {
    /// Cheapest cut found
    pub best: Cut,
    /// Threshold that produced `best`
    pub threshold: u16,
    /// `(threshold, ddl + pdl)` for every threshold tried, deepest first
    pub candidates: Vec<(u16, f64)>,
}

/// Run the optimizer once per depth threshold, from `max_depth` down to one
/// below `root`, and keep the cheapest cut. The deepest threshold wins ties.
pub fn search_thresholds(
    tree: &CutTree,
    root: NodeId,
    total: f64,
    radius: f64,
    max_depth: u16,
) -> ThresholdSearch {
    let shallowest = tree.get(root).depth + 1;
    let deepest = max_depth.max(shallowest);

    let run = |threshold: u16| {
        let model = SunburstModel::new(tree, root, radius, threshold);
        (threshold, find_cut(tree, root, total, &model, true))
    };

    // Thresholds are independent; evaluate the shallower ones on the pool.
    let first = run(deepest);
    let rest: Vec<u16> = (shallowest..deepest).rev().collect();
    let rest: Vec<(u16, Cut)> = rest.par_iter().map(|&threshold| run(threshold)).collect();

    let mut candidates = Vec::with_capacity(rest.len() + 1);
    candidates.push((first.0, first.1.dl()));
    candidates.extend(rest.iter().map(|(t, cut)| (*t, cut.dl())));
    for (threshold, dl) in &candidates {
        tracing::debug!("Sunburst threshold {}: dl={:.3}", threshold, dl);
    }

    let (threshold, best) = rest.into_iter().fold(first, |best, next| {
        if next.1.dl() < best.1.dl() {
            next
        } else {
            best
        }
    });

    tracing::info!(
        "Sunburst cut: threshold {} of {}..={}, {} members, dl={:.3}",
        threshold,
        shallowest,
        deepest,
        best.members.len(),
        best.dl()
    );

    ThresholdSearch {
        best,
        threshold,
        candidates,
    }
}

/// Members of the cheapest sunburst cut of the subtree at `root`.
pub fn find_sunburst_cut(
    tree: &CutTree,
    root: NodeId,
    total: f64,
    radius: f64,
    max_depth: u16,
) -> Vec<NodeId> {
    search_thresholds(tree, root, total, radius, max_depth).best.members
}

impl SunburstConfig {
    /// Search the whole tree with this configuration.
    pub fn find_cut(&self, tree: &CutTree) -> ThresholdSearch {
        let max_depth = self
            .max_depth
            .unwrap_or_else(|| tree.max_depth(tree.root));
        let total = tree.get(tree.root).value;
        search_thresholds(tree, tree.root, total, self.radius, max_depth)
    }
}
