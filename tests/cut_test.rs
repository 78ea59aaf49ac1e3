use rstest::{fixture, rstest};

use treecut::cut::{find_cut, find_root_cut, find_sunburst_cut, is_partition};
use treecut::model::{DescriptionLength, LiAbe, Model, SunburstModel, TreemapModel, Wagner};
use treecut::tree::adorn;
use treecut::tree::arena::{CutTree, NodeId};

struct Animals {
    tree: CutTree,
    bird: NodeId,
    insect: NodeId,
}

#[fixture]
fn animals() -> Animals {
    let mut tree = CutTree::new("ANIMAL");
    let bird = tree.add_group(tree.root, "BIRD");
    for (name, w) in [("swallow", 0.0), ("crow", 2.0), ("eagle", 2.0), ("bird", 4.0)] {
        tree.add_leaf(bird, name, w);
    }
    let insect = tree.add_group(tree.root, "INSECT");
    for (name, w) in [("bug", 0.0), ("bee", 2.0), ("insect", 0.0)] {
        tree.add_leaf(insect, name, w);
    }
    adorn(&mut tree);
    Animals { tree, bird, insect }
}

/// Unbalanced tree with a long chain, a wide fan and zero-weight leaves.
#[fixture]
fn ragged() -> CutTree {
    let mut tree = CutTree::new("root");
    let mut chain = tree.root;
    for d in 0..6 {
        chain = tree.add_group(chain, &format!("chain{d}"));
        tree.add_leaf(chain, &format!("chain{d}-leaf"), (d * d + 1) as f64);
    }
    tree.add_leaf(chain, "bottom", 500.0);

    let fan = tree.add_group(tree.root, "fan");
    for i in 0..40 {
        tree.add_leaf(fan, &format!("fan{i}"), if i % 7 == 0 { 0.0 } else { (i % 5 + 1) as f64 });
    }
    let mid = tree.add_group(tree.root, "mid");
    for g in 0..5 {
        let group = tree.add_group(mid, &format!("mid{g}"));
        for l in 0..g + 1 {
            tree.add_leaf(group, &format!("mid{g}-{l}"), 10.0 * (l + 1) as f64);
        }
    }
    tree.add_leaf(tree.root, "lonely", 0.0);
    adorn(&mut tree);
    tree
}

fn dl<M: DescriptionLength>(model: &M, tree: &CutTree, cut: &[NodeId], total: f64) -> f64 {
    model.ddl(tree, cut, total) + model.pdl(tree, cut)
}

#[rstest]
fn li_abe_cut_beats_both_hand_picked_cuts(animals: Animals) {
    let Animals { tree, bird, insect } = animals;
    let model = LiAbe::new(10.0);
    let cut = find_root_cut(&tree, &model);

    assert!(cut.dl() <= dl(&model, &tree, &[tree.root], 10.0));
    assert!(cut.dl() <= dl(&model, &tree, &[bird, insect], 10.0));
    assert!(is_partition(&tree, tree.root, &cut.members));
    assert!(cut.members.len() >= 2);
}

#[rstest]
fn unweighted_wagner_reports_li_abe_pdl(animals: Animals) {
    let Animals { tree, .. } = animals;
    let wagner = Wagner::new(10.0, 0.0);
    let cut = find_root_cut(&tree, &wagner);
    assert_eq!(cut.ddl, 0.0);

    let base = LiAbe::new(10.0);
    assert_eq!(
        dl(&wagner, &tree, &cut.members, 10.0),
        base.pdl(&tree, &cut.members)
    );
}

#[rstest]
#[case::li_abe(Model::LiAbe(LiAbe::new(1.0)))]
#[case::wagner(Model::Wagner(Wagner::new(1.0, 3.0)))]
#[case::treemap_large(Model::Treemap(TreemapModel::new(1920.0 * 1080.0)))]
#[case::treemap_small(Model::Treemap(TreemapModel::new(200.0 * 150.0)))]
fn every_model_yields_a_partition(ragged: CutTree, #[case] model: Model) {
    let tree = ragged;
    let model = match model {
        // sample size is the tree total
        Model::LiAbe(_) => Model::LiAbe(LiAbe::new(tree.get(tree.root).value)),
        Model::Wagner(w) => Model::Wagner(Wagner::new(tree.get(tree.root).value, w.weight)),
        other => other,
    };
    let cut = find_root_cut(&tree, &model);
    assert!(is_partition(&tree, tree.root, &cut.members));
    assert!(cut.members.len() >= 2);
    assert!(!cut.dl().is_nan());
}

#[rstest]
fn subtree_cuts_partition_their_subtree(ragged: CutTree) {
    let tree = ragged;
    let total = tree.get(tree.root).value;
    let model = TreemapModel::new(800.0 * 600.0);
    for id in tree.children(tree.root) {
        let cut = find_cut(&tree, id, total, &model, false);
        assert!(is_partition(&tree, id, &cut.members));
    }
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(7)]
#[case(12)]
fn sunburst_cuts_partition_and_respect_threshold(ragged: CutTree, #[case] max_depth: u16) {
    let tree = ragged;
    let total = tree.get(tree.root).value;
    let cut = find_sunburst_cut(&tree, tree.root, total, 300.0, max_depth);
    assert!(is_partition(&tree, tree.root, &cut));
    let deepest = cut.iter().map(|&m| tree.get(m).depth).max().unwrap_or(0);
    assert!(deepest <= max_depth.max(1));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
fn sunburst_single_leaf(#[case] max_depth: u16) {
    let mut tree = CutTree::new("only");
    tree.get_mut(tree.root).weight = 9.0;
    adorn(&mut tree);
    let cut = find_sunburst_cut(&tree, tree.root, 9.0, 100.0, max_depth);
    assert_eq!(cut, vec![tree.root]);
}

#[rstest]
fn sunburst_rejects_cuts_below_threshold(ragged: CutTree) {
    let tree = ragged;
    let total = tree.get(tree.root).value;
    let model = SunburstModel::new(&tree, tree.root, 300.0, 2);
    let leaves = tree.leaves(tree.root);
    assert!(model.ddl(&tree, &leaves, total).is_infinite());

    let cut = find_cut(&tree, tree.root, total, &model, true);
    assert!(cut.dl().is_finite());
    assert!(cut.members.iter().all(|&m| tree.get(m).depth <= 2));
}
