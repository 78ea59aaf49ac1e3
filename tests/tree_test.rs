use std::fs;

use rstest::rstest;
use tempfile::TempDir;

use treecut::cut::is_partition;
use treecut::model::TreemapModel;
use treecut::scanner;
use treecut::tree::arena::{CutTree, NodeId};
use treecut::tree::{self, adorn, json};

fn write(dir: &TempDir, rel: &str, bytes: usize) {
    let path = dir.path().join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec![b'x'; bytes]).unwrap();
}

#[test]
fn scanned_directory_becomes_annotated_tree() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/main.rs", 120);
    write(&dir, "src/lib.rs", 80);
    write(&dir, "docs/guide/intro.md", 300);
    write(&dir, "README", 25);
    fs::create_dir_all(dir.path().join("empty")).unwrap();

    let entries = scanner::scan(dir.path()).unwrap();
    let tree = tree::build_tree(&entries);

    let root = tree.get(tree.root);
    assert_eq!(root.value, 525.0);
    // four files plus the empty directory, which is a zero-weight leaf
    assert_eq!(root.n_leaves, 5);

    let cut = TreemapModel::new(640.0 * 480.0).find_cut(&tree, tree.root);
    assert!(is_partition(&tree, tree.root, &cut));
}

#[test]
fn scanning_a_missing_path_fails() {
    let dir = TempDir::new().unwrap();
    assert!(scanner::scan(&dir.path().join("nope")).is_err());
}

#[rstest]
#[case::flat(r#"{"name": "r", "children": [{"name": "a", "value": 1}, {"name": "b", "value": 2}]}"#, 3.0, 2)]
#[case::nested(r#"{"name": "r", "children": [{"name": "a", "children": [{"name": "x", "size": 4}]}, {"name": "b", "value": 2}]}"#, 6.0, 2)]
#[case::leaf_root(r#"{"name": "r", "value": 5}"#, 5.0, 1)]
fn json_hierarchies(#[case] input: &str, #[case] total: f64, #[case] leaves: u32) {
    let tree = json::from_json_str(input).unwrap();
    assert_eq!(tree.get(tree.root).value, total);
    assert_eq!(tree.get(tree.root).n_leaves, leaves);
}

#[test]
fn reannotating_after_a_change_refreshes_sums() {
    let mut tree = CutTree::new("root");
    let a = tree.add_group(tree.root, "a");
    tree.add_leaf(a, "a1", 1.0);
    adorn(&mut tree);
    assert_eq!(tree.get(tree.root).value, 1.0);

    tree.add_leaf(a, "a2", 2.0);
    tree.add_leaf(tree.root, "b", 3.0);
    adorn(&mut tree);
    assert_eq!(tree.get(a).value, 3.0);
    assert_eq!(tree.get(tree.root).value, 6.0);
    assert_eq!(tree.get(tree.root).n_leaves, 3);

    let snapshot: Vec<(f64, u32, u16)> = tree
        .nodes
        .iter()
        .map(|n| (n.value, n.n_leaves, n.depth))
        .collect();
    adorn(&mut tree);
    for (i, before) in snapshot.iter().enumerate() {
        let node = tree.get(NodeId(i as u32));
        assert_eq!(*before, (node.value, node.n_leaves, node.depth));
    }
}
