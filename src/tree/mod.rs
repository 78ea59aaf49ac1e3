pub mod annotate;
pub mod arena;
pub mod json;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use self::arena::{CutTree, Node, NodeId};
use crate::scanner::types::RawFileEntry;

pub use self::annotate::{adorn, adorn_leaf_counts, Annotator};

/// Find the deepest common ancestor of all entries.
fn find_common_root(entries: &[RawFileEntry]) -> PathBuf {
    if entries.is_empty() {
        return PathBuf::from("");
    }

    let mut root = entries[0].path.clone();
    for entry in entries.iter().skip(1) {
        while !entry.path.starts_with(&root) {
            match root.parent() {
                Some(parent) => root = parent.to_path_buf(),
                None => return PathBuf::from(""),
            }
        }
    }

    // A lone file entry is its own parent's child, not the root itself.
    if entries.len() == 1 && !entries[0].is_dir {
        if let Some(parent) = root.parent() {
            return parent.to_path_buf();
        }
    }

    root
}

/// Build an annotated CutTree from a flat list of RawFileEntry (from the scanner).
/// Files become leaves weighted by their size in bytes.
pub fn build_tree(entries: &[RawFileEntry]) -> CutTree {
    if entries.is_empty() {
        let mut tree = CutTree::new("(empty)");
        adorn(&mut tree);
        return tree;
    }

    let dir_count = entries.iter().filter(|e| e.is_dir).count();
    let file_count = entries.len() - dir_count;
    tracing::info!(
        "Building tree from {} entries ({} dirs, {} files)",
        entries.len(),
        dir_count,
        file_count
    );

    let root_path = find_common_root(entries);
    let root_name = root_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root_path.to_string_lossy().to_string());
    tracing::debug!("Root '{}' at {}", root_name, root_path.display());

    let mut tree = CutTree::new(&root_name);

    // Map from path → NodeId for parent lookups
    let mut path_map: HashMap<PathBuf, NodeId> = HashMap::new();
    path_map.insert(root_path.clone(), tree.root);

    // First pass: create all directory nodes
    for entry in entries.iter().filter(|e| e.is_dir) {
        if entry.path == root_path {
            continue;
        }
        ensure_dir(&mut tree, &mut path_map, &entry.path);
    }

    // Second pass: attach files as leaves
    for entry in entries.iter().filter(|e| !e.is_dir) {
        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let parent_path = entry.path.parent().unwrap_or(Path::new("")).to_path_buf();
        let parent_id = ensure_dir(&mut tree, &mut path_map, &parent_path);

        let id = tree.add_child(parent_id, Node::leaf(&name, entry.size as f64));
        path_map.insert(entry.path.clone(), id);
    }

    adorn(&mut tree);

    let root = tree.get(tree.root);
    tracing::info!(
        "Tree built: {} nodes, {} leaves, total weight {}",
        tree.len(),
        root.n_leaves,
        root.value
    );

    tree
}

/// Ensure a directory node exists at the given path, creating intermediate nodes as needed.
/// Iterative so deep paths cannot overflow the stack.
fn ensure_dir(tree: &mut CutTree, path_map: &mut HashMap<PathBuf, NodeId>, path: &Path) -> NodeId {
    if let Some(&id) = path_map.get(path) {
        return id;
    }

    // Missing ancestors, deepest first
    let mut missing = Vec::new();
    let mut current = path.to_path_buf();
    loop {
        if path_map.contains_key(&current) {
            break;
        }
        missing.push(current.clone());
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => break,
        }
    }

    let mut last_id = tree.root;
    for ancestor in missing.into_iter().rev() {
        let parent_path = ancestor.parent().unwrap_or(Path::new("")).to_path_buf();
        let parent_id = path_map.get(&parent_path).copied().unwrap_or(tree.root);
        let name = ancestor
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let id = tree.add_child(parent_id, Node::group(&name));
        path_map.insert(ancestor, id);
        last_id = id;
    }

    last_id
}
