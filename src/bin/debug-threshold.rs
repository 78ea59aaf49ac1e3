/// Diagnostic tool: per-threshold costs of the sunburst cut search
use std::path::PathBuf;

use treecut::cut::search_thresholds;
use treecut::model::SunburstModel;
use treecut::scanner;
use treecut::tree::{self, json};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treecut=debug".parse()?),
        )
        .init();

    let input = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let radius: f64 = match std::env::args().nth(2) {
        Some(r) => r.parse()?,
        None => 400.0,
    };

    println!("=== DIAGNOSTIC: Sunburst threshold search ===");
    println!("Input: {}  radius: {}px", input.display(), radius);

    let tree = if input.extension().is_some_and(|e| e == "json") {
        json::from_json_file(&input)?
    } else {
        tree::build_tree(&scanner::scan(&input)?)
    };
    let root = tree.get(tree.root);
    anyhow::ensure!(root.value > 0.0, "Tree has no weight to summarize");

    let max_depth = tree.max_depth(tree.root);
    println!(
        "\n[1] Tree: {} nodes, {} leaves, max depth {}, total {}",
        tree.len(),
        root.n_leaves,
        max_depth,
        root.value
    );

    println!("\n[2] Visibility per ring (min probability):");
    for threshold in (1..=max_depth).rev() {
        let model = SunburstModel::new(&tree, tree.root, radius, threshold);
        let rings: Vec<String> = model
            .min_visible
            .iter()
            .take(threshold as usize + 1)
            .map(|p| format!("{:.2e}", p))
            .collect();
        println!(
            "    threshold {:>2}: ring {:.1}px  [{}]",
            threshold,
            model.level_width,
            rings.join(", ")
        );
    }

    let search = search_thresholds(&tree, tree.root, root.value, radius, max_depth);

    println!("\n[3] Candidate costs:");
    for (threshold, dl) in &search.candidates {
        let marker = if *threshold == search.threshold { "  <= best" } else { "" };
        println!("    threshold {:>2}: dl={:.3}{}", threshold, dl, marker);
    }

    println!("\n[4] Winning cut ({} members):", search.best.members.len());
    for (i, &id) in search.best.members.iter().take(20).enumerate() {
        let node = tree.get(id);
        println!(
            "    [{}] '{}' - value {} ({:.2}%), depth {}",
            i,
            tree.path(id),
            node.value,
            100.0 * node.value / root.value,
            node.depth
        );
    }

    Ok(())
}
