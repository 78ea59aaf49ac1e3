/// Staged validation: Scan → Tree → Annotation → Cuts, without rendering
use std::path::PathBuf;

use treecut::cut::{find_root_cut, is_partition, SunburstConfig};
use treecut::model::{LiAbe, Model, TreemapModel, Wagner};
use treecut::scanner;
use treecut::tree::{self, arena::NodeId};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treecut=info".parse()?),
        )
        .init();

    let scan_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!("┌─ TREECUT VALIDATION ───────────────────────────────────────┐");
    println!("  Target: {}", scan_path.display());
    println!("└────────────────────────────────────────────────────────────┘");
    println!();

    // === STAGE 1: SCANNER ===
    println!("┌─ STAGE 1: SCANNER ─────────────────────────────────────────┐");
    let start = std::time::Instant::now();
    let entries = scanner::scan(&scan_path)?;
    let file_count = entries.iter().filter(|e| !e.is_dir).count();
    println!("  ✓ Scan completed in {:.2}s", start.elapsed().as_secs_f64());
    println!("  ✓ Entries:  {} ({} files)", entries.len(), file_count);
    println!("└────────────────────────────────────────────────────────────┘");
    println!();

    if file_count == 0 {
        println!("✗ FAILED: No files found!");
        return Ok(());
    }

    // === STAGE 2: TREE + ANNOTATION ===
    println!("┌─ STAGE 2: TREE ANNOTATION ─────────────────────────────────┐");
    let start = std::time::Instant::now();
    let tree = tree::build_tree(&entries);
    println!("  ✓ Tree built in {:.2}s ({} nodes)", start.elapsed().as_secs_f64(), tree.len());

    let mut annotation_errors = 0;
    for i in 0..tree.len() {
        let id = NodeId(i as u32);
        let node = tree.get(id);
        if node.is_leaf() {
            if node.n_leaves != 1 || node.value != node.weight {
                println!("  ✗ leaf '{}' is not annotated with its own weight", tree.path(id));
                annotation_errors += 1;
            }
            continue;
        }
        // Local check: each inner node sums its direct children
        let sum: f64 = tree.children(id).map(|c| tree.get(c).value).sum();
        let count: u32 = tree.children(id).map(|c| tree.get(c).n_leaves).sum();
        if node.n_leaves != count || (node.value - sum).abs() > 1e-6 * sum.max(1.0) {
            println!(
                "  ✗ '{}': value={} (expected {}), leaves={} (expected {})",
                tree.path(id),
                node.value,
                sum,
                node.n_leaves,
                count
            );
            annotation_errors += 1;
        }
        if annotation_errors >= 5 {
            println!("  ... (truncated, too many errors)");
            break;
        }
    }
    if annotation_errors == 0 {
        println!("  ✓ Every node's value and leaf count match its subtree");
    }
    println!("└────────────────────────────────────────────────────────────┘");
    println!();

    // === STAGE 3: CUTS ===
    println!("┌─ STAGE 3: CUT SELECTION ───────────────────────────────────┐");
    let total = tree.get(tree.root).value;
    if total <= 0.0 {
        println!("  ✗ Total weight is zero, nothing to cut");
        println!("└────────────────────────────────────────────────────────────┘");
        return Ok(());
    }

    let models = [
        ("treemap 1920x1080", Model::Treemap(TreemapModel::new(1920.0 * 1080.0))),
        ("li & abe", Model::LiAbe(LiAbe::new(total))),
        ("wagner c=1", Model::Wagner(Wagner::new(total, 1.0))),
    ];
    let mut cut_errors = 0;
    for (label, model) in &models {
        let start = std::time::Instant::now();
        let cut = find_root_cut(&tree, model);
        let ok = is_partition(&tree, tree.root, &cut.members);
        if !ok {
            cut_errors += 1;
        }
        println!(
            "  {} {:<18} {:>6} members  dl={:<14.2} ({:.2}ms)",
            if ok { "✓" } else { "✗" },
            label,
            cut.members.len(),
            cut.dl(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    let start = std::time::Instant::now();
    let search = SunburstConfig::default().find_cut(&tree);
    let ok = is_partition(&tree, tree.root, &search.best.members);
    if !ok {
        cut_errors += 1;
    }
    println!(
        "  {} {:<18} {:>6} members  dl={:<14.2} ({:.2}ms, threshold {})",
        if ok { "✓" } else { "✗" },
        "sunburst r=400",
        search.best.members.len(),
        search.best.dl(),
        start.elapsed().as_secs_f64() * 1000.0,
        search.threshold
    );
    println!("└────────────────────────────────────────────────────────────┘");
    println!();

    if annotation_errors + cut_errors == 0 {
        println!("✓ ALL STAGES PASSED");
    } else {
        println!("✗ {} annotation / {} cut failures", annotation_errors, cut_errors);
    }

    Ok(())
}
