use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use treecut::cut::{self, Cut, SunburstConfig};
use treecut::model::treemap::TreemapConfig;
use treecut::model::{LiAbe, Model, TreemapModel, Wagner};
use treecut::scanner;
use treecut::tree::{self, arena::CutTree, json};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelKind {
    Treemap,
    Sunburst,
    LiAbe,
    Wagner,
}

/// Summarize a weighted hierarchy as a minimum-description-length cut.
#[derive(Debug, Parser)]
#[command(name = "treecut", version)]
struct Args {
    /// Directory to scan (file sizes become leaf weights)
    #[arg(conflicts_with = "json")]
    path: Option<PathBuf>,

    /// Load the hierarchy from nested JSON instead of scanning
    #[arg(long)]
    json: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ModelKind::Treemap)]
    model: ModelKind,

    /// Treemap display width (px)
    #[arg(long, default_value_t = TreemapConfig::default().width)]
    width: f64,

    /// Treemap display height (px)
    #[arg(long, default_value_t = TreemapConfig::default().height)]
    height: f64,

    /// Smallest legible treemap box (px²)
    #[arg(long, default_value_t = TreemapConfig::default().min_area)]
    min_area: f64,

    /// Sunburst radius (px)
    #[arg(long, default_value_t = SunburstConfig::default().radius)]
    radius: f64,

    /// Deepest sunburst ring to consider (defaults to the tree depth)
    #[arg(long)]
    max_depth: Option<u16>,

    /// Wagner weighting constant
    #[arg(long, default_value_t = 1.0)]
    wagner_weight: f64,

    /// Print at most this many members
    #[arg(long, default_value_t = 50)]
    limit: usize,
}

fn load_tree(args: &Args) -> Result<CutTree> {
    if let Some(path) = &args.json {
        return json::from_json_file(path);
    }
    let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let entries = scanner::scan(&root)?;
    let tree = tree::build_tree(&entries);
    anyhow::ensure!(
        tree.get(tree.root).value > 0.0,
        "Nothing to summarize under {}: total size is zero",
        root.display()
    );
    Ok(tree)
}

fn select(tree: &CutTree, args: &Args) -> Result<Cut> {
    let total = tree.get(tree.root).value;
    let cut = match args.model {
        ModelKind::Treemap => {
            let config = TreemapConfig {
                width: args.width,
                height: args.height,
                min_area: args.min_area,
            };
            anyhow::ensure!(
                config.width > 0.0 && config.height > 0.0,
                "Display size must be positive, got {}x{}",
                config.width,
                config.height
            );
            TreemapModel::from(config).find_scored_cut(tree, tree.root)
        }
        ModelKind::Sunburst => {
            anyhow::ensure!(args.radius > 0.0, "Radius must be positive, got {}", args.radius);
            let config = SunburstConfig {
                radius: args.radius,
                max_depth: args.max_depth,
            };
            config.find_cut(tree).best
        }
        ModelKind::LiAbe => cut::find_root_cut(tree, &Model::LiAbe(LiAbe::new(total))),
        ModelKind::Wagner => {
            anyhow::ensure!(args.wagner_weight >= 0.0, "Wagner weight must be non-negative");
            cut::find_root_cut(tree, &Model::Wagner(Wagner::new(total, args.wagner_weight)))
        }
    };
    Ok(cut)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treecut=info".parse().context("Bad log directive")?),
        )
        .init();

    let args = Args::parse();
    let tree = load_tree(&args)?;
    let cut = select(&tree, &args)?;

    let root = tree.get(tree.root);
    println!(
        "{:?} cut of '{}': {} leaves in {} members (ddl={:.2}, pdl={:.2}, dl={:.2})",
        args.model,
        root.name,
        root.n_leaves,
        cut.members.len(),
        cut.ddl,
        cut.pdl,
        cut.dl()
    );

    for (i, &id) in cut.members.iter().take(args.limit).enumerate() {
        let node = tree.get(id);
        println!(
            "  [{:>3}] {:<60} value={:<14} leaves={:<6} depth={}",
            i,
            tree.path(id),
            node.value,
            node.n_leaves,
            node.depth
        );
    }
    if cut.members.len() > args.limit {
        println!("  ... {} more", cut.members.len() - args.limit);
    }

    Ok(())
}
