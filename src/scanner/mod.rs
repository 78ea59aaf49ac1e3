pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use jwalk::WalkDir;

use self::types::RawFileEntry;

/// Walk `root` in parallel and collect every file and directory beneath it.
/// Unreadable entries are logged and skipped.
pub fn scan(root: &Path) -> Result<Vec<RawFileEntry>> {
    let meta = std::fs::metadata(root)
        .with_context(|| format!("Cannot scan {}", root.display()))?;
    anyhow::ensure!(meta.is_dir(), "{} is not a directory", root.display());

    let start = std::time::Instant::now();
    let mut entries = Vec::new();
    let mut errors = 0usize;

    for item in WalkDir::new(root).skip_hidden(false).follow_links(false) {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                errors += 1;
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let is_dir = entry.file_type().is_dir();
        let size = if is_dir {
            0
        } else {
            match entry.metadata() {
                Ok(m) => m.len(),
                Err(e) => {
                    errors += 1;
                    tracing::debug!("No metadata for {}: {}", entry.path().display(), e);
                    continue;
                }
            }
        };

        entries.push(RawFileEntry {
            path: entry.path(),
            size,
            is_dir,
        });
    }

    tracing::info!(
        "Scanned {} entries under {} in {:.2}s ({} skipped)",
        entries.len(),
        root.display(),
        start.elapsed().as_secs_f64(),
        errors
    );

    Ok(entries)
}
