//! Project directory layout

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Directories every generated project starts with.
const PROJECT_DIRS: &[&str] = &[
    "app/styles/globals",
    "app/styles/components",
    "app/images",
    "app/fonts",
    "app/scripts/components",
    "app/scripts/mixins",
    "app/scripts/plugins",
    "test/spec/fixtures",
    "dist",
];

/// Create the standard directory skeleton under `target_dir`.
pub async fn create_project_tree(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)
        .await
        .context("Failed to create target directory")?;

    for dir in PROJECT_DIRS {
        let path = target_dir.join(dir);
        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}
