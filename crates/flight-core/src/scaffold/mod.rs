//! Project generation from a finalized selection
//!
//! The discovery pipeline hands a catalog-derived cascade manifest to this
//! module, which writes the project tree: directory skeleton, rendered
//! manifests, and the cascade-ordered main stylesheet. No network access
//! happens here.

pub mod project_files;
pub mod stylesheet;
pub mod tree;

pub use project_files::ProjectInfo;
pub use stylesheet::{import_path, render_stylesheet};

use crate::cascade::{CascadeManifest, Selection};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Write the full project. Returns the paths written, relative to the
/// target directory.
pub async fn generate_project(
    target_dir: &Path,
    info: &ProjectInfo,
    selection: &Selection,
    manifest: &CascadeManifest,
) -> Result<Vec<String>> {
    tree::create_project_tree(target_dir).await?;

    let files: [(&str, String); 5] = [
        (
            "bower.json",
            project_files::render_bower_manifest(info, selection),
        ),
        ("package.json", project_files::render_package_manifest(info)),
        (".gitignore", project_files::GITIGNORE.to_string()),
        ("README.md", project_files::render_readme(info)),
        (
            "app/styles/main.scss",
            stylesheet::render_stylesheet(manifest),
        ),
    ];

    let mut written = Vec::new();
    for (relative_path, content) in files {
        let path = target_dir.join(relative_path);
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        written.push(relative_path.to_string());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::{select_modules, CascadeManifest};
    use crate::catalog::{Catalog, ModuleDescriptor};
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[tokio::test]
    async fn generates_a_complete_project() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("site");

        let mut catalog = Catalog::new();
        catalog.push(ModuleDescriptor {
            name: "inuit-defaults".to_string(),
            entry_file: "_settings.defaults.scss".to_string(),
            version: "1.0.0".to_string(),
            category: "settings".to_string(),
        });
        let chosen: HashSet<String> = ["inuit-defaults".to_string()].into_iter().collect();
        let selection = select_modules(&catalog, &chosen);
        let manifest = CascadeManifest::build(&selection);
        let info = ProjectInfo {
            name: "site".to_string(),
            version: "1.0.0".to_string(),
            authors: Vec::new(),
            license: "MIT".to_string(),
        };

        let written = generate_project(&target, &info, &selection, &manifest)
            .await
            .unwrap();

        assert_eq!(written.len(), 5);
        let sheet = std::fs::read_to_string(target.join("app/styles/main.scss")).unwrap();
        assert!(sheet.contains("bower_components/inuit-defaults/settings.defaults"));
        assert!(target.join("bower.json").is_file());
    }
}
