//! Rendered project files
//!
//! The generated manifests are fixed in-code documents filled from the
//! project metadata and the selected modules; there is no general templating
//! layer behind them.

use crate::cascade::Selection;
use semver::Version;
use serde_json::json;

/// Metadata collected for the generated project.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub authors: Vec<String>,
    pub license: String,
}

pub const GITIGNORE: &str = "node_modules/\nbower_components/\ndist/\n";

/// Normalize a module version into a dependency range: valid semver becomes
/// a caret range, anything else passes through verbatim.
pub fn dependency_range(version: &str) -> String {
    let cleaned = version.strip_prefix('v').unwrap_or(version);
    match Version::parse(cleaned) {
        Ok(parsed) => format!("^{parsed}"),
        Err(_) => version.to_string(),
    }
}

/// The package manifest the install step consumes: every selected module
/// becomes a dependency at its declared version.
pub fn render_bower_manifest(info: &ProjectInfo, selection: &Selection) -> String {
    let dependencies: serde_json::Map<String, serde_json::Value> = selection
        .iter()
        .map(|module| (module.name.clone(), json!(dependency_range(&module.version))))
        .collect();

    let doc = json!({
        "name": info.name,
        "version": info.version,
        "authors": info.authors,
        "license": info.license,
        "private": true,
        "dependencies": dependencies,
    });
    to_pretty_json(&doc)
}

pub fn render_package_manifest(info: &ProjectInfo) -> String {
    let doc = json!({
        "name": info.name,
        "version": info.version,
        "license": info.license,
        "private": true,
        "devDependencies": {
            "bower": "^1.8.14",
        },
        "scripts": {
            "postinstall": "bower install",
        },
    });
    to_pretty_json(&doc)
}

pub fn render_readme(info: &ProjectInfo) -> String {
    format!(
        "# {}\n\n\
         ITCSS project scaffolded by flight.\n\n\
         - `app/styles/main.scss` imports the selected modules in cascade order\n\
         - `bower.json` pins the module versions; run `bower install` to fetch them\n",
        info.name
    )
}

fn to_pretty_json(doc: &serde_json::Value) -> String {
    let mut content = serde_json::to_string_pretty(doc).expect("JSON value renders");
    content.push('\n');
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::select_modules;
    use crate::catalog::{Catalog, ModuleDescriptor};
    use std::collections::HashSet;

    fn info() -> ProjectInfo {
        ProjectInfo {
            name: "my-site".to_string(),
            version: "1.0.0".to_string(),
            authors: vec!["Ada".to_string()],
            license: "MIT".to_string(),
        }
    }

    fn selection() -> Selection {
        let mut catalog = Catalog::new();
        catalog.push(ModuleDescriptor {
            name: "inuit-defaults".to_string(),
            entry_file: "_settings.defaults.scss".to_string(),
            version: "0.2.1".to_string(),
            category: "settings".to_string(),
        });
        let chosen: HashSet<String> = ["inuit-defaults".to_string()].into_iter().collect();
        select_modules(&catalog, &chosen)
    }

    #[test]
    fn dependency_range_carets_valid_semver() {
        assert_eq!(dependency_range("1.2.3"), "^1.2.3");
        assert_eq!(dependency_range("v0.4.0"), "^0.4.0");
    }

    #[test]
    fn dependency_range_passes_through_oddballs() {
        assert_eq!(dependency_range("latest"), "latest");
        assert_eq!(dependency_range("1.2"), "1.2");
    }

    #[test]
    fn bower_manifest_lists_selected_modules() {
        let rendered = render_bower_manifest(&info(), &selection());
        let doc: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(doc["name"], "my-site");
        assert_eq!(doc["dependencies"]["inuit-defaults"], "^0.2.1");
    }

    #[test]
    fn package_manifest_wires_the_install_step() {
        let rendered = render_package_manifest(&info());
        let doc: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(doc["scripts"]["postinstall"], "bower install");
    }
}
