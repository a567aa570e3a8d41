//! Stylesheet manifest rendering

use crate::cascade::CascadeManifest;
use crate::catalog::ModuleDescriptor;

/// Directory the package-install step places module sources in.
const MODULE_DIR: &str = "bower_components";

/// Sass import path for a module: the package directory, the module name,
/// and the entry file with its partial marker and extension stripped (Sass
/// resolves both back itself).
pub fn import_path(module: &ModuleDescriptor) -> String {
    let file_name = module
        .entry_file
        .rsplit('/')
        .next()
        .unwrap_or(&module.entry_file);
    let stem = file_name.strip_prefix('_').unwrap_or(file_name);
    let stem = stem.strip_suffix(".scss").unwrap_or(stem);
    format!("{MODULE_DIR}/{}/{}", module.name, stem)
}

fn section_banner(label: &str) -> String {
    format!(
        "/*------------------------------------*\\\n    #{}\n\\*------------------------------------*/\n",
        label.to_uppercase()
    )
}

/// Render the main stylesheet: one banner-commented section per cascade
/// group, imports in cascade order. Empty layers keep their banner so the
/// generated file shows the full layering to fill in later.
pub fn render_stylesheet(manifest: &CascadeManifest) -> String {
    let mut out = String::new();
    for (position, group) in manifest.groups().iter().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        out.push_str(&section_banner(group.label()));
        for module in &group.modules {
            out.push_str("@import \"");
            out.push_str(&import_path(module));
            out.push_str("\";\n");
        }
    }
    out
}
