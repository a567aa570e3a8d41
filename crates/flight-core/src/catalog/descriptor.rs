//! Module descriptors and the catalog they form

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable CSS module, resolved from its repository's manifest.
///
/// Serialized field names are the on-disk cache format: a catalog persists as
/// a JSON array of `{moduleName, moduleFile, moduleVersion, moduleType}`
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Module identifier, unique within a catalog snapshot.
    #[serde(rename = "moduleName")]
    pub name: String,

    /// Relative path to the module's primary source file, as declared by the
    /// module's own manifest.
    #[serde(rename = "moduleFile")]
    pub entry_file: String,

    /// Declared version. Informational only; never used for resolution.
    #[serde(rename = "moduleVersion")]
    pub version: String,

    /// Cascade category, computed from `entry_file` (see [`derive_category`]).
    /// Carried verbatim as an opaque string; layering happens later.
    #[serde(rename = "moduleType")]
    pub category: String,
}

/// Discovery-ordered sequence of validated descriptors, unique by name.
///
/// Built once per run, either from the remote source or loaded verbatim from
/// the cache, and read-only thereafter. Descriptors that failed validation
/// never make it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    modules: Vec<ModuleDescriptor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor, unless one with the same name was already
    /// discovered (first discovery wins). Returns whether it was kept.
    pub fn push(&mut self, descriptor: ModuleDescriptor) -> bool {
        if self.contains(&descriptor.name) {
            return false;
        }
        self.modules.push(descriptor);
        true
    }

    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m.name == name)
    }

    /// Names known to this catalog, for validating user input.
    pub fn known_names(&self) -> HashSet<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }
}

/// Derive the cascade category from a module's entry file name.
///
/// The first dot-separated segment of the file name carries the layer,
/// optionally behind the Sass partial marker: `_settings.defaults.scss` and
/// `css/_settings.defaults.scss` both yield `settings`, while
/// `components.widget.scss` (no marker) yields `components`. The result is
/// returned verbatim, case- and spelling-preserving; matching it against the
/// known layering is the cascade builder's job, not this function's.
pub fn derive_category(entry_file: &str) -> String {
    let file_name = entry_file.rsplit('/').next().unwrap_or(entry_file);
    let head = file_name.split('.').next().unwrap_or(file_name);
    head.strip_prefix('_').unwrap_or(head).to_string()
}
