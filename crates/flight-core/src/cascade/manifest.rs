//! Ordered import manifest derived from an unordered selection
//!
//! CSS authoring under ITCSS requires strict layering: global settings
//! before tool mixins before generic resets before base element styles
//! before objects before components before trumps. The builder re-groups an
//! unordered selection into that fixed order so the rendered stylesheet
//! cascades correctly.

use super::layer::CascadeLayer;
use super::selection::Selection;
use crate::catalog::ModuleDescriptor;

/// Label rendered for selected modules whose category matches no layer.
pub const UNCLASSIFIED_LABEL: &str = "unclassified";

/// One layer's worth of selected modules, in catalog discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeGroup {
    /// `None` marks the trailing group for categories outside the known
    /// layering.
    pub layer: Option<CascadeLayer>,
    pub modules: Vec<ModuleDescriptor>,
}

impl CascadeGroup {
    pub fn label(&self) -> &'static str {
        match self.layer {
            Some(layer) => layer.label(),
            None => UNCLASSIFIED_LABEL,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// The terminal artifact of the core pipeline: the selection regrouped into
/// fixed layer order, ready for import-list rendering. Pure function of the
/// precedence sequence and the selection; no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeManifest {
    groups: Vec<CascadeGroup>,
}

impl CascadeManifest {
    /// Group a selection by cascade layer.
    ///
    /// Every known layer occupies its slot even when empty. Modules whose
    /// category matches no layer are kept in a trailing unclassified group
    /// (present only when needed) rather than dropped. Within a group,
    /// module order is the selection's catalog discovery order, never the
    /// user's input order.
    pub fn build(selection: &Selection) -> Self {
        let mut groups: Vec<CascadeGroup> = CascadeLayer::PRECEDENCE
            .iter()
            .map(|&layer| CascadeGroup {
                layer: Some(layer),
                modules: Vec::new(),
            })
            .collect();
        let mut unclassified: Vec<ModuleDescriptor> = Vec::new();

        for module in selection.iter() {
            match CascadeLayer::from_category(&module.category) {
                Some(layer) => groups[layer.precedence_index()].modules.push(module.clone()),
                None => unclassified.push(module.clone()),
            }
        }

        if !unclassified.is_empty() {
            groups.push(CascadeGroup {
                layer: None,
                modules: unclassified,
            });
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[CascadeGroup] {
        &self.groups
    }

    /// Total number of modules across all groups.
    pub fn module_count(&self) -> usize {
        self.groups.iter().map(|g| g.modules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.module_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::cascade::selection::select_modules;
    use std::collections::HashSet;

    fn module(name: &str, category: &str) -> ModuleDescriptor {
        ModuleDescriptor {
            name: name.to_string(),
            entry_file: format!("_{category}.{name}.scss"),
            version: "1.0.0".to_string(),
            category: category.to_string(),
        }
    }

    fn selection_of(modules: Vec<ModuleDescriptor>) -> Selection {
        let mut catalog = Catalog::new();
        let chosen: HashSet<String> = modules.iter().map(|m| m.name.clone()).collect();
        for m in modules {
            catalog.push(m);
        }
        select_modules(&catalog, &chosen)
    }

    #[test]
    fn groups_follow_fixed_precedence_with_empty_slots() {
        let selection = selection_of(vec![module("widget", "components")]);
        let manifest = CascadeManifest::build(&selection);

        let labels: Vec<&str> = manifest.groups().iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            vec!["settings", "tools", "generic", "base", "objects", "components", "trumps"]
        );
        assert!(manifest.groups()[0].is_empty());
        assert_eq!(manifest.groups()[5].modules.len(), 1);
    }

    #[test]
    fn in_group_order_is_discovery_order() {
        // Catalog discovers B before A; the user picked "a then b"
        let mut catalog = Catalog::new();
        catalog.push(module("b", "tools"));
        catalog.push(module("a", "tools"));
        let chosen: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();

        let manifest = CascadeManifest::build(&select_modules(&catalog, &chosen));
        let tools: Vec<&str> = manifest.groups()[1]
            .modules
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(tools, vec!["b", "a"]);
    }

    #[test]
    fn unknown_categories_land_in_trailing_group() {
        let manifest = CascadeManifest::build(&selection_of(vec![
            module("page", "base"),
            module("odd", "elements"),
        ]));

        let last = manifest.groups().last().unwrap();
        assert_eq!(last.label(), UNCLASSIFIED_LABEL);
        assert_eq!(last.modules.len(), 1);
        assert_eq!(last.modules[0].name, "odd");
        // 7 known layers plus the trailing group
        assert_eq!(manifest.groups().len(), 8);
    }

    #[test]
    fn no_trailing_group_without_unclassified_modules() {
        let manifest = CascadeManifest::build(&selection_of(vec![module("page", "base")]));
        assert_eq!(manifest.groups().len(), 7);
    }

    #[test]
    fn every_selected_module_appears_exactly_once() {
        let selection = selection_of(vec![
            module("defaults", "settings"),
            module("widths", "tools"),
            module("normalize", "generic"),
            module("page", "base"),
            module("media", "objects"),
            module("widget", "components"),
            module("clearfix", "trumps"),
            module("odd", "elements"),
        ]);
        let manifest = CascadeManifest::build(&selection);

        let mut seen: Vec<&str> = manifest
            .groups()
            .iter()
            .flat_map(|g| g.modules.iter().map(|m| m.name.as_str()))
            .collect();
        assert_eq!(seen.len(), selection.len());
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), selection.len());
    }

    #[test]
    fn empty_selection_builds_empty_manifest() {
        let manifest = CascadeManifest::build(&Selection::default());
        assert!(manifest.is_empty());
        assert_eq!(manifest.groups().len(), 7);
    }
}
