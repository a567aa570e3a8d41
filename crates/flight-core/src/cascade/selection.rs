//! Narrowing a catalog to the user's chosen modules

use crate::catalog::{Catalog, ModuleDescriptor};
use std::collections::HashSet;

/// The user's chosen subset of a catalog, in catalog discovery order.
/// Derived once from user input and immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    modules: Vec<ModuleDescriptor>,
}

impl Selection {
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
}

/// Narrow `catalog` to the descriptors named in `chosen`.
///
/// Pure and deterministic: input order is irrelevant (the set has none),
/// unknown names are ignored rather than errors, and the result keeps
/// catalog discovery order.
pub fn select_modules(catalog: &Catalog, chosen: &HashSet<String>) -> Selection {
    Selection {
        modules: catalog
            .iter()
            .filter(|module| chosen.contains(&module.name))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(names: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for name in names {
            catalog.push(ModuleDescriptor {
                name: name.to_string(),
                entry_file: "_tools.widths.scss".to_string(),
                version: "1.0.0".to_string(),
                category: "tools".to_string(),
            });
        }
        catalog
    }

    fn names(selection: &Selection) -> Vec<&str> {
        selection.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn keeps_catalog_order_not_input_order() {
        let catalog = catalog_of(&["b", "a", "c"]);
        let chosen: HashSet<String> = ["c", "b"].iter().map(|s| s.to_string()).collect();

        assert_eq!(names(&select_modules(&catalog, &chosen)), vec!["b", "c"]);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let catalog = catalog_of(&["a", "b"]);
        let chosen: HashSet<String> = ["a", "z"].iter().map(|s| s.to_string()).collect();

        assert_eq!(names(&select_modules(&catalog, &chosen)), vec!["a"]);
    }

    #[test]
    fn empty_choice_selects_nothing() {
        let catalog = catalog_of(&["a", "b"]);
        assert!(select_modules(&catalog, &HashSet::new()).is_empty());
    }
}
