//! Fixed cascade layering

use std::fmt;

/// ITCSS cascade layers, in import precedence order: settings variables
/// first, overriding trumps last. The ordering is total and known ahead of
/// time, independent of any catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeLayer {
    Settings,
    Tools,
    Generic,
    Base,
    Objects,
    Components,
    Trumps,
}

impl CascadeLayer {
    /// The full precedence sequence.
    pub const PRECEDENCE: [CascadeLayer; 7] = [
        CascadeLayer::Settings,
        CascadeLayer::Tools,
        CascadeLayer::Generic,
        CascadeLayer::Base,
        CascadeLayer::Objects,
        CascadeLayer::Components,
        CascadeLayer::Trumps,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CascadeLayer::Settings => "settings",
            CascadeLayer::Tools => "tools",
            CascadeLayer::Generic => "generic",
            CascadeLayer::Base => "base",
            CascadeLayer::Objects => "objects",
            CascadeLayer::Components => "components",
            CascadeLayer::Trumps => "trumps",
        }
    }

    /// Position within [`Self::PRECEDENCE`].
    pub fn precedence_index(self) -> usize {
        match self {
            CascadeLayer::Settings => 0,
            CascadeLayer::Tools => 1,
            CascadeLayer::Generic => 2,
            CascadeLayer::Base => 3,
            CascadeLayer::Objects => 4,
            CascadeLayer::Components => 5,
            CascadeLayer::Trumps => 6,
        }
    }

    /// Match a derived category against the known layers. Categories are
    /// carried verbatim by the catalog; this is the only place they are
    /// interpreted, and non-matching ones stay opaque (they end up in the
    /// trailing unclassified group).
    pub fn from_category(category: &str) -> Option<Self> {
        Self::PRECEDENCE
            .iter()
            .copied()
            .find(|layer| layer.label() == category)
    }
}

impl fmt::Display for CascadeLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
