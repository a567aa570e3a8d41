//! Selection and cascade ordering
//!
//! Pure functions over the catalog: narrow it to the user's chosen modules,
//! then regroup that selection into the fixed cascade precedence order.

pub mod layer;
pub mod manifest;
pub mod selection;

pub use layer::CascadeLayer;
pub use manifest::{CascadeGroup, CascadeManifest, UNCLASSIFIED_LABEL};
pub use selection::{select_modules, Selection};
