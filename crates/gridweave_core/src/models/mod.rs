//! Data models for layers, modules, and their settings.

mod layer;
mod module;

pub use layer::{Layer, LayerSettings};
pub use module::{Module, ModuleKind, ModuleSpec};

use serde::{Deserialize, Serialize};

/// Unique key of a layer within a document.
pub type LayerId = u64;

/// Unique key of a module. Allocated document-wide rather than per layer so
/// exported CSS class names never collide across layers.
pub type ModuleId = u64;

/// Which breakpoint the editor is currently operating on. Selects the order
/// sequence used by reorder operations and the span used by derivation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Desktop,
    Mobile,
}
