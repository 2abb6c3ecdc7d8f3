//! Error types for layout operations.
//!
//! Every expected rejection is a variant with a user-facing message; the
//! document is left unchanged whenever one of these is returned.

use crate::models::{LayerId, ModuleId};
use thiserror::Error;

/// Rejection conditions raised by layout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layer {0} not found")]
    LayerNotFound(LayerId),

    #[error("layer '{0}' is locked")]
    LayerLocked(String),

    #[error("cannot delete the last layer")]
    LastLayer,

    #[error("no active layer")]
    NoActiveLayer,

    #[error("layer name cannot be empty")]
    EmptyLayerName,

    #[error("no module selected")]
    NoSelection,

    #[error("module {0} not found")]
    ModuleNotFound(ModuleId),

    #[error("cannot split a {col}x{row} module into {h}x{v} pieces")]
    SplitTooFine { col: u32, row: u32, h: u32, v: u32 },

    #[error("group '{0}' already exists in another layer")]
    GroupInAnotherLayer(String),

    #[error("no module at drop position {0}")]
    InvalidDropTarget(usize),

    #[error("drop landed outside the layer the drag started in")]
    CrossLayerDrop,

    #[error("grouped modules can only be dropped onto another module")]
    GroupedBackgroundDrop,

    #[error("no drag in progress")]
    NoDragSession,

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Convenience alias for operation results.
pub type LayoutResult<T> = Result<T, LayoutError>;
