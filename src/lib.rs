//! Facade crate for GridWeave: re-exports the core document model and adds
//! the bundled sample layout used by the CLI.

/// Builders for the bundled demo document.
pub mod sample;

pub use gridweave_core::{
    export_document, Document, Editor, ExportBundle, ExportOptions, LayoutError, LayoutResult,
};
