//! Core domain library for GridWeave (document model, editing operations,
//! history, export).

/// Shared numeric limits and defaults.
pub mod constants;
/// The layered document and its invariants.
pub mod document;
/// Application error types (domain rule violations).
pub mod error;
/// Static HTML/CSS generation from a document.
pub mod export;
/// Span math shared by rendering and export.
pub mod geometry;
/// Linear undo/redo over document snapshots.
pub mod history;
/// Data models for layers and modules.
pub mod models;
/// Editing operations over the document.
pub mod ops;
/// Per-module style derivation for live rendering.
pub mod render;

pub use document::Document;
pub use error::{LayoutError, LayoutResult};
pub use export::{export_document, ExportBundle, ExportOptions};
pub use ops::Editor;
