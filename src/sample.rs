//! A small two-layer demo document, built through the editing operations so
//! it always reflects what the operations actually produce.

use gridweave_core::models::{ModuleKind, ModuleSpec};
use gridweave_core::{Document, Editor, LayoutError, LayoutResult};

/// Builds the demo editor: a content layer with a split hero row over an
/// image, plus a tint overlay blended with `multiply`.
pub fn sample_editor() -> LayoutResult<Editor> {
    let mut editor = Editor::new();
    let content = editor
        .document()
        .active_layer_id
        .ok_or(LayoutError::NoActiveLayer)?;
    editor.rename_layer(content, "Content")?;

    let hero = editor.add_module(
        content,
        ModuleSpec {
            col: 6,
            row: 2,
            color: "#2f4f6f".to_string(),
            ..ModuleSpec::default()
        },
    )?;
    editor.select_module(content, hero)?;
    editor.set_selected_text("GridWeave")?;
    editor.select_module(content, hero)?;
    editor.split_selected(3, 1)?;

    let banner = editor.add_module(
        content,
        ModuleSpec {
            col: 4,
            row: 2,
            kind: ModuleKind::Image,
            ..ModuleSpec::default()
        },
    )?;
    editor.select_module(content, banner)?;
    editor.set_selected_aspect_locked(true)?;

    let overlay = editor.add_layer();
    editor.rename_layer(overlay, "Tint")?;
    editor.set_blend_mode(overlay, "multiply")?;
    editor.add_module(
        overlay,
        ModuleSpec {
            col: 6,
            row: 1,
            color: "#d9c9a3".to_string(),
            ..ModuleSpec::default()
        },
    )?;

    editor.deselect_module();
    Ok(editor)
}

/// The demo document on its own, detached from any editor state.
pub fn sample_document() -> LayoutResult<Document> {
    Ok(sample_editor()?.document().clone())
}
