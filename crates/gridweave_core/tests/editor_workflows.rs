//! End-to-end editing workflows exercised through the public API only.

use gridweave_core::models::{ModuleKind, ModuleSpec, View};
use gridweave_core::{export_document, Document, Editor, ExportOptions, LayoutError};

fn hero_spec() -> ModuleSpec {
    ModuleSpec {
        col: 4,
        row: 2,
        ..ModuleSpec::default()
    }
}

#[test]
fn build_split_reorder_export_round_trip() {
    let mut editor = Editor::new();
    let base = editor.document().active_layer_id.expect("active layer");
    editor.rename_layer(base, "Hero").expect("rename");

    let hero = editor.add_module(base, hero_spec()).expect("add hero");
    let side = editor
        .add_module(
            base,
            ModuleSpec {
                col: 2,
                row: 1,
                kind: ModuleKind::Image,
                ..ModuleSpec::default()
            },
        )
        .expect("add side");

    editor.select_module(base, hero).expect("select");
    editor.set_selected_text("Welcome").expect("set text");
    editor.select_module(base, hero).expect("re-select");
    let pieces = editor.split_selected(2, 1).expect("split");
    assert_eq!(pieces.len(), 2);

    // Drag the image in front of the split group.
    editor.begin_module_drag(base, side).expect("drag start");
    assert!(editor
        .complete_module_drop(base, Some(0))
        .expect("drop"));
    let layer = editor.document().layer(base).expect("layer");
    assert_eq!(layer.desktop_order, vec![side, pieces[0], pieces[1]]);

    let bundle = export_document(editor.document(), &ExportOptions::default());
    assert!(bundle.html.contains("Welcome"));
    assert!(bundle.css.contains("/* --- Layer: Hero (Priority 0) --- */"));

    // The whole session unwinds back to the empty starting layer.
    while editor.undo() {}
    let layer = editor.document().layer(base).expect("layer");
    assert!(layer.modules.is_empty());
    assert_eq!(layer.name, "Layer 1");
}

#[test]
fn documents_survive_a_json_round_trip_into_a_fresh_editor() {
    let mut editor = Editor::new();
    let base = editor.document().active_layer_id.expect("active layer");
    let overlay = editor.add_layer();
    editor.set_blend_mode(overlay, "multiply").expect("blend");
    editor.add_module(base, hero_spec()).expect("add");
    editor
        .add_module(overlay, ModuleSpec::default())
        .expect("add overlay module");

    let json = serde_json::to_string(editor.document()).expect("serialize");
    let loaded: Document = serde_json::from_str(&json).expect("deserialize");
    let mut restored = Editor::from_document(loaded).expect("adopt");

    assert_eq!(restored.document(), editor.document());
    // History restarts at the loaded state, and new ids never collide with
    // loaded ones.
    assert!(!restored.can_undo());
    let fresh = restored
        .add_module(base, ModuleSpec::default())
        .expect("add after load");
    assert!(editor
        .document()
        .layers
        .iter()
        .all(|layer| !layer.has_module(fresh)));
}

#[test]
fn corrupt_documents_are_rejected_on_load() {
    let mut editor = Editor::new();
    let base = editor.document().active_layer_id.expect("active layer");
    editor.add_module(base, ModuleSpec::default()).expect("add");

    let mut broken = editor.document().clone();
    broken.layers[0].desktop_order.push(424242);
    assert!(matches!(
        Editor::from_document(broken),
        Err(LayoutError::InvalidDocument(_))
    ));
}

#[test]
fn mobile_session_keeps_desktop_untouched() {
    let mut editor = Editor::new();
    let base = editor.document().active_layer_id.expect("active layer");
    let first = editor.add_module(base, hero_spec()).expect("add");
    let second = editor
        .add_module(base, ModuleSpec::default())
        .expect("add");

    editor.set_view(View::Mobile);
    editor.begin_module_drag(base, second).expect("drag");
    assert!(editor.complete_module_drop(base, Some(0)).expect("drop"));
    editor.select_module(base, first).expect("select");
    editor.set_selected_mobile_col(Some(1)).expect("override");

    let layer = editor.document().layer(base).expect("layer");
    assert_eq!(layer.desktop_order, vec![first, second]);
    assert_eq!(layer.mobile_order, vec![second, first]);

    let css = export_document(editor.document(), &ExportOptions::default()).css;
    assert!(css.contains("grid-column: span 1; /* manual */"));
}
