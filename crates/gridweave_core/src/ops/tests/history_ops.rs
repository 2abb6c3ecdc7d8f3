use super::editor_with_modules;
use crate::constants::MAX_HISTORY;
use crate::models::{ModuleSpec, View};
use crate::ops::Editor;

#[test]
fn a_fresh_editor_has_nothing_to_undo_or_redo() {
    let mut editor = Editor::new();
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
    assert!(!editor.undo());
    assert!(!editor.redo());
    assert_eq!(editor.document().layers.len(), 1);
}

#[test]
fn undo_and_redo_restore_deep_equal_documents() {
    let (mut editor, layer_id, _) = editor_with_modules(1);
    let before = editor.document().clone();
    editor.rename_layer(layer_id, "Renamed").unwrap();
    let after = editor.document().clone();

    assert!(editor.undo());
    assert_eq!(editor.document(), &before);
    assert!(editor.can_redo());
    assert!(editor.redo());
    assert_eq!(editor.document(), &after);
    assert!(!editor.can_redo());
}

#[test]
fn a_commit_after_undo_prunes_the_redo_branch() {
    let (mut editor, layer_id, _) = editor_with_modules(1);
    editor.rename_layer(layer_id, "First").unwrap();
    assert!(editor.undo());
    editor.rename_layer(layer_id, "Second").unwrap();

    assert!(!editor.can_redo());
    assert!(!editor.redo());
    assert_eq!(editor.document().layer(layer_id).unwrap().name, "Second");
}

#[test]
fn undo_restores_a_deleted_layer_and_its_activation() {
    let mut editor = Editor::new();
    let first = editor.document().active_layer_id.unwrap();
    let second = editor.add_layer();
    editor.activate_layer(second).unwrap();
    editor.delete_active_layer().unwrap();
    assert_eq!(editor.document().active_layer_id, Some(first));

    assert!(editor.undo());
    assert_eq!(editor.document().layers.len(), 2);
    assert!(editor.document().layer(second).is_some());
    assert_eq!(editor.document().active_layer_id, Some(second));
}

#[test]
fn selection_activation_and_view_changes_are_not_commits() {
    let (mut editor, layer_id, ids) = editor_with_modules(1);
    let other = editor.add_layer();
    editor.activate_layer(layer_id).unwrap();
    editor.select_module(layer_id, ids[0]).unwrap();
    editor.deselect_module();
    editor.set_view(View::Mobile);
    editor.activate_layer(other).unwrap();

    // Two undos peel off the layer add and the module add; nothing else
    // entered history.
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.can_undo());
}

#[test]
fn undo_clears_an_in_flight_drag() {
    let (mut editor, layer_id, ids) = editor_with_modules(2);
    editor.begin_module_drag(layer_id, ids[0]).unwrap();
    assert!(editor.undo());
    assert!(editor.drag_session().is_none());
}

#[test]
fn history_is_capped_and_evicts_the_oldest_snapshots() {
    let mut editor = Editor::new();
    let layer_id = editor.document().active_layer_id.unwrap();
    for step in 0..(MAX_HISTORY + 50) {
        editor.set_desktop_gap(layer_id, (step % 50) as u32).unwrap();
    }

    let mut undone = 0;
    while editor.undo() {
        undone += 1;
    }
    assert_eq!(undone, MAX_HISTORY - 1);
    // The initial empty-editor snapshot was evicted long ago; the floor is a
    // later state that still has the layer.
    assert_eq!(editor.document().layers.len(), 1);
}

#[test]
fn redo_walks_forward_through_several_steps() {
    let mut editor = Editor::new();
    let layer_id = editor.document().active_layer_id.unwrap();
    editor.add_module(layer_id, ModuleSpec::default()).unwrap();
    editor.add_module(layer_id, ModuleSpec::default()).unwrap();
    editor.add_module(layer_id, ModuleSpec::default()).unwrap();

    assert!(editor.undo());
    assert!(editor.undo());
    assert_eq!(editor.document().layer(layer_id).unwrap().modules.len(), 1);
    assert!(editor.redo());
    assert!(editor.redo());
    assert_eq!(editor.document().layer(layer_id).unwrap().modules.len(), 3);
    assert!(!editor.can_redo());
}
