//! Operation-level test suites.

mod history_ops;

use super::Editor;
use crate::models::{LayerId, ModuleId, ModuleSpec};

/// Editor with one layer holding `count` default modules; returns the layer
/// id and the module ids in insertion order.
fn editor_with_modules(count: usize) -> (Editor, LayerId, Vec<ModuleId>) {
    let mut editor = Editor::new();
    let layer_id = editor.document().active_layer_id.expect("active layer");
    let ids = (0..count)
        .map(|_| {
            editor
                .add_module(layer_id, ModuleSpec::default())
                .expect("add module")
        })
        .collect();
    (editor, layer_id, ids)
}

/// Asserts the order/module-set consistency invariant for every layer.
fn assert_orders_consistent(editor: &Editor) {
    for layer in &editor.document().layers {
        let mut module_ids: Vec<ModuleId> = layer.modules.iter().map(|module| module.id).collect();
        module_ids.sort_unstable();
        for order in [&layer.desktop_order, &layer.mobile_order] {
            let mut entries = order.clone();
            entries.sort_unstable();
            assert_eq!(
                entries, module_ids,
                "order out of sync with module set in layer '{}'",
                layer.name
            );
        }
    }
}

/// Asserts priorities read back as the dense sequence 0..n-1.
fn assert_priorities_dense(editor: &Editor) {
    let priorities: Vec<f64> = editor
        .document()
        .sorted_layers()
        .iter()
        .map(|layer| layer.priority)
        .collect();
    let expected: Vec<f64> = (0..priorities.len()).map(|index| index as f64).collect();
    assert_eq!(priorities, expected);
}
