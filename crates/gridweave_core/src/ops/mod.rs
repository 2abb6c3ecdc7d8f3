//! Mutating operations over the document model.
//!
//! The [`Editor`] owns the document, the undo history, the active view, and
//! the transient drag session. Every successful mutation commits one history
//! snapshot; every rejection returns a [`LayoutError`] and leaves the
//! document untouched.

mod modules;
mod reorder;
#[cfg(test)]
mod tests;

pub use reorder::DragSession;

use crate::constants::{MAX_COLUMNS, MAX_GAP_PX, MIN_COLUMNS};
use crate::document::Document;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::clamp;
use crate::history::History;
use crate::models::{Layer, LayerId, Module, ModuleId, View};
use tracing::debug;

/// Stateful wrapper around a [`Document`]: operations, history, view, and
/// the in-flight drag session.
#[derive(Clone, Debug)]
pub struct Editor {
    document: Document,
    history: History,
    view: View,
    drag: Option<DragSession>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Fresh editor with one default layer. The initial state is history
    /// snapshot zero, so undo stops here.
    pub fn new() -> Self {
        let mut editor = Self {
            document: Document::default(),
            history: History::new(),
            view: View::Desktop,
            drag: None,
        };
        editor.add_layer();
        editor
    }

    /// Wraps an externally supplied document (e.g. loaded from JSON),
    /// validating its invariants and repairing the reference fields before
    /// seeding history with it.
    pub fn from_document(mut document: Document) -> LayoutResult<Self> {
        document.validate()?;
        document.recompute_next_id();
        document.heal_active_layer();
        document.normalize_priorities();
        let mut history = History::new();
        history.commit(&document);
        Ok(Self {
            document,
            history,
            view: View::Desktop,
            drag: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Switches the breakpoint the editor operates on. Clears the selection;
    /// a selection is scoped to the view it was made in. Not itself an
    /// undoable edit.
    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.document.selected_module_id = None;
        }
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.document.active_layer()
    }

    /// Self-healing selection accessor, see [`Document::selected`].
    pub fn selected(&mut self) -> Option<(&Layer, &Module)> {
        self.document.selected()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous snapshot into the live document. Returns false
    /// at the beginning of history.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot into the live document. Returns false at
    /// the end of history.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, snapshot: Document) {
        self.document = snapshot;
        self.document.heal_active_layer();
        self.drag = None;
    }

    fn commit(&mut self) {
        self.history.commit(&self.document);
    }

    // --- layer operations ---

    /// Creates an empty layer above everything else and activates it.
    /// Always succeeds.
    pub fn add_layer(&mut self) -> LayerId {
        let id = self.document.allocate_id();
        let name = format!("Layer {}", self.document.layers.len() + 1);
        let priority = self
            .document
            .layers
            .iter()
            .map(|layer| layer.priority)
            .fold(None::<f64>, |top, priority| {
                Some(top.map_or(priority, |value| value.max(priority)))
            })
            .map_or(0.0, |top| top + 1.0);
        debug!(id, %name, priority, "adding layer");
        self.document.layers.push(Layer::new(id, name, priority));
        self.document.active_layer_id = Some(id);
        self.document.selected_module_id = None;
        self.commit();
        id
    }

    /// Validates a pending delete and returns the confirmation prompt for
    /// the boundary to show. [`Editor::delete_active_layer`] commits it.
    pub fn delete_active_layer_prompt(&self) -> LayoutResult<String> {
        if self.document.layers.len() <= 1 {
            return Err(LayoutError::LastLayer);
        }
        let layer = self.active_layer().ok_or(LayoutError::NoActiveLayer)?;
        Ok(format!("Delete layer '{}'?", layer.name))
    }

    /// Removes the active layer, re-normalizes priorities, and activates the
    /// new topmost layer. Rejected while only one layer remains.
    pub fn delete_active_layer(&mut self) -> LayoutResult<()> {
        if self.document.layers.len() <= 1 {
            return Err(LayoutError::LastLayer);
        }
        let id = self
            .document
            .active_layer_id
            .ok_or(LayoutError::NoActiveLayer)?;
        debug!(id, "deleting active layer");
        self.document.layers.retain(|layer| layer.id != id);
        self.document.selected_module_id = None;
        self.document.normalize_priorities();
        self.document.active_layer_id = self.document.topmost_layer_id();
        self.commit();
        Ok(())
    }

    /// Switches the active layer. Clears the selection on a real switch;
    /// selection never carries across layers. Activation alone is not an
    /// undoable edit — the new reference rides along with the next commit.
    pub fn activate_layer(&mut self, id: LayerId) -> LayoutResult<()> {
        if self.document.layer(id).is_none() {
            return Err(LayoutError::LayerNotFound(id));
        }
        if self.document.active_layer_id == Some(id) {
            return Ok(());
        }
        self.document.active_layer_id = Some(id);
        self.document.selected_module_id = None;
        Ok(())
    }

    /// Selects a module, activating its layer first when needed. Not an
    /// undoable edit.
    pub fn select_module(&mut self, layer_id: LayerId, module_id: ModuleId) -> LayoutResult<()> {
        let layer = self
            .document
            .layer(layer_id)
            .ok_or(LayoutError::LayerNotFound(layer_id))?;
        if !layer.has_module(module_id) {
            return Err(LayoutError::ModuleNotFound(module_id));
        }
        self.activate_layer(layer_id)?;
        self.document.selected_module_id = Some(module_id);
        Ok(())
    }

    pub fn deselect_module(&mut self) {
        self.document.selected_module_id = None;
    }

    /// Renames a layer. Input is trimmed; empty or whitespace-only names are
    /// rejected so the caller reverts to the prior name. Allowed on locked
    /// layers — the lock protects module content, not the label.
    pub fn rename_layer(&mut self, id: LayerId, name: &str) -> LayoutResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LayoutError::EmptyLayerName);
        }
        let layer = self
            .document
            .layer_mut(id)
            .ok_or(LayoutError::LayerNotFound(id))?;
        if layer.name == trimmed {
            return Ok(());
        }
        layer.name = trimmed.to_string();
        self.commit();
        Ok(())
    }

    /// Flips visibility; returns the new state.
    pub fn toggle_layer_visibility(&mut self, id: LayerId) -> LayoutResult<bool> {
        let layer = self
            .document
            .layer_mut(id)
            .ok_or(LayoutError::LayerNotFound(id))?;
        layer.is_visible = !layer.is_visible;
        let visible = layer.is_visible;
        self.commit();
        Ok(visible)
    }

    /// Flips the lock; returns the new state.
    pub fn toggle_layer_lock(&mut self, id: LayerId) -> LayoutResult<bool> {
        let layer = self
            .document
            .layer_mut(id)
            .ok_or(LayoutError::LayerNotFound(id))?;
        layer.is_locked = !layer.is_locked;
        let locked = layer.is_locked;
        self.commit();
        Ok(locked)
    }

    /// Sets a raw priority then re-normalizes every layer to the dense
    /// `0..n-1` sequence, so values never drift or collide.
    pub fn update_layer_priority(&mut self, id: LayerId, priority: f64) -> LayoutResult<()> {
        let layer = self
            .document
            .layer_mut(id)
            .ok_or(LayoutError::LayerNotFound(id))?;
        layer.priority = priority;
        self.document.normalize_priorities();
        self.commit();
        Ok(())
    }

    // --- layer settings ---
    // Settings edits are permitted on locked layers: the lock protects
    // module content, and these only reshape the grid around it.

    pub fn set_desktop_columns(&mut self, id: LayerId, columns: u32) -> LayoutResult<()> {
        self.update_settings(id, |settings| {
            settings.desktop_columns = clamp(columns, MIN_COLUMNS, MAX_COLUMNS);
        })
    }

    pub fn set_desktop_gap(&mut self, id: LayerId, gap: u32) -> LayoutResult<()> {
        self.update_settings(id, |settings| {
            settings.desktop_gap = gap.min(MAX_GAP_PX);
        })
    }

    pub fn set_target_columns(&mut self, id: LayerId, columns: u32) -> LayoutResult<()> {
        self.update_settings(id, |settings| {
            settings.target_columns = clamp(columns, MIN_COLUMNS, MAX_COLUMNS);
        })
    }

    pub fn set_mobile_gap(&mut self, id: LayerId, gap: u32) -> LayoutResult<()> {
        self.update_settings(id, |settings| {
            settings.mobile_gap = gap.min(MAX_GAP_PX);
        })
    }

    pub fn set_blend_mode(&mut self, id: LayerId, blend_mode: &str) -> LayoutResult<()> {
        self.update_settings(id, |settings| {
            settings.blend_mode = blend_mode.to_string();
        })
    }

    /// Locks or unlocks the mobile order to the desktop order. Enabling
    /// copies the desktop order once; afterwards desktop reorders keep
    /// overwriting the mobile order until unlocked.
    pub fn set_mobile_order_locked(&mut self, id: LayerId, locked: bool) -> LayoutResult<()> {
        let layer = self
            .document
            .layer_mut(id)
            .ok_or(LayoutError::LayerNotFound(id))?;
        layer.settings.mobile_order_locked = locked;
        if locked {
            layer.mobile_order = layer.desktop_order.clone();
        }
        self.commit();
        Ok(())
    }

    fn update_settings(
        &mut self,
        id: LayerId,
        apply: impl FnOnce(&mut crate::models::LayerSettings),
    ) -> LayoutResult<()> {
        let layer = self
            .document
            .layer_mut(id)
            .ok_or(LayoutError::LayerNotFound(id))?;
        apply(&mut layer.settings);
        self.commit();
        Ok(())
    }

    /// Lookup that enforces the lock rule shared by all module-content
    /// operations.
    fn unlocked_layer_mut(&mut self, id: LayerId) -> LayoutResult<&mut Layer> {
        let layer = self
            .document
            .layer_mut(id)
            .ok_or(LayoutError::LayerNotFound(id))?;
        if layer.is_locked {
            return Err(LayoutError::LayerLocked(layer.name.clone()));
        }
        Ok(layer)
    }
}
