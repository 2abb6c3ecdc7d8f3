//! Drag-based reordering within a layer's order sequence.
//!
//! A drag is short-lived transient state between drag-start and a terminal
//! event; every terminal path (drop, cancel, rejection) clears it so a stale
//! session can never corrupt the next interaction.

use super::Editor;
use crate::error::{LayoutError, LayoutResult};
use crate::models::{LayerId, ModuleId, View};
use tracing::debug;

/// Transient state of an in-flight module drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub layer_id: LayerId,
    pub module_id: ModuleId,
    /// Index of the dragged module in the active view's order sequence at
    /// drag start. Drives the insertion tie-break on drop.
    pub origin_index: usize,
}

impl Editor {
    /// Starts dragging a module. Rejected on locked or missing layers and
    /// when the module is absent from the active view's order.
    pub fn begin_module_drag(&mut self, layer_id: LayerId, module_id: ModuleId) -> LayoutResult<()> {
        let view = self.view;
        let layer = self
            .document
            .layer(layer_id)
            .ok_or(LayoutError::LayerNotFound(layer_id))?;
        if layer.is_locked {
            return Err(LayoutError::LayerLocked(layer.name.clone()));
        }
        let order = order_for(layer, view);
        let origin_index = order
            .iter()
            .position(|entry| *entry == module_id)
            .ok_or(LayoutError::ModuleNotFound(module_id))?;
        self.drag = Some(DragSession {
            layer_id,
            module_id,
            origin_index,
        });
        Ok(())
    }

    /// Discards the in-flight drag, leaving the document unchanged. The
    /// equivalent of a drop that failed to land anywhere valid.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Completes the drag with a drop on `layer_id`, either onto the module
    /// at `target` (an index into the active view's order) or onto the layer
    /// background (`None`).
    ///
    /// Returns whether the order changed. A drop onto a member of the
    /// dragged module's own group is a no-op; a grouped drop onto the
    /// background is rejected; a cross-layer drop is rejected. When the
    /// dragged module is grouped, the whole group moves as a contiguous
    /// block in its current relative order. Insertion lands after the target
    /// if the drag originated before it, otherwise before it — the
    /// asymmetry keeps the drop from landing one slot short.
    pub fn complete_module_drop(
        &mut self,
        layer_id: LayerId,
        target: Option<usize>,
    ) -> LayoutResult<bool> {
        // The session ends here no matter how the drop resolves.
        let session = self.drag.take().ok_or(LayoutError::NoDragSession)?;
        if session.layer_id != layer_id {
            return Err(LayoutError::CrossLayerDrop);
        }
        let view = self.view;
        let layer = self
            .document
            .layer(layer_id)
            .ok_or(LayoutError::LayerNotFound(layer_id))?;
        if layer.is_locked {
            return Err(LayoutError::LayerLocked(layer.name.clone()));
        }
        let dragged = layer
            .module(session.module_id)
            .ok_or(LayoutError::ModuleNotFound(session.module_id))?;
        let group_id = dragged.group_id.clone();
        let order = order_for(layer, view).to_vec();

        // Grouped modules move together, in encounter order.
        let moving: Vec<ModuleId> = match &group_id {
            Some(group) => order
                .iter()
                .copied()
                .filter(|id| {
                    layer
                        .module(*id)
                        .and_then(|module| module.group_id.as_deref())
                        == Some(group.as_str())
                })
                .collect(),
            None => vec![session.module_id],
        };

        let new_order = match target {
            None => {
                if group_id.is_some() {
                    return Err(LayoutError::GroupedBackgroundDrop);
                }
                let mut appended: Vec<ModuleId> = order
                    .iter()
                    .copied()
                    .filter(|id| *id != session.module_id)
                    .collect();
                appended.push(session.module_id);
                appended
            }
            Some(target_index) => {
                let target_id = *order
                    .get(target_index)
                    .ok_or(LayoutError::InvalidDropTarget(target_index))?;
                if moving.contains(&target_id) {
                    // Cannot reorder within one's own group via this gesture.
                    return Ok(false);
                }
                let mut remaining: Vec<ModuleId> = order
                    .iter()
                    .copied()
                    .filter(|id| !moving.contains(id))
                    .collect();
                let mut drop_index = remaining
                    .iter()
                    .position(|id| *id == target_id)
                    .unwrap_or(remaining.len());
                if session.origin_index < target_index {
                    drop_index += 1;
                }
                remaining.splice(drop_index..drop_index, moving.iter().copied());
                remaining
            }
        };

        if new_order == order {
            return Ok(false);
        }
        debug!(layer_id, module_id = session.module_id, ?view, "reordering modules");
        let layer = self
            .document
            .layer_mut(layer_id)
            .ok_or(LayoutError::LayerNotFound(layer_id))?;
        match view {
            View::Desktop => {
                layer.desktop_order = new_order;
                if layer.settings.mobile_order_locked {
                    layer.mobile_order = layer.desktop_order.clone();
                }
            }
            View::Mobile => layer.mobile_order = new_order,
        }
        self.commit();
        Ok(true)
    }
}

fn order_for(layer: &crate::models::Layer, view: View) -> &[ModuleId] {
    match view {
        View::Desktop => &layer.desktop_order,
        View::Mobile => &layer.mobile_order,
    }
}
