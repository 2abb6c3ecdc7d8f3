//! Module-content operations: add, delete, split, clear, and field edits on
//! the current selection.

use super::Editor;
use crate::constants::{MAX_BORDER_WIDTH_PX, MAX_FONT_SIZE_PX, MAX_ROW_SPAN, MIN_FONT_SIZE_PX};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::clamp;
use crate::models::{LayerId, Module, ModuleId, ModuleKind, ModuleSpec};
use tracing::debug;

impl Editor {
    /// Adds a module built from `spec` to a layer, appending it to the
    /// module set and both order sequences. Rejected on locked or missing
    /// layers.
    pub fn add_module(&mut self, layer_id: LayerId, spec: ModuleSpec) -> LayoutResult<ModuleId> {
        self.unlocked_layer_mut(layer_id)?;
        let id = self.document.allocate_id();
        let layer = self.unlocked_layer_mut(layer_id)?;
        let module = Module::new(id, spec, &layer.settings);
        debug!(layer_id, module_id = id, col = module.col, row = module.row, "adding module");
        layer.insert_module(module);
        self.commit();
        Ok(id)
    }

    /// Deletes a module from the set and both orders, clearing a matching
    /// selection.
    pub fn delete_module(&mut self, layer_id: LayerId, module_id: ModuleId) -> LayoutResult<()> {
        let layer = self.unlocked_layer_mut(layer_id)?;
        if !layer.remove_module(module_id) {
            return Err(LayoutError::ModuleNotFound(module_id));
        }
        if self.document.selected_module_id == Some(module_id) {
            self.document.selected_module_id = None;
        }
        self.commit();
        Ok(())
    }

    /// Subdivides the selected module into `h × v` pieces.
    ///
    /// Spans distribute as `floor(span / n)` with the remainder spread one
    /// extra unit over the first pieces, so the pieces sum back exactly to
    /// the original with no zero-sized piece. Pieces inherit the original's
    /// attributes, share a fresh group id, keep text only on the first
    /// piece, and re-derive a ratio of their own when the original was
    /// ratio-locked. The original id is replaced in place by the ordered
    /// piece ids in the module set and both orders; the selection is cleared.
    ///
    /// `(1, 1)` is a no-op. Factors finer than one grid unit per piece are
    /// rejected with the current size in the message.
    pub fn split_selected(&mut self, h: u32, v: u32) -> LayoutResult<Vec<ModuleId>> {
        let h = h.max(1);
        let v = v.max(1);
        let (layer_id, module_id) = self
            .document
            .selected_ids()
            .ok_or(LayoutError::NoSelection)?;
        let original = {
            let layer = self.unlocked_layer_mut(layer_id)?;
            layer
                .module(module_id)
                .ok_or(LayoutError::ModuleNotFound(module_id))?
                .clone()
        };
        if h == 1 && v == 1 {
            return Ok(Vec::new());
        }
        if h > original.col || v > original.row {
            return Err(LayoutError::SplitTooFine {
                col: original.col,
                row: original.row,
                h,
                v,
            });
        }

        let base_col = original.col / h;
        let remainder_col = original.col % h;
        let base_row = original.row / v;
        let remainder_row = original.row % v;

        let mut pieces = Vec::with_capacity((h * v) as usize);
        let mut group_id = None;
        for r in 0..v {
            let row = base_row + u32::from(r < remainder_row);
            for c in 0..h {
                let col = base_col + u32::from(c < remainder_col);
                let id = self.document.allocate_id();
                let group = group_id
                    .get_or_insert_with(|| format!("split-{}", id))
                    .clone();
                let mut piece = original.clone();
                piece.id = id;
                piece.col = col;
                piece.row = row;
                piece.group_id = Some(group);
                if r > 0 || c > 0 {
                    piece.text_content.clear();
                }
                piece.refresh_aspect_ratio();
                pieces.push(piece);
            }
        }
        let piece_ids: Vec<ModuleId> = pieces.iter().map(|piece| piece.id).collect();
        debug!(
            layer_id,
            module_id,
            h,
            v,
            pieces = piece_ids.len(),
            "splitting module"
        );

        let layer = self.unlocked_layer_mut(layer_id)?;
        if let Some(position) = layer
            .modules
            .iter()
            .position(|module| module.id == module_id)
        {
            layer.modules.splice(position..=position, pieces);
        }
        replace_in_order(&mut layer.desktop_order, module_id, &piece_ids);
        replace_in_order(&mut layer.mobile_order, module_id, &piece_ids);

        self.document.selected_module_id = None;
        self.commit();
        Ok(piece_ids)
    }

    /// Validates a pending clear and returns the confirmation prompt.
    /// [`Editor::clear_active_layer`] commits it.
    pub fn clear_active_layer_prompt(&self) -> LayoutResult<String> {
        let layer = self.active_layer().ok_or(LayoutError::NoActiveLayer)?;
        if layer.is_locked {
            return Err(LayoutError::LayerLocked(layer.name.clone()));
        }
        Ok(format!("Delete every module in layer '{}'?", layer.name))
    }

    /// Empties the active layer's module set and both orders.
    pub fn clear_active_layer(&mut self) -> LayoutResult<()> {
        let layer_id = self
            .document
            .active_layer_id
            .ok_or(LayoutError::NoActiveLayer)?;
        let layer = self.unlocked_layer_mut(layer_id)?;
        layer.clear_modules();
        self.document.selected_module_id = None;
        self.commit();
        Ok(())
    }

    // --- field edits on the selection ---

    /// Resizes the selected module, clamping to the layer's grid, and
    /// re-derives its aspect ratio when one is locked in.
    pub fn resize_selected(&mut self, col: u32, row: u32) -> LayoutResult<()> {
        self.edit_selected(|module, desktop_columns| {
            module.col = clamp(col, 1, desktop_columns);
            module.row = clamp(row, 1, MAX_ROW_SPAN);
            module.refresh_aspect_ratio();
        })
    }

    /// Sets or clears the explicit mobile span override.
    pub fn set_selected_mobile_col(&mut self, mobile_col: Option<u32>) -> LayoutResult<()> {
        let (layer_id, _) = self
            .document
            .selected_ids()
            .ok_or(LayoutError::NoSelection)?;
        let target_columns = self
            .document
            .layer(layer_id)
            .map(|layer| layer.settings.target_columns)
            .unwrap_or(1);
        self.edit_selected(|module, _| {
            module.mobile_col = mobile_col.map(|value| clamp(value, 1, target_columns));
        })
    }

    /// Locks the aspect ratio to the current spans, or releases it back to
    /// fixed row sizing.
    pub fn set_selected_aspect_locked(&mut self, locked: bool) -> LayoutResult<()> {
        self.edit_selected(|module, _| {
            module.aspect_ratio = locked.then(|| Module::ratio_string(module.col, module.row));
        })
    }

    /// Replaces the selected box module's text content.
    pub fn set_selected_text(&mut self, text: impl Into<String>) -> LayoutResult<()> {
        let text = text.into();
        self.edit_selected(|module, _| {
            module.text_content = text;
        })
    }

    /// Sets the font size override, clamped to the legal range; `None`
    /// restores the stylesheet default.
    pub fn set_selected_font_size(&mut self, size: Option<u32>) -> LayoutResult<()> {
        self.edit_selected(|module, _| {
            module.font_size = size.map(|value| clamp(value, MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX));
        })
    }

    /// Switches the selected module between box and image content. Text and
    /// styling fields are kept; they simply stop rendering for images.
    pub fn set_selected_kind(&mut self, kind: ModuleKind) -> LayoutResult<()> {
        self.edit_selected(|module, _| {
            module.kind = kind;
        })
    }

    pub fn set_selected_color(&mut self, color: impl Into<String>) -> LayoutResult<()> {
        let color = color.into();
        self.edit_selected(|module, _| {
            module.color = color;
        })
    }

    pub fn set_selected_transparent(&mut self, transparent: bool) -> LayoutResult<()> {
        self.edit_selected(|module, _| {
            module.transparent = transparent;
        })
    }

    pub fn set_selected_border_color(&mut self, color: impl Into<String>) -> LayoutResult<()> {
        let color = color.into();
        self.edit_selected(|module, _| {
            module.border_color = color;
        })
    }

    pub fn set_selected_border_width(&mut self, width: u32) -> LayoutResult<()> {
        self.edit_selected(|module, _| {
            module.border_width = clamp(width, 0, MAX_BORDER_WIDTH_PX);
        })
    }

    pub fn set_selected_text_align(&mut self, align: impl Into<String>) -> LayoutResult<()> {
        let align = align.into();
        self.edit_selected(|module, _| {
            module.text_align = align;
        })
    }

    pub fn set_selected_vertical_align(&mut self, align: impl Into<String>) -> LayoutResult<()> {
        let align = align.into();
        self.edit_selected(|module, _| {
            module.vertical_align = align;
        })
    }

    pub fn set_selected_font_color(&mut self, color: impl Into<String>) -> LayoutResult<()> {
        let color = color.into();
        self.edit_selected(|module, _| {
            module.font_color = color;
        })
    }

    pub fn set_selected_font_weight(&mut self, weight: impl Into<String>) -> LayoutResult<()> {
        let weight = weight.into();
        self.edit_selected(|module, _| {
            module.font_weight = weight;
        })
    }

    /// Manually links or unlinks the selected module. Input is trimmed;
    /// empty clears the group. A name already used in another layer is
    /// rejected, since a group never spans layers.
    pub fn set_selected_group(&mut self, group: Option<&str>) -> LayoutResult<()> {
        let group = group
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        if let Some(name) = &group {
            let (layer_id, _) = self
                .document
                .selected_ids()
                .ok_or(LayoutError::NoSelection)?;
            let taken = self.document.layers.iter().any(|layer| {
                layer.id != layer_id
                    && layer
                        .modules
                        .iter()
                        .any(|module| module.group_id.as_deref() == Some(name.as_str()))
            });
            if taken {
                return Err(LayoutError::GroupInAnotherLayer(name.clone()));
            }
        }
        self.edit_selected(|module, _| {
            module.group_id = group;
        })
    }

    fn edit_selected(&mut self, apply: impl FnOnce(&mut Module, u32)) -> LayoutResult<()> {
        let (layer_id, module_id) = self
            .document
            .selected_ids()
            .ok_or(LayoutError::NoSelection)?;
        let layer = self.unlocked_layer_mut(layer_id)?;
        let desktop_columns = layer.settings.desktop_columns;
        let module = layer
            .module_mut(module_id)
            .ok_or(LayoutError::ModuleNotFound(module_id))?;
        apply(module, desktop_columns);
        self.commit();
        Ok(())
    }
}

/// Replaces one id in an order sequence with an ordered run of new ids,
/// keeping the original position.
fn replace_in_order(order: &mut Vec<ModuleId>, old: ModuleId, new_ids: &[ModuleId]) {
    if let Some(position) = order.iter().position(|entry| *entry == old) {
        order.splice(position..=position, new_ids.iter().copied());
    }
}
