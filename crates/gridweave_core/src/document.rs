//! The document model: the full layer set plus the active-layer and
//! selection references, with self-healing accessors.

use crate::error::{LayoutError, LayoutResult};
use crate::models::{Layer, LayerId, Module, ModuleId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// The whole in-memory layout state. Exclusive owner of all layer and module
/// data; history snapshots are independent deep copies of this value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub layers: Vec<Layer>,
    /// At most one layer receives new modules and shows as current. Always
    /// resolves to an existing layer, or is `None` only while `layers` is
    /// empty.
    pub active_layer_id: Option<LayerId>,
    /// Selection, scoped to the active layer. A stale id is cleared on the
    /// next access rather than treated as an error.
    pub selected_module_id: Option<ModuleId>,
    /// Monotonic id source for both layers and modules.
    #[serde(default)]
    next_id: u64,
}

impl Document {
    /// Hands out the next document-unique id.
    pub(crate) fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.layer(self.active_layer_id?)
    }

    pub fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        let id = self.active_layer_id?;
        self.layer_mut(id)
    }

    /// Resolves the selection inside the active layer, clearing it when the
    /// module no longer exists there. Every access path that depends on the
    /// selection goes through here; delete and split routinely invalidate
    /// ids, so staleness is an ordinary condition.
    pub fn selected(&mut self) -> Option<(&Layer, &Module)> {
        let (layer_id, module_id) = self.selected_ids()?;
        let layer = self.layer(layer_id)?;
        let module = layer.module(module_id)?;
        Some((layer, module))
    }

    /// Same resolve-or-clear rule as [`Document::selected`], returning ids
    /// so callers can take mutable borrows afterwards.
    pub fn selected_ids(&mut self) -> Option<(LayerId, ModuleId)> {
        let module_id = self.selected_module_id?;
        let resolved = self
            .active_layer()
            .filter(|layer| layer.has_module(module_id))
            .map(|layer| layer.id);
        match resolved {
            Some(layer_id) => Some((layer_id, module_id)),
            None => {
                warn!(module_id, "clearing stale module selection");
                self.selected_module_id = None;
                None
            }
        }
    }

    /// All layers in ascending priority order. Single source of truth for
    /// stacking and export iteration; recomputed on every call, never cached.
    pub fn sorted_layers(&self) -> Vec<&Layer> {
        let mut sorted: Vec<&Layer> = self.layers.iter().collect();
        sorted.sort_by(|a, b| a.priority.total_cmp(&b.priority));
        sorted
    }

    /// Id of the layer rendered last (visually on top), if any.
    pub fn topmost_layer_id(&self) -> Option<LayerId> {
        self.sorted_layers().last().map(|layer| layer.id)
    }

    /// Rewrites priorities to the dense sequence `0..n-1` matching the
    /// current sorted order. Stable: ties keep their relative order.
    pub fn normalize_priorities(&mut self) {
        let order: Vec<LayerId> = self.sorted_layers().iter().map(|layer| layer.id).collect();
        for (position, id) in order.into_iter().enumerate() {
            if let Some(layer) = self.layer_mut(id) {
                layer.priority = position as f64;
            }
        }
    }

    /// Re-points a dangling active-layer reference at the topmost layer.
    /// Runs after restoring history snapshots and after loading external
    /// documents.
    pub fn heal_active_layer(&mut self) {
        let resolves = self
            .active_layer_id
            .map(|id| self.layer(id).is_some())
            .unwrap_or(false);
        if !resolves && !self.layers.is_empty() {
            warn!("active layer missing; falling back to topmost layer");
            self.active_layer_id = self.topmost_layer_id();
        }
        if self.layers.is_empty() {
            self.active_layer_id = None;
        }
    }

    /// Raises the id watermark above every id present in the document.
    /// Required after deserializing a document that carries no watermark.
    pub fn recompute_next_id(&mut self) {
        let max_layer = self.layers.iter().map(|layer| layer.id).max().unwrap_or(0);
        let max_module = self
            .layers
            .iter()
            .flat_map(|layer| layer.modules.iter().map(|module| module.id))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(max_layer).max(max_module);
    }

    /// Checks the structural invariants of an externally supplied document:
    /// unique ids, order sequences that are exact permutations of the module
    /// set, groups confined to one layer, and a resolvable active layer.
    pub fn validate(&self) -> LayoutResult<()> {
        let mut layer_ids = HashSet::new();
        for layer in &self.layers {
            if !layer_ids.insert(layer.id) {
                return Err(LayoutError::InvalidDocument(format!(
                    "duplicate layer id {}",
                    layer.id
                )));
            }
            let mut module_ids = HashSet::new();
            for module in &layer.modules {
                if !module_ids.insert(module.id) {
                    return Err(LayoutError::InvalidDocument(format!(
                        "duplicate module id {} in layer '{}'",
                        module.id, layer.name
                    )));
                }
            }
            for (label, order) in [
                ("desktop_order", &layer.desktop_order),
                ("mobile_order", &layer.mobile_order),
            ] {
                let entries: HashSet<ModuleId> = order.iter().copied().collect();
                if entries.len() != order.len() || entries != module_ids {
                    return Err(LayoutError::InvalidDocument(format!(
                        "{} of layer '{}' is not a permutation of its modules",
                        label, layer.name
                    )));
                }
            }
        }

        let mut group_owner: HashMap<&str, LayerId> = HashMap::new();
        for layer in &self.layers {
            for module in &layer.modules {
                if let Some(group) = module.group_id.as_deref() {
                    let owner = group_owner.entry(group).or_insert(layer.id);
                    if *owner != layer.id {
                        return Err(LayoutError::InvalidDocument(format!(
                            "group '{}' spans multiple layers",
                            group
                        )));
                    }
                }
            }
        }

        match self.active_layer_id {
            Some(id) if self.layer(id).is_none() => Err(LayoutError::InvalidDocument(format!(
                "active layer {} does not exist",
                id
            ))),
            None if !self.layers.is_empty() => Err(LayoutError::InvalidDocument(
                "no active layer set".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
