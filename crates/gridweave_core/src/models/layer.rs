use super::{LayerId, Module, ModuleId};
use serde::{Deserialize, Serialize};

/// Per-layer grid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSettings {
    /// Desktop grid column count (1..=12).
    pub desktop_columns: u32,
    /// Desktop grid gap in pixels (0..=50).
    pub desktop_gap: u32,
    /// Mobile-breakpoint column count (1..=12).
    pub target_columns: u32,
    /// Mobile grid gap in pixels (0..=50).
    pub mobile_gap: u32,
    /// While true, desktop reorders overwrite the mobile order.
    pub mobile_order_locked: bool,
    /// CSS `mix-blend-mode` token applied to the layer container.
    pub blend_mode: String,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            desktop_columns: 6,
            desktop_gap: 10,
            target_columns: 2,
            mobile_gap: 10,
            mobile_order_locked: false,
            blend_mode: "normal".to_string(),
        }
    }
}

/// An independently configured CSS-grid region owning its modules, order
/// sequences, visibility, lock state, and stacking priority.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    /// Stacking key. Lower renders earlier (visually beneath); normalized to
    /// dense integers after every priority-affecting operation.
    pub priority: f64,
    pub modules: Vec<Module>,
    /// Visual stacking / document order at the desktop breakpoint. Always a
    /// permutation of the module id set.
    pub desktop_order: Vec<ModuleId>,
    /// Document/tab order at the mobile breakpoint. Always a permutation of
    /// the module id set.
    pub mobile_order: Vec<ModuleId>,
    pub is_visible: bool,
    /// Blocks module-content mutations (add, delete, move, split, clear).
    /// Renaming the layer is still allowed.
    pub is_locked: bool,
    pub settings: LayerSettings,
}

impl Layer {
    pub fn new(id: LayerId, name: String, priority: f64) -> Self {
        Self {
            id,
            name,
            priority,
            modules: Vec::new(),
            desktop_order: Vec::new(),
            mobile_order: Vec::new(),
            is_visible: true,
            is_locked: false,
            settings: LayerSettings::default(),
        }
    }

    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|module| module.id == id)
    }

    pub fn module_mut(&mut self, id: ModuleId) -> Option<&mut Module> {
        self.modules.iter_mut().find(|module| module.id == id)
    }

    pub fn has_module(&self, id: ModuleId) -> bool {
        self.module(id).is_some()
    }

    /// Appends a module to the set and both order sequences. With
    /// `mobile_order_locked` the mobile order is rewritten to mirror the
    /// desktop order instead of being appended independently.
    pub fn insert_module(&mut self, module: Module) {
        let id = module.id;
        self.modules.push(module);
        self.desktop_order.push(id);
        if self.settings.mobile_order_locked {
            self.mobile_order = self.desktop_order.clone();
        } else {
            self.mobile_order.push(id);
        }
    }

    /// Removes a module from the set and both order sequences. Returns false
    /// when the id was not present.
    pub fn remove_module(&mut self, id: ModuleId) -> bool {
        let before = self.modules.len();
        self.modules.retain(|module| module.id != id);
        self.desktop_order.retain(|entry| *entry != id);
        self.mobile_order.retain(|entry| *entry != id);
        self.modules.len() != before
    }

    pub fn clear_modules(&mut self) {
        self.modules.clear();
        self.desktop_order.clear();
        self.mobile_order.clear();
    }
}
