use super::{LayerSettings, ModuleId};
use crate::constants::{MAX_BORDER_WIDTH_PX, MAX_ROW_SPAN};
use crate::geometry::clamp;
use serde::{Deserialize, Serialize};

/// Variant discriminator for a module's content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Background/border plus optional text.
    #[default]
    Box,
    /// Placeholder image.
    Image,
}

impl ModuleKind {
    /// Lowercase token used in exported class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Image => "image",
        }
    }
}

/// A single rectangular grid item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    /// Column span on the desktop grid.
    pub col: u32,
    /// Row span on the desktop grid. Ignored for rendering while
    /// `aspect_ratio` is set.
    pub row: u32,
    /// Explicit mobile column span override; `None` means derive
    /// automatically from `col`.
    #[serde(default)]
    pub mobile_col: Option<u32>,
    #[serde(default)]
    pub kind: ModuleKind,
    #[serde(default = "default_color")]
    pub color: String,
    /// Renders the background transparent regardless of `color`.
    #[serde(default)]
    pub transparent: bool,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default)]
    pub border_width: u32,
    /// Raw user text, newline-preserving. Meaningful for box modules only.
    #[serde(default)]
    pub text_content: String,
    #[serde(default = "default_text_align")]
    pub text_align: String,
    #[serde(default = "default_vertical_align")]
    pub vertical_align: String,
    #[serde(default = "default_border_color")]
    pub font_color: String,
    /// `None` means the exported stylesheet default (14px).
    #[serde(default)]
    pub font_size: Option<u32>,
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
    /// Links modules produced by the same split (or grouped manually);
    /// grouped modules move together during reordering.
    #[serde(default)]
    pub group_id: Option<String>,
    /// "W / H" ratio string. When set, rendered row sizing becomes `auto`
    /// and the ratio governs the height instead of `row`.
    #[serde(default)]
    pub aspect_ratio: Option<String>,
}

fn default_color() -> String {
    "#8c6c3c".to_string()
}

fn default_border_color() -> String {
    "#000000".to_string()
}

fn default_text_align() -> String {
    "left".to_string()
}

fn default_vertical_align() -> String {
    "flex-start".to_string()
}

fn default_font_weight() -> String {
    "400".to_string()
}

/// Caller-supplied fields for a new module; everything omitted falls back to
/// the documented defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSpec {
    pub col: u32,
    pub row: u32,
    pub kind: ModuleKind,
    pub color: String,
    pub transparent: bool,
    pub border_color: String,
    pub border_width: u32,
}

impl Default for ModuleSpec {
    fn default() -> Self {
        Self {
            col: 2,
            row: 2,
            kind: ModuleKind::Box,
            color: default_color(),
            transparent: false,
            border_color: default_border_color(),
            border_width: 0,
        }
    }
}

impl Module {
    /// Builds a module from a spec, clamping the numeric fields to their
    /// legal ranges for the target layer.
    pub fn new(id: ModuleId, spec: ModuleSpec, settings: &LayerSettings) -> Self {
        Self {
            id,
            col: clamp(spec.col, 1, settings.desktop_columns),
            row: clamp(spec.row, 1, MAX_ROW_SPAN),
            mobile_col: None,
            kind: spec.kind,
            color: spec.color,
            transparent: spec.transparent,
            border_color: spec.border_color,
            border_width: clamp(spec.border_width, 0, MAX_BORDER_WIDTH_PX),
            text_content: String::new(),
            text_align: default_text_align(),
            vertical_align: default_vertical_align(),
            font_color: default_border_color(),
            font_size: None,
            font_weight: default_font_weight(),
            group_id: None,
            aspect_ratio: None,
        }
    }

    /// Ratio string for the given spans, in the "W / H" form stored on the
    /// model and emitted into `aspect-ratio` declarations.
    pub fn ratio_string(col: u32, row: u32) -> String {
        format!("{} / {}", col, row)
    }

    /// Re-derives the stored ratio from the current spans. Must be called
    /// after every resize of a ratio-locked module so the visual proportion
    /// target tracks the new size.
    pub fn refresh_aspect_ratio(&mut self) {
        if self.aspect_ratio.is_some() {
            self.aspect_ratio = Some(Self::ratio_string(self.col, self.row));
        }
    }
}
