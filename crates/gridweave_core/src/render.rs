//! Pure derivation of render-ready per-module visual attributes.
//!
//! A display front-end reads these instead of interpreting raw model fields;
//! the same rules feed the stylesheet export so canvas and output agree.

use crate::geometry::{clamp, mobile_span};
use crate::models::{LayerSettings, Module, ModuleKind, View};

/// Row sizing for a module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowSizing {
    /// Fixed `grid-row: span N`.
    Span(u32),
    /// `grid-row: auto`; height governed by the module's aspect ratio.
    Auto,
}

/// Outline decoration, present when the border width is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outline<'a> {
    pub width: u32,
    pub color: &'a str,
}

/// Text styling, present for box modules only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle<'a> {
    pub align: &'a str,
    pub vertical_align: &'a str,
    pub color: &'a str,
    /// Resolved size; `None` on the module means the 14px default.
    pub size_px: u32,
    pub weight: &'a str,
    pub content: &'a str,
}

/// Everything a renderer needs to draw one module at one breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleStyle<'a> {
    pub column_span: u32,
    pub row: RowSizing,
    /// `None` for transparent or image modules.
    pub background: Option<&'a str>,
    pub outline: Option<Outline<'a>>,
    pub aspect_ratio: Option<&'a str>,
    pub text: Option<TextStyle<'a>>,
    /// True when the module overflows the mobile grid with no explicit
    /// override, so the editor can flag it.
    pub mobile_overflow_warning: bool,
}

/// Default font size applied when a box module carries none.
pub const DEFAULT_FONT_SIZE_PX: u32 = 14;

/// Column span at the given breakpoint: the desktop span clamped to the
/// desktop grid, or the derived mobile span.
pub fn effective_column_span(module: &Module, settings: &LayerSettings, view: View) -> u32 {
    match view {
        View::Desktop => clamp(module.col, 1, settings.desktop_columns),
        View::Mobile => mobile_span(module, settings),
    }
}

/// Row sizing independent of breakpoint: ratio-locked modules size
/// automatically, everything else spans its fixed row count.
pub fn effective_row_sizing(module: &Module) -> RowSizing {
    if module.aspect_ratio.is_some() {
        RowSizing::Auto
    } else {
        RowSizing::Span(module.row)
    }
}

/// Bundles the full set of derived attributes for one module.
pub fn module_style<'a>(
    module: &'a Module,
    settings: &LayerSettings,
    view: View,
) -> ModuleStyle<'a> {
    let background = match module.kind {
        ModuleKind::Box if !module.transparent => Some(module.color.as_str()),
        _ => None,
    };
    let outline = (module.border_width > 0).then(|| Outline {
        width: module.border_width,
        color: module.border_color.as_str(),
    });
    let text = (module.kind == ModuleKind::Box).then(|| TextStyle {
        align: module.text_align.as_str(),
        vertical_align: module.vertical_align.as_str(),
        color: module.font_color.as_str(),
        size_px: module.font_size.unwrap_or(DEFAULT_FONT_SIZE_PX),
        weight: module.font_weight.as_str(),
        content: module.text_content.as_str(),
    });
    ModuleStyle {
        column_span: effective_column_span(module, settings, view),
        row: effective_row_sizing(module),
        background,
        outline,
        aspect_ratio: module.aspect_ratio.as_deref(),
        text,
        mobile_overflow_warning: view == View::Mobile
            && module.col > settings.target_columns
            && module.mobile_col.is_none(),
    }
}
