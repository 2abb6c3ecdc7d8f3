//! Deterministic HTML/CSS export of the document model.
//!
//! Pure text derivation: given an unchanged document, two export calls
//! produce byte-identical output. Hidden layers are skipped; everything else
//! follows the same derivation rules the canvas renderer uses.

mod css;
mod html;

pub use css::generate_css;
pub use html::generate_html;

use crate::constants::{DEFAULT_MAX_WIDTH_PX, DEFAULT_MOBILE_BREAKPOINT_PX};
use crate::document::Document;

/// Tunable output parameters, independent of the document itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// `max-width` of the exported page wrapper.
    pub max_width_px: u32,
    /// Viewport width at which the mobile block applies.
    pub mobile_breakpoint_px: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            max_width_px: DEFAULT_MAX_WIDTH_PX,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
        }
    }
}

/// The two exported text blobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportBundle {
    pub html: String,
    pub css: String,
}

/// Serializes the visible layers, in stacking order, into markup and a
/// stylesheet reproducing the layout at both breakpoints.
pub fn export_document(document: &Document, options: &ExportOptions) -> ExportBundle {
    ExportBundle {
        html: generate_html(document),
        css: generate_css(document, options),
    }
}

/// Escapes text for embedding in markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
