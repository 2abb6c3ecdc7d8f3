//! Shared constants used across gridweave crates.

/// Maximum retained undo/redo snapshots.
pub const MAX_HISTORY: usize = 100;

/// Grid column count bounds, desktop and mobile.
pub const MIN_COLUMNS: u32 = 1;
/// Upper bound for both desktop and mobile column counts.
pub const MAX_COLUMNS: u32 = 12;

/// Grid gap bounds in pixels.
pub const MAX_GAP_PX: u32 = 50;

/// Upper bound on a module's row span.
pub const MAX_ROW_SPAN: u32 = 99;

/// Upper bound on a module's outline width in pixels.
pub const MAX_BORDER_WIDTH_PX: u32 = 20;

/// Font size bounds for box text, in pixels.
pub const MIN_FONT_SIZE_PX: u32 = 8;
/// Upper bound for box text font size.
pub const MAX_FONT_SIZE_PX: u32 = 100;

/// Default wrapper width for exported pages.
pub const DEFAULT_MAX_WIDTH_PX: u32 = 1400;
/// Default viewport width at which the exported mobile block applies.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;

/// Placeholder source for exported image modules.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";
