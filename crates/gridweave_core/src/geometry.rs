//! Pure numeric helpers for span math.

use crate::models::{LayerSettings, Module};

/// Bounds `value` to `[min, max]`. Total function, no failure mode.
pub fn clamp<T: Ord>(value: T, min: T, max: T) -> T {
    value.min(max).max(min)
}

/// Effective mobile column span for a module.
///
/// An explicit `mobile_col` override wins, clamped to the mobile grid.
/// Otherwise the span derives automatically as `max(1, min(col,
/// target_columns))`: a module narrower than the mobile grid keeps its
/// native width, a wider one collapses to full mobile width.
pub fn mobile_span(module: &Module, settings: &LayerSettings) -> u32 {
    if let Some(explicit) = module.mobile_col {
        return clamp(explicit, 1, settings.target_columns);
    }
    module.col.min(settings.target_columns).max(1)
}

/// Proportional alternative to [`mobile_span`]'s automatic policy:
/// `ceil((col / desktop_columns) * target_columns)`, clamped to the mobile
/// grid. Not wired into derivation; kept as a selectable policy for
/// front-ends that prefer scaled reflow over the min-based clamp.
pub fn proportional_mobile_span(col: u32, desktop_columns: u32, target_columns: u32) -> u32 {
    if desktop_columns == 0 {
        return 1;
    }
    let scaled = (col * target_columns).div_ceil(desktop_columns);
    clamp(scaled, 1, target_columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModuleSpec;

    fn module_with_col(col: u32, mobile_col: Option<u32>) -> Module {
        let settings = LayerSettings::default();
        let mut module = Module::new(
            1,
            ModuleSpec {
                col,
                ..ModuleSpec::default()
            },
            &settings,
        );
        module.col = col;
        module.mobile_col = mobile_col;
        module
    }

    #[test]
    fn clamp_bounds_both_ends() {
        assert_eq!(clamp(5, 1, 12), 5);
        assert_eq!(clamp(0, 1, 12), 1);
        assert_eq!(clamp(40, 1, 12), 12);
    }

    #[test]
    fn auto_span_collapses_wide_modules() {
        let settings = LayerSettings::default(); // 6 desktop, 2 target
        assert_eq!(mobile_span(&module_with_col(4, None), &settings), 2);
        assert_eq!(mobile_span(&module_with_col(1, None), &settings), 1);
    }

    #[test]
    fn explicit_override_is_clamped_to_target() {
        let settings = LayerSettings::default();
        assert_eq!(mobile_span(&module_with_col(4, Some(1)), &settings), 1);
        assert_eq!(mobile_span(&module_with_col(4, Some(9)), &settings), 2);
    }

    #[test]
    fn proportional_policy_diverges_from_min_policy() {
        // col=4 of 6 desktop columns onto a 3-column mobile grid:
        // min policy gives 3, proportional gives 2.
        assert_eq!(proportional_mobile_span(4, 6, 3), 2);
        let mut settings = LayerSettings::default();
        settings.target_columns = 3;
        assert_eq!(mobile_span(&module_with_col(4, None), &settings), 3);
    }

    #[test]
    fn proportional_policy_never_returns_zero() {
        assert_eq!(proportional_mobile_span(1, 12, 2), 1);
        assert_eq!(proportional_mobile_span(3, 0, 2), 1);
    }
}
