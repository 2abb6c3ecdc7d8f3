use super::ExportOptions;
use crate::document::Document;
use crate::geometry::mobile_span;
use crate::models::{Layer, Module, ModuleKind};
use crate::render::{effective_row_sizing, RowSizing, DEFAULT_FONT_SIZE_PX};
use std::fmt::Write as _;

/// Stylesheet for the visible layers: base rules, a desktop rule set per
/// layer and module, and one `@media` block re-flowing everything onto the
/// mobile grid.
pub fn generate_css(document: &Document, options: &ExportOptions) -> String {
    let sorted = document.sorted_layers();
    let visible: Vec<&Layer> = sorted
        .iter()
        .copied()
        .filter(|layer| layer.is_visible)
        .collect();

    // The page padding mirrors the bottom layer's desktop gap.
    let body_padding = sorted
        .first()
        .map(|layer| layer.settings.desktop_gap)
        .unwrap_or(10);

    let mut css = format!(
        "body {{\n\
         \x20 margin: 0;\n\
         \x20 background: whitesmoke;\n\
         \x20 font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif;\n\
         \x20 padding: {body_padding}px;\n\
         }}\n\
         .grid-viewport-wrapper {{\n\
         \x20 position: relative;\n\
         \x20 max-width: {max_width}px;\n\
         \x20 margin: 0 auto;\n\
         }}\n\
         .grid-container {{\n\
         \x20 display: grid;\n\
         \x20 position: absolute;\n\
         \x20 top: 0;\n\
         \x20 left: 0;\n\
         \x20 width: 100%;\n\
         \x20 pointer-events: none;\n\
         }}\n\
         .grid-container .module {{\n\
         \x20 pointer-events: auto;\n\
         }}\n\
         \n\
         .module {{\n\
         \x20 min-height: 60px;\n\
         }}\n\
         .module.type-image {{ background: #e0e0e0; }}\n\
         .module.type-image img {{ width: 100%; height: 100%; object-fit: cover; display: block; }}\n\
         \n\
         .module.type-box {{\n\
         \x20 display: flex;\n\
         \x20 padding: 10px;\n\
         }}\n\
         .module.type-box p {{\n\
         \x20 font-size: {default_font}px;\n\
         \x20 color: #000;\n\
         \x20 width: 100%;\n\
         \x20 margin: 0;\n\
         \x20 white-space: pre-wrap;\n\
         \x20 word-break: break-word;\n\
         }}\n",
        body_padding = body_padding,
        max_width = options.max_width_px,
        default_font = DEFAULT_FONT_SIZE_PX,
    );

    for layer in &visible {
        let settings = &layer.settings;
        let _ = write!(
            css,
            "\n/* --- Layer: {name} (Priority {priority}) --- */\n\
             #grid-layer-{id} {{\n\
             \x20 grid-template-columns: repeat({columns}, 1fr);\n\
             \x20 gap: {gap}px;\n\
             \x20 mix-blend-mode: {blend};\n\
             \x20 isolation: isolate;\n\
             }}\n",
            name = layer.name,
            priority = layer.priority,
            id = layer.id,
            columns = settings.desktop_columns,
            gap = settings.desktop_gap,
            blend = settings.blend_mode,
        );
        for module in &layer.modules {
            write_desktop_module_rule(&mut css, module, layer);
        }
    }

    let _ = write!(
        css,
        "\n/* --- Mobile --- */\n\
         @media (max-width: {breakpoint}px) {{\n\
         \x20 .grid-container {{\n\
         \x20   position: relative;\n\
         \x20   width: 100%;\n\
         \x20 }}\n",
        breakpoint = options.mobile_breakpoint_px,
    );
    for layer in &visible {
        let settings = &layer.settings;
        let _ = write!(
            css,
            "\n  /* --- Layer: {name} (Mobile) --- */\n\
             \x20 #grid-layer-{id} {{\n\
             \x20   grid-template-columns: repeat({columns}, 1fr);\n\
             \x20   gap: {gap}px;\n\
             \x20 }}\n",
            name = layer.name,
            id = layer.id,
            columns = settings.target_columns,
            gap = settings.mobile_gap,
        );
        for (position, id) in layer.mobile_order.iter().enumerate() {
            let Some(module) = layer.module(*id) else {
                continue;
            };
            write_mobile_module_rule(&mut css, module, layer, position);
        }
    }
    css.push_str("\n}\n");
    css
}

fn row_value(module: &Module) -> String {
    match effective_row_sizing(module) {
        RowSizing::Auto => "auto".to_string(),
        RowSizing::Span(rows) => format!("span {}", rows),
    }
}

fn write_desktop_module_rule(css: &mut String, module: &Module, layer: &Layer) {
    let settings = &layer.settings;
    let col = module.col.min(settings.desktop_columns).max(1);

    let _ = write!(
        css,
        ".module-{id} {{\n\
         \x20 grid-column: span {col};\n\
         \x20 grid-row: {row};\n",
        id = module.id,
        col = col,
        row = row_value(module),
    );
    if module.kind == ModuleKind::Box {
        let background = if module.transparent {
            "transparent"
        } else {
            module.color.as_str()
        };
        let _ = writeln!(css, "  background: {};", background);
    }
    if module.border_width > 0 {
        let _ = writeln!(
            css,
            "  outline: {width}px solid {color};\n\
             \x20 outline-offset: -{width}px;",
            width = module.border_width,
            color = module.border_color,
        );
    }
    if let Some(ratio) = module.aspect_ratio.as_deref() {
        let _ = writeln!(css, "  aspect-ratio: {};", ratio);
    }
    if module.kind == ModuleKind::Box {
        let _ = writeln!(
            css,
            "  display: flex;\n\
             \x20 align-items: {};\n\
             \x20 padding: 10px;",
            module.vertical_align
        );
    }
    css.push_str("}\n");

    if module.kind == ModuleKind::Box {
        let _ = write!(
            css,
            ".module-{id} p {{\n\
             \x20 text-align: {align};\n\
             \x20 color: {color};\n\
             \x20 font-size: {size}px;\n\
             \x20 font-weight: {weight};\n\
             }}\n",
            id = module.id,
            align = module.text_align,
            color = module.font_color,
            size = module.font_size.unwrap_or(DEFAULT_FONT_SIZE_PX),
            weight = module.font_weight,
        );
    }
}

fn write_mobile_module_rule(css: &mut String, module: &Module, layer: &Layer, position: usize) {
    let settings = &layer.settings;
    let span = mobile_span(module, settings);
    let provenance = if module.mobile_col.is_some() {
        "/* manual */".to_string()
    } else {
        format!(
            "/* auto: min({}, {}) */",
            module.col, settings.target_columns
        )
    };
    let _ = write!(
        css,
        "  .module-{id} {{\n\
         \x20   grid-column: span {span}; {provenance}\n\
         \x20   grid-row: {row};\n\
         \x20   order: {position};\n",
        id = module.id,
        span = span,
        provenance = provenance,
        row = row_value(module),
        position = position,
    );
    if let Some(ratio) = module.aspect_ratio.as_deref() {
        let _ = writeln!(css, "    aspect-ratio: {};", ratio);
    }
    css.push_str("  }\n");
}
