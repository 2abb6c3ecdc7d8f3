use super::escape_html;
use crate::constants::PLACEHOLDER_IMAGE_URL;
use crate::document::Document;
use crate::models::ModuleKind;
use std::fmt::Write as _;

/// Structural markup for the visible layers in stacking order. Modules are
/// emitted in desktop order; the stylesheet's mobile block re-orders them
/// with the `order` property.
pub fn generate_html(document: &Document) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"UTF-8\">\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20 <link rel=\"stylesheet\" href=\"style.css\">\n\
         </head>\n\
         <body>\n\
         \x20 <div class=\"grid-viewport-wrapper\">\n",
    );

    for layer in document.sorted_layers() {
        if !layer.is_visible {
            continue;
        }
        let _ = writeln!(
            html,
            "    <div class=\"grid-container\" id=\"grid-layer-{}\">",
            layer.id
        );
        for id in &layer.desktop_order {
            let Some(module) = layer.module(*id) else {
                continue;
            };
            let group_class = module
                .group_id
                .as_deref()
                .map(|group| format!(" group-{}", group))
                .unwrap_or_default();
            let _ = writeln!(
                html,
                "      <div class=\"module module-{} type-{}{}\">",
                module.id,
                module.kind.as_str(),
                group_class
            );
            match module.kind {
                ModuleKind::Image => {
                    let _ = writeln!(
                        html,
                        "        <img src=\"{}\" alt=\"placeholder\">",
                        PLACEHOLDER_IMAGE_URL
                    );
                }
                ModuleKind::Box => {
                    let _ = writeln!(html, "        <p>{}</p>", escape_html(&module.text_content));
                }
            }
            html.push_str("      </div>\n");
        }
        html.push_str("    </div>\n");
    }

    html.push_str("  </div>\n</body>\n</html>\n");
    html
}
