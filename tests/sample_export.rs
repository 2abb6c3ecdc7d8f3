//! Integration tests for the sample document and the export surface the CLI
//! sits on.

use gridweave::{export_document, sample, Editor, ExportOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn sample_document_is_valid_and_reloadable() {
    let document = sample::sample_document().expect("sample builds");
    assert_eq!(document.layers.len(), 2);
    assert!(document.validate().is_ok());

    let json = serde_json::to_string(&document).expect("serialize");
    let reloaded = serde_json::from_str(&json).expect("deserialize");
    let editor = Editor::from_document(reloaded).expect("adopt");
    assert_eq!(editor.document(), &document);
}

#[test]
fn sample_export_is_deterministic_across_rebuilds() {
    let first = sample::sample_document().expect("sample builds");
    let second = sample::sample_document().expect("sample builds");
    let options = ExportOptions::default();
    assert_eq!(
        export_document(&first, &options),
        export_document(&second, &options)
    );
}

#[test]
fn exported_pair_round_trips_through_the_filesystem() {
    let document = sample::sample_document().expect("sample builds");
    let bundle = export_document(&document, &ExportOptions::default());

    let dir = TempDir::new().expect("temp dir");
    let html_path = dir.path().join("index.html");
    let css_path = dir.path().join("style.css");
    fs::write(&html_path, &bundle.html).expect("write html");
    fs::write(&css_path, &bundle.css).expect("write css");

    let html = fs::read_to_string(&html_path).expect("read html");
    let css = fs::read_to_string(&css_path).expect("read css");
    assert_eq!(html, bundle.html);
    assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
    assert!(css.contains("/* --- Layer: Content (Priority 0) --- */"));
    assert!(css.contains("mix-blend-mode: multiply;"));
}

#[test]
fn sample_layers_carry_the_expected_structure() {
    let document = sample::sample_document().expect("sample builds");
    let content = &document.layers[0];
    assert_eq!(content.name, "Content");
    // Three split pieces plus the image banner.
    assert_eq!(content.modules.len(), 4);
    assert!(content.modules[..3]
        .iter()
        .all(|module| module.group_id.is_some()));
    assert_eq!(content.modules[3].aspect_ratio.as_deref(), Some("4 / 2"));

    let tint = &document.layers[1];
    assert_eq!(tint.settings.blend_mode, "multiply");
    assert!(tint.priority > content.priority);
}
