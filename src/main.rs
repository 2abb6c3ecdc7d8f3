//! Command-line entrypoint: export layout documents to static HTML/CSS and
//! emit the bundled sample document.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gridweave::{export_document, sample, Document, Editor, ExportOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gridweave", about = "Layered CSS-grid layout exporter", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to index.html + style.css
    Export {
        /// Document JSON file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Directory the pair of files is written into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Page wrapper width in pixels
        #[arg(long, default_value_t = ExportOptions::default().max_width_px)]
        max_width: u32,

        /// Viewport width at which the mobile layout applies
        #[arg(long, default_value_t = ExportOptions::default().mobile_breakpoint_px)]
        breakpoint: u32,
    },
    /// Print the bundled sample document as JSON
    Sample {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a document's structural invariants without exporting
    Validate {
        /// Document JSON file; reads stdin when omitted
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridweave=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Commands::Export {
            input,
            out_dir,
            max_width,
            breakpoint,
        } => {
            let editor = load_editor(input.as_deref())?;
            let options = ExportOptions {
                max_width_px: max_width,
                mobile_breakpoint_px: breakpoint,
            };
            let bundle = export_document(editor.document(), &options);
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("creating {}", out_dir.display()))?;
            let html_path = out_dir.join("index.html");
            let css_path = out_dir.join("style.css");
            fs::write(&html_path, &bundle.html)
                .with_context(|| format!("writing {}", html_path.display()))?;
            fs::write(&css_path, &bundle.css)
                .with_context(|| format!("writing {}", css_path.display()))?;
            tracing::info!(
                html = %html_path.display(),
                css = %css_path.display(),
                "exported layout"
            );
        }
        Commands::Sample { output } => {
            let document = sample::sample_document()?;
            let json = serde_json::to_string_pretty(&document)?;
            match output {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{}", json),
            }
        }
        Commands::Validate { input } => {
            let editor = load_editor(input.as_deref())?;
            println!(
                "ok: {} layer(s), {} module(s)",
                editor.document().layers.len(),
                editor
                    .document()
                    .layers
                    .iter()
                    .map(|layer| layer.modules.len())
                    .sum::<usize>()
            );
        }
    }

    Ok(())
}

/// Reads a document from a file or stdin and adopts it into an editor,
/// which validates it on the way in.
fn load_editor(input: Option<&std::path::Path>) -> anyhow::Result<Editor> {
    let raw = match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading document from stdin")?;
            buffer
        }
    };
    let document: Document = serde_json::from_str(&raw).context("parsing document JSON")?;
    Editor::from_document(document).context("adopting document")
}
