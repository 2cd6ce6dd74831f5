//! Render command - convert one markdown document to HTML.
//!
//! Strips frontmatter, renders the body, and either prints the HTML
//! fragment or writes it to a file. With `--standalone` the fragment is
//! wrapped in the full page shell instead.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_markdown::parse_frontmatter;
use tracing::debug;

use crate::site;

/// Arguments for the render command.
#[derive(Debug)]
pub struct RenderArgs {
    /// Markdown file to render.
    pub input: PathBuf,
    /// Output file path. Prints to stdout when absent.
    pub output: Option<PathBuf>,
    /// Wrap the fragment in a complete HTML page.
    pub standalone: bool,
}

/// Execute the render command.
pub fn execute(args: RenderArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let (metadata, markdown) = parse_frontmatter(&content);
    let fragment = folio_markdown::render(&markdown);

    let html = if args.standalone {
        let title = document_title(&metadata, &args.input);
        site::page(&title, &fragment)
    } else {
        fragment
    };

    match &args.output {
        Some(path) => {
            debug!(path = %path.display(), "Writing rendered document");
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if args.standalone {
                let styles = path.with_file_name("styles.css");
                std::fs::write(&styles, site::SITE_CSS)
                    .with_context(|| format!("Failed to write {}", styles.display()))?;
            }
        }
        None => println!("{html}"),
    }

    Ok(())
}

/// Page title for standalone output: the `title` metadata, else the file
/// stem with hyphens as spaces.
fn document_title(metadata: &folio_markdown::Metadata, input: &Path) -> String {
    metadata
        .get_str("title")
        .filter(|t| !t.is_empty())
        .map_or_else(
            || {
                input
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map_or_else(|| "Document".to_string(), |s| s.replace('-', " "))
            },
            str::to_string,
        )
}
