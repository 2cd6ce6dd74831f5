//! Build command - generate the static portfolio site.
//!
//! Loads every project listed in the input directory's manifest, renders
//! the index and one detail page per project, and copies the stylesheet
//! and image assets into the output directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use folio_core::{DirectorySource, PortfolioSession, SiteConfig};

use crate::site;

/// Arguments for the build command.
#[derive(Debug)]
pub struct BuildArgs {
    /// Site root holding `projects/` and optional `folio.json`.
    pub input: Option<PathBuf>,
    /// Directory the generated site is written to.
    pub output: PathBuf,
    /// Suppress console output.
    pub quiet: bool,
}

/// Execute the build command.
pub fn execute(args: BuildArgs) -> Result<()> {
    // Project loading fetches the manifest and every document through the
    // async source trait, so the command owns a runtime and blocks on it.
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_build(args))
}

async fn run_build(args: BuildArgs) -> Result<()> {
    let input = match args.input {
        Some(input) => input,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    if !input.is_dir() {
        bail!("Input path is not a directory: {}", input.display());
    }

    let config = SiteConfig::load_or_default(&input)?;
    let source = DirectorySource::new(input.join("projects"));
    let session = PortfolioSession::load(&source).await;

    info!(
        count = session.len(),
        input = %input.display(),
        "Loaded project collection"
    );

    std::fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output.display()
        )
    })?;

    write_page(
        &args.output.join("index.html"),
        &site::index_page(&config, &session),
    )?;
    for project in session.projects() {
        write_page(
            &args.output.join(format!("{}.html", project.id)),
            &site::detail_page(&config, &session, project),
        )?;
    }
    write_page(&args.output.join("styles.css"), site::SITE_CSS)?;

    let images = copy_images(&input.join("images"), &args.output.join("images"))?;
    if images > 0 {
        info!(count = images, "Copied image assets");
    }

    if !args.quiet {
        println!(
            "Rendered {} project page(s) to {}",
            session.len(),
            args.output.display()
        );
    }

    Ok(())
}

fn write_page(path: &Path, contents: &str) -> Result<()> {
    debug!(path = %path.display(), "Writing page");
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Mirror the site's image directory into the output, returning the number
/// of files copied. A missing source directory is not an error.
fn copy_images(from: &Path, to: &Path) -> Result<usize> {
    if !from.is_dir() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in walkdir::WalkDir::new(from) {
        let entry = entry.with_context(|| format!("Failed to walk {}", from.display()))?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .with_context(|| format!("Failed to relativize {}", entry.path().display()))?;
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else {
            std::fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}
