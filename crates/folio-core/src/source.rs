//! Where the manifest and project documents come from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Manifest filename listing the portfolio's markdown documents.
pub const MANIFEST_FILE: &str = "projects.json";

/// Source of the manifest and the documents it names.
///
/// The loader needs only these two reads, so tests can swap in an in-memory
/// implementation and make individual fetches fail.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Fetch and parse the manifest: an ordered JSON array of filenames.
    async fn fetch_manifest(&self) -> Result<Vec<String>>;

    /// Fetch one document's raw text by its manifest filename.
    async fn fetch_document(&self, filename: &str) -> Result<String>;
}

/// Reads a portfolio from a directory holding `projects.json` and the
/// markdown documents it lists.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ProjectSource for DirectorySource {
    async fn fetch_manifest(&self) -> Result<Vec<String>> {
        let path = self.root.join(MANIFEST_FILE);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| Error::ManifestRead {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&text).map_err(|source| Error::ManifestParse { path, source })
    }

    async fn fetch_document(&self, filename: &str) -> Result<String> {
        tokio::fs::read_to_string(self.root.join(filename))
            .await
            .map_err(|source| Error::DocumentRead {
                name: filename.to_string(),
                source,
            })
    }
}
