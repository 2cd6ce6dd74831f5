//! Concurrent loading of portfolio documents.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::error::Result;
use crate::project::{sort_projects, Project};
use crate::source::ProjectSource;

/// Load every document named by the source's manifest.
///
/// Document fetches run concurrently and are awaited as one batch; a failed
/// fetch drops that entry without disturbing its siblings. Only a manifest
/// failure aborts the load. The returned list is ordered featured-first,
/// then by title.
pub async fn load_projects(source: &dyn ProjectSource) -> Result<Vec<Project>> {
    let filenames = source.fetch_manifest().await?;
    debug!(count = filenames.len(), "Manifest loaded");

    let fetches = filenames.iter().map(|filename| async move {
        match source.fetch_document(filename).await {
            Ok(content) => Some(Project::from_document(filename, &content)),
            Err(error) => {
                warn!(file = %filename, error = %error, "Skipping unreadable project document");
                None
            }
        }
    });

    let mut projects: Vec<Project> = join_all(fetches).await.into_iter().flatten().collect();
    sort_projects(&mut projects);
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::error::Error;

    struct MemorySource {
        manifest: Vec<String>,
        documents: HashMap<String, String>,
    }

    #[async_trait]
    impl ProjectSource for MemorySource {
        async fn fetch_manifest(&self) -> Result<Vec<String>> {
            Ok(self.manifest.clone())
        }

        async fn fetch_document(&self, filename: &str) -> Result<String> {
            self.documents
                .get(filename)
                .cloned()
                .ok_or_else(|| Error::DocumentRead {
                    name: filename.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                })
        }
    }

    fn source_with(entries: &[(&str, &str)], manifest: &[&str]) -> MemorySource {
        MemorySource {
            manifest: manifest.iter().map(|m| (*m).to_string()).collect(),
            documents: entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    #[tokio::test]
    async fn one_failed_fetch_leaves_one_usable_entry() {
        let source = source_with(
            &[("alpha.md", "---\ntitle: Alpha\n---\nBody")],
            &["alpha.md", "broken.md"],
        );
        let projects = load_projects(&source).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Alpha");
        assert_eq!(projects[0].markdown, "Body");
    }

    #[tokio::test]
    async fn loaded_projects_come_back_in_display_order() {
        let source = source_with(
            &[
                ("a.md", "---\ntitle: A\n---\n"),
                ("b.md", "---\ntitle: B\nfeatured: true\n---\n"),
                ("c.md", "---\ntitle: C\n---\n"),
            ],
            &["a.md", "b.md", "c.md"],
        );
        let projects = load_projects(&source).await.unwrap();
        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[tokio::test]
    async fn empty_manifest_loads_an_empty_portfolio() {
        let source = source_with(&[], &[]);
        let projects = load_projects(&source).await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn documents_without_frontmatter_still_load_with_defaults() {
        let source = source_with(&[("raw-notes.md", "# Notes\n\nPlain body.")], &["raw-notes.md"]);
        let projects = load_projects(&source).await.unwrap();
        assert_eq!(projects[0].id, "raw-notes");
        assert_eq!(projects[0].title, "raw notes");
        assert_eq!(projects[0].summary, crate::DEFAULT_SUMMARY);
    }
}
