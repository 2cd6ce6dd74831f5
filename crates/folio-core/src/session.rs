//! Portfolio session state.

use tracing::warn;

use crate::demo::demo_projects;
use crate::loader::load_projects;
use crate::project::{sort_projects, Project};
use crate::source::ProjectSource;

/// The loaded portfolio: sole owner of the ordered project list.
///
/// The list is fixed once loading finishes; region selections and lookups
/// borrow from it.
pub struct PortfolioSession {
    projects: Vec<Project>,
}

impl PortfolioSession {
    /// Load the portfolio from `source`, substituting the demo dataset when
    /// the manifest cannot be fetched or parsed.
    pub async fn load(source: &dyn ProjectSource) -> Self {
        match load_projects(source).await {
            Ok(projects) => Self { projects },
            Err(error) => {
                warn!(error = %error, "Could not load the project manifest, using the demo dataset");
                Self {
                    projects: demo_projects(),
                }
            }
        }
    }

    /// Build a session from an already-assembled list. Display ordering is
    /// applied here so callers need not pre-sort.
    pub fn from_projects(mut projects: Vec<Project>) -> Self {
        sort_projects(&mut projects);
        Self { projects }
    }

    /// Every project, featured first then by title.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects marked featured, in display order.
    pub fn featured(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Look up a project by identifier.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::{Error, Result};

    fn project(title: &str, featured: bool) -> Project {
        let doc = format!("---\ntitle: {title}\nfeatured: {featured}\n---\nbody");
        Project::from_document(&format!("{}.md", title.to_lowercase()), &doc)
    }

    #[test]
    fn from_projects_applies_display_order() {
        let session = PortfolioSession::from_projects(vec![
            project("A", false),
            project("B", true),
            project("C", false),
        ]);
        let titles: Vec<&str> = session.projects().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[test]
    fn featured_selects_only_flagged_projects() {
        let session = PortfolioSession::from_projects(vec![
            project("A", false),
            project("B", true),
            project("C", false),
        ]);
        let featured: Vec<&str> = session.featured().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(featured, ["B"]);
    }

    #[test]
    fn find_locates_projects_by_id() {
        let session = PortfolioSession::from_projects(vec![project("Alpha", false)]);
        assert!(session.find("alpha").is_some());
        assert!(session.find("missing").is_none());
    }

    struct NoManifest;

    #[async_trait]
    impl ProjectSource for NoManifest {
        async fn fetch_manifest(&self) -> Result<Vec<String>> {
            Err(Error::ManifestRead {
                path: "projects.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no manifest"),
            })
        }

        async fn fetch_document(&self, _filename: &str) -> Result<String> {
            unreachable!("no documents should be fetched without a manifest")
        }
    }

    #[tokio::test]
    async fn manifest_failure_falls_back_to_the_demo_dataset() {
        let session = PortfolioSession::load(&NoManifest).await;
        assert_eq!(session.len(), 1);
        assert_eq!(session.projects()[0].id, "demo-project-1");
        assert!(session.projects()[0].featured);
    }
}
