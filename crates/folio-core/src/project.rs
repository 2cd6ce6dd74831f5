//! Project records derived from markdown documents.

use folio_markdown::{parse_frontmatter, Metadata};

use crate::placeholder::placeholder_image;

/// Card text for documents that declare no summary or description.
pub const DEFAULT_SUMMARY: &str = "Project description";

/// One portfolio entry, derived from a single markdown document.
///
/// All display fields are resolved at construction; empty metadata values
/// count as missing and fall back like absent keys.
#[derive(Debug, Clone)]
pub struct Project {
    /// Stable identifier: the filename with its `.md` extension stripped.
    pub id: String,
    /// Display title: `title` metadata, or the id with hyphens as spaces.
    pub title: String,
    /// Card text: `summary`, else `description`, else a fixed fallback.
    pub summary: String,
    /// Card image: `image` metadata, or a generated placeholder data URI.
    pub image: String,
    /// Featured entries sort first and populate the featured grid.
    pub featured: bool,
    /// Markdown body with the frontmatter removed.
    pub markdown: String,
    /// The full metadata mapping, for callers needing other keys.
    pub metadata: Metadata,
}

impl Project {
    /// Build a project from a manifest filename and raw document text.
    pub fn from_document(filename: &str, content: &str) -> Self {
        let (metadata, markdown) = parse_frontmatter(content);

        let id = filename.strip_suffix(".md").unwrap_or(filename).to_string();
        let title = metadata
            .get_str("title")
            .filter(|t| !t.is_empty())
            .map_or_else(|| id.replace('-', " "), str::to_string);
        let summary = metadata
            .get_str("summary")
            .filter(|s| !s.is_empty())
            .or_else(|| metadata.get_str("description").filter(|d| !d.is_empty()))
            .unwrap_or(DEFAULT_SUMMARY)
            .to_string();
        let image = metadata
            .get_str("image")
            .filter(|i| !i.is_empty())
            .map_or_else(|| placeholder_image(&title), str::to_string);
        let featured = metadata.get_bool("featured").unwrap_or(false);

        Self {
            id,
            title,
            summary,
            image,
            featured,
            markdown,
            metadata,
        }
    }
}

/// Order projects for display: featured entries first, then by title.
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.featured.cmp(&a.featured).then_with(|| a.title.cmp(&b.title)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_documents_get_every_default() {
        let project = Project::from_document("cool-rust-tool.md", "Just a body.");
        assert_eq!(project.id, "cool-rust-tool");
        assert_eq!(project.title, "cool rust tool");
        assert_eq!(project.summary, DEFAULT_SUMMARY);
        assert!(project.image.starts_with("data:image/svg+xml,"));
        assert!(!project.featured);
        assert_eq!(project.markdown, "Just a body.");
        assert!(project.metadata.is_empty());
    }

    #[test]
    fn metadata_fields_override_the_defaults() {
        let doc = "---\ntitle: Ray Tracer\nsummary: Photons, slowly\nimage: images/rays.png\nfeatured: true\n---\n# Ray Tracer\n";
        let project = Project::from_document("ray-tracer.md", doc);
        assert_eq!(project.id, "ray-tracer");
        assert_eq!(project.title, "Ray Tracer");
        assert_eq!(project.summary, "Photons, slowly");
        assert_eq!(project.image, "images/rays.png");
        assert!(project.featured);
        assert_eq!(project.markdown, "# Ray Tracer\n");
    }

    #[test]
    fn description_backs_up_a_missing_summary() {
        let doc = "---\ndescription: The longer field\n---\nbody";
        let project = Project::from_document("x.md", doc);
        assert_eq!(project.summary, "The longer field");
    }

    #[test]
    fn empty_summary_falls_through_to_description() {
        let doc = "---\nsummary:\ndescription: Backup text\n---\nbody";
        let project = Project::from_document("x.md", doc);
        assert_eq!(project.summary, "Backup text");
    }

    #[test]
    fn placeholder_uses_the_derived_title() {
        let project = Project::from_document("loom-sim.md", "body");
        assert!(project.image.contains("loom%20sim"));
    }

    #[test]
    fn extension_is_stripped_only_from_the_end() {
        let project = Project::from_document("notes.md.md", "body");
        assert_eq!(project.id, "notes.md");
    }

    #[test]
    fn featured_first_then_title_order() {
        let mut projects = vec![
            Project::from_document("a.md", "---\ntitle: A\n---\n"),
            Project::from_document("b.md", "---\ntitle: B\nfeatured: true\n---\n"),
            Project::from_document("c.md", "---\ntitle: C\n---\n"),
        ];
        sort_projects(&mut projects);
        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }
}
