//! HTML assembly for the generated site.
//!
//! This module is the display surface: it materializes [`Project`] records
//! into named regions (the featured and all-projects card grids, the
//! navigation dropdown, the detail content area) and wraps them in the page
//! shell shared by every generated file. All pages land flat in the output
//! directory, so asset references like `images/…` resolve the same way from
//! every page.

use folio_core::{PortfolioSession, Project, SiteConfig};
use folio_markdown::escape_html;

/// Leading projects shown in the featured grid when nothing is flagged.
const FEATURED_FALLBACK_COUNT: usize = 3;

/// Site stylesheet, embedded at compile time.
pub const SITE_CSS: &str = include_str!("../resources/styles.css");

/// A named display region of the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Card grid of featured projects on the index page.
    Featured,
    /// Card grid of every project on the index page.
    AllProjects,
    /// Link list in the navigation bar.
    Dropdown,
    /// Rendered markdown body on a detail page.
    ProjectContent,
}

impl Region {
    /// Element id carried by the region's container in the markup.
    pub fn id(&self) -> &'static str {
        match self {
            Region::Featured => "featuredProjects",
            Region::AllProjects => "allProjects",
            Region::Dropdown => "projectsDropdown",
            Region::ProjectContent => "projectContent",
        }
    }
}

/// Featured grid contents: flagged projects, or the first few overall when
/// none are flagged.
pub fn featured_selection(session: &PortfolioSession) -> Vec<&Project> {
    let featured = session.featured();
    if featured.is_empty() {
        session
            .projects()
            .iter()
            .take(FEATURED_FALLBACK_COUNT)
            .collect()
    } else {
        featured
    }
}

/// One card-grid region filled with the given projects.
pub fn project_grid(region: Region, projects: &[&Project]) -> String {
    let mut grid = format!("<div class=\"project-grid\" id=\"{}\">\n", region.id());
    for project in projects {
        grid.push_str(&project_card(project));
    }
    grid.push_str("</div>\n");
    grid
}

fn project_card(project: &Project) -> String {
    format!(
        "  <a class=\"project-card\" href=\"{id}.html\">
    <div class=\"project-image\" style=\"background-image: url('{image}')\"></div>
    <div class=\"project-content\">
      <h3 class=\"project-title\">{title}</h3>
      <p class=\"project-summary\">{summary}</p>
    </div>
  </a>
",
        id = escape_html(&project.id),
        image = escape_html(&css_url(&project.image)),
        title = escape_html(&project.title),
        summary = escape_html(&project.summary),
    )
}

/// Make a URL safe inside a single-quoted CSS `url('…')` wrapper.
///
/// The placeholder data URIs carry raw apostrophes around their SVG
/// attributes; percent-encoding them keeps the URI equivalent while leaving
/// nothing for the quote wrapper to trip over.
fn css_url(url: &str) -> String {
    url.replace('\'', "%27")
}

/// The detail content region: one project's rendered markdown.
pub fn project_content(project: &Project) -> String {
    format!(
        "<div id=\"{}\">\n{}\n</div>\n",
        Region::ProjectContent.id(),
        folio_markdown::render(&project.markdown)
    )
}

fn navbar(config: &SiteConfig, session: &PortfolioSession) -> String {
    let mut items = String::new();
    for project in session.projects() {
        items.push_str(&format!(
            "        <a class=\"dropdown-item\" href=\"{}.html\">{}</a>\n",
            escape_html(&project.id),
            escape_html(&project.title)
        ));
    }
    format!(
        "<nav class=\"navbar\">
  <a class=\"nav-brand\" href=\"index.html\">{brand}</a>
  <div class=\"nav-links\">
    <a href=\"index.html\">Home</a>
    <div class=\"dropdown\">
      <span class=\"dropdown-toggle\">Projects</span>
      <div class=\"dropdown-content\" id=\"{dropdown_id}\">
{items}      </div>
    </div>
  </div>
</nav>
",
        brand = escape_html(&config.brand),
        dropdown_id = Region::Dropdown.id(),
        items = items,
    )
}

/// Wrap a body in the HTML5 shell shared by every generated page.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"UTF-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
<title>{title}</title>
<link rel=\"stylesheet\" href=\"styles.css\">
</head>
<body>
{body}</body>
</html>
",
        title = escape_html(title),
        body = body,
    )
}

/// The index page: masthead, featured grid, all-projects grid.
pub fn index_page(config: &SiteConfig, session: &PortfolioSession) -> String {
    let featured = featured_selection(session);
    let all: Vec<&Project> = session.projects().iter().collect();

    let mut body = navbar(config, session);
    body.push_str("<main>\n");
    body.push_str(&format!(
        "<header class=\"masthead\"><h1>{}</h1></header>\n",
        escape_html(&config.title)
    ));
    body.push_str("<section class=\"featured-section\">\n<h2>Featured Projects</h2>\n");
    body.push_str(&project_grid(Region::Featured, &featured));
    body.push_str("</section>\n<section class=\"projects-section\">\n<h2>All Projects</h2>\n");
    body.push_str(&project_grid(Region::AllProjects, &all));
    body.push_str("</section>\n</main>\n");
    page(&config.title, &body)
}

/// A full detail page for one project.
pub fn detail_page(config: &SiteConfig, session: &PortfolioSession, project: &Project) -> String {
    let mut body = navbar(config, session);
    body.push_str("<main class=\"detail-main\">\n");
    body.push_str(&project_content(project));
    body.push_str("</main>\n");
    page(&project.title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::placeholder_image;

    fn project(title: &str, featured: bool) -> Project {
        let doc = format!(
            "---\ntitle: {title}\nsummary: About {title}\nfeatured: {featured}\n---\n# {title}\n\nBody of {title}."
        );
        Project::from_document(&format!("{}.md", title.to_lowercase()), &doc)
    }

    fn session(projects: Vec<Project>) -> PortfolioSession {
        PortfolioSession::from_projects(projects)
    }

    #[test]
    fn cards_link_to_detail_pages_and_escape_text() {
        let p = Project::from_document("evil.md", "---\ntitle: <script>alert()</script>\n---\n");
        let card = project_card(&p);
        assert!(card.contains("href=\"evil.html\""));
        assert!(card.contains("&lt;script&gt;alert()&lt;/script&gt;"));
        assert!(!card.contains("<script>"));
    }

    #[test]
    fn placeholder_images_survive_the_style_attribute() {
        let uri = placeholder_image("Demo");
        let card = project_card(&Project {
            image: uri,
            ..project("Demo", false)
        });
        assert!(card.contains("url('data:image/svg+xml,"));
        // Entity-encoded apostrophes decode back to ' before the CSS parser
        // sees the url(), so they must be percent-encoded instead.
        assert!(card.contains("xmlns=%27"));
        assert!(!card.contains("&#39;"));
    }

    #[test]
    fn featured_selection_prefers_flagged_projects() {
        let s = session(vec![project("A", false), project("B", true)]);
        let picked: Vec<&str> = featured_selection(&s).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(picked, ["B"]);
    }

    #[test]
    fn featured_selection_falls_back_to_the_first_three() {
        let s = session(vec![
            project("A", false),
            project("B", false),
            project("C", false),
            project("D", false),
        ]);
        let picked: Vec<&str> = featured_selection(&s).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(picked, ["A", "B", "C"]);
    }

    #[test]
    fn index_page_carries_both_grid_regions_and_the_dropdown() {
        let s = session(vec![project("A", false), project("B", true)]);
        let html = index_page(&SiteConfig::default(), &s);
        assert!(html.contains("id=\"featuredProjects\""));
        assert!(html.contains("id=\"allProjects\""));
        assert!(html.contains("id=\"projectsDropdown\""));
        assert!(html.contains("<title>My Project Portfolio</title>"));
        assert!(html.contains("dropdown-item"));
    }

    #[test]
    fn detail_page_embeds_the_rendered_markdown() {
        let s = session(vec![project("Alpha", false)]);
        let html = detail_page(&SiteConfig::default(), &s, s.find("alpha").unwrap());
        assert!(html.contains("id=\"projectContent\""));
        assert!(html.contains("<h1>Alpha</h1>"));
        assert!(html.contains("<p>Body of Alpha.</p>"));
        assert!(html.contains("<title>Alpha</title>"));
    }
}
