//! Built-in demonstration dataset.
//!
//! Substituted when no manifest can be loaded, so the portfolio is never
//! empty and the instructions for wiring up real content stay visible.

use folio_markdown::Metadata;

use crate::placeholder::placeholder_image;
use crate::project::Project;

const DEMO_MARKDOWN: &str = r#"# Demo Machine Learning Project

## Overview
This is a demonstration project. To use your own projects:

1. Create a `projects` folder in your website directory
2. Add your markdown files (e.g., `my-project.md`)
3. Create a `projects.json` file listing all your markdown files
4. Add frontmatter to your markdown files

## Frontmatter Format
```yaml
---
title: My Project Title
summary: A brief description of the project
image: images/project-image.jpg
featured: true
---
```

## Markdown Content
Write your project documentation here using standard markdown syntax!"#;

/// The dataset shown when the manifest is missing or unreadable.
pub fn demo_projects() -> Vec<Project> {
    vec![Project {
        id: "demo-project-1".to_string(),
        title: "Demo Machine Learning Project".to_string(),
        summary: "This is a demo project. Add your own .md files to the projects folder!"
            .to_string(),
        image: placeholder_image("ML Project"),
        featured: true,
        markdown: DEMO_MARKDOWN.to_string(),
        metadata: Metadata::default(),
    }]
}
