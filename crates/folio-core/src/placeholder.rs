//! Placeholder artwork for projects without an image.

/// Build the card image used when a project declares none: a 400x300 navy
/// panel with the title centered, as a self-contained `data:` URI.
///
/// An empty title is labeled `Project`.
pub fn placeholder_image(title: &str) -> String {
    let label = if title.is_empty() { "Project" } else { title };
    let text = urlencoding::encode(label);
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 400 300'%3E\
         %3Crect fill='%231a3a5c' width='400' height='300'/%3E\
         %3Ctext x='50%25' y='50%25' dominant-baseline='middle' text-anchor='middle' \
         fill='%23a8b2bf' font-size='20' font-family='Arial'%3E{text}%3C/text%3E%3C/svg%3E"
    )
}
