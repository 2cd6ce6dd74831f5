//! Markdown to HTML conversion.
//!
//! The renderer applies an ordered sequence of regex substitution passes to
//! the whole document. The order is load-bearing: fenced code is stashed
//! before anything else runs, specific wiki forms run before general ones,
//! four-hash headings before one-hash, bold before italic, images before
//! links, and paragraph wrapping last.
//!
//! Code regions (fenced blocks and inline spans) are replaced by opaque
//! placeholder tokens while the remaining passes run, then substituted back
//! at the very end, so markdown syntax inside code is never converted.
//!
//! Supported syntax, besides the usual headings/emphasis/code/links/lists/
//! blockquotes, includes the wiki dialect: `![[file]]` and
//! `![[file|caption]]` image embeds (paths rooted under `images/`) and
//! `[[target]]` / `[[target|label]]` non-navigating links.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Fenced code block: triple backticks with an optional language tag
/// (discarded), through the next triple backticks.
static FENCED_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").unwrap());

/// Wiki image embed with caption: `![[file|caption]]`.
static WIKI_IMAGE_CAPTIONED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[\[([^\]|]+)\|([^\]]+)\]\]").unwrap());

/// Wiki image embed: `![[file]]`.
static WIKI_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").unwrap());

/// Wiki link with label: `[[target|label]]`.
static WIKI_LINK_LABELED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]|]+)\|([^\]]+)\]\]").unwrap());

/// Wiki link: `[[target]]`.
static WIKI_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());

/// Standard markdown image: `![alt](url)`. The alt text may be empty.
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// Trailing image-file extension, stripped from captionless embed alt text.
static IMAGE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif|svg|webp)$").unwrap());

static HEADING_4: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#### (.*)$").unwrap());
static HEADING_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static HEADING_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static HEADING_1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Inline code span: single backticks, non-empty content.
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Standard markdown link: `[text](url)`.
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Unordered list item marker: `* ` or `- ` at line start.
static UL_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[*-] (.*)$").unwrap());

/// A run of `<li>` elements separated by at most one newline each.
static LIST_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:<li>.*</li>\n?)+").unwrap());

/// Ordered list item marker: digits and a dot at line start.
static OL_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\. (.*)$").unwrap());

static BLOCKQUOTE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^> (.*)$").unwrap());

/// Sentinels for stashed code regions. Private-use scalars, so neither
/// author text nor the output of any pass collides with a token.
const BLOCK_SENTINEL: char = '\u{E000}';
const SPAN_SENTINEL: char = '\u{E001}';

/// Finished code elements parked behind placeholder tokens while the other
/// passes run over the document.
#[derive(Default)]
struct CodeStash {
    blocks: Vec<String>,
    spans: Vec<String>,
}

impl CodeStash {
    fn stash_block(&mut self, html: String) -> String {
        self.blocks.push(html);
        format!("{BLOCK_SENTINEL}{}{BLOCK_SENTINEL}", self.blocks.len() - 1)
    }

    fn stash_span(&mut self, html: String) -> String {
        self.spans.push(html);
        format!("{SPAN_SENTINEL}{}{SPAN_SENTINEL}", self.spans.len() - 1)
    }

    /// Substitute stashed elements back. Spans first: a span that captured
    /// a block token must resolve before blocks are expanded.
    fn restore(&self, mut html: String) -> String {
        for (i, span) in self.spans.iter().enumerate() {
            html = html.replace(&format!("{SPAN_SENTINEL}{i}{SPAN_SENTINEL}"), span);
        }
        for (i, block) in self.blocks.iter().enumerate() {
            html = html.replace(&format!("{BLOCK_SENTINEL}{i}{BLOCK_SENTINEL}"), block);
        }
        html
    }
}

/// Convert a markdown body to an HTML fragment.
///
/// Unrecognized or malformed syntax passes through as literal text; the
/// conversion never fails.
///
/// # Example
///
/// ```
/// use folio_markdown::render;
///
/// assert_eq!(render("# Hello"), "<h1>Hello</h1>");
/// ```
pub fn render(markdown: &str) -> String {
    let mut stash = CodeStash::default();

    // Fenced code first: nothing inside a fence is treated as markdown.
    let html = FENCED_CODE.replace_all(markdown, |caps: &Captures| {
        let code = escape_html(&caps[2]);
        stash.stash_block(format!("<pre><code>{code}</code></pre>"))
    });

    // Wiki embeds and links, most specific form first.
    let html = WIKI_IMAGE_CAPTIONED.replace_all(&html, |caps: &Captures| {
        format!("<img src=\"{}\" alt=\"{}\">", image_path(&caps[1]), &caps[2])
    });
    let html = WIKI_IMAGE.replace_all(&html, |caps: &Captures| {
        let alt = IMAGE_EXTENSION.replace(&caps[1], "");
        format!("<img src=\"{}\" alt=\"{}\">", image_path(&caps[1]), alt)
    });
    let html =
        WIKI_LINK_LABELED.replace_all(&html, "<a href=\"#\" onclick=\"return false;\">$2</a>");
    let html = WIKI_LINK.replace_all(&html, "<a href=\"#\" onclick=\"return false;\">$1</a>");
    let html = IMAGE.replace_all(&html, "<img src=\"$2\" alt=\"$1\">");

    // Headings, deepest first so `####` is not consumed as `#`.
    let html = HEADING_4.replace_all(&html, "<h4>$1</h4>");
    let html = HEADING_3.replace_all(&html, "<h3>$1</h3>");
    let html = HEADING_2.replace_all(&html, "<h2>$1</h2>");
    let html = HEADING_1.replace_all(&html, "<h1>$1</h1>");

    // Bold before italic so `**` pairs are not eaten as `*` pairs.
    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");

    // Inline code is stashed so the link pass cannot match inside a span.
    let html = INLINE_CODE.replace_all(&html, |caps: &Captures| {
        stash.stash_span(format!("<code>{}</code>", &caps[1]))
    });

    let html = LINK.replace_all(&html, "<a href=\"$2\" target=\"_blank\">$1</a>");

    // Unordered items, then each run wrapped in a single container.
    // Ordered items convert after wrapping and stay bare.
    let html = UL_ITEM.replace_all(&html, "<li>$1</li>");
    let html = LIST_RUN.replace_all(&html, "<ul>$0</ul>");
    let html = OL_ITEM.replace_all(&html, "<li>$1</li>");

    // Each quoted line becomes its own blockquote element.
    let html = BLOCKQUOTE_LINE.replace_all(&html, "<blockquote>$1</blockquote>");

    stash.restore(wrap_paragraphs(&html))
}

/// Escape text for placement inside an HTML element or attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wiki image embeds resolve under `images/` unless already rooted there.
fn image_path(name: &str) -> String {
    if name.starts_with("images/") {
        name.to_string()
    } else {
        format!("images/{name}")
    }
}

/// Block prefixes exempt from paragraph wrapping. `<li` is not exempt, so
/// bare ordered-list items end up paragraph-wrapped.
const BLOCK_PREFIXES: [&str; 6] = ["<h", "<pre", "<ul", "<ol", "<blockquote", "<img"];

fn is_block_level(block: &str) -> bool {
    block.starts_with(BLOCK_SENTINEL) || BLOCK_PREFIXES.iter().any(|p| block.starts_with(p))
}

/// Paragraph pass: blank-line separated chunks become `<p>` elements with
/// interior newlines as `<br>`, unless the chunk already starts with a
/// block-level element or a stashed code block.
fn wrap_paragraphs(html: &str) -> String {
    let blocks: Vec<String> = html
        .split("\n\n")
        .map(|block| {
            let block = block.trim();
            if block.is_empty() {
                return String::new();
            }
            if is_block_level(block) {
                return block.to_string();
            }
            format!("<p>{}</p>", block.replace('\n', "<br>"))
        })
        .collect();
    blocks.join("\n")
}
