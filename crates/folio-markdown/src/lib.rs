//! Frontmatter extraction and markdown-to-HTML conversion.
//!
//! This crate is the core text transformation behind Folio portfolios:
//! - Frontmatter parsing into a key-value metadata mapping
//! - A pass-based markdown renderer producing HTML fragments
//!
//! Both operations are pure string transformations with no failure modes:
//! malformed input degrades to literal text rather than an error.

mod frontmatter;
mod html;

pub use frontmatter::{parse_frontmatter, MetaValue, Metadata};
pub use html::{escape_html, render};
