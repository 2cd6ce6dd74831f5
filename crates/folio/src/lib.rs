//! Folio - markdown-driven portfolio site generator.
//!
//! The library crates do the heavy lifting: `folio-markdown` converts
//! documents, `folio-core` loads and orders the project list. This crate
//! adds the display surface (HTML assembly for the site's regions) and the
//! CLI commands that drive a build.

pub mod commands;
pub mod site;
