//! Portfolio model, document loading, and session state.
//!
//! This crate turns a manifest of markdown documents into an ordered list of
//! [`Project`] records:
//! - [`ProjectSource`] abstracts where the manifest and documents come from
//! - [`load_projects`] fetches every listed document concurrently, dropping
//!   individual failures
//! - [`PortfolioSession`] owns the loaded list and falls back to a built-in
//!   demo dataset when no manifest can be loaded

mod config;
mod demo;
mod error;
mod loader;
mod placeholder;
mod project;
mod session;
mod source;

pub use config::{SiteConfig, CONFIG_FILE};
pub use demo::demo_projects;
pub use error::{Error, Result};
pub use loader::load_projects;
pub use placeholder::placeholder_image;
pub use project::{sort_projects, Project, DEFAULT_SUMMARY};
pub use session::PortfolioSession;
pub use source::{DirectorySource, ProjectSource, MANIFEST_FILE};
