//! Command implementations for the folio CLI.
//!
//! Each command module handles the CLI interface and delegates to
//! folio-core and folio-markdown for the actual work.

pub mod build;
pub mod render;
