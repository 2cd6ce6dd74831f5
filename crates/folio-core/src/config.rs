//! Site configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Optional config filename, read from the portfolio root.
pub const CONFIG_FILE: &str = "folio.json";

/// Portfolio-level settings.
///
/// Every field has a default, so a missing or partial config file is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Browser title and masthead heading.
    pub title: String,
    /// Short name shown in the navigation bar.
    pub brand: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Project Portfolio".to_string(),
            brand: "Portfolio".to_string(),
        }
    }
}

impl SiteConfig {
    /// Read `folio.json` under `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse { path, source })
    }
}
