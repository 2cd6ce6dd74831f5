//! Frontmatter parsing.
//!
//! A document may begin with a metadata header delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Neural Style Transfer
//! featured: true
//! ---
//! Body starts here.
//! ```
//!
//! The header is a flat list of `key: value` lines, not general YAML.
//! Values stay strings except `featured`, which is coerced to a boolean.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a leading frontmatter block: an opening `---` line, the header
/// lines, a closing `---` line, then the rest of the document.
///
/// Equivalent to the classic `^---\s*\n([\s\S]*?)\n---\s*\n([\s\S]*)$`:
/// trailing whitespace on delimiter lines is tolerated and the header
/// capture is non-greedy, so the first closing delimiter ends it.
static FRONTMATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n(.*)\z").unwrap());

/// A single frontmatter value.
///
/// Values keep the raw header text, except for the `featured` key which is
/// coerced to a boolean at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    String(String),
    Bool(bool),
}

impl MetaValue {
    /// The string content, if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::String(s) => Some(s),
            MetaValue::Bool(_) => None,
        }
    }

    /// The boolean content, if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Bool(b) => Some(*b),
            MetaValue::String(_) => None,
        }
    }
}

/// Metadata mapping extracted from a frontmatter header.
///
/// Keys are stored as written (after trimming). Duplicate keys keep the
/// last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: HashMap<String, MetaValue>,
}

impl Metadata {
    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    /// String value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetaValue::as_str)
    }

    /// Boolean value for `key`, if present and a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(MetaValue::as_bool)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetaValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Split a document into its metadata mapping and markdown body.
///
/// Documents without a well-formed frontmatter block yield empty metadata
/// and the input unchanged; this function has no failure mode.
///
/// Header lines split on the first colon, so values may themselves contain
/// colons (URLs survive). Lines without a colon are ignored. Keys and
/// values are trimmed, and a value wrapped in one matching pair of single
/// or double quotes is unwrapped.
pub fn parse_frontmatter(input: &str) -> (Metadata, String) {
    let Some(caps) = FRONTMATTER.captures(input) else {
        return (Metadata::default(), input.to_string());
    };

    let mut metadata = Metadata::default();
    for line in caps[1].lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = unquote(value.trim());
        if key == "featured" {
            metadata.insert(key, MetaValue::Bool(value.eq_ignore_ascii_case("true")));
        } else {
            metadata.insert(key, MetaValue::String(value.to_string()));
        }
    }

    (metadata, caps[2].to_string())
}

/// Strip one matching pair of surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}
