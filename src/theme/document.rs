//! Theme documents and the locator boundary
//!
//! A [`ThemeDocument`] is the materialized form of one color theme file:
//! its name, an optional parent theme it includes, and its scope rules.
//! Documents are keyed by name; the resolver walks parent names through a
//! [`ThemeLocator`] the host implements, so all file and extension-host
//! I/O stays outside this crate.
//!
//! The raw wire shape is a TextMate-style color theme JSON document. Its
//! `scope` field is duck-typed (a single selector string or a list); it is
//! normalized into `Vec<String>` here at the boundary so nothing past this
//! module re-checks shape.

use serde::Deserialize;
use std::fmt;

/// One flattened theme rule: selectors and the foreground color they set.
///
/// Rules without a foreground survive parsing (they may carry font styles
/// this engine ignores) but never win a highlight slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeRule {
    /// Hierarchical, dot/space-delimited scope selectors, e.g.
    /// `string.quoted.double.html`.
    pub scope_selectors: Vec<String>,
    pub foreground: Option<String>,
}

/// A materialized theme document in an include chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDocument {
    /// Identity of this document; parent links refer to these names.
    pub name: String,
    /// Name of the theme this one includes, if any.
    pub parent: Option<String>,
    pub rules: Vec<ScopeRule>,
}

/// Host capability for looking up a theme document by name.
///
/// Implementations do whatever the hosting environment requires
/// (enumerate installed extensions, read files, hit a cache) and return
/// `None` for anything missing or malformed; the resolver treats a `None`
/// hop as the end of the chain.
pub trait ThemeLocator {
    fn locate(&self, theme_name: &str) -> Option<ThemeDocument>;
}

/// Name-keyed in-memory locator, mainly for hosts that prefetch the whole
/// chain (and for tests).
impl ThemeLocator for std::collections::HashMap<String, ThemeDocument> {
    fn locate(&self, theme_name: &str) -> Option<ThemeDocument> {
        self.get(theme_name).cloned()
    }
}

/// Failure to parse a raw theme document.
///
/// This is the only fallible boundary in the crate; callers that drop a
/// failed document on the floor get exactly the "unresolvable ancestor
/// contributes zero rules" behavior the resolver expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeParseError {
    /// The document is not the expected JSON shape.
    Json(String),
}

impl fmt::Display for ThemeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeParseError::Json(msg) => write!(f, "invalid theme document: {}", msg),
        }
    }
}

impl std::error::Error for ThemeParseError {}

/// Raw wire shape of a color theme document.
#[derive(Debug, Deserialize)]
struct RawTheme {
    #[serde(default)]
    include: Option<String>,
    #[serde(default, rename = "tokenColors")]
    token_colors: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    scope: Option<ScopeField>,
    #[serde(default)]
    settings: Option<RawSettings>,
}

/// `scope` is either a single selector string or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScopeField {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default)]
    foreground: Option<String>,
}

impl ThemeDocument {
    /// Parse a raw theme document that the host has already fetched.
    ///
    /// Rules without a `scope` are dropped; duck-typed scopes are
    /// normalized into `scope_selectors`. The `include` value is reduced
    /// to a bare theme name (directories and a `.json` suffix stripped).
    pub fn from_json_str(
        name: impl Into<String>,
        raw: &str,
    ) -> Result<ThemeDocument, ThemeParseError> {
        let raw: RawTheme =
            serde_json::from_str(raw).map_err(|e| ThemeParseError::Json(e.to_string()))?;

        let rules = raw
            .token_colors
            .into_iter()
            .filter_map(|rule| {
                let scope_selectors = match rule.scope? {
                    ScopeField::One(selector) => vec![selector],
                    ScopeField::Many(selectors) => selectors,
                };
                Some(ScopeRule {
                    scope_selectors,
                    foreground: rule.settings.and_then(|s| s.foreground),
                })
            })
            .collect();

        Ok(ThemeDocument {
            name: name.into(),
            parent: raw.include.as_deref().map(include_to_name),
            rules,
        })
    }
}

/// Reduce an include reference like `./one-dark.json` to the theme name
/// `one-dark`.
fn include_to_name(include: &str) -> String {
    let basename = include
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(include);
    basename.strip_suffix(".json").unwrap_or(basename).to_string()
}
