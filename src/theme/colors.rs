//! Color map construction
//!
//! The color map is the theme pipeline's only output: one opaque color
//! string per highlight slot, always all ten populated. Construction
//! starts from a fixed light or dark palette and overlays whatever the
//! matcher resolved, so an empty rule list (no theme, failed materialize,
//! empty chain) yields the default palette unchanged and the caller can
//! compare against it to decide whether to warn.

use crate::theme::document::{ThemeDocument, ThemeLocator};
use crate::theme::matcher::{best_match, HighlightSlot};
use crate::theme::resolver::flatten_rules;
use serde::{Deserialize, Serialize};

/// Resolved colors for the ten highlight slots.
///
/// Serializes with camelCase keys for the host's webview boundary. Values
/// are opaque color strings (hex or any CSS color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMap {
    pub key: String,
    pub string: String,
    pub number: String,
    pub boolean: String,
    pub null: String,
    pub tag: String,
    pub attr_name: String,
    pub attr_value: String,
    pub comment: String,
    pub punctuation: String,
}

impl ColorMap {
    pub fn default_dark() -> ColorMap {
        ColorMap {
            key: "#9cdcfe".to_string(),
            string: "#ce9178".to_string(),
            number: "#b5cea8".to_string(),
            boolean: "#569cd6".to_string(),
            null: "#569cd6".to_string(),
            tag: "#569cd6".to_string(),
            attr_name: "#9cdcfe".to_string(),
            attr_value: "#ce9178".to_string(),
            comment: "#6a9955".to_string(),
            punctuation: "#d4d4d4".to_string(),
        }
    }

    pub fn default_light() -> ColorMap {
        ColorMap {
            key: "#0451a5".to_string(),
            string: "#a31515".to_string(),
            number: "#098658".to_string(),
            boolean: "#0000ff".to_string(),
            null: "#0000ff".to_string(),
            tag: "#800000".to_string(),
            attr_name: "#e50000".to_string(),
            attr_value: "#0000ff".to_string(),
            comment: "#008000".to_string(),
            punctuation: "#000000".to_string(),
        }
    }

    pub fn defaults(is_light: bool) -> ColorMap {
        if is_light {
            ColorMap::default_light()
        } else {
            ColorMap::default_dark()
        }
    }

    pub fn get(&self, slot: HighlightSlot) -> &str {
        match slot {
            HighlightSlot::Key => &self.key,
            HighlightSlot::Str => &self.string,
            HighlightSlot::Number => &self.number,
            HighlightSlot::Bool => &self.boolean,
            HighlightSlot::Null => &self.null,
            HighlightSlot::Tag => &self.tag,
            HighlightSlot::AttrName => &self.attr_name,
            HighlightSlot::AttrValue => &self.attr_value,
            HighlightSlot::Comment => &self.comment,
            HighlightSlot::Punctuation => &self.punctuation,
        }
    }

    fn slot_mut(&mut self, slot: HighlightSlot) -> &mut String {
        match slot {
            HighlightSlot::Key => &mut self.key,
            HighlightSlot::Str => &mut self.string,
            HighlightSlot::Number => &mut self.number,
            HighlightSlot::Bool => &mut self.boolean,
            HighlightSlot::Null => &mut self.null,
            HighlightSlot::Tag => &mut self.tag,
            HighlightSlot::AttrName => &mut self.attr_name,
            HighlightSlot::AttrValue => &mut self.attr_value,
            HighlightSlot::Comment => &mut self.comment,
            HighlightSlot::Punctuation => &mut self.punctuation,
        }
    }

    /// Render the map as CSS custom-property declarations, one per slot,
    /// e.g. `--hl-attr-name: #9cdcfe;`. The host injects these into its
    /// response view's style.
    pub fn css_variables(&self, prefix: &str) -> String {
        let mut out = String::new();
        for slot in HighlightSlot::ALL {
            out.push_str(&format!(
                "--{}-{}: {};\n",
                prefix,
                slot.css_name(),
                self.get(slot)
            ));
        }
        out
    }
}

/// Build a total color map for the active theme.
///
/// Flattens the include chain, resolves each slot by specificity, and
/// overlays the results on the light or dark default palette. Infallible
/// and idempotent; safe to call on every theme-change event.
pub fn build_color_map(
    doc: Option<&ThemeDocument>,
    locator: &dyn ThemeLocator,
    is_light: bool,
) -> ColorMap {
    let rules = flatten_rules(doc, locator);
    let mut map = ColorMap::defaults(is_light);
    for slot in HighlightSlot::ALL {
        if let Some(color) = best_match(&rules, slot) {
            *map.slot_mut(slot) = color;
        }
    }
    map
}
