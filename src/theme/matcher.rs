//! Scope-specificity matching
//!
//! Each of the ten highlight slots carries a short, ordered list of
//! candidate TextMate scope names. A rule selector matches a candidate
//! when they are equal or one is a dot/space-delimited descendant of the
//! other (the descendancy check is symmetric, so a very qualified theme
//! rule still colors a coarser candidate and vice versa).
//!
//! Among all matching rules, the longest selector wins: length is the
//! specificity measure. On exactly equal length the first rule in list
//! order is kept, so a later-overlaid rule wins only when it is strictly
//! more specific, never merely because it comes later. Existing themes
//! depend on that exact tie-break.

use crate::theme::document::ScopeRule;

/// The ten semantic highlight slots this engine resolves colors for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightSlot {
    Key,
    Str,
    Number,
    Bool,
    Null,
    Tag,
    AttrName,
    AttrValue,
    Comment,
    Punctuation,
}

impl HighlightSlot {
    pub const ALL: [HighlightSlot; 10] = [
        HighlightSlot::Key,
        HighlightSlot::Str,
        HighlightSlot::Number,
        HighlightSlot::Bool,
        HighlightSlot::Null,
        HighlightSlot::Tag,
        HighlightSlot::AttrName,
        HighlightSlot::AttrValue,
        HighlightSlot::Comment,
        HighlightSlot::Punctuation,
    ];

    /// Candidate scopes searched for this slot, most specific first.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            HighlightSlot::Key => &[
                "support.type.property-name.json",
                "support.type.property-name",
            ],
            HighlightSlot::Str => &["string.quoted.double.json", "string.quoted.double", "string"],
            HighlightSlot::Number => &["constant.numeric.json", "constant.numeric"],
            HighlightSlot::Bool => &["constant.language.boolean", "constant.language"],
            HighlightSlot::Null => &["constant.language.null", "constant.language"],
            HighlightSlot::Tag => &["entity.name.tag.html", "entity.name.tag", "meta.tag"],
            HighlightSlot::AttrName => &[
                "entity.other.attribute-name.html",
                "entity.other.attribute-name",
            ],
            HighlightSlot::AttrValue => {
                &["string.quoted.double.html", "string.quoted.double", "string"]
            }
            HighlightSlot::Comment => &["comment.block.html", "comment.block", "comment"],
            HighlightSlot::Punctuation => &[
                "punctuation.separator.dictionary.json",
                "punctuation.definition",
                "punctuation",
            ],
        }
    }

    /// Kebab-case name used for CSS custom properties.
    pub fn css_name(self) -> &'static str {
        match self {
            HighlightSlot::Key => "key",
            HighlightSlot::Str => "string",
            HighlightSlot::Number => "number",
            HighlightSlot::Bool => "boolean",
            HighlightSlot::Null => "null",
            HighlightSlot::Tag => "tag",
            HighlightSlot::AttrName => "attr-name",
            HighlightSlot::AttrValue => "attr-value",
            HighlightSlot::Comment => "comment",
            HighlightSlot::Punctuation => "punctuation",
        }
    }
}

/// `child` extends `ancestor` with at least one more dot- or
/// space-delimited segment.
fn is_descendant(child: &str, ancestor: &str) -> bool {
    child.len() > ancestor.len()
        && child.starts_with(ancestor)
        && matches!(child.as_bytes()[ancestor.len()], b'.' | b' ')
}

/// Whether a rule selector and a candidate scope target the same family.
fn scopes_related(selector: &str, candidate: &str) -> bool {
    selector == candidate
        || is_descendant(candidate, selector)
        || is_descendant(selector, candidate)
}

/// Find the foreground of the most specific rule matching `slot`.
///
/// Every rule in the flattened list is considered against every candidate;
/// within one rule the candidates are checked in order and the first hit
/// settles that rule. A strictly longer selector replaces the current
/// best, an equal-length one does not.
pub fn best_match(rules: &[ScopeRule], slot: HighlightSlot) -> Option<String> {
    let mut best: Option<(&str, &str)> = None;

    for rule in rules {
        let Some(foreground) = rule.foreground.as_deref() else {
            continue;
        };
        for selector in &rule.scope_selectors {
            let hit = slot
                .candidates()
                .iter()
                .any(|candidate| scopes_related(selector, candidate));
            if !hit {
                continue;
            }
            let better = match best {
                Some((current, _)) => selector.len() > current.len(),
                None => true,
            };
            if better {
                best = Some((selector, foreground));
            }
        }
    }

    best.map(|(_, color)| color.to_string())
}
