//! Include-chain flattening
//!
//! Themes may include a parent theme, which may include another. The
//! resolver walks that chain through the host's [`ThemeLocator`] and emits
//! every document's rules as one flat list, base-first: ancestor rules
//! come before descendant rules, so a descendant rule at equal specificity
//! is seen later by the matcher and wins its tie-break.
//!
//! The walk carries a visited set keyed by document name, with a hard
//! depth ceiling as a second stop. A self-referential or mutually
//! recursive include chain therefore terminates with whatever rules were
//! gathered before the repeat, and an ancestor the locator cannot produce
//! simply ends the chain without discarding rules already gathered.

use crate::theme::document::{ScopeRule, ThemeDocument, ThemeLocator};
use std::collections::HashSet;

/// Hard ceiling on include-chain hops, counting the starting document.
pub const MAX_INCLUDE_DEPTH: usize = 16;

/// Flatten a theme's include chain into a base-first rule list.
///
/// `doc` is the active theme, already materialized by the host; `None`
/// (no active theme, or its document failed to materialize) flattens to
/// zero rules and lets the color map fall back to the default palette.
pub fn flatten_rules(doc: Option<&ThemeDocument>, locator: &dyn ThemeLocator) -> Vec<ScopeRule> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(doc.name.clone());

    // Gather child-first, then reverse so ancestors come out base-first.
    let mut layers: Vec<Vec<ScopeRule>> = vec![doc.rules.clone()];
    let mut parent = doc.parent.clone();

    while let Some(name) = parent {
        if layers.len() >= MAX_INCLUDE_DEPTH {
            break;
        }
        if !visited.insert(name.clone()) {
            // Cycle: truncate the walk at the repeat.
            break;
        }
        let Some(ancestor) = locator.locate(&name) else {
            // Unresolvable ancestor: further ancestors are treated as absent.
            break;
        };
        parent = ancestor.parent;
        layers.push(ancestor.rules);
    }

    layers.reverse();
    layers.into_iter().flatten().collect()
}
