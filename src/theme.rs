//! Theme resolution
//!
//! This module maps an editor color theme onto the ten semantic highlight
//! slots the renderer styles. The pipeline has three stages:
//!
//! 1. [`resolver`] flattens a theme's include chain into one base-first
//!    list of scope rules, walking parent links through a host-supplied
//!    [`ThemeLocator`]. Traversal is cycle-safe and depth-bounded.
//! 2. [`matcher`] finds, per slot, the most specific rule whose scope
//!    selector relates to one of the slot's candidate scopes.
//! 3. [`colors`] overlays the matches on a built-in light or dark palette,
//!    so the resulting [`ColorMap`] is always fully populated.
//!
//! Every stage is total: a missing theme, an unresolvable ancestor, or a
//! cyclic include chain degrades to fewer rules, never to an error.
//! Rebuilds are idempotent and safe to trigger on every theme-change event.

pub mod colors;
pub mod document;
pub mod matcher;
pub mod resolver;

pub use colors::{build_color_map, ColorMap};
pub use document::{ScopeRule, ThemeDocument, ThemeLocator, ThemeParseError};
pub use matcher::HighlightSlot;
pub use resolver::{flatten_rules, MAX_INCLUDE_DEPTH};
