//! # hilite
//!
//! Theme-aware syntax highlighting core for HTTP response bodies.
//!
//! The crate has two independent halves:
//!
//! - [`tokenize`] turns a response body (JSON or HTML) into an ordered,
//!   lossless token stream. Concatenating the text of every token, in
//!   emission order, reproduces the input exactly; anything the tokenizers
//!   do not recognize is carried through as unstyled gap tokens.
//! - [`theme`] flattens a color theme's include chain into scope rules and
//!   resolves them, by scope specificity, onto the ten semantic highlight
//!   slots this engine styles. The result is always a total [`theme::ColorMap`],
//!   falling back to a built-in light or dark palette per slot.
//!
//! The two halves never talk to each other: the renderer pairs a token
//!   stream with a color map, and both can be recomputed independently.
//!
//! Nothing in this crate performs I/O. Theme documents arrive already
//! fetched through a [`theme::ThemeLocator`] the host implements, and no
//! operation here returns an error for malformed input; degraded inputs
//! degrade the output (fewer styled spans, default colors) instead.

pub mod theme;
pub mod tokenize;
