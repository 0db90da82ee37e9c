//! Tokenization of response bodies
//!
//! This module turns a response body string into a flat stream of classified
//! tokens for rendering. Two tokenizers exist, selected by [`ContentKind`]:
//!
//! - JSON: a logos lexer over the JSON surface grammar (keys, strings,
//!   numbers, literals, structural punctuation).
//! - HTML: a regex alternation scan over markup spans (comments, doctype,
//!   tags), with a nested pass over each tag's attribute region.
//!
//! Both tokenizers are lossless: every byte of the input lands in exactly
//! one token, and unrecognized spans become unstyled [`TokenClass::Gap`]
//! tokens rather than errors. Tokenization is pure and stateless, so the
//! same input always produces the same stream and calls may run
//! concurrently without coordination.

pub mod html;
pub mod json;
pub mod tokens;

pub use html::tokenize_html;
pub use json::tokenize_json;
pub use tokens::{detokenize, Token, TokenClass};

/// Content kind of a response body, as declared by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Html,
}

impl ContentKind {
    /// Sniff a kind from a `Content-Type` header value.
    ///
    /// Parameters after `;` are ignored and matching is ASCII
    /// case-insensitive. Structured-syntax suffixes (`application/hal+json`)
    /// map to their base kind. Returns `None` for anything this engine has
    /// no tokenizer for.
    pub fn from_content_type(value: &str) -> Option<ContentKind> {
        let essence = value.split(';').next().unwrap_or(value).trim().to_ascii_lowercase();
        match essence.as_str() {
            "application/json" | "text/json" => Some(ContentKind::Json),
            "text/html" | "application/xhtml+xml" => Some(ContentKind::Html),
            other if other.ends_with("+json") => Some(ContentKind::Json),
            other if other.ends_with("+html") => Some(ContentKind::Html),
            _ => None,
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ContentKind::Json),
            "html" => Ok(ContentKind::Html),
            _ => Err(()),
        }
    }
}

/// Tokenize a response body according to its declared content kind.
pub fn tokenize(text: &str, kind: ContentKind) -> Vec<Token> {
    match kind {
        ContentKind::Json => tokenize_json(text),
        ContentKind::Html => tokenize_html(text),
    }
}

/// Merge runs of adjacent gap tokens into a single token.
///
/// The JSON lexer recovers from unrecognized input one error span at a
/// time, which can leave several consecutive gap tokens in the stream.
/// Merging them changes neither the concatenated text nor the emission
/// order of styled tokens.
pub(crate) fn coalesce_gaps(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.class == TokenClass::Gap {
            if let Some(last) = out.last_mut() {
                if last.class == TokenClass::Gap {
                    last.text.push_str(&token.text);
                    continue;
                }
            }
        }
        out.push(token);
    }
    out
}
