//! Token definitions shared by both tokenizers
//!
//! A token is a classified slice of the input. Tokens are ephemeral: each
//! tokenizer call produces a fresh stream, and streams are never mutated or
//! shared across calls.

/// Semantic class of a token, used to pick a highlight color at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Unstyled text between recognized spans (whitespace, irregular input).
    Gap,
    /// Structural punctuation: braces, brackets, commas, colons, `=`.
    Punctuation,
    /// A quoted JSON object key, quotes included.
    ObjectKey,
    /// A quoted JSON string value, quotes included.
    Str,
    /// A JSON numeric literal.
    Number,
    /// The literal `true` or `false`.
    Bool,
    /// The literal `null`.
    Null,
    /// A tag delimiter (`<`, `</`, `>`, `/>`), a tag name, or an entire
    /// tag span that could not be decomposed.
    TagMark,
    /// An attribute name inside a tag.
    AttrName,
    /// An attribute value inside a tag, quotes included when present.
    AttrValue,
    /// An HTML comment, delimiters included.
    Comment,
    /// A doctype (or other `<!…>`) declaration.
    Doctype,
}

/// A classified slice of tokenizer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub text: String,
}

impl Token {
    pub fn new(class: TokenClass, text: impl Into<String>) -> Self {
        Token {
            class,
            text: text.into(),
        }
    }

    /// Shorthand for an unstyled gap token.
    pub fn gap(text: impl Into<String>) -> Self {
        Token::new(TokenClass::Gap, text)
    }

    /// Whether the renderer should style this token at all.
    pub fn is_styled(&self) -> bool {
        self.class != TokenClass::Gap
    }
}

/// Reassemble the original input from a token stream.
///
/// Both tokenizers guarantee `detokenize(&tokenize(s, kind)) == s` for any
/// input. Tests lean on this; the renderer relies on it implicitly when it
/// prints the stream back out span by span.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.text);
    }
    out
}
