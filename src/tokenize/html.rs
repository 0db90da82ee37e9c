//! HTML tokenizer
//!
//! A regex alternation scan over markup spans. The top-level pattern
//! recognizes, in priority order: a comment, a `<!…>` declaration
//! (doctype), and a tag span. Text between matches is emitted verbatim as
//! gap tokens, which also covers stray `<` characters that open no
//! recognizable span.
//!
//! Each tag span is decomposed by a second, anchored pattern into its open
//! marker, tag name, attribute region, and close marker; the attribute
//! region goes through a third scan for `name = value` pairs. When
//! decomposition fails on irregular markup, the whole span becomes a
//! single tag-marker token, trading styling granularity for losslessness.

use crate::tokenize::tokens::{Token, TokenClass};
use once_cell::sync::Lazy;
use regex::Regex;

/// Top-level alternation: comment, declaration, tag span. Alternative
/// order matters; the regex engine prefers the earliest alternative at
/// each position.
static MARKUP_SCAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<![^>]*>|</?[A-Za-z][^>]*>").unwrap());

/// Decomposes a tag span into open marker, name, attribute region, close marker.
static TAG_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(</?)([A-Za-z][A-Za-z0-9:-]*)(.*?)(/?>)$").unwrap());

/// One `name = value` pair inside an attribute region. The `=` group folds
/// surrounding whitespace into the punctuation token; the value is quoted
/// (either style) or a bare word.
static ATTR_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(\s*=\s*)("[^"]*"|'[^']*'|[^\s>]+)"#).unwrap()
});

/// Tokenize an HTML response body.
///
/// Accepts arbitrary text; anything that is not recognizable markup comes
/// through as gap tokens. Stateless and total, like the JSON tokenizer.
pub fn tokenize_html(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in MARKUP_SCAN.find_iter(text) {
        if m.start() > last {
            tokens.push(Token::gap(&text[last..m.start()]));
        }
        let span = m.as_str();
        if span.starts_with("<!--") {
            tokens.push(Token::new(TokenClass::Comment, span));
        } else if span.starts_with("<!") {
            tokens.push(Token::new(TokenClass::Doctype, span));
        } else {
            push_tag(span, &mut tokens);
        }
        last = m.end();
    }
    if last < text.len() {
        tokens.push(Token::gap(&text[last..]));
    }

    tokens
}

/// Decompose one tag span into marker, name, attributes, and close marker,
/// falling back to a single tag-marker token on irregular markup.
fn push_tag(span: &str, tokens: &mut Vec<Token>) {
    let parts = TAG_PARTS.captures(span).and_then(|caps| {
        match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
            (Some(open), Some(name), Some(attrs), Some(close)) => {
                Some((open.as_str(), name.as_str(), attrs.as_str(), close.as_str()))
            }
            _ => None,
        }
    });
    let Some((open, name, attrs, close)) = parts else {
        tokens.push(Token::new(TokenClass::TagMark, span));
        return;
    };

    tokens.push(Token::new(TokenClass::TagMark, open));
    tokens.push(Token::new(TokenClass::TagMark, name));
    if !attrs.is_empty() {
        push_attributes(attrs, tokens);
    }
    tokens.push(Token::new(TokenClass::TagMark, close));
}

/// Scan an attribute region for `name = value` pairs. Whitespace (and any
/// bare word that is not part of a pair) between pairs becomes gap tokens.
fn push_attributes(region: &str, tokens: &mut Vec<Token>) {
    let mut last = 0;
    for caps in ATTR_PAIR.captures_iter(region) {
        let (full, name, eq, value) =
            match (caps.get(0), caps.get(1), caps.get(2), caps.get(3)) {
                (Some(full), Some(name), Some(eq), Some(value)) => (full, name, eq, value),
                _ => continue,
            };
        if full.start() > last {
            tokens.push(Token::gap(&region[last..full.start()]));
        }
        tokens.push(Token::new(TokenClass::AttrName, name.as_str()));
        tokens.push(Token::new(TokenClass::Punctuation, eq.as_str()));
        tokens.push(Token::new(TokenClass::AttrValue, value.as_str()));
        last = full.end();
    }
    if last < region.len() {
        tokens.push(Token::gap(&region[last..]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokens::detokenize;

    fn t(class: TokenClass, text: &str) -> Token {
        Token::new(class, text)
    }

    #[test]
    fn test_classifies_tag_comment_close() {
        let input = "<div class=\"x\"><!-- c --></div>";
        let tokens = tokenize_html(input);
        assert_eq!(
            tokens,
            vec![
                t(TokenClass::TagMark, "<"),
                t(TokenClass::TagMark, "div"),
                Token::gap(" "),
                t(TokenClass::AttrName, "class"),
                t(TokenClass::Punctuation, "="),
                t(TokenClass::AttrValue, "\"x\""),
                t(TokenClass::TagMark, ">"),
                t(TokenClass::Comment, "<!-- c -->"),
                t(TokenClass::TagMark, "</"),
                t(TokenClass::TagMark, "div"),
                t(TokenClass::TagMark, ">"),
            ]
        );
        assert_eq!(detokenize(&tokens), input);
    }

    #[test]
    fn test_self_closing_tag() {
        let tokens = tokenize_html("<br/>");
        assert_eq!(
            tokens,
            vec![
                t(TokenClass::TagMark, "<"),
                t(TokenClass::TagMark, "br"),
                t(TokenClass::TagMark, "/>"),
            ]
        );
    }

    #[test]
    fn test_doctype() {
        let tokens = tokenize_html("<!DOCTYPE html>\n<html></html>");
        assert_eq!(tokens[0], t(TokenClass::Doctype, "<!DOCTYPE html>"));
        assert_eq!(tokens[1], Token::gap("\n"));
    }

    #[test]
    fn test_comment_may_contain_angle_bracket() {
        let tokens = tokenize_html("<!-- a > b -->");
        assert_eq!(tokens, vec![t(TokenClass::Comment, "<!-- a > b -->")]);
    }

    #[test]
    fn test_multiline_comment() {
        let input = "<!--\n  line one\n  line two\n-->";
        let tokens = tokenize_html(input);
        assert_eq!(tokens, vec![t(TokenClass::Comment, input)]);
    }

    #[test]
    fn test_unquoted_and_single_quoted_values() {
        let tokens = tokenize_html("<input type=text value='a b'>");
        assert!(tokens.contains(&t(TokenClass::AttrValue, "text")));
        assert!(tokens.contains(&t(TokenClass::AttrValue, "'a b'")));
    }

    #[test]
    fn test_equals_keeps_surrounding_whitespace() {
        let tokens = tokenize_html("<a href = \"/\">");
        assert!(tokens.contains(&t(TokenClass::Punctuation, " = ")));
    }

    #[test]
    fn test_bare_attribute_falls_to_gap() {
        let input = "<input disabled>";
        let tokens = tokenize_html(input);
        assert!(tokens.contains(&Token::gap(" disabled")));
        assert_eq!(detokenize(&tokens), input);
    }

    #[test]
    fn test_unclosed_tag_is_gap_text() {
        let input = "before <div unfinished";
        let tokens = tokenize_html(input);
        assert_eq!(tokens, vec![Token::gap(input)]);
    }

    #[test]
    fn test_plain_text_between_tags() {
        let tokens = tokenize_html("<p>hello</p>");
        assert!(tokens.contains(&Token::gap("hello")));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize_html(""), vec![]);
    }
}
