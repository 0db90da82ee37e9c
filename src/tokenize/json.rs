//! JSON tokenizer
//!
//! A single forward scan over the JSON surface grammar using a logos lexer.
//! The alternation, in priority order: an object key (quoted string
//! followed by a colon), a bare quoted string, a numeric literal, the
//! `true`/`false`/`null` literals, structural punctuation, and whitespace.
//! Maximal munch disambiguates keys from strings: when a colon follows, the
//! longer key pattern wins.
//!
//! Input that matches none of the patterns surfaces as logos error spans,
//! which become gap tokens; adjacent gaps are merged afterwards. The
//! tokenizer therefore never fails and the concatenated token text always
//! reproduces the input.

use crate::tokenize::coalesce_gaps;
use crate::tokenize::tokens::{Token, TokenClass};
use logos::Logos;

/// Raw lexeme classes recognized by the scan.
///
/// Quoted-string patterns skip escaped quotes (`\"`) but interpret no other
/// escape sequences.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum RawJson {
    // A quoted string immediately followed by a colon marks an object key.
    // The trailing whitespace and colon are split off by the wrapper below.
    #[regex(r#""([^"\\]|\\.)*"\s*:"#)]
    Key,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[token("true")]
    #[token("false")]
    Bool,

    #[token("null")]
    Null,

    #[regex(r"[{}\[\],:]")]
    Punct,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

/// Tokenize a JSON response body.
///
/// Assumes syntactically-close-to-valid JSON (typically pretty-printed)
/// and degrades to gap tokens on anything else. Stateless: identical input
/// always yields an identical stream.
pub fn tokenize_json(text: &str) -> Vec<Token> {
    let mut lexer = RawJson::lexer(text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(RawJson::Key) => push_key(slice, &mut tokens),
            Ok(RawJson::Str) => tokens.push(Token::new(TokenClass::Str, slice)),
            Ok(RawJson::Number) => tokens.push(Token::new(TokenClass::Number, slice)),
            Ok(RawJson::Bool) => tokens.push(Token::new(TokenClass::Bool, slice)),
            Ok(RawJson::Null) => tokens.push(Token::new(TokenClass::Null, slice)),
            Ok(RawJson::Punct) => tokens.push(Token::new(TokenClass::Punctuation, slice)),
            Ok(RawJson::Whitespace) | Err(_) => tokens.push(Token::gap(slice)),
        }
    }

    coalesce_gaps(tokens)
}

/// Split a key slice (`"name" :`) into an object-key token for the quoted
/// part and a punctuation token for the whitespace and colon after it.
fn push_key(slice: &str, tokens: &mut Vec<Token>) {
    let split = slice.rfind('"').map(|i| i + 1).unwrap_or(slice.len());
    tokens.push(Token::new(TokenClass::ObjectKey, &slice[..split]));
    if split < slice.len() {
        tokens.push(Token::new(TokenClass::Punctuation, &slice[split..]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokens::detokenize;

    #[test]
    fn test_classifies_pretty_printed_object() {
        let input = "{\n  \"a\": 1,\n  \"b\": [true, null, \"x\"]\n}";
        let tokens = tokenize_json(input);

        assert!(tokens.contains(&Token::new(TokenClass::ObjectKey, "\"a\"")));
        assert!(tokens.contains(&Token::new(TokenClass::ObjectKey, "\"b\"")));
        assert!(tokens.contains(&Token::new(TokenClass::Number, "1")));
        assert!(tokens.contains(&Token::new(TokenClass::Bool, "true")));
        assert!(tokens.contains(&Token::new(TokenClass::Null, "null")));
        assert!(tokens.contains(&Token::new(TokenClass::Str, "\"x\"")));
        assert_eq!(detokenize(&tokens), input);
    }

    #[test]
    fn test_key_splits_into_key_and_colon() {
        let tokens = tokenize_json("\"a\": 1");
        assert_eq!(tokens[0], Token::new(TokenClass::ObjectKey, "\"a\""));
        assert_eq!(tokens[1], Token::new(TokenClass::Punctuation, ":"));
        assert_eq!(tokens[2], Token::gap(" "));
        assert_eq!(tokens[3], Token::new(TokenClass::Number, "1"));
    }

    #[test]
    fn test_key_keeps_whitespace_before_colon() {
        let tokens = tokenize_json("\"a\" : 1");
        assert_eq!(tokens[0], Token::new(TokenClass::ObjectKey, "\"a\""));
        assert_eq!(tokens[1], Token::new(TokenClass::Punctuation, " :"));
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let tokens = tokenize_json(r#""say \"hi\"""#);
        assert_eq!(
            tokens,
            vec![Token::new(TokenClass::Str, r#""say \"hi\"""#)]
        );
    }

    #[test]
    fn test_number_forms() {
        for input in ["-12", "3.25", "6.02e23", "1E-9"] {
            let tokens = tokenize_json(input);
            assert_eq!(tokens, vec![Token::new(TokenClass::Number, input)]);
        }
    }

    #[test]
    fn test_irregular_input_becomes_gaps() {
        let input = "not json @ all";
        let tokens = tokenize_json(input);
        assert_eq!(detokenize(&tokens), input);
        // Nothing here is a JSON value; everything should be unstyled.
        assert!(tokens.iter().all(|t| !t.is_styled()));
    }

    #[test]
    fn test_unterminated_string_round_trips() {
        let input = "{\"a\": \"unterminated";
        assert_eq!(detokenize(&tokenize_json(input)), input);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize_json(""), vec![]);
    }
}
