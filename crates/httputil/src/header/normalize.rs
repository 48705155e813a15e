//! Canonical form of header values.
//!
//! Normalization removes all optional whitespace from a header value while
//! keeping its meaning. Two bare tokens that were separated by whitespace stay
//! separated by exactly one space, everything else is joined directly.

use std::borrow::Cow;

use tracing::trace;

use super::token::{is_tspecial, tokenize};

/// Marks characters that were lost when the value was decoded lossily.
const UNDECODABLE: char = char::REPLACEMENT_CHARACTER;

/// Converts a header value into a standard form by removing all optional whitespace.
///
/// This function never fails. Values that can't be tokenized, or that contain
/// an undecodable character (U+FFFD) at a token boundary, are returned
/// unchanged.
///
/// # Example
///
/// ```
/// use micro_httputil::header::normalize_header;
///
/// assert_eq!(normalize_header("a  ,  b"), "a,b");
/// assert_eq!(normalize_header(r#"a = "b  c""#), r#"a="b  c""#);
/// assert_eq!(normalize_header("no-cache  private"), "no-cache private");
/// ```
pub fn normalize_header(value: &str) -> Cow<'_, str> {
    let tokens = match tokenize(value) {
        Ok(tokens) => tokens,
        Err(e) => {
            trace!(cause = %e, "header value can't be tokenized, keep it unchanged");
            return Cow::Borrowed(value);
        }
    };

    let mut normalized = String::with_capacity(value.len());
    for token in tokens {
        let first = match token.first_char() {
            Some(c) if c != UNDECODABLE => c,
            _ => return keep_undecodable(value),
        };

        if normalized.is_empty() || is_tspecial(first) {
            normalized.push_str(token.as_str());
            continue;
        }

        match normalized.chars().next_back() {
            Some(last) if last == UNDECODABLE => return keep_undecodable(value),
            Some(last) if is_tspecial(last) => {}
            _ => normalized.push(' '),
        }
        normalized.push_str(token.as_str());
    }

    Cow::Owned(normalized)
}

fn keep_undecodable(value: &str) -> Cow<'_, str> {
    trace!(value, "header value has undecodable characters, keep it unchanged");
    Cow::Borrowed(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::TokenizeError;

    #[test]
    fn test_normalize() {
        let table = [
            ("", ""),
            (" ", ""),
            ("a", "a"),
            ("*", "*"),
            ("a  b", "a b"),
            ("a,b", "a,b"),
            ("a, b", "a,b"),
            ("a  ,  b", "a,b"),
            ("a=b", "a=b"),
            ("a= b", "a=b"),
            ("a  =  b", "a=b"),
            (r#"a = "b  c""#, r#"a="b  c""#),
            ("text/html; charset=utf-8", "text/html;charset=utf-8"),
            ("\t gzip ,\tdeflate \t", "gzip,deflate"),
        ];

        for (input, expected) in table {
            assert_eq!(normalize_header(input), expected, "normalizing {input:?}");
        }
    }

    #[test]
    fn test_fallback_on_tokenize_error() {
        for input in ["\"", "\"\\", "a\r\nb", "a  \"open"] {
            let normalized = normalize_header(input);
            assert!(matches!(normalized, Cow::Borrowed(_)));
            assert_eq!(normalized, input);
        }
    }

    #[test]
    fn test_fallback_on_undecodable() {
        let input = "a  \u{fffd}b ,  c";
        assert_eq!(normalize_header(input), input);

        let input = "a\u{fffd}  b";
        assert_eq!(normalize_header(input), input);

        // inside a token, not at a boundary
        assert_eq!(normalize_header("a\u{fffd}b ,  c"), "a\u{fffd}b,c");
    }

    #[test]
    fn test_never_longer() {
        let inputs = ["", "   ", "a   b   c", "x=\"  y  \"", "\"open", "a\u{7f}", "ü  ,  ö"];
        for input in inputs {
            assert!(normalize_header(input).len() <= input.len(), "{input:?} got longer");
        }
    }

    #[test]
    fn test_same_tokens_after_normalize() {
        let inputs: &[(&str, Result<&[&str], TokenizeError>)] = &[
            ("", Ok(&[])),
            (" ", Ok(&[])),
            ("a", Ok(&["a"])),
            ("aaaa", Ok(&["aaaa"])),
            ("a bb ccc", Ok(&["a", "bb", "ccc"])),
            ("\"\\", Err(TokenizeError::UnterminatedEscape)),
            ("\"", Err(TokenizeError::UnterminatedString)),
            ("\r", Err(TokenizeError::UnexpectedControlCharacter)),
            ("\t", Ok(&[])),
            (" \t a  \t\t  ", Ok(&["a"])),
            (r#""a  \" b" c"#, Ok(&[r#""a  \" b""#, "c"])),
            ("<>", Ok(&["<", ">"])),
        ];

        for (input, expected) in inputs {
            let normalized = normalize_header(input);
            let tokens = tokenize(&normalized).map(|tokens| tokens.iter().map(|t| t.as_str()).collect::<Vec<_>>());
            let expected = expected.map(|tokens| tokens.to_vec());
            assert_eq!(tokens, expected, "tokenizing normalized {normalized:?}");
        }
    }
}
