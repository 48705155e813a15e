//! Lexical scanning of HTTP header values.
//!
//! This module splits a header value into the tokens defined by
//! [RFC 7230 Section 3.2.6](https://tools.ietf.org/html/rfc7230#section-3.2.6):
//!
//! - bare tokens, runs of printable characters that are not delimiters
//! - quoted strings, kept verbatim including their quotes and escapes
//! - single delimiter characters such as `,`, `;` or `=`
//!
//! Whitespace between tokens is optional and is dropped by the scanner.
//! The scan runs over Unicode scalar values, so a multi-byte character is
//! never split across tokens.

use std::borrow::Cow;
use std::fmt;

use super::TokenizeError;
use ScanState::*;

/// Returns true if `c` is a delimiter in the RFC 7230 token grammar.
///
/// Space and horizontal tab are included, they separate tokens without
/// producing one.
#[inline]
pub const fn is_tspecial(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '<' | '>' | '@' | ',' | ';' | ':' | '\\' | '"' | '/' | '[' | ']' | '?' | '=' | '{' | '}' | ' ' | '\t'
    )
}

/// Returns true if `c` is an ASCII control character (`0x00..=0x1f` or `0x7f`).
#[inline]
pub const fn is_ctl(c: char) -> bool {
    (c as u32) < 32 || c as u32 == 127
}

/// A single lexical unit of a header value.
///
/// The token borrows its text from the scanned header value. A quoted string
/// keeps its surrounding quotes and escape sequences, use [`Token::unquote`]
/// to get at the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a>(&'a str);

impl<'a> Token<'a> {
    /// Returns the literal text of this token.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns true if this token is a quoted string.
    #[inline]
    pub fn is_quoted(&self) -> bool {
        self.0.starts_with('"')
    }

    /// Returns true if this token is exactly the delimiter `c`.
    #[inline]
    pub fn is_special(&self, c: char) -> bool {
        let mut chars = self.0.chars();
        chars.next() == Some(c) && chars.next().is_none() && is_tspecial(c)
    }

    /// Returns the first character of this token.
    ///
    /// Tokens produced by [`tokenize`] are never empty.
    #[inline]
    pub fn first_char(&self) -> Option<char> {
        self.0.chars().next()
    }

    /// Returns the content of a quoted string with its escapes resolved.
    ///
    /// Tokens that are not quoted strings are returned unchanged.
    pub fn unquote(&self) -> Cow<'a, str> {
        unquote(self.0)
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Strips the surrounding quotes of a quoted string and resolves `\x` escapes.
///
/// Values that are not enclosed in double quotes are returned unchanged. No
/// allocation happens unless the content contains an escape.
pub fn unquote(value: &str) -> Cow<'_, str> {
    let inner = match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(inner) => inner,
        None => return Cow::Borrowed(value),
    };

    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }

    let mut content = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // a trailing backslash has nothing to escape and is kept
            content.push(chars.next().unwrap_or('\\'));
        } else {
            content.push(c);
        }
    }
    Cow::Owned(content)
}

/// The state of the scanner between two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside of a quoted string
    Bare,
    /// Inside a quoted string
    Quoted,
    /// Inside a quoted string, right after a backslash
    QuotedEscaped,
}

/// Splits a header value into tokens.
///
/// The value is scanned once from left to right. Delimiters other than
/// whitespace become single-character tokens, quoted strings become one token
/// each, whitespace outside of quoted strings is skipped.
///
/// # Errors
///
/// Returns `TokenizeError` if:
/// - a control character appears outside of a quoted string
/// - the value ends right after a backslash inside a quoted string
/// - the value ends inside a quoted string
///
/// No tokens are returned when scanning fails.
///
/// # Example
///
/// ```
/// use micro_httputil::header::tokenize;
///
/// let tokens = tokenize(r#"max-age=60, foo="a b""#).unwrap();
/// assert_eq!(tokens, ["max-age", "=", "60", ",", "foo", "=", "\"a b\""]);
/// ```
pub fn tokenize(header: &str) -> Result<Vec<Token<'_>>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut state = Bare;
    let mut start = 0;

    for (pos, c) in header.char_indices() {
        state = match state {
            QuotedEscaped => Quoted,

            Quoted => match c {
                '\\' => QuotedEscaped,
                '"' => {
                    let end = pos + 1;
                    tokens.push(Token(&header[start..end]));
                    start = end;
                    Bare
                }
                _ => Quoted,
            },

            Bare if is_tspecial(c) => {
                if pos > start {
                    tokens.push(Token(&header[start..pos]));
                }

                // every delimiter is a single byte
                let next = pos + 1;
                start = next;
                match c {
                    '"' => {
                        start = pos;
                        Quoted
                    }
                    ' ' | '\t' => Bare,
                    _ => {
                        tokens.push(Token(&header[pos..next]));
                        Bare
                    }
                }
            }

            Bare if is_ctl(c) => return Err(TokenizeError::UnexpectedControlCharacter),

            Bare => Bare,
        };
    }

    match state {
        QuotedEscaped => Err(TokenizeError::UnterminatedEscape),
        Quoted => Err(TokenizeError::UnterminatedString),
        Bare => {
            if start < header.len() {
                tokens.push(Token(&header[start..]));
            }
            Ok(tokens)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(header: &str) -> Result<Vec<&str>, TokenizeError> {
        tokenize(header).map(|tokens| tokens.iter().map(Token::as_str).collect())
    }

    #[test]
    fn test_tokenize() {
        let table: &[(&str, Result<&[&str], TokenizeError>)] = &[
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

        for (input, expected) in table {
            let expected = expected.map(|tokens| tokens.to_vec());
            assert_eq!(texts(input), expected, "tokenizing {input:?}");
        }
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(texts("a=1;b,c").unwrap(), ["a", "=", "1", ";", "b", ",", "c"]);
        assert_eq!(texts("text/html").unwrap(), ["text", "/", "html"]);
        assert_eq!(texts("(x)[y]{z}").unwrap(), ["(", "x", ")", "[", "y", "]", "{", "z", "}"]);
        assert_eq!(texts("\"a\"b").unwrap(), ["\"a\"", "b"]);
        assert_eq!(texts("a\"b\"").unwrap(), ["a", "\"b\""]);
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(texts("a\u{7f}b"), Err(TokenizeError::UnexpectedControlCharacter));
        assert_eq!(texts("a\nb"), Err(TokenizeError::UnexpectedControlCharacter));
        assert_eq!(texts("a\0"), Err(TokenizeError::UnexpectedControlCharacter));
        // quoted content is not checked
        assert_eq!(texts("\"a\nb\"").unwrap(), ["\"a\nb\""]);
        // escaped quote does not close the string
        assert_eq!(texts(r#""\"" x"#).unwrap(), [r#""\"""#, "x"]);
    }

    #[test]
    fn test_multi_byte_characters() {
        assert_eq!(texts("grüße, ünïcödé").unwrap(), ["grüße", ",", "ünïcödé"]);
        assert_eq!(texts("\"日本\"=語").unwrap(), ["\"日本\"", "=", "語"]);
        assert_eq!(texts("\u{80}"), Ok(vec!["\u{80}"]));
    }

    #[test]
    fn test_token_accessors() {
        let tokens = tokenize(r#"a = "b \" c""#).unwrap();
        assert_eq!(tokens.len(), 3);

        assert!(!tokens[0].is_quoted());
        assert_eq!(tokens[0].first_char(), Some('a'));
        assert!(tokens[1].is_special('='));
        assert!(!tokens[0].is_special('a'));
        assert!(tokens[2].is_quoted());
        assert_eq!(tokens[2].unquote(), "b \" c");
        assert_eq!(tokens[2].to_string(), r#""b \" c""#);
    }

    #[test]
    fn test_unquote() {
        assert!(matches!(unquote("plain"), Cow::Borrowed("plain")));
        assert!(matches!(unquote("\"no escapes\""), Cow::Borrowed("no escapes")));
        assert_eq!(unquote(r#""a\\b\"c""#), r#"a\b"c"#);
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote(r#""a\""#), r#"a\"#);
    }

    #[test]
    fn test_char_classes() {
        for c in "()<>@,;:\\\"/[]?={} \t".chars() {
            assert!(is_tspecial(c), "{c:?} should be a tspecial");
        }
        assert!(!is_tspecial('a'));
        assert!(!is_tspecial('*'));
        assert!(!is_tspecial('-'));

        assert!(is_ctl('\0'));
        assert!(is_ctl('\u{1f}'));
        assert!(is_ctl('\u{7f}'));
        assert!(!is_ctl(' '));
        assert!(!is_ctl('\u{80}'));
    }
}
