//! Structured parsing of comma-separated header values.
//!
//! Many HTTP headers are defined as comma-separated lists of tokens and
//! `key=value` pairs, for example:
//!
//! ```text
//! Cache-Control: no-cache, max-age=0, private="Set-Cookie"
//! Vary: Accept-Encoding, User-Agent
//! ```
//!
//! [`parse_header`] turns such a value into [`HeaderParts`], an ordered list
//! of [`HeaderPart`]s, and [`HeaderParts`] renders back into the canonical
//! `key, key=value` form through its `Display` implementation.
//!
//! Values are kept literally: a quoted value keeps its quotes and escapes,
//! use [`HeaderPart::unquoted_value`] to get at the content.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::ensure;
use crate::header::ParseError;
use crate::header::token::{tokenize, unquote};

/// A single element of a list header: a key with an optional value.
///
/// An empty value means that no value was present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderPart {
    key: String,
    value: String,
}

impl HeaderPart {
    /// Creates a new part, pass an empty `value` for a bare key.
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self { key: key.into(), value: value.into() }
    }

    /// Returns the key of this part.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the literal value of this part, or `None` if no value was present.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        (!self.value.is_empty()).then_some(self.value.as_str())
    }

    /// Returns the value with surrounding quotes removed and escapes resolved.
    pub fn unquoted_value(&self) -> Option<Cow<'_, str>> {
        self.value().map(unquote)
    }

    /// Consumes the part and returns its key and value.
    pub fn into_inner(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for HeaderPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => f.write_str(&self.key),
        }
    }
}

/// The parsed form of a comma-separated header value.
///
/// The order of the parts is the order in which they appeared in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct HeaderParts {
    inner: Vec<HeaderPart>,
}

impl HeaderParts {
    /// Creates an empty list of parts.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeaderPart> {
        self.inner.iter()
    }

    /// Appends a part to the end of the list.
    pub fn push(&mut self, part: HeaderPart) {
        self.inner.push(part);
    }

    /// Returns the first part whose key matches `key`.
    ///
    /// Keys are tokens and compared ASCII case-insensitively, so `get("max-age")`
    /// finds `Max-Age=60`.
    pub fn get(&self, key: &str) -> Option<&HeaderPart> {
        self.inner.iter().find(|part| part.key.eq_ignore_ascii_case(key))
    }

    /// Returns true if a part with the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Consumes the list and returns the parts.
    pub fn into_inner(self) -> Vec<HeaderPart> {
        self.inner
    }
}

impl AsRef<[HeaderPart]> for HeaderParts {
    fn as_ref(&self) -> &[HeaderPart] {
        &self.inner
    }
}

impl From<Vec<HeaderPart>> for HeaderParts {
    fn from(inner: Vec<HeaderPart>) -> Self {
        Self { inner }
    }
}

impl FromIterator<HeaderPart> for HeaderParts {
    fn from_iter<I: IntoIterator<Item = HeaderPart>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl Extend<HeaderPart> for HeaderParts {
    fn extend<I: IntoIterator<Item = HeaderPart>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl IntoIterator for HeaderParts {
    type Item = HeaderPart;
    type IntoIter = std::vec::IntoIter<HeaderPart>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderParts {
    type Item = &'a HeaderPart;
    type IntoIter = std::slice::Iter<'a, HeaderPart>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Renders the parts as `key, key=value`, the empty list renders as `""`.
impl fmt::Display for HeaderParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.inner.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(part, f)?;
        }
        Ok(())
    }
}

impl FromStr for HeaderParts {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_header(s)
    }
}

/// Parses a header value that is a comma-separated list of tokens and key-value pairs.
///
/// This only works for headers defined that way, e.g. `Vary` and `Cache-Control`.
/// Empty list elements are skipped, so leading, repeated and trailing commas
/// are accepted.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - the value can't be tokenized
/// - two parts are not separated by a comma
/// - a part starts with a quoted string instead of a key
///
/// # Example
///
/// ```
/// use micro_httputil::header::parse_header;
///
/// let parts = parse_header(r#"no-cache, max-age=0, private="Set-Cookie""#).unwrap();
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts.get("max-age").and_then(|p| p.value()), Some("0"));
/// assert_eq!(parts.get("private").and_then(|p| p.value()), Some("\"Set-Cookie\""));
/// assert_eq!(parts.to_string(), r#"no-cache, max-age=0, private="Set-Cookie""#);
/// ```
pub fn parse_header(value: &str) -> Result<HeaderParts, ParseError> {
    let tokens = tokenize(value)?;

    let mut parts = HeaderParts::new();
    let mut require_comma = false;

    let mut rest = tokens.as_slice();
    while let [token, tail @ ..] = rest {
        if token.is_special(',') {
            require_comma = false;
            rest = tail;
            continue;
        }

        ensure!(!require_comma, ParseError::MissingComma);
        ensure!(!token.is_quoted(), ParseError::UnexpectedQuotedString);

        let (part_value, tail) = match tail {
            [eq, part_value, tail @ ..] if eq.is_special('=') => (part_value.as_str(), tail),
            _ => ("", tail),
        };

        parts.push(HeaderPart::new(token.as_str(), part_value));
        require_comma = true;
        rest = tail;
    }

    Ok(parts)
}
