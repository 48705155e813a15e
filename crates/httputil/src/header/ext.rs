//! Extension traits applying the header helpers to the `http` crate types.
//!
//! Header values arrive as [`HeaderValue`]s inside a [`HeaderMap`]. These
//! traits save the caller the conversion to `&str` and handle headers that
//! are split over several field lines: per
//! [RFC 7230 Section 3.2.2](https://tools.ietf.org/html/rfc7230#section-3.2.2)
//! multiple lines of a list header mean the same as one comma-joined line.

use std::str;
use std::time::SystemTime;

use http::header::AsHeaderName;
use http::{HeaderMap, HeaderValue};
use tracing::trace;

use super::{HeaderParts, ParseError, normalize_header, parse_header};
use crate::date::parse_date;
use crate::etag::etags_split;

/// Header helpers on a single [`HeaderValue`].
pub trait HeaderValueExt {
    /// Returns the normalized form of this value.
    ///
    /// Values that are not valid UTF-8 or can't be normalized are returned unchanged.
    fn normalized(&self) -> HeaderValue;

    /// Parses this value as a comma-separated list of parts.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidUtf8` if the value is not UTF-8, otherwise
    /// the errors of [`parse_header`].
    fn parse_parts(&self) -> Result<HeaderParts, ParseError>;
}

impl HeaderValueExt for HeaderValue {
    fn normalized(&self) -> HeaderValue {
        let Ok(value) = str::from_utf8(self.as_bytes()) else {
            trace!("header value is not utf-8, keep it unchanged");
            return self.clone();
        };

        let normalized = normalize_header(value);
        if normalized == value {
            return self.clone();
        }

        match HeaderValue::from_str(&normalized) {
            Ok(mut header_value) => {
                header_value.set_sensitive(self.is_sensitive());
                header_value
            }
            Err(e) => {
                trace!(cause = %e, "normalized value is not a valid header value, keep it unchanged");
                self.clone()
            }
        }
    }

    fn parse_parts(&self) -> Result<HeaderParts, ParseError> {
        parse_header(str::from_utf8(self.as_bytes())?)
    }
}

/// Header helpers on a whole [`HeaderMap`].
pub trait HeaderMapExt {
    /// Parses all field lines of the header `name` and joins their parts in order.
    ///
    /// An absent header yields empty parts.
    ///
    /// # Errors
    ///
    /// Returns the first error of [`HeaderValueExt::parse_parts`] among the lines.
    fn header_parts<K: AsHeaderName>(&self, name: K) -> Result<HeaderParts, ParseError>;

    /// Splits all field lines of an entity tag list header such as `If-None-Match`.
    ///
    /// Lines that are not UTF-8 are skipped.
    fn etags<K: AsHeaderName>(&self, name: K) -> Vec<&str>;

    /// Parses the date header `name`.
    ///
    /// Returns `None` if the header is absent; a malformed date yields
    /// [`UNIX_EPOCH`](std::time::UNIX_EPOCH), like [`parse_date`].
    fn date<K: AsHeaderName>(&self, name: K) -> Option<SystemTime>;
}

impl HeaderMapExt for HeaderMap {
    fn header_parts<K: AsHeaderName>(&self, name: K) -> Result<HeaderParts, ParseError> {
        let mut parts = HeaderParts::new();
        for value in self.get_all(name) {
            parts.extend(value.parse_parts()?);
        }
        Ok(parts)
    }

    fn etags<K: AsHeaderName>(&self, name: K) -> Vec<&str> {
        self.get_all(name)
            .iter()
            .filter_map(|value| str::from_utf8(value.as_bytes()).ok())
            .flat_map(etags_split)
            .collect()
    }

    fn date<K: AsHeaderName>(&self, name: K) -> Option<SystemTime> {
        let value = self.get(name)?;
        Some(str::from_utf8(value.as_bytes()).map_or(SystemTime::UNIX_EPOCH, parse_date))
    }
}

/// Renders the parts into a single header value.
impl TryFrom<&HeaderParts> for HeaderValue {
    type Error = ParseError;

    fn try_from(parts: &HeaderParts) -> Result<Self, Self::Error> {
        HeaderValue::try_from(parts.to_string()).map_err(ParseError::invalid_header_value)
    }
}
