//! HTTP date parsing, as described in
//! [RFC 7231 Section 7.1.1.1](https://tools.ietf.org/html/rfc7231#section-7.1.1.1).
//!
//! Three formats are accepted:
//!
//! ```text
//! Sun, 06 Nov 1994 08:49:37 GMT    ; IMF-fixdate
//! Sunday, 06-Nov-94 08:49:37 GMT   ; obsolete RFC 850 format
//! Sun Nov  6 08:49:37 1994         ; ANSI C's asctime() format
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::trace;

/// Converts an HTTP date string into a [`SystemTime`].
///
/// If the date string is empty or malformed, [`UNIX_EPOCH`] is returned instead.
///
/// # Example
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use micro_httputil::date::parse_date;
///
/// let expected = UNIX_EPOCH + Duration::from_secs(784_111_777);
/// assert_eq!(parse_date("Sun, 06 Nov 1994 08:49:37 GMT"), expected);
/// assert_eq!(parse_date("not a date"), UNIX_EPOCH);
/// ```
pub fn parse_date(text: &str) -> SystemTime {
    if text.is_empty() {
        return UNIX_EPOCH;
    }

    httpdate::parse_http_date(text).unwrap_or_else(|e| {
        trace!(text, cause = %e, "malformed http date");
        UNIX_EPOCH
    })
}

/// Formats a [`SystemTime`] as an IMF-fixdate, the format to use when generating headers.
pub fn fmt_date(time: SystemTime) -> String {
    httpdate::fmt_http_date(time)
}
