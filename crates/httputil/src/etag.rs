//! Entity tag helpers, as defined in
//! [RFC 7232 Section 2.3](https://tools.ietf.org/html/rfc7232#section-2.3).
//!
//! ```text
//! entity-tag = [ weak ] opaque-tag
//! weak       = %x57.2F ; "W/", case-sensitive
//! opaque-tag = DQUOTE *etagc DQUOTE
//! etagc      = %x21 / %x23-7E / obs-text
//! ```
//!
//! The comparison functions follow
//! [RFC 7232 Section 2.3.2](https://tools.ietf.org/html/rfc7232#section-2.3.2):
//!
//! | ETag 1  | ETag 2  | Strong Comparison | Weak Comparison |
//! |---------|---------|-------------------|-----------------|
//! | `W/"1"` | `W/"1"` | no match          | match           |
//! | `W/"1"` | `W/"2"` | no match          | no match        |
//! | `W/"1"` | `"1"`   | no match          | match           |
//! | `"1"`   | `"1"`   | match             | match           |

const WEAK_PREFIX: &str = "W/";

#[inline]
fn is_etagc(b: u8) -> bool {
    b >= 0x21 && b != b'"' && b != 0x7f
}

/// Checks whether `tag` is a well-formed weak or strong entity tag.
///
/// # Example
///
/// ```
/// use micro_httputil::etag::etag_is_valid;
///
/// assert!(etag_is_valid(r#""xyzzy""#));
/// assert!(etag_is_valid(r#"W/"xyzzy""#));
/// assert!(!etag_is_valid(r#"w/"xyzzy""#));
/// ```
pub fn etag_is_valid(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    let opaque = bytes.strip_prefix(WEAK_PREFIX.as_bytes()).unwrap_or(bytes);

    match opaque {
        [b'"', content @ .., b'"'] => content.iter().copied().all(is_etagc),
        _ => false,
    }
}

/// Checks whether two entity tags are equivalent under strong comparison.
///
/// Both tags must be strong and identical. The second tag is not validated:
/// anything that is not a strong tag, malformed input included, compares as
/// not equal.
pub fn etags_equal_strong(a: &str, b: &str) -> bool {
    a.starts_with('"') && a == b
}

/// Checks whether two entity tags are equivalent under weak comparison.
///
/// The tags are compared after removing the weakness indicator from each.
pub fn etags_equal_weak(a: &str, b: &str) -> bool {
    strip_weak(a) == strip_weak(b)
}

fn strip_weak(tag: &str) -> &str {
    match tag.strip_prefix(WEAK_PREFIX) {
        Some(opaque) if !opaque.is_empty() => opaque,
        _ => tag,
    }
}

/// Splits a comma-separated list of entity tags, as found in `If-Match` and
/// `If-None-Match`.
///
/// Whitespace around the tags is skipped. A tag ends right after its second
/// double quote, so commas inside a tag don't split it. The tags are not
/// validated, use [`etag_is_valid`] on each of them.
///
/// # Example
///
/// ```
/// use micro_httputil::etag::etags_split;
///
/// assert_eq!(etags_split(r#""a,b", W/"c" ,"d""#), [r#""a,b""#, r#"W/"c""#, r#""d""#]);
/// ```
pub fn etags_split(list: &str) -> Vec<&str> {
    let bytes = list.as_bytes();
    let n = bytes.len();

    let mut tags = Vec::new();
    let mut i = skip_whitespace(bytes, 0);
    while i < n {
        let start = i;

        let mut quotes = 0;
        while i < n {
            if bytes[i] == b'"' {
                quotes += 1;
            }
            i += 1;
            if quotes == 2 {
                break;
            }
        }
        tags.push(&list[start..i]);

        i = skip_whitespace(bytes, i);
        if i < n && bytes[i] == b',' {
            i += 1;
        }
        i = skip_whitespace(bytes, i);
    }
    tags
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && matches!(bytes[i], b' ' | b'\t') {
        i += 1;
    }
    i
}
