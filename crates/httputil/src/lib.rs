//! Parsing helpers for HTTP header values
//!
//! This crate provides small, allocation-conscious helpers for working with header
//! values according to RFC 7230, RFC 7231 and RFC 7232. All operations are pure
//! functions over values that were already extracted from a message; no I/O is done.
//!
//! # Features
//!
//! - Tokenizing header values with the RFC 7230 token grammar
//! - Normalizing header values by removing optional whitespace
//! - Parsing comma-separated `key[=value]` lists such as `Cache-Control` and `Vary`
//! - Validating, comparing and splitting entity tags
//! - Parsing the three HTTP date formats
//! - Extension traits for `http::HeaderValue` and `http::HeaderMap`
//!
//! # Example
//!
//! ```
//! use http::{HeaderMap, HeaderValue};
//! use http::header::CACHE_CONTROL;
//! use micro_httputil::header::{normalize_header, parse_header, HeaderMapExt};
//!
//! assert_eq!(normalize_header("max-age = 60 ,  private"), "max-age=60,private");
//!
//! let parts = parse_header("max-age = 60 ,  private").unwrap();
//! assert_eq!(parts.to_string(), "max-age=60, private");
//!
//! let mut headers = HeaderMap::new();
//! headers.append(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
//! headers.append(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
//!
//! let parts = headers.header_parts(CACHE_CONTROL).unwrap();
//! assert!(parts.contains("no-cache"));
//! assert_eq!(parts.get("max-age").and_then(|p| p.value()), Some("0"));
//! ```
//!
//! # Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`header`]: Tokenizer, normalizer and structured parser
//! - [`etag`]: Entity tag validation and comparison
//! - [`date`]: HTTP date parsing
//!
//! # Error Handling
//!
//! The tokenizer and the parser return explicit errors:
//!
//! - [`header::TokenizeError`]: The value breaks the token grammar
//! - [`header::ParseError`]: The value is not a well-formed list
//!
//! The date and entity tag helpers never fail, they return a sentinel or `false`.
//! [`header::normalize_header`] never fails either and falls back to the input.

pub mod date;
pub mod etag;
pub mod header;

mod utils;
pub(crate) use utils::ensure;
