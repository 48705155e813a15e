//! Parsing of HTTP header values built on the RFC 7230 token grammar.
//!
//! This module turns raw header values into tokens, a normalized string, or
//! a list of key/value parts. Data flows one way:
//!
//! ```text
//! raw value --tokenize--> tokens --+--> normalize_header --> canonical string
//!                                  |
//!                                  +--> parse_header -----> HeaderParts
//! ```
//!
//! # Components
//!
//! - [`tokenize`]: Splits a value into [`Token`]s
//!   - Bare tokens, quoted strings and single delimiters
//!   - Rejects control characters outside of quoted strings
//!
//! - [`normalize_header`]: Removes optional whitespace
//!   - Never fails, returns the input unchanged when it can't be tokenized
//!
//! - [`parse_header`]: Parses comma-separated `key[=value]` lists
//!   - Used for headers such as `Vary` and `Cache-Control`
//!   - [`HeaderParts`] renders back into canonical form
//!
//! - [`HeaderValueExt`] and [`HeaderMapExt`]: The same operations on `http` crate types
//!
//! # Errors
//!
//! - [`TokenizeError`]: The value breaks the token grammar
//! - [`ParseError`]: The value is not a well-formed list

mod error;
mod ext;
mod normalize;
mod parts;
mod token;

pub use error::ParseError;
pub use error::TokenizeError;

pub use token::Token;
pub use token::is_ctl;
pub use token::is_tspecial;
pub use token::tokenize;
pub use token::unquote;

pub use normalize::normalize_header;

pub use parts::HeaderPart;
pub use parts::HeaderParts;
pub use parts::parse_header;

pub use ext::HeaderMapExt;
pub use ext::HeaderValueExt;
