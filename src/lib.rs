//! # RFC 2397 data URL Parser and Composer
//!
//! This crate provides tools for parsing and composing the [RFC
//! 2397](https://datatracker.ietf.org/doc/html/rfc2397) `data:` URL scheme:
//! a MIME-typed, optionally parameterized binary payload embedded directly
//! in a URL as text.
//!
//! It is intended for use in testing, debugging, asset inlining, and other
//! scenarios where a self-contained textual representation of typed binary
//! data is useful. The whole URL is held in memory; it is not a streaming
//! codec.
//!
//! The primary functions provided are:
//!
//! - `parse_data_url`: Splits a data URL into its media type, parameters,
//!   and decoded payload bytes.
//! - `compose_data_url`: Serializes a [`DataUrlInfo`] back into a data URL,
//!   with either percent-encoded or base64 payload output.
//!
//! | Form                                           | Meaning                                         |
//! | ---------------------------------------------- | ----------------------------------------------- |
//! | `data:,A%20brief%20note`                       | `text/plain;charset=US-ASCII`, percent payload  |
//! | `data:text/plain;charset=iso-8859-7,%be%d3%be` | explicit media type and charset                 |
//! | `data:text/plain;foo=bar;answer=42,hello`      | additional media type parameters                |
//! | `data:;base64,QSBicmllZiBub3Rl`                | defaulted media type, base64 payload            |
//! | `data:image/gif;base64,R0lGODlh...`            | binary payload in base64                        |
//!
//! ## Payload encodings
//!
//! The format carries its payload in exactly one of two encodings, selected
//! by the trailing `;base64` header flag: strict RFC 3986 percent-encoding
//! (unreserved characters and `%XX` escapes, nothing else), or canonical
//! base64 with `=` padding. Parsing records which one was used in
//! [`DataUrlInfo::is_base64`]; composing chooses via [`ComposeOptions`],
//! independent of how the info was originally parsed.
//!
//! ## Charsets
//!
//! The payload of a `DataUrlInfo` is opaque bytes. Turning those bytes into
//! text according to the `charset` parameter is the host's concern; the
//! [`CharsetTranscoder`] trait is the seam for it, and [`StdTranscoder`]
//! covers `US-ASCII` and `UTF-8` out of the box.
//!
//! ## Example
//!
//! ```
//! use dataurl_parse::{compose_data_url, parse_data_url, ComposeOptions};
//!
//! let info = parse_data_url("data:text/plain;charset=utf-8,hello%20world").unwrap();
//! assert_eq!(info.mime, "text/plain");
//! assert_eq!(info.data, b"hello world");
//!
//! let url = compose_data_url(&info, ComposeOptions { base64: true }).unwrap();
//! assert_eq!(url, "data:text/plain;charset=utf-8;base64,aGVsbG8gd29ybGQ=");
//! ```

mod error;
pub use error::{Error as ParseError, Result as ParseResult};

mod info;
pub use info::DataUrlInfo;

mod token;

mod parse;
pub use parse::parse_data_url;

mod compose;
pub use compose::{
    compose_data_url,
    ComposeOptions,
    Error as ComposeError,
    Result as ComposeResult,
};

mod charset;
pub use charset::{CharsetTranscoder, StdTranscoder};
