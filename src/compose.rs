use thiserror::Error;

use crate::info::DataUrlInfo;
use crate::token::{Encoding, percent_encode};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The media type would not survive a round trip through the wire
    /// format. It is the one header component written unescaped, so it
    /// must be empty or `type/subtype` with both halves RFC 2045 tokens.
    #[error("Invalid media type '{0}'")]
    InvalidMime(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Options for [`compose_data_url`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Carry the payload as base64 behind a `;base64` header flag instead
    /// of percent-encoding it. Chosen independently of
    /// [`DataUrlInfo::is_base64`]; pass `info.is_base64` here to preserve
    /// the wire form a parsed URL arrived in.
    pub base64: bool,
}

/// Composes an RFC 2397 data URL from a parsed representation.
///
/// The header is the media type followed by the parameters in the map's
/// insertion order, each as `;key=value` with both sides percent-encoded
/// independently, so delimiter characters never reach the wire raw. An
/// empty media type is permitted and produces the `data:,`-style shorthand
/// that re-parses via the defaulting rules.
///
/// # Example
///
/// ```rust
/// # use dataurl_parse::{DataUrlInfo, ComposeOptions, compose_data_url};
/// let info = DataUrlInfo::new("text/plain", b"hello".to_vec());
/// let url = compose_data_url(&info, ComposeOptions::default()).unwrap();
/// assert_eq!(url, "data:text/plain,hello");
/// ```
pub fn compose_data_url(
    info: &DataUrlInfo,
    options: ComposeOptions,
) -> Result<String> {
    if !info.mime.is_empty() && !is_valid_mime(&info.mime) {
        return Err(Error::InvalidMime(info.mime.clone()));
    }

    let mut header = info.mime.clone();
    for (key, value) in &info.parameters {
        header.push(';');
        header.push_str(&percent_encode(key.as_bytes()));
        header.push('=');
        header.push_str(&percent_encode(value.as_bytes()));
    }

    let encoding = if options.base64 {
        header.push_str(";base64");
        Encoding::Base64
    } else {
        Encoding::Percent
    };

    Ok(format!("data:{},{}", header, encoding.encode(&info.data)))
}

//
// === Private Functions ===
//

fn is_valid_mime(mime: &str) -> bool {
    match mime.split_once('/') {
        Some((kind, subtype)) => is_token(kind) && is_token(subtype),
        None => false,
    }
}

/// RFC 2045 token: printable ASCII without space or tspecials.
fn is_token(text: &str) -> bool {
    !text.is_empty()
        && text.bytes().all(|byte| {
            byte.is_ascii_graphic()
                && !matches!(
                    byte,
                    b'(' | b')'
                        | b'<'
                        | b'>'
                        | b'@'
                        | b','
                        | b';'
                        | b':'
                        | b'\\'
                        | b'"'
                        | b'/'
                        | b'['
                        | b']'
                        | b'?'
                        | b'='
                )
        })
}
