use indexmap::IndexMap;
use logos::Span;

use crate::error::{Error, Result};
use crate::info::DataUrlInfo;
use crate::token::{Encoding, percent_decode};

const SCHEME: &str = "data:";

/// Parses an RFC 2397 data URL.
///
/// The input must carry the `data:` scheme and a comma separating the
/// header from the payload. The header's media type and parameters are
/// extracted with percent-escapes resolved, the trailing `base64` flag is
/// recorded, and the payload is decoded with whichever of the two payload
/// encodings the flag selects.
///
/// An absent media type defaults to `text/plain`, and when the header is
/// entirely empty the RFC's `charset=US-ASCII` default is filled in as
/// well.
///
/// # Arguments
///
/// * `src` - The complete data URL.
///
/// # Returns
///
/// * `Ok(DataUrlInfo)` with the media type, parameters in order of
///   appearance, the payload encoding flag, and the decoded payload bytes.
/// * `Err(Error)` if the input does not split as a data URL, a parameter
///   is malformed or repeated, or the payload fails its encoding's
///   grammar.
///
/// # Errors
///
/// Every error is terminal and carries enough position information for
/// [`Error::full_message`](crate::ParseError::full_message) to point at
/// the offending span of the input.
///
/// # Example
///
/// ```rust
/// # use dataurl_parse::parse_data_url;
/// let info = parse_data_url("data:,A%20brief%20note").unwrap();
/// assert_eq!(info.mime, "text/plain");
/// assert_eq!(info.charset(), Some("US-ASCII"));
/// assert_eq!(info.data, b"A brief note");
/// ```
pub fn parse_data_url(src: &str) -> Result<DataUrlInfo> {
    let rest = src.strip_prefix(SCHEME).ok_or(Error::MalformedDataUrl)?;
    let comma = rest.find(',').ok_or(Error::MalformedDataUrl)?;

    let (mime, parameters, is_base64) = parse_header(&rest[..comma])?;

    let encoding = if is_base64 {
        Encoding::Base64
    } else {
        Encoding::Percent
    };
    let data = encoding.decode(&rest[comma + 1..], SCHEME.len() + comma + 1)?;

    Ok(DataUrlInfo { mime, parameters, is_base64, data })
}

//
// === Private Functions ===
//

fn parse_header(
    header: &str,
) -> Result<(String, IndexMap<String, String>, bool)> {
    let mut tokens: Vec<(&str, Span)> = Vec::new();
    let mut cursor = SCHEME.len();
    for token in header.split(';') {
        tokens.push((token, cursor..cursor + token.len()));
        cursor += token.len() + 1;
    }

    // the flag is only ever the last header token
    let is_base64 =
        matches!(tokens.last(), Some((token, _)) if *token == "base64");
    if is_base64 {
        tokens.pop();
    }

    let mut tokens = tokens.into_iter();
    let mime_token = tokens.next().map(|(token, _)| token).unwrap_or("");

    let mut parameters = IndexMap::new();
    for (token, span) in tokens {
        let (key, value) = parse_parameter(token, &span)?;
        if parameters.contains_key(&key) {
            return Err(Error::DuplicateParameter(key, span));
        }
        parameters.insert(key, value);
    }

    // An absent media type means text/plain; with nothing else in the
    // header, the US-ASCII charset default applies as well.
    let mime = if mime_token.is_empty() {
        if parameters.is_empty() {
            parameters.insert("charset".to_string(), "US-ASCII".to_string());
        }
        "text/plain".to_string()
    } else {
        mime_token.to_string()
    };

    Ok((mime, parameters, is_base64))
}

/// Splits one `attribute=value` token on its single `=` and
/// percent-decodes both halves.
fn parse_parameter(token: &str, span: &Span) -> Result<(String, String)> {
    let (raw_key, raw_value) = match token.split_once('=') {
        Some((key, value))
            if !key.is_empty()
                && !value.is_empty()
                && !value.contains('=') =>
        {
            (key, value)
        }
        _ => {
            return Err(Error::InvalidParameter(
                token.to_string(),
                span.clone(),
            ));
        }
    };

    let key = decode_component(raw_key, span.start)?;
    let value =
        decode_component(raw_value, span.start + raw_key.len() + 1)?;
    Ok((key, strip_quotes(value)))
}

/// Percent-decodes one parameter component. Text that fails the escape
/// grammar, or decodes to non-UTF-8 bytes, rejects the parameter.
fn decode_component(text: &str, offset: usize) -> Result<String> {
    let bytes = percent_decode(text, offset).map_err(|err| match err {
        Error::MalformedData(span) => {
            Error::InvalidParameter(text.to_string(), span)
        }
        other => other,
    })?;
    String::from_utf8(bytes).map_err(|_| {
        Error::InvalidParameter(text.to_string(), offset..offset + text.len())
    })
}

/// A quoted value keeps its content; the surrounding quotes are wire
/// syntax, not part of the value.
fn strip_quotes(value: String) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        value[1..value.len() - 1].to_string()
    } else {
        value
    }
}
