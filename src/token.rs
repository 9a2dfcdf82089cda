use base64::Engine as _;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use logos::{Logos, Span};

use crate::error::{Error, Result};

/// Standard base64, padding required, with non-zero trailing bits in the
/// final group tolerated. The group grammar is validated separately before
/// decoding, and that grammar says nothing about trailing bits.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Tokens of the percent-encoded byte grammar. Anything outside these two
/// shapes is a lex error, so driving this lexer over an input doubles as
/// the strict grammar check.
#[derive(Debug, Clone, Logos, PartialEq)]
#[logos(error = Error)]
pub(crate) enum PctToken {
    /// Run of RFC 3986 unreserved characters.
    #[regex(r"[A-Za-z0-9\-._~]+")]
    Unreserved,

    /// `%` followed by exactly two hex digits, carrying the byte they name.
    #[regex(r"%[0-9A-Fa-f]{2}", |lex|
        // the regex guarantees two hex digits
        u8::from_str_radix(&lex.slice()[1..], 16).unwrap()
    )]
    Escape(u8),
}

/// Tokens of the base64 payload grammar. Padded groups are only legal as
/// the final group; `validate_base64` enforces that.
#[derive(Debug, Clone, Logos, PartialEq)]
#[logos(error = Error)]
enum Base64Token {
    /// Full group of four alphabet characters.
    #[regex(r"[A-Za-z0-9+/]{4}")]
    Quad,

    /// Final group encoding two bytes.
    #[regex(r"[A-Za-z0-9+/]{3}=")]
    PadOne,

    /// Final group encoding one byte.
    #[regex(r"[A-Za-z0-9+/]{2}==")]
    PadTwo,
}

/// RFC 3986 unreserved set: ALPHA / DIGIT / `-` / `.` / `_` / `~`.
/// Must agree with the `PctToken::Unreserved` character class.
pub(crate) fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// The payload encoding selected by the `;base64` header flag. The format
/// defines exactly two, each pairing a decoder with an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    Percent,
    Base64,
}

impl Encoding {
    pub(crate) fn decode(self, text: &str, offset: usize) -> Result<Vec<u8>> {
        match self {
            Encoding::Percent => percent_decode(text, offset),
            Encoding::Base64 => base64_decode(text, offset),
        }
    }

    pub(crate) fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Percent => percent_encode(bytes),
            Encoding::Base64 => BASE64.encode(bytes),
        }
    }
}

/// Decodes percent-encoded text into the bytes it denotes.
///
/// The whole input must be a concatenation of unreserved characters and
/// `%XX` escapes; any other byte is rejected. `offset` is the position of
/// `text` within the URL it was cut from, so error spans point into the
/// original input.
pub(crate) fn percent_decode(text: &str, offset: usize) -> Result<Vec<u8>> {
    let mut lexer = PctToken::lexer(text);
    let mut bytes = Vec::with_capacity(text.len());
    while let Some(token) = lexer.next() {
        match token {
            Ok(PctToken::Unreserved) => {
                bytes.extend_from_slice(lexer.slice().as_bytes());
            }
            Ok(PctToken::Escape(byte)) => bytes.push(byte),
            Err(_) => {
                return Err(Error::MalformedData(shift(lexer.span(), offset)));
            }
        }
    }
    Ok(bytes)
}

/// Encodes bytes as percent-encoded text. Unreserved bytes pass through
/// verbatim; every other byte becomes a lowercase `%XX` escape.
pub(crate) fn percent_encode(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for &byte in bytes {
        if is_unreserved(byte) {
            text.push(byte as char);
        } else {
            text.push('%');
            text.push_str(&hex::encode([byte]));
        }
    }
    text
}

/// Decodes a base64 payload, checking the group grammar first. A permissive
/// decoder that skips invalid characters would accept payloads the format
/// forbids, so it must not stand in for the grammar check.
pub(crate) fn base64_decode(text: &str, offset: usize) -> Result<Vec<u8>> {
    validate_base64(text, offset)?;
    BASE64
        .decode(text)
        .map_err(|_| Error::MalformedData(shift(0..text.len(), offset)))
}

/// A base64 payload is any number of full groups, with at most one padded
/// group, which must come last.
fn validate_base64(text: &str, offset: usize) -> Result<()> {
    let mut lexer = Base64Token::lexer(text);
    while let Some(token) = lexer.next() {
        match token {
            Ok(Base64Token::Quad) => {}
            Ok(Base64Token::PadOne) | Ok(Base64Token::PadTwo) => {
                if !lexer.remainder().is_empty() {
                    return Err(Error::MalformedData(shift(
                        lexer.span(),
                        offset,
                    )));
                }
            }
            Err(_) => {
                return Err(Error::MalformedData(shift(lexer.span(), offset)));
            }
        }
    }
    Ok(())
}

fn shift(span: Span, offset: usize) -> Span {
    (span.start + offset)..(span.end + offset)
}
