//! Charset transcoding seam.
//!
//! The codec treats payloads as opaque bytes. Turning those bytes into
//! text requires knowledge of the charset named by the `charset`
//! parameter, and that knowledge lives behind [`CharsetTranscoder`] so a
//! host can plug in whatever transcoding library it already carries. The
//! codec itself never transcodes.

use crate::info::DataUrlInfo;

/// Converts between raw payload bytes and text for a named charset.
pub trait CharsetTranscoder {
    /// Decodes `bytes` as `charset`, or `None` if the charset is unknown
    /// to this transcoder or the bytes are not valid for it.
    fn decode(&self, charset: &str, bytes: &[u8]) -> Option<String>;

    /// Encodes `text` as `charset`, or `None` if the charset is unknown
    /// to this transcoder or the text is not representable in it.
    fn encode(&self, charset: &str, text: &str) -> Option<Vec<u8>>;
}

/// Transcoder for the charsets expressible without conversion tables:
/// `US-ASCII` and `UTF-8`. Charset names match case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTranscoder;

impl CharsetTranscoder for StdTranscoder {
    fn decode(&self, charset: &str, bytes: &[u8]) -> Option<String> {
        if charset.eq_ignore_ascii_case("US-ASCII") {
            if bytes.is_ascii() {
                Some(String::from_utf8_lossy(bytes).into_owned())
            } else {
                None
            }
        } else if charset.eq_ignore_ascii_case("UTF-8") {
            String::from_utf8(bytes.to_vec()).ok()
        } else {
            None
        }
    }

    fn encode(&self, charset: &str, text: &str) -> Option<Vec<u8>> {
        if charset.eq_ignore_ascii_case("US-ASCII") {
            if text.is_ascii() {
                Some(text.as_bytes().to_vec())
            } else {
                None
            }
        } else if charset.eq_ignore_ascii_case("UTF-8") {
            Some(text.as_bytes().to_vec())
        } else {
            None
        }
    }
}

impl DataUrlInfo {
    /// Materializes the payload as text using the `charset` parameter and
    /// the given transcoder. Absent a `charset` parameter, the RFC's
    /// `US-ASCII` default applies.
    ///
    /// This is a convenience layer over the codec, not part of it: the
    /// parse/compose round trip never depends on the payload being text.
    pub fn decode_text<T: CharsetTranscoder>(
        &self,
        transcoder: &T,
    ) -> Option<String> {
        let charset = self.charset().unwrap_or("US-ASCII");
        transcoder.decode(charset, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_transcoder_ascii() {
        let transcoder = StdTranscoder;
        assert_eq!(
            transcoder.decode("US-ASCII", b"A brief note").as_deref(),
            Some("A brief note")
        );
        assert_eq!(transcoder.decode("us-ascii", &[0xbe, 0xd3]), None);
        assert_eq!(
            transcoder.encode("US-ASCII", "note").as_deref(),
            Some(&b"note"[..])
        );
        assert_eq!(transcoder.encode("US-ASCII", "caf\u{e9}"), None);
    }

    #[test]
    fn test_std_transcoder_utf8() {
        let transcoder = StdTranscoder;
        let bytes = "caf\u{e9}".as_bytes();
        assert_eq!(
            transcoder.decode("utf-8", bytes).as_deref(),
            Some("caf\u{e9}")
        );
        assert_eq!(transcoder.decode("UTF-8", &[0xff]), None);
        assert_eq!(
            transcoder.encode("UTF-8", "caf\u{e9}").as_deref(),
            Some(bytes)
        );
    }

    #[test]
    fn test_unknown_charset() {
        let transcoder = StdTranscoder;
        assert_eq!(transcoder.decode("klingon", b"abc"), None);
        assert_eq!(transcoder.encode("klingon", "abc"), None);
    }
}
