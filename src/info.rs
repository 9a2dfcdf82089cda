use indexmap::IndexMap;

/// The parsed representation of a data URL.
///
/// [`parse_data_url`](crate::parse_data_url) constructs one of these;
/// [`compose_data_url`](crate::compose_data_url) reads one back out to
/// text. The fields are public so callers can adjust the record between
/// the two, for example to re-encode a percent-encoded URL as base64.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataUrlInfo {
    /// The `type/subtype` media type. Defaulting during parsing guarantees
    /// this is never empty; composing an empty one is permitted and
    /// produces a URL that leans on the same defaulting when re-parsed.
    pub mime: String,

    /// Media type parameters, in the order they appeared. Keys are unique;
    /// composition walks this map in insertion order. Two infos compare
    /// equal regardless of parameter order.
    pub parameters: IndexMap<String, String>,

    /// Whether the payload was carried as base64 rather than
    /// percent-encoded. Records the wire form only; `data` holds the same
    /// bytes either way.
    pub is_base64: bool,

    /// The decoded payload.
    pub data: Vec<u8>,
}

impl DataUrlInfo {
    /// Creates an info with the given media type and payload, no
    /// parameters.
    pub fn new(mime: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        DataUrlInfo {
            mime: mime.into(),
            data: data.into(),
            ..Default::default()
        }
    }

    /// The `charset` parameter, if one is present.
    pub fn charset(&self) -> Option<&str> {
        self.parameters.get("charset").map(String::as_str)
    }
}
