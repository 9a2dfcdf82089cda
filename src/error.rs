use logos::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Error {
    #[error("Malformed data URL")]
    MalformedDataUrl,
    #[error("Invalid parameter '{0}'")]
    InvalidParameter(String, Span),
    #[error("Duplicate parameter '{0}'")]
    DuplicateParameter(String, Span),
    #[error("Malformed data")]
    MalformedData(Span),
}

impl Error {
    fn format_message(
        message: &dyn ToString,
        source: &str,
        range: &Span,
    ) -> String {
        let message = message.to_string();
        let column = range.start.min(source.len());
        // Underline at least one caret, even for zero-width spans
        let underline_len = range.end.saturating_sub(range.start).max(1);
        let caret = " ".repeat(column) + &"^".repeat(underline_len);
        format!("{message}\n{source}\n{caret}")
    }

    #[rustfmt::skip]
    pub fn full_message(&self, source: &str) -> String {
        match self {
            Error::MalformedDataUrl => Self::format_message(self, source, &(0..source.len())),
            Error::InvalidParameter(_, range) => Self::format_message(self, source, range),
            Error::DuplicateParameter(_, range) => Self::format_message(self, source, range),
            Error::MalformedData(range) => Self::format_message(self, source, range),
        }
    }
}

impl Default for Error {
    fn default() -> Self { Error::MalformedData(Span::default()) }
}

pub type Result<T> = std::result::Result<T, Error>;
