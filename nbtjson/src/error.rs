//! Contains the Error and Result type used by the decoder, encoder and the
//! adapters around them.
use std::fmt;

/// Various errors that can occur while reading or writing NBT.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The decoder hit a structural violation: an unknown tag, truncated
    /// input, a negative count, invalid UTF-8 or a missing compound end.
    /// `offset` is the byte position where the fault was detected.
    MalformedInput { offset: usize, detail: String },

    /// The encoder was given a tree it cannot represent, such as a list with
    /// mixed element kinds or a string too long for its length prefix.
    InvalidTree { reason: String },

    /// The JSON text form did not describe a valid tree.
    Text { detail: String },

    /// Writing to a sink or (de)compressing failed.
    Io(String),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedInput { offset, detail } => {
                write!(f, "malformed nbt at byte {}: {}", offset, detail)
            }
            Error::InvalidTree { reason } => write!(f, "invalid nbt tree: {}", reason),
            Error::Text { detail } => write!(f, "invalid nbt json: {}", detail),
            Error::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl Error {
    /// Byte offset of a decode failure, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::MalformedInput { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Error::MalformedInput { .. })
    }

    pub fn is_invalid_tree(&self) -> bool {
        matches!(self, Error::InvalidTree { .. })
    }

    pub(crate) fn malformed(offset: usize, detail: impl Into<String>) -> Error {
        Error::MalformedInput {
            offset,
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid_tag(offset: usize, tag: u8) -> Error {
        Error::malformed(offset, format!("invalid nbt tag value: {}", tag))
    }

    pub(crate) fn unexpected_eof(offset: usize) -> Error {
        Error::malformed(offset, "eof: unexpectedly ran out of input")
    }

    pub(crate) fn negative_size(offset: usize, size: i32) -> Error {
        Error::malformed(offset, format!("size was negative: {}", size))
    }

    pub(crate) fn nonunicode_string(offset: usize, data: &[u8]) -> Error {
        Error::malformed(
            offset,
            format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
        )
    }

    pub(crate) fn invalid_tree(reason: impl Into<String>) -> Error {
        Error::InvalidTree {
            reason: reason.into(),
        }
    }

    pub(crate) fn text(detail: impl Into<String>) -> Error {
        Error::Text {
            detail: detail.into(),
        }
    }
}
