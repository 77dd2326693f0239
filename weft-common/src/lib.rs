#![no_std]
extern crate alloc;
extern crate core;

pub mod scalar;
pub mod value;

pub use scalar::{parse_number, unquote, would_coerce};
pub use value::{Entry, Mapping, Sequence, Value};

use alloc::string::String;
use core::fmt::{Display, Formatter};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScalarType {
    /// Unquoted scalar, subject to type coercion:
    /// ```yaml
    ///   order: 3
    /// ```
    Plain,
    /// Single quote string, taken verbatim between the quotes
    /// E.g. :
    /// ```yaml
    /// icon: 'Box'
    /// ```
    SingleQuote,
    /// Double quote string, `\"`, `\\`, `\n`, `\r` and `\t` are unescaped
    /// E.g. :
    /// ```yaml
    /// title: "A \"quoted\" title"
    /// ```
    DoubleQuote,
}

impl ScalarType {
    /// Classifies a raw (already trimmed) scalar by its surrounding quotes.
    #[must_use]
    pub fn of(raw: &str) -> ScalarType {
        match raw.as_bytes() {
            [b'"', .., b'"'] => ScalarType::DoubleQuote,
            [b'\'', .., b'\''] => ScalarType::SingleQuote,
            _ => ScalarType::Plain,
        }
    }
}

/// A specialized `Result` type where the error is hard-wired to [`WeftError`].
///
/// [`WeftError`]: enum.WeftError.html
pub type WeftResult<T> = Result<T, WeftError>;

/// Errors of the layers around the codec. Parsing and serializing never fail.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum WeftError {
    /// The backing key/value store refused an operation.
    Store(String),
    /// A stored draft body is missing a field or carries a bad one.
    MalformedDraft { key: String, reason: &'static str },
    /// Node type other than `weave` or `loom`.
    UnknownNodeKind(String),
}

impl Display for WeftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            WeftError::Store(info) => write!(f, "draft store error: {info}"),
            WeftError::MalformedDraft { key, reason } => {
                write!(f, "malformed draft `{key}`: {reason}")
            }
            WeftError::UnknownNodeKind(kind) => write!(f, "unknown node type `{kind}`"),
        }
    }
}

impl core::error::Error for WeftError {}
