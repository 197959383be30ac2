use crate::Format;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors this crate can produce.
///
/// Decoding and generator construction are the only fallible surfaces.
/// Generation itself has no error channel: [`Generator::generate`] always
/// eventually returns (see its docs for the liveness caveat).
///
/// [`Generator::generate`]: crate::Generator::generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A decoder encountered a byte outside its alphabet.
    #[error("invalid {format} character {byte:#04x} at index {index}")]
    InvalidCharacter {
        format: Format,
        byte: u8,
        index: usize,
    },

    /// The decoded value does not fit in 64 bits.
    #[error("{format} value overflows 64 bits")]
    ValueOverflow { format: Format },

    /// A decoder was given an empty string.
    #[error("cannot decode an empty string")]
    EmptyInput,

    /// A binary or base64 decode produced the wrong number of bytes.
    #[error("id requires exactly {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A generator was constructed with a node id outside the layout's range.
    #[error("node id {node} out of range [0, {max}]")]
    NodeOutOfRange { node: i64, max: i64 },
}
