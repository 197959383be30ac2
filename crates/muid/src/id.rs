use crate::{Codec, Error, Format, Layout, Result, default_codec};
use core::fmt;
use core::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A 64-bit microsecond-precision time-ordered identifier.
///
/// The integer ordering of ids matches generation order within a node, so
/// ids can be compared, sorted, and range-scanned directly.
///
/// Text conversions ([`Display`], [`FromStr`], [`Id::parse`]) go through
/// the process-wide default [`Codec`], which applies the configured
/// [`Obfuscator`] (if any) before encoding. The binary form
/// ([`Id::to_bytes`]), the raw integer, and the field accessors always
/// operate on the true bits; see [`Codec`] for the rationale behind this
/// split.
///
/// [`Display`]: core::fmt::Display
/// [`Obfuscator`]: crate::Obfuscator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(i64);

impl Id {
    /// The zero id, representing an absent or invalid id.
    pub const NIL: Id = Id(0);

    /// The maximum id (`i64::MAX`), useful as an open upper bound in range
    /// queries. Never produced by a generator.
    pub const OMNI: Id = Id(i64::MAX);

    /// Wraps a raw integer without interpretation.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    pub const fn to_raw(self) -> i64 {
        self.0
    }

    /// Returns true if the id is [`Id::NIL`].
    pub const fn is_nil(self) -> bool {
        self.0 == 0
    }

    /// Returns the id as 8 big-endian bytes, the canonical binary
    /// interchange form. Never obfuscated.
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Reconstructs an id from its 8-byte big-endian form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] unless `bytes` is exactly 8 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::LengthMismatch {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(i64::from_be_bytes(arr)))
    }

    /// Like [`Id::from_bytes`], but swallows every error into [`Id::NIL`].
    pub fn from_bytes_or_nil(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes).unwrap_or(Self::NIL)
    }

    /// Microseconds since the Unix epoch at which the id was generated,
    /// assuming it was generated under `layout`.
    pub const fn timestamp_micros(self, layout: &Layout) -> i64 {
        (self.0 >> layout.time_shift()) + layout.epoch_micros()
    }

    /// The generation instant as a [`SystemTime`].
    pub fn timestamp(self, layout: &Layout) -> SystemTime {
        let micros = self.timestamp_micros(layout);
        if micros >= 0 {
            UNIX_EPOCH + Duration::from_micros(micros as u64)
        } else {
            UNIX_EPOCH - Duration::from_micros(micros.unsigned_abs())
        }
    }

    /// The node partition that issued the id.
    pub const fn node(self, layout: &Layout) -> i64 {
        (self.0 >> layout.node_shift()) & layout.node_mask()
    }

    /// The sequence slot within the id's microsecond bucket.
    pub const fn sequence(self, layout: &Layout) -> i64 {
        self.0 & layout.seq_mask()
    }

    /// Parses `s` with the process-wide default [`Codec`].
    ///
    /// # Errors
    ///
    /// Propagates the codec's decode error.
    pub fn parse(s: &str) -> Result<Self> {
        default_codec().decode(s)
    }

    /// Like [`Id::parse`], but swallows every error into [`Id::NIL`].
    pub fn parse_or_nil(s: &str) -> Self {
        default_codec().decode_or_nil(s)
    }

    /// Encodes the id in an explicit format, still applying the default
    /// codec's obfuscator (if one is configured).
    pub fn format(self, format: Format) -> String {
        codec_for(format).encode(self)
    }

    /// Parses `s` in an explicit format, still applying the default codec's
    /// obfuscator (if one is configured).
    ///
    /// # Errors
    ///
    /// Propagates the codec's decode error.
    pub fn parse_format(s: &str, format: Format) -> Result<Self> {
        codec_for(format).decode(s)
    }
}

/// The default codec's boundary behavior with an explicit format.
fn codec_for(format: Format) -> Codec {
    match default_codec().obfuscator() {
        Some(obfuscator) => Codec::new(format).with_obfuscator(obfuscator),
        None => Codec::new(format),
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&default_codec().encode(*self))
    }
}

impl FromStr for Id {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<i64> for Id {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}
