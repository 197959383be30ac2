mod base58;
mod base64;
mod crockford;
mod decimal;
mod hex;

use crate::{Error, Id, Obfuscator, Result};
use core::fmt;
use std::sync::OnceLock;

/// A textual encoding for the 64-bit id value.
///
/// Each format is a stateless, reversible encode/decode pair over the raw
/// integer. The positional formats (crockford, base58, hex) treat the value
/// as unsigned, so an obfuscated id whose sign bit is set still round-trips;
/// for non-negative values their output matches any server-side generator
/// that mirrors the same alphabets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Crockford base32: case-insensitive, `i/l` read as `1`, `o` as `0`,
    /// hyphens skipped.
    Crockford,
    /// Base58 with the Bitcoin alphabet (no `0`, `O`, `I`, `l`). The
    /// shipped default.
    #[default]
    Base58,
    /// Standard base64 over the 8-byte big-endian form; fixed 12-character
    /// output.
    Base64,
    /// Lowercase hexadecimal without leading zeros.
    Hex,
    /// Signed decimal.
    Decimal,
}

impl Format {
    /// Encodes a raw id value, with no obfuscation.
    pub fn encode_raw(self, raw: i64) -> String {
        match self {
            Format::Crockford => crockford::encode(raw),
            Format::Base58 => base58::encode(raw),
            Format::Base64 => base64::encode(raw),
            Format::Hex => hex::encode(raw),
            Format::Decimal => decimal::encode(raw),
        }
    }

    /// Decodes a raw id value, with no deobfuscation.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] for the empty string; otherwise the format's
    /// own character, padding, length, and overflow errors.
    pub fn decode_raw(self, s: &str) -> Result<i64> {
        if s.is_empty() {
            return Err(Error::EmptyInput);
        }
        match self {
            Format::Crockford => crockford::decode(s),
            Format::Base58 => base58::decode(s),
            Format::Base64 => base64::decode(s),
            Format::Hex => hex::decode(s),
            Format::Decimal => decimal::decode(s),
        }
    }

    /// The format's canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Format::Crockford => "crockford",
            Format::Base58 => "base58",
            Format::Base64 => "base64",
            Format::Hex => "hex",
            Format::Decimal => "decimal",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The external-representation boundary: a [`Format`] plus an optional
/// [`Obfuscator`].
///
/// Encoding obfuscates then encodes; decoding decodes then deobfuscates.
/// Only text passes through the obfuscator — the binary and raw integer
/// forms of [`Id`] never do, by design, so stored ids stay sortable and
/// timestamp-extractable while externally visible text is disguised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    format: Format,
    obfuscator: Option<Obfuscator>,
}

impl Codec {
    /// Creates a codec for `format` with no obfuscation.
    pub const fn new(format: Format) -> Self {
        Self {
            format,
            obfuscator: None,
        }
    }

    /// Attaches an obfuscator to the text boundary.
    pub const fn with_obfuscator(mut self, obfuscator: Obfuscator) -> Self {
        self.obfuscator = Some(obfuscator);
        self
    }

    /// The codec's text format.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The codec's obfuscator, if one is attached.
    pub const fn obfuscator(&self) -> Option<Obfuscator> {
        self.obfuscator
    }

    /// Encodes an id to text, obfuscating first if configured.
    pub fn encode(&self, id: Id) -> String {
        self.format.encode_raw(self.disguise(id).to_raw())
    }

    /// Decodes text to an id, deobfuscating after if configured.
    ///
    /// # Errors
    ///
    /// Propagates [`Format::decode_raw`] errors.
    pub fn decode(&self, s: &str) -> Result<Id> {
        let raw = self.format.decode_raw(s)?;
        Ok(self.disguise(Id::from_raw(raw)))
    }

    /// Like [`Codec::decode`], but swallows every error into [`Id::NIL`].
    pub fn decode_or_nil(&self, s: &str) -> Id {
        self.decode(s).unwrap_or(Id::NIL)
    }

    // XOR is self-inverse, so disguising and revealing are the same step.
    fn disguise(&self, id: Id) -> Id {
        match self.obfuscator {
            Some(obfuscator) => obfuscator.apply(id),
            None => id,
        }
    }
}

static DEFAULT_CODEC: OnceLock<Codec> = OnceLock::new();

/// Installs the process-wide default codec used by [`Id`]'s `Display`,
/// `FromStr`, parse, and serde implementations.
///
/// The default may be set once, before any of those entry points run; the
/// first use of an unset default installs `Codec::default()` (base58, no
/// obfuscation).
///
/// # Errors
///
/// Returns the rejected codec if a default is already installed.
pub fn set_default_codec(codec: Codec) -> core::result::Result<(), Codec> {
    DEFAULT_CODEC.set(codec)
}

/// The process-wide default codec.
pub fn default_codec() -> &'static Codec {
    DEFAULT_CODEC.get_or_init(Codec::default)
}
