use crate::Id;
use core::fmt;

/// XORs ids with a secret key to disguise the embedded timestamp, node,
/// and sequence in external representations.
///
/// The transform is its own inverse, so [`Obfuscator::obfuscate`] and
/// [`Obfuscator::deobfuscate`] are the same operation under the same key.
///
/// An obfuscator only ever runs at the text boundary (inside a [`Codec`]):
/// storage engines and internal logic see true, sortable values, while text
/// that may leak outside the system (URLs, JSON payloads) is disguised.
/// This asymmetry is deliberate.
///
/// [`Codec`]: crate::Codec
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Obfuscator {
    key: i64,
}

impl Obfuscator {
    /// Creates an obfuscator with the given key. Use a random value and
    /// keep it secret; a key of 0 makes the transform the identity.
    pub const fn new(key: i64) -> Self {
        Self { key }
    }

    /// Creates an obfuscator with a key drawn from the thread-local RNG.
    ///
    /// The key is not recoverable afterwards, so this is only useful when
    /// obfuscated text never outlives the process.
    pub fn from_entropy() -> Self {
        Self { key: rand::random() }
    }

    /// XORs the id with the key.
    pub const fn apply(self, id: Id) -> Id {
        Id::from_raw(id.to_raw() ^ self.key)
    }

    /// XORs the id with the key.
    pub const fn obfuscate(self, id: Id) -> Id {
        self.apply(id)
    }

    /// Reverses [`Obfuscator::obfuscate`] (XOR is self-inverse).
    pub const fn deobfuscate(self, id: Id) -> Id {
        self.apply(id)
    }
}

// The key stays out of debug output.
impl fmt::Debug for Obfuscator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Obfuscator").finish_non_exhaustive()
    }
}
