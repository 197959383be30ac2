//! Microsecond-precision, time-ordered 64-bit identifiers.
//!
//! An [`Id`] packs `[timestamp:51][node][sequence]` into a signed 64-bit
//! integer (most significant bits first, sign bit clear), so ids sort
//! chronologically and work well as database primary keys. The default
//! [`Layout`] allots 6 bits to the node partition and 6 bits to the
//! per-microsecond sequence counter.
//!
//! ```
//! use muid::{Generator, Layout};
//!
//! let layout = Layout::default();
//! let generator = Generator::new(layout, 1)?;
//!
//! let id = generator.generate();
//! assert_eq!(id.node(&layout), 1);
//! println!("{id}"); // base58 by default
//! # Ok::<(), muid::Error>(())
//! ```
//!
//! Five reversible text encodings are available through [`Format`] and
//! [`Codec`]: Crockford base32, base58, base64, hex, and decimal. A
//! [`Codec`] may additionally carry an [`Obfuscator`], which XORs ids with a
//! secret key at the text boundary only; the binary form, the raw integer,
//! and the field accessors always operate on the true bits.

mod codec;
mod error;
mod generator;
mod id;
mod layout;
mod null;
mod obfuscator;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::layout::*;
pub use crate::null::*;
pub use crate::obfuscator::*;
pub use crate::time::*;
