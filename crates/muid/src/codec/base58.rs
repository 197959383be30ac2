//! Base58 with the Bitcoin alphabet, which drops `0`, `O`, `I`, and `l`.
//! Variable length, most-significant digit first, case-sensitive.

use crate::{Error, Format, Result};

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;

const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0u8;
    while i < 58 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

pub(crate) fn encode(raw: i64) -> String {
    let mut n = raw as u64;
    if n == 0 {
        return "1".to_string();
    }
    let mut buf = [0u8; 11]; // base58 of u64::MAX is 11 digits
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n % 58) as usize];
        n /= 58;
    }
    String::from_utf8_lossy(&buf[i..]).into_owned()
}

pub(crate) fn decode(s: &str) -> Result<i64> {
    let mut acc: u64 = 0;
    for (index, byte) in s.bytes().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(Error::InvalidCharacter {
                format: Format::Base58,
                byte,
                index,
            });
        }
        acc = acc
            .checked_mul(58)
            .and_then(|acc| acc.checked_add(u64::from(val)))
            .ok_or(Error::ValueOverflow {
                format: Format::Base58,
            })?;
    }
    Ok(acc as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_preserves_values() {
        for value in [0, 1, 57, 58, 1_234_567_890_123_456_789, i64::MAX, -1] {
            let text = encode(value);
            assert_eq!(decode(&text), Ok(value), "value={value} text={text}");
        }
    }

    #[test]
    fn known_encodings() {
        assert_eq!(encode(0), "1");
        assert_eq!(encode(57), "z");
        assert_eq!(encode(58), "21");
        assert_eq!(encode(1_234_567_890_123_456_789), "3sDK21t5nHJ");
        assert_eq!(encode(i64::MAX), "NQm6nKp8qFC");
        assert_eq!(encode(-1), "jpXCZedGfVQ"); // u64::MAX
    }

    #[test]
    fn decode_is_case_sensitive() {
        assert_ne!(decode("a"), decode("A"));
    }

    #[test]
    fn decode_rejects_excluded_characters() {
        for (text, byte, index) in [("0", b'0', 0), ("2O", b'O', 1), ("I", b'I', 0), ("xl", b'l', 1)]
        {
            assert_eq!(
                decode(text),
                Err(Error::InvalidCharacter {
                    format: Format::Base58,
                    byte,
                    index,
                })
            );
        }
    }

    #[test]
    fn decode_rejects_overflow() {
        // One digit past u64::MAX.
        assert_eq!(
            decode("jpXCZedGfVR"),
            Err(Error::ValueOverflow {
                format: Format::Base58
            })
        );
        assert_eq!(
            decode("zzzzzzzzzzzz"),
            Err(Error::ValueOverflow {
                format: Format::Base58
            })
        );
    }
}
