//! Crockford base32: variable length, most-significant digit first. The
//! alphabet drops `i`, `l`, `o`, and `u`; decoding is case-insensitive,
//! reads `i`/`l` as `1` and `o` as `0`, and skips hyphens as separators.

use crate::{Error, Format, Result};

const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";
const NO_VALUE: u8 = 255;

/// Decode table, with uppercase aliases and the Crockford substitutions.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0u8;
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[(c - 32) as usize] = i;
        }
        i += 1;
    }
    lut[b'o' as usize] = 0;
    lut[b'O' as usize] = 0;
    lut[b'i' as usize] = 1;
    lut[b'I' as usize] = 1;
    lut[b'l' as usize] = 1;
    lut[b'L' as usize] = 1;
    lut
};

pub(crate) fn encode(raw: i64) -> String {
    let mut n = raw as u64;
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = [0u8; 13]; // ceil(64 / 5)
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n & 0x1f) as usize];
        n >>= 5;
    }
    String::from_utf8_lossy(&buf[i..]).into_owned()
}

pub(crate) fn decode(s: &str) -> Result<i64> {
    let mut acc: u64 = 0;
    for (index, byte) in s.bytes().enumerate() {
        if byte == b'-' {
            continue;
        }
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(Error::InvalidCharacter {
                format: Format::Crockford,
                byte,
                index,
            });
        }
        if acc >> 59 != 0 {
            return Err(Error::ValueOverflow {
                format: Format::Crockford,
            });
        }
        acc = (acc << 5) | u64::from(val);
    }
    Ok(acc as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_preserves_values() {
        for value in [0, 1, 31, 32, 1_234_567_890_123_456_789, i64::MAX, -1] {
            let text = encode(value);
            assert_eq!(decode(&text), Ok(value), "value={value} text={text}");
        }
    }

    #[test]
    fn known_encodings() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(31), "z");
        assert_eq!(encode(32), "10");
        assert_eq!(encode(i64::MAX), "7zzzzzzzzzzzz");
        assert_eq!(encode(-1), "fzzzzzzzzzzzz"); // u64::MAX
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("128GGYHYYK08N"), decode("128ggyhyyk08n"));
        assert_eq!(decode("AbCd"), decode("aBcD"));
    }

    #[test]
    fn decode_applies_crockford_aliases() {
        assert_eq!(decode("i"), Ok(1));
        assert_eq!(decode("I"), Ok(1));
        assert_eq!(decode("l"), Ok(1));
        assert_eq!(decode("L"), Ok(1));
        assert_eq!(decode("o"), Ok(0));
        assert_eq!(decode("O"), Ok(0));
    }

    #[test]
    fn decode_skips_hyphen_separators() {
        assert_eq!(decode("128g-gyhy-yk08n"), decode("128ggyhyyk08n"));
    }

    #[test]
    fn decode_rejects_out_of_alphabet_bytes() {
        assert_eq!(
            decode("12u4"),
            Err(Error::InvalidCharacter {
                format: Format::Crockford,
                byte: b'u',
                index: 2,
            })
        );
        assert_eq!(
            decode("!"),
            Err(Error::InvalidCharacter {
                format: Format::Crockford,
                byte: b'!',
                index: 0,
            })
        );
    }

    #[test]
    fn decode_rejects_overflow() {
        // 14 digits exceed 64 bits.
        assert_eq!(
            decode("zzzzzzzzzzzzzz"),
            Err(Error::ValueOverflow {
                format: Format::Crockford
            })
        );
    }
}
