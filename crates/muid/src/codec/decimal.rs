//! Signed base-10, matching the standard integer formatter.

use crate::{Error, Format, Result};

pub(crate) fn encode(raw: i64) -> String {
    raw.to_string()
}

// Callers guarantee `s` is non-empty.
pub(crate) fn decode(s: &str) -> Result<i64> {
    let bytes = s.as_bytes();
    let (negative, start) = match bytes[0] {
        b'-' => (true, 1),
        b'+' => (false, 1),
        _ => (false, 0),
    };
    if bytes.len() == start {
        // A bare sign.
        return Err(Error::InvalidCharacter {
            format: Format::Decimal,
            byte: bytes[0],
            index: 0,
        });
    }

    let mut magnitude: u64 = 0;
    for (index, &byte) in bytes.iter().enumerate().skip(start) {
        if !byte.is_ascii_digit() {
            return Err(Error::InvalidCharacter {
                format: Format::Decimal,
                byte,
                index,
            });
        }
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(byte - b'0')))
            .ok_or(Error::ValueOverflow {
                format: Format::Decimal,
            })?;
    }

    let limit = if negative { 1 << 63 } else { i64::MAX as u64 };
    if magnitude > limit {
        return Err(Error::ValueOverflow {
            format: Format::Decimal,
        });
    }
    if negative {
        Ok((magnitude as i64).wrapping_neg())
    } else {
        Ok(magnitude as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_preserves_values() {
        for value in [0, 1, -1, 1_234_567_890_123_456_789, i64::MAX, i64::MIN] {
            let text = encode(value);
            assert_eq!(decode(&text), Ok(value), "value={value} text={text}");
        }
    }

    #[test]
    fn decode_accepts_explicit_signs() {
        assert_eq!(decode("+7"), Ok(7));
        assert_eq!(decode("-7"), Ok(-7));
    }

    #[test]
    fn decode_rejects_bare_signs() {
        assert!(decode("-").is_err());
        assert!(decode("+").is_err());
    }

    #[test]
    fn decode_rejects_non_digits() {
        assert_eq!(
            decode("12a"),
            Err(Error::InvalidCharacter {
                format: Format::Decimal,
                byte: b'a',
                index: 2,
            })
        );
        assert_eq!(
            decode("1 2"),
            Err(Error::InvalidCharacter {
                format: Format::Decimal,
                byte: b' ',
                index: 1,
            })
        );
    }

    #[test]
    fn decode_rejects_overflow() {
        assert_eq!(decode("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(
            decode("9223372036854775808"),
            Err(Error::ValueOverflow {
                format: Format::Decimal
            })
        );
        assert_eq!(decode("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(
            decode("-9223372036854775809"),
            Err(Error::ValueOverflow {
                format: Format::Decimal
            })
        );
    }
}
