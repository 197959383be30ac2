//! Lowercase hexadecimal of the value as an unsigned 64-bit integer, with
//! no leading zeros. Decoding accepts 1 to 16 digits in either case.

use crate::{Error, Format, Result};

pub(crate) fn encode(raw: i64) -> String {
    format!("{:x}", raw as u64)
}

pub(crate) fn decode(s: &str) -> Result<i64> {
    if s.len() > 16 {
        return Err(Error::ValueOverflow {
            format: Format::Hex,
        });
    }
    let mut acc: u64 = 0;
    for (index, byte) in s.bytes().enumerate() {
        let val = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => {
                return Err(Error::InvalidCharacter {
                    format: Format::Hex,
                    byte,
                    index,
                });
            }
        };
        acc = (acc << 4) | u64::from(val);
    }
    Ok(acc as i64)
}
