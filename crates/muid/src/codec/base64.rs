//! Standard base64 over the id's 8-byte big-endian form. Encoding always
//! yields 12 characters (11 data characters and one `=` pad); decoding
//! accepts any well-formed base64 but requires exactly 8 decoded bytes.

use crate::{Error, Format, Result};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: u8 = b'=';
const NO_VALUE: u8 = 255;

const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0u8;
    while i < 64 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

pub(crate) fn encode(raw: i64) -> String {
    let bytes = raw.to_be_bytes();
    let mut out = Vec::with_capacity(12);
    for chunk in bytes.chunks(3) {
        let group = (u32::from(chunk[0]) << 16)
            | (u32::from(*chunk.get(1).unwrap_or(&0)) << 8)
            | u32::from(*chunk.get(2).unwrap_or(&0));
        out.push(ALPHABET[(group >> 18) as usize & 63]);
        out.push(ALPHABET[(group >> 12) as usize & 63]);
        out.push(if chunk.len() > 1 {
            ALPHABET[(group >> 6) as usize & 63]
        } else {
            PAD
        });
        out.push(if chunk.len() > 2 {
            ALPHABET[group as usize & 63]
        } else {
            PAD
        });
    }
    String::from_utf8_lossy(&out).into_owned()
}

pub(crate) fn decode(s: &str) -> Result<i64> {
    let input = s.as_bytes();
    if input.len() % 4 != 0 {
        return Err(Error::LengthMismatch {
            expected: 12,
            actual: input.len(),
        });
    }

    let groups = input.len() / 4;
    let mut bytes = Vec::with_capacity(groups * 3);
    for (g, chunk) in input.chunks(4).enumerate() {
        let last = g == groups - 1;
        let mut group = 0u32;
        let mut pad = 0usize;
        for (i, &byte) in chunk.iter().enumerate() {
            let index = g * 4 + i;
            if byte == PAD {
                // Padding may only trail the final group, at most twice.
                if !last || i < 2 {
                    return Err(Error::InvalidCharacter {
                        format: Format::Base64,
                        byte,
                        index,
                    });
                }
                pad += 1;
                group <<= 6;
                continue;
            }
            if pad > 0 {
                // Data after padding.
                return Err(Error::InvalidCharacter {
                    format: Format::Base64,
                    byte,
                    index,
                });
            }
            let val = LOOKUP[byte as usize];
            if val == NO_VALUE {
                return Err(Error::InvalidCharacter {
                    format: Format::Base64,
                    byte,
                    index,
                });
            }
            group = (group << 6) | u32::from(val);
        }
        bytes.push((group >> 16) as u8);
        if pad < 2 {
            bytes.push((group >> 8) as u8);
        }
        if pad < 1 {
            bytes.push(group as u8);
        }
    }

    let arr: [u8; 8] = bytes.as_slice().try_into().map_err(|_| Error::LengthMismatch {
        expected: 8,
        actual: bytes.len(),
    })?;
    Ok(i64::from_be_bytes(arr))
}
