//! In-place decoding loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do with a `%` that has fewer than two bytes after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingEscape {
    /// Fail with [`DecodeError::TruncatedEscape`].
    #[default]
    Reject,
    /// Copy the `%` and the remaining bytes through unchanged.
    Keep,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` at `offset` is not followed by two more bytes.
    #[error("incomplete percent escape at byte {offset}")]
    TruncatedEscape { offset: usize },
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(std::str::Utf8Error),
}

/// Decodes `buf` in place and truncates it to the decoded length.
///
/// The write cursor never overtakes the read cursor, so the output always
/// fits in the input. Escapes are read as uppercase hex without validation.
pub fn decode_in_place(buf: &mut Vec<u8>, trailing: TrailingEscape) -> Result<(), DecodeError> {
    let count = buf.len();
    let mut len = 0;
    let mut i = 0;
    while i < count {
        let ch = buf[i];
        if ch == b'%' {
            if i + 2 >= count {
                match trailing {
                    TrailingEscape::Reject => {
                        return Err(DecodeError::TruncatedEscape { offset: i });
                    }
                    TrailingEscape::Keep => {
                        buf.copy_within(i..count, len);
                        len += count - i;
                        break;
                    }
                }
            }
            let h = nibble(buf[i + 1]);
            let l = nibble(buf[i + 2]);
            // Low byte of the combined value; garbage for malformed escapes.
            buf[len] = ((h << 4) | l) as u8;
            i += 3;
        } else {
            buf[len] = if ch == b'+' { b' ' } else { ch };
            i += 1;
        }
        len += 1;
    }
    buf.truncate(len);
    Ok(())
}

/// `'0'..='9'` and `'A'..='F'` map to 0..=15; anything else maps to an
/// arbitrary value computed the same way.
fn nibble(b: u8) -> i32 {
    let n = i32::from(b as i8) - i32::from(b'0');
    if n > 9 {
        n - 7
    } else {
        n
    }
}
