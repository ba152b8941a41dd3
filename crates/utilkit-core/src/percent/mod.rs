//! Fast percent-decoding.
//!
//! Decodes `%XX` escapes and `+` in a single pass, writing back into the
//! same buffer. Only uppercase hex is understood and escapes are not
//! validated: `%zz` produces a garbage byte instead of an error.

mod decode;

pub use decode::{decode_in_place, DecodeError, TrailingEscape};

/// Decodes a percent-encoded string, returning `None` if the decoded bytes
/// are not valid UTF-8 or an escape is cut off at the end of the input.
///
/// # Examples
///
/// - `fast_url_decode("a+b")` → `Some("a b")`
/// - `fast_url_decode("100%25")` → `Some("100%")`
pub fn fast_url_decode(s: &str) -> Option<String> {
    try_fast_url_decode(s, TrailingEscape::default()).ok()
}

/// Like [`fast_url_decode`] but reports why decoding failed.
pub fn try_fast_url_decode(s: &str, trailing: TrailingEscape) -> Result<String, DecodeError> {
    let mut bytes = s.as_bytes().to_vec();
    decode_in_place(&mut bytes, trailing)?;
    String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8(e.utf8_error()))
}
