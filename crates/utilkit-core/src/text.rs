//! Small string helpers used around mail and storage code.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use rand::Rng;
use std::fmt::Display;

/// Characters a regex `.` does not match; a quoted value containing one is
/// not treated as already quoted.
const LINE_BREAKS: [char; 5] = ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

/// Standard alphabet that decodes with or without `=` padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Wraps `s` in double quotes unless it already starts and ends with one.
///
/// `sample` → `"sample"`, `"sample"` unchanged, `sa"mp"le` → `"sa"mp"le"`.
/// A lone `"` is wrapped too, as is a quoted value spanning lines.
pub fn quote_string(s: &str) -> String {
    let already_quoted = s.len() >= 2
        && s.starts_with('"')
        && s.ends_with('"')
        && !s[1..s.len() - 1].contains(LINE_BREAKS);
    if already_quoted {
        s.to_string()
    } else {
        format!("\"{s}\"")
    }
}

/// Joins the `Display` form of each part with `separator`.
pub fn combine<T: Display>(parts: &[T], separator: char) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&part.to_string());
    }
    out
}

/// Two uppercase hex digits.
pub fn byte_to_hex(b: u8) -> String {
    format!("{b:02X}")
}

/// Strips every `\r`, then turns each `\n` into `\r\n`.
pub fn replace_bare_lf_with_crlf(s: &str) -> String {
    s.replace('\r', "").replace('\n', "\r\n")
}

/// Rewrites a trailing `GMT+hhmm` / `GMT-hhmm` zone to `+hhmm` / `-hhmm`,
/// which is what RFC 2822 allows. One final line break after the zone is
/// tolerated and kept.
///
/// `"Thu, 10 Dec 09 15:08:08 GMT-0700"` → `"Thu, 10 Dec 09 15:08:08 -0700"`
pub fn clean_up_mime_date(date: &str) -> String {
    let body = ["\r\n", "\n", "\r"]
        .iter()
        .find_map(|eol| date.strip_suffix(*eol))
        .unwrap_or(date);
    let eol = &date[body.len()..];
    match strip_gmt_prefix(body) {
        Some(mut cleaned) => {
            cleaned.push_str(eol);
            cleaned
        }
        None => date.to_string(),
    }
}

fn strip_gmt_prefix(date: &str) -> Option<String> {
    let b = date.as_bytes();
    if b.len() < 8 {
        return None;
    }
    let zone = &b[b.len() - 5..];
    let is_offset =
        (zone[0] == b'+' || zone[0] == b'-') && zone[1..].iter().all(u8::is_ascii_digit);
    if is_offset && &b[b.len() - 8..b.len() - 5] == b"GMT" {
        // The last 8 bytes are ASCII, so both cut points are char boundaries.
        let mut out = String::with_capacity(date.len() - 3);
        out.push_str(&date[..date.len() - 8]);
        out.push_str(&date[date.len() - 5..]);
        Some(out)
    } else {
        None
    }
}

/// False for UTF-8 continuation bytes (`10xxxxxx`).
pub fn is_first_utf8_byte(b: u8) -> bool {
    b & 0xc0 != 0x80
}

/// Builds an SQL `in` clause: `("ID", [1, 2, 3])` → `"ID in (1,2,3)"`.
/// Returns an empty string for no values.
pub fn build_in_selection<T: Display>(column: &str, values: &[T]) -> String {
    if values.is_empty() {
        return String::new();
    }
    format!("{column} in ({})", combine(values, ','))
}

/// True if `s` is a decimal TCP port in `1..=65535`. Surrounding
/// whitespace makes it invalid.
pub fn is_port_valid(s: &str) -> bool {
    matches!(s.parse::<i32>(), Ok(port) if port > 0 && port < 65536)
}

/// True if `s` (trimmed) parses as a URL host: a domain, IPv4 address, or
/// bracketed IPv6 address.
pub fn is_server_name_valid(s: &str) -> bool {
    let name = s.trim();
    !name.is_empty() && url::Host::parse(name).is_ok()
}

/// Standard base64 of the UTF-8 bytes of `s`, without line wrapping.
pub fn base64_encode(s: &str) -> String {
    STANDARD.encode(s.as_bytes())
}

/// Decodes standard base64, skipping line breaks and other ASCII whitespace
/// and accepting missing `=` padding. Invalid UTF-8 in the payload is
/// replaced.
pub fn base64_decode(encoded: &str) -> Result<String, base64::DecodeError> {
    let compact: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let bytes = LENIENT.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Random message id for locally generated mail:
/// `<24 base-36 chars.epoch-millis@domain>`.
pub fn generate_message_id(domain: &str) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let local: String = (0..24)
        .map(|_| char::from(DIGITS[rng.gen_range(0..35)]))
        .collect();
    let millis = chrono::Utc::now().timestamp_millis();
    format!("<{local}.{millis}@{domain}>")
}
