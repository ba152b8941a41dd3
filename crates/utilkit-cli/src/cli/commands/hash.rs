//! Hash command: small hash (and optionally SHA-1) of a value.

use anyhow::Result;
use std::io::Write;
use utilkit_core::hash::{sha1_hex, SmallHasher};

/// Print the small hash of `value`; with `digest`, also the SHA-1 hex.
pub fn run_hash(value: &str, digest: bool, out: &mut dyn Write) -> Result<()> {
    let hasher = SmallHasher::new()?;
    if digest {
        writeln!(out, "{}  {}", hasher.hash(value), sha1_hex(value.as_bytes()))?;
    } else {
        writeln!(out, "{}", hasher.hash(value))?;
    }
    Ok(())
}
