//! Decode command: percent-decode a string.

use anyhow::{Context, Result};
use std::io::Write;
use utilkit_core::percent::{self, TrailingEscape};

/// Decode `text` and print the result on one line.
pub fn run_decode(text: &str, trailing: TrailingEscape, out: &mut dyn Write) -> Result<()> {
    let decoded = percent::try_fast_url_decode(text, trailing)
        .with_context(|| format!("cannot decode {text:?}"))?;
    writeln!(out, "{decoded}")?;
    Ok(())
}
