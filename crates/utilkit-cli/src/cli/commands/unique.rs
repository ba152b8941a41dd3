//! Unique command: reserve a free file name in a directory.

use anyhow::{bail, Result};
use std::io::Write;
use std::path::Path;
use utilkit_core::unique_file::{self, FsFileCreator};

/// Create an empty placeholder with a unique name and print its path.
pub fn run_unique(dir: &Path, filename: &str, max_counter: u32, out: &mut dyn Write) -> Result<()> {
    match unique_file::create_unique_file_bounded(&FsFileCreator, dir, filename, max_counter)? {
        Some(path) => {
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
        None => bail!(
            "no free name for {} in {} (counter limit {})",
            filename,
            dir.display(),
            max_counter
        ),
    }
}
