//! Unique file names within a directory.
//!
//! Tries the requested name first, then `name-2.ext`, `name-3.ext`, ...
//! until a create-if-absent call succeeds. The filesystem call is injected
//! through [`NewFileCreator`] so the search can run against memory.

mod creator;

pub use creator::{FsFileCreator, MemoryFileCreator, NewFileCreator};

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default exclusive upper bound for the numeric suffix.
pub const DEFAULT_MAX_COUNTER: u32 = i32::MAX as u32;

#[derive(Debug, Error)]
pub enum AllocateError {
    /// The creation capability failed for a reason other than "already exists".
    #[error("failed to create {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Splits `filename` at its last `.`; the extension keeps the dot.
///
/// `"a.b.c"` → `("a.b", ".c")`, `"report"` → `("report", "")`.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(index) => filename.split_at(index),
        None => (filename, ""),
    }
}

/// Candidate name for suffix `counter` (`counter >= 2`).
fn numbered(name: &str, counter: u32, extension: &str) -> String {
    format!("{name}-{counter}{extension}")
}

/// Creates an empty file with a unique name in `directory` on disk.
///
/// Returns `Ok(None)` only if every suffix is taken.
pub fn create_unique_file(
    directory: &Path,
    filename: &str,
) -> Result<Option<PathBuf>, AllocateError> {
    create_unique_file_with(&FsFileCreator, directory, filename)
}

/// Like [`create_unique_file`] with an injected creation capability.
pub fn create_unique_file_with<C: NewFileCreator + ?Sized>(
    creator: &C,
    directory: &Path,
    filename: &str,
) -> Result<Option<PathBuf>, AllocateError> {
    create_unique_file_bounded(creator, directory, filename, DEFAULT_MAX_COUNTER)
}

/// Tries `filename`, then suffixes `2..max_counter`.
pub fn create_unique_file_bounded<C: NewFileCreator + ?Sized>(
    creator: &C,
    directory: &Path,
    filename: &str,
    max_counter: u32,
) -> Result<Option<PathBuf>, AllocateError> {
    let try_create = |path: PathBuf| -> Result<Option<PathBuf>, AllocateError> {
        match creator.create_new_file(&path) {
            Ok(true) => Ok(Some(path)),
            Ok(false) => Ok(None),
            Err(source) => Err(AllocateError::Storage { path, source }),
        }
    };

    if let Some(path) = try_create(directory.join(filename))? {
        return Ok(Some(path));
    }

    let (name, extension) = split_extension(filename);
    for counter in 2..max_counter {
        if let Some(path) = try_create(directory.join(numbered(name, counter, extension)))? {
            tracing::debug!(
                requested = filename,
                path = %path.display(),
                attempts = counter,
                "allocated unique file"
            );
            return Ok(Some(path));
        }
    }

    tracing::warn!(
        requested = filename,
        directory = %directory.display(),
        max_counter,
        "no unique file name left"
    );
    Ok(None)
}

/// Picks a name not present in `existing`, using the same suffix scheme as
/// [`create_unique_file`] but without touching storage.
pub fn unique_name_among(candidate: &str, existing: &[String]) -> String {
    let taken = |n: &str| existing.iter().any(|e| e == n);
    if !taken(candidate) {
        return candidate.to_string();
    }
    let (name, extension) = split_extension(candidate);
    // `existing` is finite, so some counter in 2..=len+2 is free.
    (2u32..)
        .map(|counter| numbered(name, counter, extension))
        .find(|n| !taken(n))
        .unwrap_or_else(|| candidate.to_string())
}
