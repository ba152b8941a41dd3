//! Create-if-absent capabilities used by the allocator.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Atomically creates an empty file at `path` if nothing is there.
///
/// Returns `Ok(true)` if this call created it, `Ok(false)` if the path was
/// already taken (no state is left behind), and `Err` on any other I/O
/// failure.
pub trait NewFileCreator {
    fn create_new_file(&self, path: &Path) -> io::Result<bool>;
}

/// Creates placeholder files on the real filesystem (`O_CREAT | O_EXCL`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileCreator;

impl NewFileCreator for FsFileCreator {
    fn create_new_file(&self, path: &Path) -> io::Result<bool> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// In-memory stand-in for a directory tree. Safe to share between threads.
#[derive(Debug, Default)]
pub struct MemoryFileCreator {
    taken: Mutex<HashSet<PathBuf>>,
}

impl MemoryFileCreator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `paths` already present.
    pub fn with_existing<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            taken: Mutex::new(paths.into_iter().map(Into::into).collect()),
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.lock().contains(path)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<PathBuf>> {
        // The set stays consistent even if a holder panicked.
        self.taken.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NewFileCreator for MemoryFileCreator {
    fn create_new_file(&self, path: &Path) -> io::Result<bool> {
        Ok(self.lock().insert(path.to_path_buf()))
    }
}
