//! Standalone helpers: fast percent-decoding, fixed-layout UTC date parsing,
//! SHA-1 small hashes, unique file names, and assorted text utilities.

pub mod config;
pub mod logging;

pub mod calendar;
pub mod hash;
pub mod percent;
pub mod text;
pub mod unique_file;
