//! CLI command handlers. Each command is in its own file.

mod completions;
mod date;
mod decode;
mod hash;
mod unique;

pub use completions::run_completions;
pub use date::run_date;
pub use decode::run_decode;
pub use hash::run_hash;
pub use unique::run_unique;
