//! Small hashes: a non-negative 31-bit fingerprint folded out of SHA-1.
//!
//! Used for compact identifiers, not for security. The fold is the dynamic
//! truncation from RFC 4226: the low nibble of the last digest byte picks a
//! 4-byte window, read big-endian with the top bit cleared.

use sha1::{Digest, Sha1};
use std::sync::OnceLock;
use thiserror::Error;

/// Length of a SHA-1 digest in bytes.
pub const SHA1_LEN: usize = 20;

/// SHA-1("abc") from FIPS 180-2, used to check the digest at construction.
const SELF_TEST_INPUT: &[u8] = b"abc";
const SELF_TEST_DIGEST: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

/// The SHA-1 implementation did not reproduce the known test vector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("SHA-1 digest unavailable: self-test produced {actual}")]
pub struct HashUnavailable {
    pub actual: String,
}

/// Computes SHA-1 of `data`.
pub fn sha1_digest(data: &[u8]) -> [u8; SHA1_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(data);
    let mut out = [0u8; SHA1_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// SHA-1 of `data` as lowercase hex.
pub fn sha1_hex(data: &[u8]) -> String {
    hex::encode(sha1_digest(data))
}

/// Folds a 20-byte SHA-1 digest into a value in `0..2^31`.
pub fn small_hash_from_sha1(sha1: &[u8; SHA1_LEN]) -> u32 {
    let offset = usize::from(sha1[SHA1_LEN - 1] & 0x0f);
    (u32::from(sha1[offset] & 0x7f) << 24)
        | (u32::from(sha1[offset + 1]) << 16)
        | (u32::from(sha1[offset + 2]) << 8)
        | u32::from(sha1[offset + 3])
}

/// Small-hash capability. Construct once at startup; hashing never fails
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmallHasher(());

impl SmallHasher {
    /// Verifies the digest against a known vector.
    pub fn new() -> Result<Self, HashUnavailable> {
        let actual = sha1_hex(SELF_TEST_INPUT);
        if actual != SELF_TEST_DIGEST {
            tracing::error!(%actual, "SHA-1 self-test failed");
            return Err(HashUnavailable { actual });
        }
        tracing::debug!("SHA-1 self-test passed");
        Ok(SmallHasher(()))
    }

    /// Small hash of the UTF-8 bytes of `value`.
    pub fn hash(&self, value: &str) -> u32 {
        small_hash_from_sha1(&sha1_digest(value.as_bytes()))
    }

    /// Small hash of `value` as decimal text.
    pub fn hash_str(&self, value: &str) -> String {
        self.hash(value).to_string()
    }
}

/// Capability check result, computed on first use.
static SHARED: OnceLock<Result<SmallHasher, HashUnavailable>> = OnceLock::new();

/// The process-wide hasher; the self-test runs once per process.
pub fn shared_hasher() -> Result<SmallHasher, HashUnavailable> {
    SHARED.get_or_init(SmallHasher::new).clone()
}

/// Small hash of `value` as decimal text, or `None` if SHA-1 is unusable.
pub fn small_hash(value: &str) -> Option<String> {
    shared_hasher().ok().map(|h| h.hash_str(value))
}
