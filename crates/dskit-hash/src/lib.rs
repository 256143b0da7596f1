//! Seeded string hashing for dskit.
//!
//! A [`SeededHash`] captures a random seed at construction as an explicit
//! field — there is no process-wide hashing state — and digests string keys
//! into `0..span`. Independent instances carry independent seeds, which is
//! what `dskit-bloom` relies on for its three hash functions.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;

/// Error conditions for hasher construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// A hasher with an empty output range is meaningless.
    ZeroSpan,
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::ZeroSpan => write!(f, "hash span must be nonzero"),
        }
    }
}

impl std::error::Error for HashError {}

/// A string hasher with an instance-local seed and a bounded output range.
#[derive(Debug, Clone)]
pub struct SeededHash {
    seed: u64,
    span: usize,
}

impl SeededHash {
    /// Create a hasher over `0..span` with a fresh random seed.
    pub fn new(span: usize) -> Result<Self, HashError> {
        Self::with_seed(span, rand::rng().random())
    }

    /// Create a hasher with an explicit seed, for reproducible digests.
    pub fn with_seed(span: usize, seed: u64) -> Result<Self, HashError> {
        if span == 0 {
            return Err(HashError::ZeroSpan);
        }
        Ok(Self { seed, span })
    }

    /// Digest a key into `0..span`. Deterministic for a given instance.
    pub fn digest(&self, key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.span
    }

    pub fn span(&self) -> usize {
        self.span
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
