//! Comparison set builder — turns a participant identifier into an ordered,
//! reproducible list of listing pairs.

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::generation::listing::{generate_listing, ComparisonPair};

pub const DEFAULT_COMPARISON_COUNT: i64 = 5;

const SEED_MODULUS: u64 = 1_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("count must be non-negative, got {0}")]
    NegativeCount(i64),
}

/// SHA-256 of the UTF-8 bytes, first 8 bytes read big-endian.
///
/// Identical across processes, restarts and platforms.
pub fn stable_hash(value: &str) -> u64 {
    let digest = Sha256::digest(value.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Base seed in `0..1_000_000` for a participant.
pub fn base_seed(participant_id: &str) -> i64 {
    (stable_hash(participant_id) % SEED_MODULUS) as i64
}

/// Builds `count` comparison pairs for `participant_id`.
///
/// Pair `i` uses seeds `base + 2i` and `base + 2i + 1`. Empty identifiers are
/// hashed like any other string.
pub fn build_comparisons(
    participant_id: &str,
    count: i64,
) -> Result<Vec<ComparisonPair>, GenerationError> {
    if count < 0 {
        return Err(GenerationError::NegativeCount(count));
    }

    let base = base_seed(participant_id);
    Ok((0..count)
        .map(|i| ComparisonPair {
            id: i,
            job1: generate_listing(base + 2 * i),
            job2: generate_listing(base + 2 * i + 1),
        })
        .collect())
}
