//! Benchmark profiles and utilities for the forkmark kernels.
//!
//! Provides pre-built [`BranchBuffers`] for benchmarks and examples:
//!
//! - [`reference_buffers`]: the executables' 20000-element buffers
//! - [`shuffled_buffers`]: the same values, deterministically permuted
//! - [`random_outcomes`]: seeded branch outcomes for predictor benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use forkmark_core::{BranchBuffers, DEFAULT_LEN};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Buffers exactly as the executables build them.
pub fn reference_buffers() -> BranchBuffers {
    BranchBuffers::new(DEFAULT_LEN)
}

/// Reference buffers with the condition buffer shuffled by a seeded
/// Fisher-Yates pass.
///
/// The value distribution, and so every predicate's taken ratio, is
/// unchanged; any index-correlated pattern is gone.
pub fn shuffled_buffers(seed: u64) -> BranchBuffers {
    let mut buffers = reference_buffers();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let condition = buffers.condition_mut();
    for i in (1..condition.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        condition.swap(i, j);
    }
    buffers
}

/// `n` independent fair coin flips from a seeded ChaCha8 stream.
pub fn random_outcomes(n: usize, seed: u64) -> Vec<bool> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u32() & 1 == 1).collect()
}
