//! Software branch prediction for the forkmark kernels.
//!
//! Hardware counters are not always available (containers, CI, non-x86
//! hosts). This crate models the part of the hardware that the benchmarks
//! exercise so the difference between the two kernels can be checked
//! without them:
//!
//! - [`BranchPredictor`]: global history plus 2-bit saturating counters
//! - [`BranchProfile`] and [`profile_kernel`]: taken and mispredict counts
//! - [`recommend_strategy`]: branchy versus branchless, from a profile

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod predictor;
pub mod profile;

pub use predictor::{BranchPrediction, BranchPredictor, HISTORY_BITS};
pub use profile::{
    profile_kernel, profile_predicate, recommend_strategy, BranchProfile, FeedbackPolicy,
};
