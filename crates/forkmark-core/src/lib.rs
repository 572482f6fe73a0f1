//! Buffers, predicates and branch kernels for the forkmark microbenchmarks.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! measured loop and everything it touches:
//!
//! - [`BranchBuffers`]: the four equal-length `i32` buffers a kernel borrows
//! - [`Predicate`], [`Odd`], [`Above`]: the data-dependent branch conditions
//! - [`BranchSink`], [`OpaqueSink`]: the boundary the optimizer cannot see through
//! - [`predictable`], [`unpredictable`] and their branchless counterparts

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffers;
pub mod error;
pub mod kernel;
pub mod predicate;
pub mod sink;

pub use buffers::{condition_value, BranchBuffers, DEFAULT_LEN};
pub use error::BufferError;
pub use kernel::{
    expensive_value, predictable, predictable_branchless, run_kernel, unpredictable,
    unpredictable_branchless, FALLTHROUGH_MARKER,
};
pub use predicate::{Above, KernelKind, KernelStrategy, Odd, Predicate, UNPREDICTABLE_THRESHOLD};
pub use sink::{BranchSink, OpaqueSink};
