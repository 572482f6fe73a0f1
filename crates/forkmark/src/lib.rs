//! forkmark: microbenchmarks measuring how branch predictability affects
//! loop performance.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all forkmark sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use forkmark::prelude::*;
//!
//! let mut buffers = BranchBuffers::new(1024);
//! predictable(&mut buffers);
//! for (&c, &d) in buffers.condition().iter().zip(buffers.dst()) {
//!     assert_eq!(d, if c % 2 != 0 { 0 } else { 1 });
//! }
//!
//! let profile = profile_kernel(KernelKind::Predictable, &buffers, 1);
//! assert_eq!(
//!     recommend_strategy(&profile, &FeedbackPolicy::default()),
//!     KernelStrategy::Branchy
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`kernel`] | `forkmark-core` | Buffers, predicates, sinks, kernels |
//! | [`sim`] | `forkmark-sim` | Branch predictor model and profiles |
//! | [`driver`] | `forkmark-driver` | Driver config, loop and run metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Buffers, predicates, sinks and kernels (`forkmark-core`).
pub use forkmark_core as kernel;

/// Branch predictor model and branch profiles (`forkmark-sim`).
pub use forkmark_sim as sim;

/// Driver configuration, loop and metrics (`forkmark-driver`).
pub use forkmark_driver as driver;

/// Common imports for working with forkmark.
pub mod prelude {
    pub use forkmark_core::{
        predictable, predictable_branchless, run_kernel, unpredictable,
        unpredictable_branchless, Above, BranchBuffers, BranchSink, BufferError, KernelKind,
        KernelStrategy, Odd, OpaqueSink, Predicate,
    };
    pub use forkmark_driver::{ConfigError, Driver, DriverConfig, DriverError, RunMetrics};
    pub use forkmark_sim::{
        profile_kernel, recommend_strategy, BranchPredictor, BranchProfile, FeedbackPolicy,
    };
}
