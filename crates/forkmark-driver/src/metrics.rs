//! Timing collected over a driver run.
//!
//! [`RunMetrics`] is what the executables print; it is also the value
//! tests inspect after a short run.

use std::fmt;

use forkmark_core::{KernelKind, KernelStrategy};

/// Timing and outcome counts for one [`Driver::run`](crate::Driver::run).
#[derive(Clone, Debug, PartialEq)]
pub struct RunMetrics {
    /// Kernel that was run.
    pub kind: KernelKind,
    /// Strategy the kernel used.
    pub strategy: KernelStrategy,
    /// Number of kernel calls performed.
    pub iterations: usize,
    /// Buffer length each call walked.
    pub len: usize,
    /// Taken-branch count of a single pass.
    pub taken_per_pass: usize,
    /// Wall-clock time for all calls, in microseconds.
    pub total_us: u64,
    /// Mean wall-clock time per call, in nanoseconds.
    pub per_iteration_ns: f64,
}

impl RunMetrics {
    /// Fraction of indices that took the branch.
    pub fn taken_ratio(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.taken_per_pass as f64 / self.len as f64
        }
    }
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} iterations x {} elements, taken={:.3}, total={}us, per_iteration={:.0}ns",
            self.kind.name(),
            self.strategy.name(),
            self.iterations,
            self.len,
            self.taken_ratio(),
            self.total_us,
            self.per_iteration_ns,
        )
    }
}
