//! The repetition loop around a kernel.

use std::time::Instant;

use forkmark_core::BranchBuffers;

use crate::config::{DriverConfig, DriverError};
use crate::metrics::RunMetrics;

/// Owns the buffers and repeats one kernel over them.
///
/// Buffers are allocated once in [`new`](Self::new). Every call in
/// [`run`](Self::run) overwrites the same destination; nothing is reset
/// between calls.
#[derive(Debug)]
pub struct Driver {
    config: DriverConfig,
    buffers: BranchBuffers,
}

impl Driver {
    /// Validate `config` and allocate its buffers.
    ///
    /// # Errors
    ///
    /// [`DriverError::Config`] for an invalid configuration,
    /// [`DriverError::Buffer`] if allocation fails.
    pub fn new(config: DriverConfig) -> Result<Self, DriverError> {
        config.validate()?;
        let buffers = BranchBuffers::try_new(config.len)?;
        Ok(Self { config, buffers })
    }

    /// The configuration this driver was built from.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The buffers, including the destination of the last call.
    pub fn buffers(&self) -> &BranchBuffers {
        &self.buffers
    }

    /// Call the kernel `iterations` times in sequence.
    pub fn run(&mut self) -> RunMetrics {
        let DriverConfig {
            len,
            iterations,
            kind,
            strategy,
        } = self.config.clone();

        let taken_per_pass = self
            .buffers
            .condition()
            .iter()
            .filter(|&&v| kind.taken(v))
            .count();

        let start = Instant::now();
        for _ in 0..iterations {
            kind.run(&mut self.buffers, strategy);
        }
        let elapsed = start.elapsed();

        RunMetrics {
            kind,
            strategy,
            iterations,
            len,
            taken_per_pass,
            total_us: elapsed.as_micros() as u64,
            per_iteration_ns: elapsed.as_nanos() as f64 / iterations as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use forkmark_core::{BufferError, KernelKind, KernelStrategy};

    fn small(kind: KernelKind) -> DriverConfig {
        DriverConfig {
            len: 256,
            iterations: 5,
            ..DriverConfig::for_kind(kind)
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = Driver::new(DriverConfig {
            iterations: 0,
            ..small(KernelKind::Predictable)
        })
        .unwrap_err();
        assert_eq!(err, DriverError::Config(ConfigError::ZeroIterations));
    }

    #[test]
    fn buffer_errors_convert() {
        let e: DriverError = BufferError::AllocationFailed { len: 4 }.into();
        assert!(matches!(e, DriverError::Buffer(_)));
    }

    #[test]
    fn run_reports_configuration() {
        let mut d = Driver::new(small(KernelKind::Predictable)).unwrap();
        let m = d.run();
        assert_eq!(m.kind, KernelKind::Predictable);
        assert_eq!(m.strategy, KernelStrategy::Branchy);
        assert_eq!(m.iterations, 5);
        assert_eq!(m.len, 256);
        assert_eq!(m.taken_per_pass, 128);
        assert!(m.per_iteration_ns >= 0.0);
    }

    #[test]
    fn destination_written_by_run() {
        let mut d = Driver::new(small(KernelKind::Unpredictable)).unwrap();
        d.run();
        let b = d.buffers();
        for (&c, &v) in b.condition().iter().zip(b.dst()) {
            assert_eq!(v, if c > 8000 { 0 } else { 1 });
        }
    }
}
