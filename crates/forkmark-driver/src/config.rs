//! Driver configuration, validation, and error types.
//!
//! [`DriverConfig`] is the input for constructing a [`Driver`](crate::Driver).
//! [`validate()`](DriverConfig::validate) checks it before any buffer is
//! allocated.

use std::error::Error;
use std::fmt;

use forkmark_core::{BufferError, KernelKind, KernelStrategy, DEFAULT_LEN};

/// Number of kernel calls each executable performs.
pub const DEFAULT_ITERATIONS: usize = 10000;

// ── DriverConfig ───────────────────────────────────────────────────

/// What to run and how many times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Element count of each buffer. Default: 20000.
    pub len: usize,
    /// Number of sequential kernel calls. Default: 10000.
    pub iterations: usize,
    /// Which predicate the kernel branches on.
    pub kind: KernelKind,
    /// Branch or select. Default: [`KernelStrategy::Branchy`].
    pub strategy: KernelStrategy,
}

impl DriverConfig {
    /// Defaults for the given kernel.
    pub fn for_kind(kind: KernelKind) -> Self {
        Self {
            len: DEFAULT_LEN,
            iterations: DEFAULT_ITERATIONS,
            kind,
            strategy: KernelStrategy::Branchy,
        }
    }

    /// The `predictable` executable's configuration.
    pub fn predictable() -> Self {
        Self::for_kind(KernelKind::Predictable)
    }

    /// The `unpredictable` executable's configuration.
    pub fn unpredictable() -> Self {
        Self::for_kind(KernelKind::Unpredictable)
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.len == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.len > i32::MAX as usize {
            return Err(ConfigError::LengthOverflow { len: self.len });
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DriverConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Buffer length is zero.
    ZeroLength,
    /// Buffer length exceeds `i32::MAX`.
    LengthOverflow {
        /// The configured length.
        len: usize,
    },
    /// Iteration count is zero.
    ZeroIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "buffer length must be non-zero"),
            Self::LengthOverflow { len } => write!(f, "buffer length {len} exceeds i32::MAX"),
            Self::ZeroIterations => write!(f, "iteration count must be non-zero"),
        }
    }
}

impl Error for ConfigError {}

// ── DriverError ────────────────────────────────────────────────────

/// Errors from [`Driver::new`](crate::Driver::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverError {
    /// The configuration is invalid.
    Config(ConfigError),
    /// Buffer setup failed.
    Buffer(BufferError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid config: {e}"),
            Self::Buffer(e) => write!(f, "buffer setup failed: {e}"),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Buffer(e) => Some(e),
        }
    }
}

impl From<ConfigError> for DriverError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<BufferError> for DriverError {
    fn from(e: BufferError) -> Self {
        Self::Buffer(e)
    }
}
