//! Error types for buffer setup.
//!
//! Kernels themselves are infallible; the only failures happen while the
//! four buffers are being allocated or assembled.

use std::error::Error;
use std::fmt;

/// Errors from [`BranchBuffers`](crate::BranchBuffers) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The allocator could not satisfy a request for `len` elements.
    AllocationFailed {
        /// Requested element count per buffer.
        len: usize,
    },
    /// A buffer length of zero was requested (`i mod 0` is undefined).
    ZeroLength,
    /// The length does not fit in `i32`, so condition values could overflow.
    LengthOverflow {
        /// The rejected length.
        len: usize,
    },
    /// Buffers passed to [`BranchBuffers::from_parts`](crate::BranchBuffers::from_parts)
    /// have different lengths.
    LengthMismatch {
        /// Length of the condition buffer.
        expected: usize,
        /// Length of the first buffer that disagreed.
        found: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { len } => {
                write!(f, "failed to allocate buffers of {len} elements")
            }
            Self::ZeroLength => write!(f, "buffer length must be non-zero"),
            Self::LengthOverflow { len } => {
                write!(f, "buffer length {len} exceeds i32::MAX")
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "buffer length mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl Error for BufferError {}
