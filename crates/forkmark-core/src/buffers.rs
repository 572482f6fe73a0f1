//! The four fixed-length buffers a branch kernel borrows.
//!
//! [`BranchBuffers`] owns the condition buffer, the two candidate sources
//! and the destination. Every constructor guarantees all four have the same
//! length, so kernels index `0..len` without further checks.

use crate::error::BufferError;

/// Buffer length used by both executables.
pub const DEFAULT_LEN: usize = 20000;

/// Value of the taken-path candidate buffer.
const TAKEN_FILL: i32 = 0;

/// Value of the fall-through candidate buffer.
const FALLTHROUGH_FILL: i32 = 1;

/// Condition buffer element at index `i` for a buffer of `len` elements:
/// `i^7 mod len`, computed exactly.
///
/// The result lies in `[0, len)`. Intermediate products stay below
/// `2^62` because both factors are reduced modulo `len <= i32::MAX`.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn condition_value(i: usize, len: usize) -> i32 {
    let modulus = len as u64;
    let base = i as u64 % modulus;
    let mut acc = 1 % modulus;
    for _ in 0..7 {
        acc = acc * base % modulus;
    }
    acc as i32
}

fn check_len(len: usize) -> Result<(), BufferError> {
    if len == 0 {
        return Err(BufferError::ZeroLength);
    }
    if len > i32::MAX as usize {
        return Err(BufferError::LengthOverflow { len });
    }
    Ok(())
}

fn try_filled(len: usize, fill: impl FnMut(usize) -> i32) -> Result<Vec<i32>, BufferError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BufferError::AllocationFailed { len })?;
    buf.extend((0..len).map(fill));
    Ok(buf)
}

/// Condition, candidate and destination buffers of identical length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchBuffers {
    condition: Vec<i32>,
    taken_source: Vec<i32>,
    fallthrough_source: Vec<i32>,
    dst: Vec<i32>,
}

impl BranchBuffers {
    /// Allocate and initialise buffers of `len` elements.
    ///
    /// Allocation failure aborts the process through the global allocator's
    /// error handler. Use [`try_new`](Self::try_new) to observe it instead.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or exceeds `i32::MAX`.
    pub fn new(len: usize) -> Self {
        if let Err(e) = check_len(len) {
            panic!("invalid buffer length: {e}");
        }
        Self {
            condition: (0..len).map(|i| condition_value(i, len)).collect(),
            taken_source: vec![TAKEN_FILL; len],
            fallthrough_source: vec![FALLTHROUGH_FILL; len],
            dst: vec![0; len],
        }
    }

    /// Fallible counterpart of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ZeroLength`] or [`BufferError::LengthOverflow`]
    /// for an unusable `len`, and [`BufferError::AllocationFailed`] if any
    /// of the four reservations fails.
    pub fn try_new(len: usize) -> Result<Self, BufferError> {
        check_len(len)?;
        Ok(Self {
            condition: try_filled(len, |i| condition_value(i, len))?,
            taken_source: try_filled(len, |_| TAKEN_FILL)?,
            fallthrough_source: try_filled(len, |_| FALLTHROUGH_FILL)?,
            dst: try_filled(len, |_| 0)?,
        })
    }

    /// Assemble buffers from caller-supplied vectors.
    ///
    /// The condition buffer is taken as-is, which lets tests and benchmarks
    /// drive kernels with arbitrary branch patterns.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ZeroLength`] if `condition` is empty and
    /// [`BufferError::LengthMismatch`] if any other buffer differs in length.
    pub fn from_parts(
        condition: Vec<i32>,
        taken_source: Vec<i32>,
        fallthrough_source: Vec<i32>,
        dst: Vec<i32>,
    ) -> Result<Self, BufferError> {
        let expected = condition.len();
        if expected == 0 {
            return Err(BufferError::ZeroLength);
        }
        for found in [taken_source.len(), fallthrough_source.len(), dst.len()] {
            if found != expected {
                return Err(BufferError::LengthMismatch { expected, found });
            }
        }
        Ok(Self {
            condition,
            taken_source,
            fallthrough_source,
            dst,
        })
    }

    /// Element count of every buffer.
    pub fn len(&self) -> usize {
        self.condition.len()
    }

    /// Always `false`; zero-length buffers cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.condition.is_empty()
    }

    /// The buffer the branch condition is evaluated on.
    pub fn condition(&self) -> &[i32] {
        &self.condition
    }

    /// Mutable view of the condition buffer.
    ///
    /// Elements may be rewritten or permuted; the length is fixed.
    pub fn condition_mut(&mut self) -> &mut [i32] {
        &mut self.condition
    }

    /// Candidate selected when the predicate holds (all zeros by default).
    pub fn taken_source(&self) -> &[i32] {
        &self.taken_source
    }

    /// Candidate selected when the predicate fails (all ones by default).
    pub fn fallthrough_source(&self) -> &[i32] {
        &self.fallthrough_source
    }

    /// Destination written by the last kernel call.
    pub fn dst(&self) -> &[i32] {
        &self.dst
    }

    /// Split into the three read-only inputs and the mutable destination.
    pub fn parts_mut(&mut self) -> (&[i32], &[i32], &[i32], &mut [i32]) {
        (
            &self.condition,
            &self.taken_source,
            &self.fallthrough_source,
            &mut self.dst,
        )
    }
}
