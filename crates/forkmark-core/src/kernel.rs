//! The measured loops.
//!
//! Every kernel walks `0..len` once. For each index it evaluates a
//! [`Predicate`] on the condition buffer, selects the taken or fall-through
//! candidate, reports the selection to a [`BranchSink`] and stores it into
//! the destination. Only the taken path carries the expensive value.
//!
//! The four named entry points are `#[inline(never)]` so that a driver
//! repeating them performs a real call per repetition.

use crate::buffers::BranchBuffers;
use crate::predicate::{Above, KernelKind, KernelStrategy, Odd, Predicate};
use crate::sink::{BranchSink, OpaqueSink};

/// Value reported to the sink on the fall-through path.
pub const FALLTHROUGH_MARKER: i32 = 3;

/// The taken path's expensive value: `i^7` in wrapping 32-bit arithmetic.
#[inline(always)]
pub fn expensive_value(i: usize) -> i32 {
    let x = i as i32;
    x.wrapping_mul(x)
        .wrapping_mul(x)
        .wrapping_mul(x)
        .wrapping_mul(x)
        .wrapping_mul(x)
        .wrapping_mul(x)
}

#[inline(always)]
fn branchy<P: Predicate, S: BranchSink>(
    buffers: &mut BranchBuffers,
    predicate: &P,
    sink: &mut S,
) {
    let (condition, taken, fallthrough, dst) = buffers.parts_mut();
    let n = dst.len();
    let (condition, taken, fallthrough) = (&condition[..n], &taken[..n], &fallthrough[..n]);

    for i in 0..n {
        let slot = if predicate.taken(condition[i]) {
            let slot = &taken[i];
            sink.observe(slot, expensive_value(i));
            slot
        } else {
            let slot = &fallthrough[i];
            sink.observe(slot, FALLTHROUGH_MARKER);
            slot
        };
        dst[i] = *slot;
    }
}

#[inline(always)]
fn branchless<P: Predicate, S: BranchSink>(
    buffers: &mut BranchBuffers,
    predicate: &P,
    sink: &mut S,
) {
    let (condition, taken, fallthrough, dst) = buffers.parts_mut();
    let n = dst.len();
    let condition = &condition[..n];
    // Indexed by the predicate outcome: 0 falls through, 1 is taken.
    let sources = [&fallthrough[..n], &taken[..n]];

    for i in 0..n {
        let outcome = predicate.taken(condition[i]);
        // All ones when taken, all zeros otherwise.
        let mask = -(outcome as i32);
        let z = expensive_value(i);
        let slot = &sources[outcome as usize][i];
        let reported = (z & mask) | (FALLTHROUGH_MARKER & !mask);
        sink.observe(slot, reported);
        dst[i] = *slot;
    }
}

/// Run one pass of a kernel with an arbitrary predicate, strategy and sink.
pub fn run_kernel<P: Predicate, S: BranchSink>(
    buffers: &mut BranchBuffers,
    predicate: &P,
    strategy: KernelStrategy,
    mut sink: S,
) {
    match strategy {
        KernelStrategy::Branchy => branchy(buffers, predicate, &mut sink),
        KernelStrategy::Branchless => branchless(buffers, predicate, &mut sink),
    }
}

/// Branch on odd condition values.
#[inline(never)]
pub fn predictable(buffers: &mut BranchBuffers) {
    branchy(buffers, &Odd, &mut OpaqueSink);
}

/// Branch on condition values above
/// [`UNPREDICTABLE_THRESHOLD`](crate::UNPREDICTABLE_THRESHOLD).
#[inline(never)]
pub fn unpredictable(buffers: &mut BranchBuffers) {
    branchy(buffers, &Above::default(), &mut OpaqueSink);
}

/// Select-based rendition of [`predictable`].
#[inline(never)]
pub fn predictable_branchless(buffers: &mut BranchBuffers) {
    branchless(buffers, &Odd, &mut OpaqueSink);
}

/// Select-based rendition of [`unpredictable`].
#[inline(never)]
pub fn unpredictable_branchless(buffers: &mut BranchBuffers) {
    branchless(buffers, &Above::default(), &mut OpaqueSink);
}

impl KernelKind {
    /// Run one pass of this kernel with the opaque sink.
    pub fn run(self, buffers: &mut BranchBuffers, strategy: KernelStrategy) {
        match (self, strategy) {
            (Self::Predictable, KernelStrategy::Branchy) => predictable(buffers),
            (Self::Unpredictable, KernelStrategy::Branchy) => unpredictable(buffers),
            (Self::Predictable, KernelStrategy::Branchless) => predictable_branchless(buffers),
            (Self::Unpredictable, KernelStrategy::Branchless) => unpredictable_branchless(buffers),
        }
    }

    /// Run one pass of this kernel, reporting to `sink`.
    pub fn run_with_sink<S: BranchSink>(
        self,
        buffers: &mut BranchBuffers,
        strategy: KernelStrategy,
        sink: S,
    ) {
        match self {
            Self::Predictable => run_kernel(buffers, &Odd, strategy, sink),
            Self::Unpredictable => run_kernel(buffers, &Above::default(), strategy, sink),
        }
    }
}
