//! The side-effect boundary every kernel iteration reports to.
//!
//! Without it the optimizer would see that the expensive value is never
//! used and delete it, along with the branch that guards it.

use std::hint::black_box;

/// Receives the selected element and the value computed on its path.
pub trait BranchSink {
    /// Called once per index, before the selected element is stored.
    fn observe(&mut self, slot: &i32, value: i32);
}

/// Production sink: an out-of-line no-op whose arguments escape through
/// [`black_box`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OpaqueSink;

impl BranchSink for OpaqueSink {
    #[inline(never)]
    fn observe(&mut self, slot: &i32, value: i32) {
        black_box(slot);
        black_box(value);
    }
}

impl<S: BranchSink + ?Sized> BranchSink for &mut S {
    #[inline]
    fn observe(&mut self, slot: &i32, value: i32) {
        (**self).observe(slot, value);
    }
}
