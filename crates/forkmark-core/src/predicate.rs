//! Branch conditions and kernel selection.
//!
//! A [`Predicate`] decides, per element of the condition buffer, whether a
//! kernel takes the expensive path. Kernels are generic over it so each
//! predicate is monomorphized into its own loop.

/// Threshold of the unpredictable kernel's `value > threshold` test.
pub const UNPREDICTABLE_THRESHOLD: i32 = 8000;

/// A branch condition over one condition-buffer element.
pub trait Predicate {
    /// `true` selects the taken path for this element.
    fn taken(&self, value: i32) -> bool;
}

/// Taken when the value is odd.
///
/// On the default condition buffer the outcome alternates with the index,
/// a pattern any history-based predictor learns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Odd;

impl Predicate for Odd {
    #[inline(always)]
    fn taken(&self, value: i32) -> bool {
        value % 2 != 0
    }
}

/// Taken when the value is strictly greater than `threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Above {
    /// Exclusive lower bound for the taken path.
    pub threshold: i32,
}

impl Default for Above {
    fn default() -> Self {
        Self {
            threshold: UNPREDICTABLE_THRESHOLD,
        }
    }
}

impl Predicate for Above {
    #[inline(always)]
    fn taken(&self, value: i32) -> bool {
        value > self.threshold
    }
}

/// Which of the two benchmark programs a kernel belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelKind {
    /// Branch on [`Odd`].
    Predictable,
    /// Branch on [`Above`] with [`UNPREDICTABLE_THRESHOLD`].
    Unpredictable,
}

impl KernelKind {
    /// Both kinds, in a fixed order.
    pub const ALL: [KernelKind; 2] = [KernelKind::Predictable, KernelKind::Unpredictable];

    /// Stable name, also used as the executable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Predictable => "predictable",
            Self::Unpredictable => "unpredictable",
        }
    }

    /// Evaluate this kind's predicate on a single value.
    pub fn taken(self, value: i32) -> bool {
        match self {
            Self::Predictable => Odd.taken(value),
            Self::Unpredictable => Above::default().taken(value),
        }
    }
}

/// How the kernel turns a predicate outcome into a selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KernelStrategy {
    /// Conditional branch; the expensive value is computed only when taken.
    #[default]
    Branchy,
    /// Outcome-indexed select; the expensive value is always computed.
    Branchless,
}

impl KernelStrategy {
    /// Stable name for reports and benchmark ids.
    pub fn name(self) -> &'static str {
        match self {
            Self::Branchy => "branchy",
            Self::Branchless => "branchless",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_handles_negative_values() {
        assert!(Odd.taken(-3));
        assert!(!Odd.taken(-4));
        assert!(Odd.taken(1));
        assert!(!Odd.taken(0));
    }

    #[test]
    fn above_is_strict() {
        let p = Above::default();
        assert!(!p.taken(UNPREDICTABLE_THRESHOLD));
        assert!(p.taken(UNPREDICTABLE_THRESHOLD + 1));
        assert!(!p.taken(-1));
    }

    #[test]
    fn kind_dispatch_matches_predicates() {
        for v in [-7, 0, 1, 7999, 8000, 8001, 19999] {
            assert_eq!(KernelKind::Predictable.taken(v), Odd.taken(v));
            assert_eq!(KernelKind::Unpredictable.taken(v), Above::default().taken(v));
        }
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(KernelKind::Predictable.name(), "predictable");
        assert_eq!(KernelKind::Unpredictable.name(), "unpredictable");
        assert_eq!(KernelStrategy::default(), KernelStrategy::Branchy);
        assert_eq!(KernelStrategy::Branchless.name(), "branchless");
    }
}
