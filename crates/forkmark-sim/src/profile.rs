//! Branch profiles: software stand-ins for PMU branch counters.
//!
//! [`profile_predicate`] replays the branch outcomes a kernel would see on
//! a condition buffer through a fresh [`BranchPredictor`], counting how
//! often the branch is taken and how often the model mispredicts it.
//! [`recommend_strategy`] turns that profile into the same decision an
//! optimizer makes with real feedback: keep the branch when it is well
//! predicted, convert it to a select when it is not.

use forkmark_core::{Above, BranchBuffers, KernelKind, KernelStrategy, Odd, Predicate};

use crate::predictor::{BranchPrediction, BranchPredictor};

/// Site address used for the kernel's single conditional branch.
const KERNEL_BRANCH_SITE: u64 = 0x40;

/// Counts collected over one or more profiling passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BranchProfile {
    /// Number of times the branch condition was evaluated.
    pub evaluations: u64,
    /// Number of evaluations where the branch was taken.
    pub taken: u64,
    /// Number of evaluations the predictor model got wrong.
    pub mispredictions: u64,
}

impl BranchProfile {
    /// Fraction of evaluations that took the branch; `0.0` when empty.
    pub fn taken_ratio(&self) -> f64 {
        ratio(self.taken, self.evaluations)
    }

    /// Fraction of evaluations that were mispredicted; `0.0` when empty.
    pub fn mispredict_ratio(&self) -> f64 {
        ratio(self.mispredictions, self.evaluations)
    }

    /// `true` when the mispredict ratio does not exceed `max_ratio`.
    pub fn is_well_predicted(&self, max_ratio: f64) -> bool {
        self.mispredict_ratio() <= max_ratio
    }

    /// Accumulate another profile's counts into this one.
    pub fn merge(&mut self, other: &BranchProfile) {
        self.evaluations += other.evaluations;
        self.taken += other.taken;
        self.mispredictions += other.mispredictions;
    }
}

fn ratio(n: u64, d: u64) -> f64 {
    if d == 0 {
        0.0
    } else {
        n as f64 / d as f64
    }
}

/// Replay `predicate` over `condition` for `passes` full passes.
///
/// The predictor is shared across passes, so later passes reflect a
/// trained predictor, much like repeated driver iterations.
pub fn profile_predicate<P: Predicate>(
    condition: &[i32],
    predicate: &P,
    passes: usize,
) -> BranchProfile {
    let mut predictor = BranchPredictor::new();
    let mut profile = BranchProfile::default();

    for _ in 0..passes {
        for &value in condition {
            let taken = predicate.taken(value);
            profile.evaluations += 1;
            profile.taken += taken as u64;
            if predictor.branch(KERNEL_BRANCH_SITE, taken) == BranchPrediction::Miss {
                profile.mispredictions += 1;
            }
        }
    }

    profile
}

/// Profile the predicate of `kind` over the buffers' condition buffer.
pub fn profile_kernel(kind: KernelKind, buffers: &BranchBuffers, passes: usize) -> BranchProfile {
    match kind {
        KernelKind::Predictable => profile_predicate(buffers.condition(), &Odd, passes),
        KernelKind::Unpredictable => {
            profile_predicate(buffers.condition(), &Above::default(), passes)
        }
    }
}

/// Thresholds for turning a profile into a [`KernelStrategy`].
#[derive(Clone, Debug)]
pub struct FeedbackPolicy {
    /// Mispredict ratio above which the branch is converted to a select.
    /// Default: 0.05.
    pub max_mispredict_ratio: f64,
}

impl Default for FeedbackPolicy {
    fn default() -> Self {
        Self {
            max_mispredict_ratio: 0.05,
        }
    }
}

/// Keep the branch if it is well predicted, otherwise go branchless.
pub fn recommend_strategy(profile: &BranchProfile, policy: &FeedbackPolicy) -> KernelStrategy {
    if profile.is_well_predicted(policy.max_mispredict_ratio) {
        KernelStrategy::Branchy
    } else {
        KernelStrategy::Branchless
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_profile_ratios_are_zero() {
        let p = BranchProfile::default();
        assert_eq!(p.taken_ratio(), 0.0);
        assert_eq!(p.mispredict_ratio(), 0.0);
        assert!(p.is_well_predicted(0.0));
    }

    #[test]
    fn merge_adds_counts() {
        let mut a = BranchProfile {
            evaluations: 10,
            taken: 4,
            mispredictions: 1,
        };
        a.merge(&BranchProfile {
            evaluations: 10,
            taken: 6,
            mispredictions: 3,
        });
        assert_eq!(a.evaluations, 20);
        assert_eq!(a.taken_ratio(), 0.5);
        assert_eq!(a.mispredict_ratio(), 0.2);
    }

    #[test]
    fn zero_passes_profile_nothing() {
        let p = profile_predicate(&[1, 2, 3], &Odd, 0);
        assert_eq!(p, BranchProfile::default());
    }

    #[test]
    fn policy_boundary_keeps_branch() {
        let p = BranchProfile {
            evaluations: 100,
            taken: 50,
            mispredictions: 5,
        };
        assert_eq!(
            recommend_strategy(&p, &FeedbackPolicy::default()),
            KernelStrategy::Branchy
        );
        let p = BranchProfile {
            mispredictions: 6,
            ..p
        };
        assert_eq!(
            recommend_strategy(&p, &FeedbackPolicy::default()),
            KernelStrategy::Branchless
        );
    }

    proptest! {
        #[test]
        fn counts_are_consistent(condition in proptest::collection::vec(any::<i32>(), 0..500), passes in 0usize..4) {
            let p = profile_predicate(&condition, &Above::default(), passes);
            prop_assert_eq!(p.evaluations, (condition.len() * passes) as u64);
            prop_assert!(p.taken <= p.evaluations);
            prop_assert!(p.mispredictions <= p.evaluations);
            let expected_taken = condition.iter().filter(|&&v| v > 8000).count() * passes;
            prop_assert_eq!(p.taken, expected_taken as u64);
        }
    }
}
