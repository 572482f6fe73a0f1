//! A global-history branch predictor built from 2-bit saturating counters.
//!
//! The counter table is indexed by `(site & mask) ^ history`, where
//! `history` holds the last [`HISTORY_BITS`] outcomes. Repeating patterns
//! shorter than the history therefore map to distinct counters and are
//! learned; random outcomes are not.

/// Number of outcome bits kept in the global history.
pub const HISTORY_BITS: usize = 12;

const HISTORY_MASK: u16 = (1 << HISTORY_BITS) - 1;
const COUNTS_PER_WORD: usize = 32;
const NR_WORDS: usize = (1usize << HISTORY_BITS).div_ceil(COUNTS_PER_WORD);

/// Outcome of a single prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchPrediction {
    /// The counter agreed with the actual outcome.
    Hit,
    /// The counter disagreed with the actual outcome.
    Miss,
}

/// 2-bit saturating counters plus a global outcome history.
///
/// Counters start at 0 (strongly not-taken). They are packed 32 to a
/// `u64`.
#[derive(Clone, Debug)]
pub struct BranchPredictor {
    history: u16,
    counts: Box<[u64]>,
}

impl Default for BranchPredictor {
    fn default() -> Self {
        Self {
            history: 0,
            counts: vec![0u64; NR_WORDS].into_boxed_slice(),
        }
    }
}

impl BranchPredictor {
    /// Create a predictor with all counters cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Train the counter at `index` with one outcome.
    ///
    /// Returns the counter's opinion before training: `true` if it stood at
    /// 2 or 3 (predict taken). Training moves the counter one step towards
    /// the outcome and stops at 0 and 3. The step is branch-free.
    pub fn update_counter(&mut self, index: u16, taken: bool) -> bool {
        let before = self.counter(index);
        let up = (taken & (before < 3)) as u8;
        let down = (!taken & (before > 0)) as u8;
        self.set_counter(index, before + up - down);
        before >= 2
    }

    fn slot(index: u16) -> (usize, usize) {
        let index = (index & HISTORY_MASK) as usize;
        (index / COUNTS_PER_WORD, 2 * (index % COUNTS_PER_WORD))
    }

    fn set_counter(&mut self, index: u16, count: u8) {
        let (word, shift) = Self::slot(index);
        let cleared = self.counts[word] & !(0b11u64 << shift);
        self.counts[word] = cleared | (u64::from(count & 0b11) << shift);
    }

    /// Predict and train on one dynamic instance of the branch at `site`.
    pub fn branch(&mut self, site: u64, taken: bool) -> BranchPrediction {
        let key = (site as u16 & HISTORY_MASK) ^ self.history;
        let predicted_taken = self.update_counter(key, taken);
        self.history = ((self.history << 1) | taken as u16) & HISTORY_MASK;

        if predicted_taken == taken {
            BranchPrediction::Hit
        } else {
            BranchPrediction::Miss
        }
    }

    /// Current value of the counter at `index`, in `0..=3`.
    pub fn counter(&self, index: u16) -> u8 {
        let (word, shift) = Self::slot(index);
        ((self.counts[word] >> shift) & 0b11) as u8
    }

    /// The last [`HISTORY_BITS`] outcomes, most recent in bit 0.
    pub fn history(&self) -> u16 {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_counter_increment_saturates() {
        let mut p = BranchPredictor::default();

        // Starts strongly not-taken.
        assert!(!p.update_counter(0, true));
        for _ in 0..3 {
            p.update_counter(0, true);
        }
        assert!(p.update_counter(0, true));
        assert_eq!(p.counter(0), 3);
    }

    #[test]
    fn update_counter_decrement_saturates() {
        let mut p = BranchPredictor::default();
        for _ in 0..3 {
            p.update_counter(5, true);
        }
        for _ in 0..3 {
            p.update_counter(5, false);
        }
        assert!(!p.update_counter(5, false));
        assert_eq!(p.counter(5), 0);
    }

    #[test]
    fn neighbouring_counters_are_independent() {
        let mut p = BranchPredictor::default();
        for _ in 0..4 {
            p.update_counter(31, true);
        }
        assert_eq!(p.counter(31), 3);
        assert_eq!(p.counter(30), 0);
        assert_eq!(p.counter(32), 0);
    }

    #[test]
    fn counter_transitions_are_exhaustive() {
        for start in 0u8..=3 {
            for taken in [false, true] {
                let mut p = BranchPredictor::new();
                for _ in 0..start {
                    p.update_counter(77, true);
                }
                assert_eq!(p.counter(77), start);
                assert_eq!(p.update_counter(77, taken), start >= 2);
                let expected = if taken { (start + 1).min(3) } else { start.saturating_sub(1) };
                assert_eq!(p.counter(77), expected, "start={start} taken={taken}");
            }
        }
    }

    #[test]
    fn history_shifts_in_outcomes() {
        let mut p = BranchPredictor::new();
        p.branch(0, true);
        p.branch(0, false);
        p.branch(0, true);
        assert_eq!(p.history(), 0b101);
    }

    #[test]
    fn always_taken_is_learned() {
        let mut p = BranchPredictor::new();
        let misses = (0..1000)
            .filter(|_| p.branch(0x40, true) == BranchPrediction::Miss)
            .count();
        // One miss per counter visited while the history fills with ones.
        assert!(misses <= 2 * HISTORY_BITS + 2, "misses = {misses}");
    }

    #[test]
    fn alternating_pattern_is_learned() {
        let mut p = BranchPredictor::new();
        let mut late_misses = 0;
        for i in 0..2000 {
            let hit = p.branch(0x40, i % 2 == 1) == BranchPrediction::Hit;
            if i >= 100 && !hit {
                late_misses += 1;
            }
        }
        assert_eq!(late_misses, 0);
    }
}
