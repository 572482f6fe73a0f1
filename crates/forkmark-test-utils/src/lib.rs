//! Test utilities for forkmark development.
//!
//! Provides reference formulas computed independently of the kernels
//! (exact `i128` powers rather than modular exponentiation) and sinks that
//! record what a kernel reported.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use forkmark_core::BranchSink;

/// `i^7 mod len` via an exact `i128` power.
///
/// Only valid for `i < 2^18`, where `i^7` fits in `i128`.
pub fn reference_condition(i: usize, len: usize) -> i32 {
    assert!(i < 1 << 18, "reference formula limited to i < 2^18");
    ((i as i128).pow(7) % len as i128) as i32
}

/// The whole condition buffer for `len`, from [`reference_condition`].
pub fn reference_condition_buffer(len: usize) -> Vec<i32> {
    (0..len).map(|i| reference_condition(i, len)).collect()
}

/// `i^7` truncated to 32 bits, the value the taken path reports.
pub fn reference_expensive(i: usize) -> i32 {
    (i as i128).pow(7) as u32 as i32
}

/// Destination expected from a kernel whose predicate is `taken`, given
/// zero-filled taken and one-filled fall-through candidates.
pub fn expected_destination(condition: &[i32], taken: impl Fn(i32) -> bool) -> Vec<i32> {
    condition.iter().map(|&v| if taken(v) { 0 } else { 1 }).collect()
}

/// One [`BranchSink::observe`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Address of the selected element.
    pub addr: *const i32,
    /// Value of the selected element at the time of the call.
    pub slot: i32,
    /// Expensive value on the taken path, marker on the fall-through path.
    pub value: i32,
}

/// Sink that records every observation in call order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub observations: Vec<Observation>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reported values, one per index.
    pub fn values(&self) -> Vec<i32> {
        self.observations.iter().map(|o| o.value).collect()
    }
}

impl BranchSink for RecordingSink {
    fn observe(&mut self, slot: &i32, value: i32) {
        self.observations.push(Observation {
            addr: slot as *const i32,
            slot: *slot,
            value,
        });
    }
}

/// Sink that only counts calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountingSink {
    pub calls: usize,
}

impl BranchSink for CountingSink {
    fn observe(&mut self, _slot: &i32, _value: i32) {
        self.calls += 1;
    }
}
