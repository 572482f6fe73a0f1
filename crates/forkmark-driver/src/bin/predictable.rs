//! Repeats the well-predicted kernel: the branch outcome alternates with
//! the index, so a history-based predictor learns it after a few calls.

use forkmark_driver::{run_to_completion, DriverConfig};

fn main() {
    run_to_completion(DriverConfig::predictable());
}
