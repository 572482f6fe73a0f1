//! Repeats the poorly predicted kernel: roughly half the condition values
//! exceed the threshold, in no pattern a predictor can follow.

use forkmark_driver::{run_to_completion, DriverConfig};

fn main() {
    run_to_completion(DriverConfig::unpredictable());
}
