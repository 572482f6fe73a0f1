//! Driver loop and executables for the forkmark microbenchmarks.
//!
//! [`Driver`] allocates the buffers once and calls a kernel a fixed number
//! of times over them, which is what the `predictable` and `unpredictable`
//! executables do with the default [`DriverConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod metrics;

pub use config::{ConfigError, DriverConfig, DriverError, DEFAULT_ITERATIONS};
pub use driver::Driver;
pub use metrics::RunMetrics;

/// Build, run and report the given configuration.
///
/// This is the body of both executables: setup failure is reported on
/// stderr and aborts the process; otherwise one summary line is written to
/// stderr and the function returns normally.
pub fn run_to_completion(config: DriverConfig) -> RunMetrics {
    let mut driver = match Driver::new(config) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("forkmark: {e}");
            std::process::abort();
        }
    };
    let metrics = driver.run();
    eprintln!("{metrics}");
    metrics
}
