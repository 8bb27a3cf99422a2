//! Concurrent HTTP GET load tester: N workers each issue M sequential requests
//! against one URL and report per-request, per-worker and overall latency.

pub mod cli;
pub mod error;
pub mod model;
pub mod report;
pub mod runner;
pub mod worker;

pub use error::{Result, ThorError};
