//! Data models for gateway smoke testing
//!
//! Per-provider outcomes and the run summary built from them.

mod test_result;

pub use test_result::{RunSummary, TestResult};
