//! Test execution engine
//!
//! Evaluates gateway responses and runs providers sequentially.

mod evaluator;
mod runner;

pub use evaluator::evaluate;
pub use runner::SmokeRunner;
