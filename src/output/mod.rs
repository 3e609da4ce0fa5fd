//! Output formatting module
//!
//! Provides the console report and alternative summary formats.

mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
