//! Test result models for gateway smoke testing
//!
//! Defines per-provider results, their status, and the run summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome category of one provider
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Substantive answer received
    Pass,
    /// Gateway answered, but without usable content
    Fail,
    /// Request never produced a decodable response
    Error,
}

impl TestStatus {
    /// Word printed in the report
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Pass => "OK",
            TestStatus::Fail | TestStatus::Error => "FAILED",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "PASS"),
            TestStatus::Fail => write!(f, "FAIL"),
            TestStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of testing a single provider
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub provider: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub content_length: usize,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestResult {
    /// Result for a provider whose response was received and decoded
    pub fn completed(
        provider: impl Into<String>,
        passed: bool,
        duration_ms: u64,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        Self {
            provider: provider.into(),
            passed,
            duration_ms,
            content_length: content.chars().count(),
            content,
            error: None,
        }
    }

    /// Result for a provider whose request failed at the transport level
    pub fn error(provider: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            passed: false,
            duration_ms: 0,
            content_length: 0,
            content: String::new(),
            error: Some(error.into()),
        }
    }

    pub fn status(&self) -> TestStatus {
        if self.error.is_some() {
            TestStatus::Error
        } else if self.passed {
            TestStatus::Pass
        } else {
            TestStatus::Fail
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms, {} chars]",
            self.provider,
            self.status(),
            self.duration_ms,
            self.content_length
        )?;
        if let Some(err) = &self.error {
            write!(f, " - {err}")?;
        }
        Ok(())
    }
}

/// Summary of one harness run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub question: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub results: Vec<TestResult>,
}

impl RunSummary {
    pub fn new(
        started_at: DateTime<Utc>,
        question: impl Into<String>,
        results: Vec<TestResult>,
    ) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.status().is_success()).count();
        let errors = results
            .iter()
            .filter(|r| r.status() == TestStatus::Error)
            .count();

        Self {
            started_at,
            question: question.into(),
            total,
            passed,
            failed: total - passed - errors,
            errors,
            results,
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }
}
