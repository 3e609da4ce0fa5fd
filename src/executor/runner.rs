//! Smoke test runner
//!
//! Drives the provider list through the gateway one provider at a time.

use anyhow::{Context, Result};
use chrono::Utc;
use std::io::Write;
use tracing::{info, warn};

use super::evaluate;
use crate::http::Dispatcher;
use crate::models::{RunSummary, TestResult};
use crate::output::ResultFormatter;

/// Sequential runner over a fixed provider list
pub struct SmokeRunner<D> {
    dispatcher: D,
    formatter: ResultFormatter,
}

impl<D: Dispatcher> SmokeRunner<D> {
    /// Create a new smoke runner
    pub fn new(dispatcher: D, formatter: ResultFormatter) -> Self {
        Self {
            dispatcher,
            formatter,
        }
    }

    /// Dispatch one provider, evaluate the outcome and print its report
    pub async fn test_provider<W: Write>(
        &self,
        provider: &str,
        question: &str,
        out: &mut W,
    ) -> Result<TestResult> {
        info!("Testing provider {}", provider);

        let outcome = self.dispatcher.dispatch(provider, question).await;
        if let Err(e) = &outcome {
            warn!("Request for {} failed: {}", provider, e);
        }

        let result = evaluate(provider, outcome);

        out.write_all(self.formatter.format_result(&result).as_bytes())
            .context("Failed to write provider report")?;
        out.flush().context("Failed to flush output")?;

        info!("  {}", result);
        Ok(result)
    }

    /// Run every provider in order and print the summary
    pub async fn run<W: Write>(
        &self,
        providers: &[String],
        question: &str,
        out: &mut W,
    ) -> Result<RunSummary> {
        let started_at = Utc::now();

        out.write_all(self.formatter.format_header(question).as_bytes())
            .context("Failed to write run header")?;

        let mut results = Vec::with_capacity(providers.len());
        for provider in providers {
            let result = self.test_provider(provider, question, &mut *out).await?;
            results.push(result);
        }

        let summary = RunSummary::new(started_at, question, results);

        out.write_all(self.formatter.format_summary(&summary)?.as_bytes())
            .context("Failed to write summary")?;
        out.flush().context("Failed to flush output")?;

        info!(
            "Run completed - Pass: {}/{} (errors: {})",
            summary.passed, summary.total, summary.errors
        );

        Ok(summary)
    }
}
