//! Output formatters for smoke-test results
//!
//! Renders the run header, per-provider reports, and the final summary.

use anyhow::{Context, Result};

use crate::models::{RunSummary, TestResult};

/// Characters of answer text echoed per provider
pub const CONTENT_PREVIEW_CHARS: usize = 400;

/// Summary format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Run banner and the question under test
    pub fn format_header(&self, question: &str) -> String {
        format!("=== Proxima Multi-AI English Test ===\nQuestion: {question}\n\n")
    }

    /// Per-provider report, printed as soon as the provider settles
    pub fn format_result(&self, result: &TestResult) -> String {
        let provider = result.provider.to_uppercase();

        if let Some(err) = &result.error {
            return format!("--- {provider} --- ERROR: {err}\n");
        }

        let preview: String = result.content.chars().take(CONTENT_PREVIEW_CHARS).collect();

        format!(
            "--- {provider} ---\nStatus: {}\nTime: {} ms\nLength: {} chars\nContent: {preview}\n\n",
            result.status().label(),
            result.duration_ms,
            result.content_length,
        )
    }

    /// Format the closing summary section
    pub fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_summary_text(summary)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(summary)
                    .context("Failed to serialize summary")?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Csv => self.format_summary_csv(summary),
        }
    }

    fn format_summary_text(&self, summary: &RunSummary) -> String {
        let mut output = String::from("=== SUMMARY ===\n");
        for result in &summary.results {
            output.push_str(&format!(
                "{}: {} | {}ms | {} chars\n",
                result.provider,
                result.status().label(),
                result.duration_ms,
                result.content_length
            ));
        }
        output
    }

    fn format_summary_csv(&self, summary: &RunSummary) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(["provider", "passed", "duration_ms", "content_length", "error"])?;

        for result in &summary.results {
            writer.write_record([
                result.provider.clone(),
                result.passed.to_string(),
                result.duration_ms.to_string(),
                result.content_length.to_string(),
                result.error.clone().unwrap_or_default(),
            ])?;
        }

        writer.flush().context("Failed to flush CSV output")?;
        let bytes = writer
            .into_inner()
            .map_err(|_| anyhow::anyhow!("Failed to flush CSV output"))?;
        String::from_utf8(bytes).context("CSV output is not UTF-8")
    }
}
