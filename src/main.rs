//! Proxima smoke test - multi-provider chat-completion gateway check
//!
//! Sends the same English question to each provider behind a locally
//! running Proxima gateway and reports, per provider, whether a
//! substantive answer came back, how long the gateway says it took,
//! and a preview of the answer.
//!
//! ## Usage
//!
//! ```bash
//! # Run the fixed suite (perplexity, chatgpt, gemini)
//! proxima-smoke
//!
//! # Only test one provider against another gateway
//! proxima-smoke --endpoint http://10.0.0.5:3210/v1/chat/completions -p gemini
//!
//! # Machine-readable summary
//! proxima-smoke --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

mod cli;
mod config;
mod executor;
mod http;
mod models;
mod output;
mod utils;

use cli::Args;
use config::HarnessConfig;
use executor::SmokeRunner;
use http::GatewayClient;
use output::{OutputFormat, ResultFormatter};
use utils::logger::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(LogLevel::resolve(args.log_level.as_deref(), args.verbose));

    let config = HarnessConfig::from_args(&args)?;
    debug!("Effective configuration: {:?}", config);

    let format = OutputFormat::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("Unknown output format: {}", args.format))?;

    let client = match config.timeout_secs {
        Some(secs) => GatewayClient::with_timeout(&config.endpoint, secs)?,
        None => GatewayClient::new(&config.endpoint)?,
    };

    info!(
        "Testing {} providers via {}",
        config.providers.len(),
        client.endpoint()
    );

    let runner = SmokeRunner::new(client, ResultFormatter::new(format));
    let mut stdout = std::io::stdout().lock();
    let summary = runner
        .run(&config.providers, &config.question, &mut stdout)
        .await?;

    if !summary.is_all_passed() {
        info!(
            "{} of {} providers did not pass",
            summary.total - summary.passed,
            summary.total
        );
    }

    Ok(())
}
