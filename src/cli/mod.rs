//! CLI argument parsing
//!
//! Defines command-line interface using clap. Every argument is optional;
//! a bare invocation runs the fixed provider suite.

use clap::Parser;

/// Smoke test for the Proxima multi-AI chat-completion gateway
#[derive(Parser, Debug)]
#[command(name = "proxima-smoke")]
#[command(version)]
#[command(about = "Send one question to each gateway provider and report the outcome")]
#[command(long_about = None)]
pub struct Args {
    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Gateway chat-completion endpoint
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Provider to test (repeatable, replaces the default list)
    #[arg(short, long = "provider")]
    pub providers: Vec<String>,

    /// Question sent to every provider
    #[arg(short, long)]
    pub question: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Summary format (text, json, csv)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}
