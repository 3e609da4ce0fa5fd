//! HTTP client module for gateway testing
//!
//! Provides the request dispatcher used by the smoke runner.

mod client;

pub use client::{Dispatcher, GatewayClient, GatewayResponse, TransportError};
