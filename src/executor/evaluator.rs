//! Response evaluation
//!
//! Turns a dispatch outcome into a per-provider test result.

use crate::http::{GatewayResponse, TransportError};
use crate::models::TestResult;

/// Answer text the gateway uses when a provider produced nothing
pub const NO_RESPONSE_SENTINEL: &str = "No response captured";

/// Answers must be strictly longer than this many characters
pub const MIN_CONTENT_CHARS: usize = 10;

/// Whether an answer counts as real content.
///
/// No semantic check is made: anything other than the sentinel that is
/// longer than [`MIN_CONTENT_CHARS`] characters passes.
pub fn is_substantive(content: &str) -> bool {
    content != NO_RESPONSE_SENTINEL && content.chars().count() > MIN_CONTENT_CHARS
}

/// Build the result for one provider
pub fn evaluate(
    provider: &str,
    outcome: Result<GatewayResponse, TransportError>,
) -> TestResult {
    match outcome {
        Ok(response) => {
            let content = response.content();
            TestResult::completed(
                provider,
                is_substantive(content),
                response.response_time_ms(),
                content,
            )
        }
        Err(e) => TestResult::error(provider, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GatewayResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sentinel_never_passes() {
        assert!(!is_substantive("No response captured"));
    }

    #[test]
    fn test_length_threshold() {
        assert!(!is_substantive(""));
        assert!(!is_substantive("short"));
        assert!(!is_substantive("0123456789"));
        assert!(is_substantive("0123456789A"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 10 characters, 20 bytes
        assert!(!is_substantive("éééééééééé"));
        assert!(is_substantive("ééééééééééé"));
    }

    #[test]
    fn test_sentinel_variants_pass() {
        assert!(is_substantive("No response captured."));
        assert!(is_substantive("no response captured"));
    }

    #[test]
    fn test_evaluate_pass() {
        let result = evaluate(
            "perplexity",
            Ok(response(json!({
                "choices": [{ "message": { "content": "TypeScript offers static typing, better tooling, and safer refactors." } }],
                "proxima": { "responseTimeMs": 842 }
            }))),
        );

        assert!(result.passed);
        assert_eq!(result.duration_ms, 842);
        assert_eq!(result.content_length, 69);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_evaluate_sentinel() {
        let result = evaluate(
            "chatgpt",
            Ok(response(json!({
                "choices": [{ "message": { "content": "No response captured" } }]
            }))),
        );

        assert!(!result.passed);
        assert_eq!(result.duration_ms, 0);
        assert_eq!(result.content_length, 20);
        assert_eq!(result.content, "No response captured");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_evaluate_missing_choices() {
        let result = evaluate(
            "gemini",
            Ok(response(json!({ "proxima": { "responseTimeMs": 10 } }))),
        );

        assert!(!result.passed);
        assert_eq!(result.content, "");
        assert_eq!(result.content_length, 0);
        assert_eq!(result.duration_ms, 10);
    }

    #[test]
    fn test_evaluate_string_response_time_still_passes() {
        let result = evaluate(
            "perplexity",
            Ok(response(json!({
                "choices": [{ "message": { "content": "A perfectly fine long answer" } }],
                "proxima": { "responseTimeMs": "842" }
            }))),
        );

        assert!(result.passed);
        assert_eq!(result.duration_ms, 0);
        assert_eq!(result.content_length, 28);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_evaluate_transport_error() {
        let result = evaluate(
            "gemini",
            Err(TransportError::Request("ECONNREFUSED".to_string())),
        );

        assert!(!result.passed);
        assert_eq!(result.duration_ms, 0);
        assert_eq!(result.content_length, 0);
        assert_eq!(result.error.as_deref(), Some("ECONNREFUSED"));
    }
}
