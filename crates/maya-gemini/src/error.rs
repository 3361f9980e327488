//! Analysis client error types.

use thiserror::Error;

/// Why an analysis call failed.
///
/// Every variant is terminal for the call that produced it: the client never
/// retries and never returns a partially built record.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The Gemini API key is missing.
    #[error("Gemini API key is not configured (set MAYAVIHIN_GEMINI__API_KEY or GEMINI_API_KEY)")]
    MissingApiKey,

    /// A `gemini` setting other than the key cannot be used.
    #[error("invalid analysis client configuration: {0}")]
    Config(String),

    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("analysis service error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("analysis service rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the service asked the caller to wait.
        retry_after_secs: u64,
    },

    /// The service answered without any generated text.
    #[error("analysis service returned an empty response{}", reason_suffix(.reason))]
    EmptyResponse {
        /// Block or finish reason reported by the service, if any.
        reason: Option<String>,
    },

    /// The generated text did not match the declared output schema.
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|reason| format!(" ({reason})"))
        .unwrap_or_default()
}
