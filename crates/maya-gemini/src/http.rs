//! Shared HTTP response checks for the Gemini client.
//!
//! Centralizes status-code handling (429 with `Retry-After` parsing,
//! non-success → [`AnalysisError::Api`] with the service's error message) so
//! the client stays focused on request construction and response mapping.

use serde::Deserialize;

use crate::error::AnalysisError;

/// Error envelope of the Generative Language API.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`AnalysisError::RateLimited`] with
///   `Retry-After` parsing (falls back to 60 s if absent or unparseable).
/// - **Non-success status** → [`AnalysisError::Api`] with the status code and
///   the message from the error envelope, or the raw body if it has none.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AnalysisError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(AnalysisError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(AnalysisError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(status) if !status.is_empty() => format!("{status}: {}", parsed.error.message),
            _ => parsed.error.message,
        },
        Err(_) if body.trim().is_empty() => String::from("no response body"),
        Err(_) => body.trim().to_string(),
    }
}
