//! # maya-gemini
//!
//! Analysis client for Mayavihin.
//!
//! Sends one media payload to the Gemini `generateContent` endpoint with a
//! fixed multi-agent prompt and a declared JSON output schema, then validates
//! the generated JSON into an [`AnalysisRecord`]. One request per analysis:
//! no retries, no streaming, no partial records.

mod error;
mod http;
pub mod prompt;
mod wire;

use std::future::Future;
use std::time::Duration;

pub use error::AnalysisError;
pub use wire::parse_record;

use maya_config::{ConfigError, GeminiConfig};
use maya_core::entities::AnalysisRecord;
use maya_core::enums::MediaType;
use maya_core::errors::CoreError;
use maya_core::media::EncodedMedia;

use crate::http::check_response;
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// One file ready to be judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub file_name: String,
    /// Size of the raw file in bytes.
    pub file_size: u64,
    pub media_type: MediaType,
    pub media: EncodedMedia,
}

impl AnalysisRequest {
    /// Classify and encode raw file contents.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `content_type` is not an image,
    /// video or audio type.
    pub fn from_bytes(
        file_name: impl Into<String>,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<Self, CoreError> {
        let media_type = MediaType::from_content_type(content_type).ok_or_else(|| {
            CoreError::Validation(format!(
                "unsupported content type {content_type:?} (expected image/*, video/* or audio/*)"
            ))
        })?;
        Ok(Self {
            file_name: file_name.into(),
            file_size: bytes.len() as u64,
            media_type,
            media: EncodedMedia::encode(bytes, content_type),
        })
    }
}

/// Something that can turn an [`AnalysisRequest`] into a verdict.
///
/// [`GeminiClient`] is the production implementation. The application shell
/// is generic over this trait so the upload flow can run against fakes.
pub trait Analyzer {
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisRecord, AnalysisError>> + Send;
}

/// HTTP client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingApiKey`] if no API key is configured,
    /// [`AnalysisError::Config`] if another `gemini` setting is unusable, or
    /// [`AnalysisError::Http`] if the underlying `reqwest::Client` fails to
    /// build.
    pub fn new(config: &GeminiConfig) -> Result<Self, AnalysisError> {
        config.validate().map_err(|error| match error {
            ConfigError::NotConfigured { .. } => AnalysisError::MissingApiKey,
            other => AnalysisError::Config(other.to_string()),
        })?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("mayavihin/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.trim().to_string(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.trim().to_string(),
        })
    }

    /// `{endpoint}/v1beta/models/{model}:generateContent`
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Analyzer for GeminiClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisRecord, AnalysisError> {
        tracing::debug!(
            model = %self.model,
            file = %request.file_name,
            media_type = %request.media_type,
            bytes = request.file_size,
            "sending analysis request"
        );

        let body = GenerateContentRequest::for_analysis(request);
        let resp = self
            .http
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let data: GenerateContentResponse = resp.json().await?;
        let text = data.into_text()?;
        let record = parse_record(&text, request)?;

        tracing::debug!(id = %record.id, verdict = %record.verdict, "analysis completed");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.into(),
            endpoint: "http://127.0.0.1:9/".into(),
            ..GeminiConfig::default()
        }
    }

    #[test]
    fn missing_key_is_rejected() {
        assert!(matches!(
            GeminiClient::new(&config("   ")),
            Err(AnalysisError::MissingApiKey)
        ));
    }

    #[test]
    fn zero_timeout_is_rejected_before_any_request() {
        let config = GeminiConfig {
            timeout_secs: 0,
            ..config("key")
        };
        let err = GeminiClient::new(&config).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
        assert!(err.to_string().contains("gemini.timeout_secs"));
    }

    #[test]
    fn blank_model_is_rejected() {
        let config = GeminiConfig {
            model: "  ".into(),
            ..config("key")
        };
        let err = GeminiClient::new(&config).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
        assert!(err.to_string().contains("gemini.model"));
    }

    #[test]
    fn endpoint_without_scheme_is_rejected() {
        let config = GeminiConfig {
            endpoint: "generativelanguage.googleapis.com".into(),
            ..config("key")
        };
        assert!(matches!(
            GeminiClient::new(&config),
            Err(AnalysisError::Config(_))
        ));
    }

    #[test]
    fn generate_url_uses_model_and_trims_endpoint() {
        let client = GeminiClient::new(&config("key")).unwrap();
        assert_eq!(
            client.generate_url(),
            "http://127.0.0.1:9/v1beta/models/gemini-3-flash-preview:generateContent"
        );
        assert_eq!(client.model(), "gemini-3-flash-preview");
    }

    #[test]
    fn request_from_bytes_classifies_media() {
        let req = AnalysisRequest::from_bytes("voice.mp3", "audio/mpeg", &[0u8; 12]).unwrap();
        assert_eq!(req.media_type, MediaType::Audio);
        assert_eq!(req.file_size, 12);
        assert_eq!(req.media.content_type, "audio/mpeg");
    }

    #[test]
    fn request_from_bytes_rejects_documents() {
        let err = AnalysisRequest::from_bytes("notes.pdf", "application/pdf", b"%PDF").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
