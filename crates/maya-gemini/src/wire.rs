//! Request and response bodies of `models/{model}:generateContent`, and the
//! boundary validation that turns generated text into an [`AnalysisRecord`].

use maya_core::entities::{AgentResult, AnalysisRecord, timestamp_now};
use maya_core::enums::{Confidence, MediaType, Verdict};
use maya_core::ids;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::AnalysisRequest;
use crate::error::AnalysisError;
use crate::prompt;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub system_instruction: Content<'a>,
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RequestPart<'a> {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData<'a> {
    pub mime_type: &'a str,
    pub data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
}

impl<'a> GenerateContentRequest<'a> {
    /// Body for one analysis: system instruction, user text, inline payload.
    #[must_use]
    pub fn for_analysis(request: &'a AnalysisRequest) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![RequestPart::Text {
                    text: prompt::system_instruction(request.media_type),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![
                    RequestPart::Text {
                        text: prompt::user_text(request.media_type, &request.file_name),
                    },
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: &request.media.content_type,
                            data: &request.media.base64,
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: prompt::response_schema(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyResponse`] when there is no candidate or
    /// its text is blank. The block reason (or the finish reason) is carried
    /// along when the service reported one.
    pub fn into_text(self) -> Result<String, AnalysisError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(AnalysisError::EmptyResponse {
                reason: block_reason,
            });
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyResponse {
                reason: block_reason.or(candidate.finish_reason),
            });
        }
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Generated payload
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVerdict {
    overall_verdict: String,
    overall_confidence: f64,
    explanation: String,
    agents: Vec<RawAgent>,
}

#[derive(Debug, Deserialize)]
struct RawAgent {
    name: String,
    verdict: String,
    confidence: f64,
    reasoning: String,
}

/// Drop a Markdown code fence around the JSON, if the model added one.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn verdict(raw: &str, field: &str) -> Result<Verdict, AnalysisError> {
    Verdict::parse_lenient(raw).ok_or_else(|| {
        AnalysisError::MalformedResponse(format!("{field}: unknown verdict {raw:?}"))
    })
}

fn confidence(raw: f64, field: &str) -> Result<Confidence, AnalysisError> {
    Confidence::from_score(raw)
        .map_err(|_| AnalysisError::MalformedResponse(format!("{field}: confidence {raw} is outside 0..=100")))
}

/// Validate generated text and build the record for `request`.
///
/// # Errors
///
/// Returns [`AnalysisError::MalformedResponse`] when the text is not JSON of
/// the declared shape, a verdict is unknown, a confidence is out of range,
/// or the agent list is empty.
pub fn parse_record(text: &str, request: &AnalysisRequest) -> Result<AnalysisRecord, AnalysisError> {
    let raw: RawVerdict = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    if raw.agents.is_empty() {
        return Err(AnalysisError::MalformedResponse(
            "agents: expected at least one agent".into(),
        ));
    }

    let agents = raw
        .agents
        .into_iter()
        .enumerate()
        .map(|(index, agent)| {
            let field = format!("agents[{index}]");
            Ok(AgentResult {
                id: ids::agent_id(index),
                verdict: verdict(&agent.verdict, &field)?,
                confidence: confidence(agent.confidence, &field)?,
                name: agent.name,
                reasoning: agent.reasoning,
            })
        })
        .collect::<Result<Vec<_>, AnalysisError>>()?;

    Ok(AnalysisRecord {
        id: ids::new_record_id(),
        timestamp: timestamp_now(),
        file_name: request.file_name.clone(),
        file_size: request.file_size,
        file_type: request.media_type,
        thumbnail: (request.media_type == MediaType::Image).then(|| request.media.data_url()),
        verdict: verdict(&raw.overall_verdict, "overallVerdict")?,
        overall_confidence: confidence(raw.overall_confidence, "overallConfidence")?,
        agents,
        explanation: raw.explanation,
    })
}

#[cfg(test)]
mod tests {
    use maya_core::media::EncodedMedia;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn request(file_name: &str, content_type: &str) -> AnalysisRequest {
        AnalysisRequest::from_bytes(file_name, content_type, b"payload").unwrap()
    }

    fn payload() -> Value {
        json!({
            "overallVerdict": "Fake",
            "overallConfidence": 82,
            "explanation": "Lip movement drifts from the audio track.",
            "agents": [
                {"name": "Visual Forensics", "verdict": "Fake", "confidence": 88.4, "reasoning": "Blending seams around the jaw."},
                {"name": "Audio Analysis", "verdict": "uncertain", "confidence": 50, "reasoning": "Compressed track."}
            ]
        })
    }

    #[test]
    fn request_body_shape() {
        let req = request("clip.mp4", "video/mp4");
        let body = serde_json::to_value(GenerateContentRequest::for_analysis(&req)).unwrap();

        let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(system.contains("video file"));
        assert!(body["systemInstruction"].get("role").is_none());

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "Analyze this video file named \"clip.mp4\".");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "video/mp4");
        assert_eq!(parts[1]["inlineData"]["data"], req.media.base64.as_str());
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"],
            prompt::response_schema()
        );
    }

    #[test]
    fn parses_valid_payload() {
        let req = request("clip.mp4", "video/mp4");
        let record = parse_record(&payload().to_string(), &req).unwrap();

        assert_eq!(record.verdict, Verdict::Fake);
        assert_eq!(record.overall_confidence.get(), 82);
        assert_eq!(record.file_name, "clip.mp4");
        assert_eq!(record.file_size, 7);
        assert_eq!(record.file_type, MediaType::Video);
        assert_eq!(record.thumbnail, None);
        assert_eq!(record.agents.len(), 2);
        assert_eq!(record.agents[0].id, "agent-0");
        assert_eq!(record.agents[0].confidence.get(), 88);
        assert_eq!(record.agents[1].id, "agent-1");
        assert_eq!(record.agents[1].verdict, Verdict::Uncertain);
    }

    #[test]
    fn image_record_carries_thumbnail() {
        let req = request("photo.jpg", "image/jpeg");
        let record = parse_record(&payload().to_string(), &req).unwrap();
        assert_eq!(record.thumbnail, Some(req.media.data_url()));
        assert!(
            record
                .thumbnail
                .as_deref()
                .unwrap()
                .starts_with("data:image/jpeg;base64,")
        );
    }

    #[test]
    fn each_parse_gets_a_fresh_id() {
        let req = request("a.wav", "audio/wav");
        let text = payload().to_string();
        let a = parse_record(&text, &req).unwrap();
        let b = parse_record(&text, &req).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn accepts_fenced_json() {
        let req = request("a.wav", "audio/wav");
        let text = format!("```json\n{}\n```", payload());
        assert!(parse_record(&text, &req).is_ok());
    }

    #[rstest]
    #[case::not_json("the file looks real to me")]
    #[case::missing_field(r#"{"overallVerdict":"Real","overallConfidence":90,"agents":[]}"#)]
    #[case::empty_agents(r#"{"overallVerdict":"Real","overallConfidence":90,"explanation":"x","agents":[]}"#)]
    #[case::unknown_verdict(r#"{"overallVerdict":"Probably","overallConfidence":90,"explanation":"x","agents":[{"name":"a","verdict":"Real","confidence":1,"reasoning":"r"}]}"#)]
    #[case::overall_out_of_range(r#"{"overallVerdict":"Real","overallConfidence":140,"explanation":"x","agents":[{"name":"a","verdict":"Real","confidence":1,"reasoning":"r"}]}"#)]
    #[case::agent_negative(r#"{"overallVerdict":"Real","overallConfidence":90,"explanation":"x","agents":[{"name":"a","verdict":"Real","confidence":-3,"reasoning":"r"}]}"#)]
    #[case::confidence_as_string(r#"{"overallVerdict":"Real","overallConfidence":"high","explanation":"x","agents":[{"name":"a","verdict":"Real","confidence":1,"reasoning":"r"}]}"#)]
    fn rejects_malformed_payloads(#[case] text: &str) {
        let req = request("a.wav", "audio/wav");
        let err = parse_record(text, &req).unwrap_err();
        assert!(
            matches!(err, AnalysisError::MalformedResponse(_)),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn into_text_concatenates_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(resp.into_text().unwrap(), "{\"a\":1}");
    }

    #[test]
    fn into_text_reports_block_reason() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        let err = resp.into_text().unwrap_err();
        assert!(
            matches!(err, AnalysisError::EmptyResponse { reason: Some(ref r) } if r == "SAFETY")
        );
    }

    #[test]
    fn into_text_blank_candidate_is_empty() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}, "finishReason": "MAX_TOKENS"}]
        }))
        .unwrap();
        let err = resp.into_text().unwrap_err();
        assert!(
            matches!(err, AnalysisError::EmptyResponse { reason: Some(ref r) } if r == "MAX_TOKENS")
        );
    }

    #[test]
    fn strip_code_fence_variants() {
        assert_eq!(strip_code_fence("  {}  "), "{}");
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```\n{}\n```\n"), "{}");
    }

    #[test]
    fn encoded_media_is_sent_verbatim() {
        let req = AnalysisRequest {
            file_name: "x.png".into(),
            file_size: 3,
            media_type: MediaType::Image,
            media: EncodedMedia::encode(b"abc", "image/png"),
        };
        let body = serde_json::to_value(GenerateContentRequest::for_analysis(&req)).unwrap();
        assert_eq!(body["contents"][0]["parts"][1]["inlineData"]["data"], "YWJj");
    }
}
