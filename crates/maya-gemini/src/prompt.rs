//! Fixed prompt text and the declared output schema.

use maya_core::enums::MediaType;
use serde_json::{Value, json};

/// Analysis perspectives the model is asked to report on, in display order.
pub const PERSPECTIVES: [&str; 5] = [
    "Visual Forensics",
    "Audio Analysis",
    "Metadata",
    "Consistency",
    "Explainability",
];

/// System instruction for one analysis of `media_type`.
#[must_use]
pub fn system_instruction(media_type: MediaType) -> String {
    format!(
        "You are MAYAVIHIN, a multi-agent deepfake detection system. \
         You are examining a {kind} file. Evaluate it from five perspectives, \
         one agent each: {agents}. Agents that do not apply to this media \
         kind must still report and say why their evidence is limited.\n\
         For every agent return its name, a verdict of Real, Fake or \
         Uncertain, a confidence from 0 to 100 and a short reasoning. Then \
         return an overallVerdict (Real, Fake or Uncertain), an \
         overallConfidence from 0 to 100 and a plain-language explanation \
         of the decision for a non-expert reader. Respond with JSON only.",
        kind = media_type.as_str(),
        agents = PERSPECTIVES.join(", "),
    )
}

/// User turn text preceding the inline payload.
#[must_use]
pub fn user_text(media_type: MediaType, file_name: &str) -> String {
    format!("Analyze this {} file named \"{file_name}\".", media_type.as_str())
}

/// `responseSchema` in the service's OpenAPI subset.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallVerdict": { "type": "STRING" },
            "overallConfidence": { "type": "NUMBER" },
            "explanation": { "type": "STRING" },
            "agents": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "verdict": { "type": "STRING" },
                        "confidence": { "type": "NUMBER" },
                        "reasoning": { "type": "STRING" }
                    },
                    "required": ["name", "verdict", "confidence", "reasoning"]
                }
            }
        },
        "required": ["overallVerdict", "overallConfidence", "explanation", "agents"]
    })
}
