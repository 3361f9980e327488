//! Verdict, media kind, activity log enums, and the bounded confidence score.
//!
//! Serialized spellings match the persisted history format: verdicts, log
//! actions and log statuses are `PascalCase`, media kinds are lowercase.

use std::borrow::Cow;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Tri-state authenticity judgment.
///
/// Deserialization is case-insensitive: older histories stored whatever
/// spelling the model produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum Verdict {
    Real,
    Fake,
    Uncertain,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Fake => "Fake",
            Self::Uncertain => "Uncertain",
        }
    }

    /// Parse a verdict ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything outside the three known values.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        [Self::Real, Self::Fake, Self::Uncertain]
            .into_iter()
            .find(|verdict| verdict.as_str().eq_ignore_ascii_case(raw))
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Cow::<str>::deserialize(deserializer)?;
        Self::parse_lenient(&raw).ok_or_else(|| {
            serde::de::Error::unknown_variant(&raw, &["Real", "Fake", "Uncertain"])
        })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MediaType
// ---------------------------------------------------------------------------

/// Kind of media submitted for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

impl MediaType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    /// Classify a declared content type (`image/png`, `video/mp4`, ...).
    ///
    /// Only the top-level type is inspected. Anything other than `image/*`,
    /// `video/*` or `audio/*` is not analyzable and yields `None`.
    #[must_use]
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let top = content_type
            .split('/')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match top.as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            _ => None,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LogAction
// ---------------------------------------------------------------------------

/// Kind of action recorded in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LogAction {
    Upload,
    Analysis,
    Delete,
    Error,
    System,
}

impl LogAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Analysis => "Analysis",
            Self::Delete => "Delete",
            Self::Error => "Error",
            Self::System => "System",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LogStatus
// ---------------------------------------------------------------------------

/// Outcome of a logged action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LogStatus {
    Success,
    Error,
}

impl LogStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Confidence score, an integer percentage in `[0, 100]`.
///
/// Deserializes from any JSON number: fractional values are rounded to the
/// nearest integer, non-finite or out-of-range values are rejected. Always
/// serializes as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: u8 = 100;

    /// Build a confidence from an integer percentage.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `value` exceeds 100.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::Validation(format!(
                "confidence {value} is outside 0..=100"
            )));
        }
        Ok(Self(value))
    }

    /// Build a confidence from a model-reported number.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `value` is not finite or lies
    /// outside `[0, 100]` before rounding.
    pub fn from_score(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() || !(0.0..=f64::from(Self::MAX)).contains(&value) {
            return Err(CoreError::Validation(format!(
                "confidence {value} is outside 0..=100"
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self(value.round() as u8))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_score(value)
    }
}

impl From<Confidence> for u8 {
    fn from(value: Confidence) -> Self {
        value.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl JsonSchema for Confidence {
    fn schema_name() -> Cow<'static, str> {
        "Confidence".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "integer",
            "minimum": 0,
            "maximum": 100
        })
    }
}
