//! Emotion classifier contract.
//!
//! Tone classification is done by an external language model. This module
//! defines what its answer must look like ([`AnalysisResult`]), how a raw
//! model response is turned into one ([`parse_analysis_response`]), and the
//! [`EmotionClassifier`] trait a concrete client implements.
//!
//! # Response Format
//!
//! ```json
//! {
//!   "type": "元気",
//!   "intensity": "high",
//!   "reason": "明るい挨拶のため",
//!   "ssml": "<speak>...</speak>"
//! }
//! ```
//!
//! `ssml` is optional. When present it replaces locally composed markup.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::emotion::{IntensityLevel, VoiceTone};

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while reading a classifier response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// No JSON object could be located in the response
    #[error("Failed to extract JSON from response")]
    MissingJson,

    /// The extracted JSON did not parse
    #[error("JSON parse error: {0}")]
    InvalidJson(String),

    /// `type` field absent
    #[error("Missing voice type in analysis result")]
    MissingTone,

    /// `type` field is not a known tone
    #[error("Invalid voice type: {0}")]
    InvalidTone(String),

    /// `intensity` field absent
    #[error("Missing intensity in analysis result")]
    MissingIntensity,

    /// `intensity` field is not low, medium or high
    #[error("Invalid intensity: {0}")]
    InvalidIntensity(String),

    /// `reason` field absent or not a string
    #[error("Missing or invalid reason")]
    InvalidReason,

    /// `ssml` field present but not a string
    #[error("Invalid SSML format")]
    InvalidSsml,

    /// The classifier service itself failed
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
}

/// Result type for classifier operations.
pub type ClassifierResult<T> = Result<T, ClassifierError>;

// =============================================================================
// Analysis Result
// =============================================================================

/// Validated classifier output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "type")]
    pub tone: VoiceTone,
    pub intensity: IntensityLevel,
    /// Free-text justification from the model
    pub reason: String,
    /// Pre-built markup; when set it takes precedence over local composition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssml: Option<String>,
}

impl AnalysisResult {
    pub fn new(tone: VoiceTone, intensity: IntensityLevel, reason: impl Into<String>) -> Self {
        Self {
            tone,
            intensity,
            reason: reason.into(),
            ssml: None,
        }
    }

    pub fn with_ssml(mut self, ssml: impl Into<String>) -> Self {
        self.ssml = Some(ssml.into());
        self
    }

    /// Validates a decoded JSON value against the result contract.
    ///
    /// Checks run in field order: tone, intensity, reason, ssml. The first
    /// failure is returned. An empty `ssml` string is treated as absent.
    pub fn from_value(value: &Value) -> ClassifierResult<Self> {
        let tone = match value.get("type") {
            None => return Err(ClassifierError::MissingTone),
            Some(raw) => raw
                .as_str()
                .and_then(VoiceTone::from_label)
                .ok_or_else(|| ClassifierError::InvalidTone(display_value(raw)))?,
        };

        let intensity = match value.get("intensity") {
            None => return Err(ClassifierError::MissingIntensity),
            Some(raw) => raw
                .as_str()
                .and_then(IntensityLevel::from_label)
                .ok_or_else(|| ClassifierError::InvalidIntensity(display_value(raw)))?,
        };

        let reason = value
            .get("reason")
            .and_then(Value::as_str)
            .ok_or(ClassifierError::InvalidReason)?
            .to_string();

        let ssml = match value.get("ssml") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(ClassifierError::InvalidSsml),
        };

        Ok(Self {
            tone,
            intensity,
            reason,
            ssml,
        })
    }
}

/// Renders a JSON value for error messages without surrounding quotes.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// =============================================================================
// Response Parsing
// =============================================================================

static FENCED_JSON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*\n([\s\S]*?)\n```").unwrap());
static BARE_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[\s\S]*?\}").unwrap());
static TRAILING_COMMA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r",(\s*[}\]])").unwrap());

/// Locates the JSON payload in a model response.
///
/// A fenced ```` ```json ```` block wins. Otherwise the first `{...}` span is
/// used, up to the first closing brace.
fn extract_json(raw: &str) -> Option<&str> {
    if let Some(caps) = FENCED_JSON_RE.captures(raw) {
        return caps.get(1).map(|m| m.as_str());
    }
    BARE_OBJECT_RE.find(raw).map(|m| m.as_str())
}

/// Trims and removes trailing commas before `}` or `]`.
fn cleanup_json(json: &str) -> String {
    TRAILING_COMMA_RE.replace_all(json.trim(), "$1").into_owned()
}

/// Parses a raw classifier response into a validated [`AnalysisResult`].
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::classifier::parse_analysis_response;
/// use emotive_speech::core::emotion::{IntensityLevel, VoiceTone};
///
/// let raw = "分析結果です:\n```json\n{\"type\": \"元気\", \"intensity\": \"high\", \"reason\": \"挨拶\",}\n```";
/// let analysis = parse_analysis_response(raw).unwrap();
/// assert_eq!(analysis.tone, VoiceTone::Cheerful);
/// assert_eq!(analysis.intensity, IntensityLevel::High);
/// ```
pub fn parse_analysis_response(raw: &str) -> ClassifierResult<AnalysisResult> {
    let json = extract_json(raw).ok_or(ClassifierError::MissingJson)?;
    let cleaned = cleanup_json(json);
    debug!(json = %cleaned, "Extracted classifier JSON");

    let value: Value =
        serde_json::from_str(&cleaned).map_err(|e| ClassifierError::InvalidJson(e.to_string()))?;

    AnalysisResult::from_value(&value)
}

// =============================================================================
// Classifier Trait
// =============================================================================

/// External service that picks a tone for a piece of text.
///
/// Implementations own transport, retries and authentication. They should
/// report service failures as [`ClassifierError::Unavailable`] and run
/// responses through [`parse_analysis_response`].
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classifies `text` into a tone and intensity.
    async fn analyze(&self, text: &str) -> ClassifierResult<AnalysisResult>;
}
