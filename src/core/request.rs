//! Synthesis request payload.
//!
//! The request body follows the ElevenLabs text-to-speech API. The voice id
//! is part of the endpoint path, so it is carried on the request but not
//! serialized into the body.

use serde::{Deserialize, Serialize};

use crate::core::emotion::{DEFAULT_VOICE_SETTINGS, VoiceSettings};
use crate::core::voices::DEFAULT_VOICE_ID;

// =============================================================================
// Voice Quality Mode
// =============================================================================

/// Trade-off between synthesis quality and latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoiceQualityMode {
    /// Multilingual v2, best Japanese prosody
    #[default]
    HighQuality,
    /// Turbo v2.5
    Balanced,
    /// Turbo v2, lowest latency
    Fast,
}

impl VoiceQualityMode {
    #[inline]
    pub const fn all() -> &'static [VoiceQualityMode] {
        &[
            VoiceQualityMode::HighQuality,
            VoiceQualityMode::Balanced,
            VoiceQualityMode::Fast,
        ]
    }

    /// Model used for this mode.
    #[inline]
    pub const fn model_id(&self) -> &'static str {
        match self {
            VoiceQualityMode::HighQuality => "eleven_multilingual_v2",
            VoiceQualityMode::Balanced => "eleven_turbo_v2_5",
            VoiceQualityMode::Fast => "eleven_turbo_v2",
        }
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            VoiceQualityMode::HighQuality => "high_quality",
            VoiceQualityMode::Balanced => "balanced",
            VoiceQualityMode::Fast => "fast",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            VoiceQualityMode::HighQuality => "高品質",
            VoiceQualityMode::Balanced => "バランス",
            VoiceQualityMode::Fast => "高速",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            VoiceQualityMode::HighQuality => "最高品質の多言語音声。日本語の抑揚が最も自然",
            VoiceQualityMode::Balanced => "品質と速度のバランス",
            VoiceQualityMode::Fast => "低遅延。リアルタイム用途向け",
        }
    }

    /// Parses a mode name (`high_quality`, `balanced`, `fast`).
    ///
    /// Hyphens are accepted in place of underscores.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "high_quality" => Some(VoiceQualityMode::HighQuality),
            "balanced" => Some(VoiceQualityMode::Balanced),
            "fast" => Some(VoiceQualityMode::Fast),
            _ => None,
        }
    }
}

// =============================================================================
// Synthesis Request
// =============================================================================

/// Payload handed to the synthesis collaborator.
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::request::SynthesisRequest;
///
/// let request = SynthesisRequest::plain_text("こんにちは");
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["enable_ssml_parsing"], false);
/// assert!(body.get("voice_id").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Target voice; sent in the URL path
    #[serde(skip)]
    pub voice_id: String,
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
    pub enable_ssml_parsing: bool,
}

impl SynthesisRequest {
    /// Builds an SSML request for the default voice and model.
    pub fn ssml(markup: impl Into<String>, voice_settings: VoiceSettings) -> Self {
        Self {
            voice_id: DEFAULT_VOICE_ID.to_string(),
            text: markup.into(),
            model_id: VoiceQualityMode::default().model_id().to_string(),
            voice_settings,
            enable_ssml_parsing: true,
        }
    }

    /// Builds the unprocessed baseline request: raw text, no SSML, default
    /// voice settings. Useful for comparing against the enhanced request.
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            voice_id: DEFAULT_VOICE_ID.to_string(),
            text: text.into(),
            model_id: VoiceQualityMode::default().model_id().to_string(),
            voice_settings: DEFAULT_VOICE_SETTINGS,
            enable_ssml_parsing: false,
        }
    }

    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    pub fn with_quality_mode(mut self, mode: VoiceQualityMode) -> Self {
        self.model_id = mode.model_id().to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_mode_models() {
        assert_eq!(VoiceQualityMode::HighQuality.model_id(), "eleven_multilingual_v2");
        assert_eq!(VoiceQualityMode::Balanced.model_id(), "eleven_turbo_v2_5");
        assert_eq!(VoiceQualityMode::Fast.model_id(), "eleven_turbo_v2");
        assert_eq!(VoiceQualityMode::default(), VoiceQualityMode::HighQuality);
    }

    #[test]
    fn test_quality_mode_from_str() {
        for mode in VoiceQualityMode::all() {
            assert_eq!(VoiceQualityMode::from_str(mode.as_str()), Some(*mode));
        }
        assert_eq!(VoiceQualityMode::from_str("High-Quality"), Some(VoiceQualityMode::HighQuality));
        assert_eq!(VoiceQualityMode::from_str("ultra"), None);
    }

    #[test]
    fn test_quality_mode_serde() {
        let json = serde_json::to_string(&VoiceQualityMode::Balanced).unwrap();
        assert_eq!(json, "\"balanced\"");
    }

    #[test]
    fn test_plain_text_request() {
        let request = SynthesisRequest::plain_text("こんにちは");
        assert_eq!(request.text, "こんにちは");
        assert!(!request.enable_ssml_parsing);
        assert_eq!(request.voice_settings, DEFAULT_VOICE_SETTINGS);
        assert_eq!(request.voice_id, DEFAULT_VOICE_ID);
        assert_eq!(request.model_id, "eleven_multilingual_v2");
    }

    #[test]
    fn test_request_body_field_names() {
        let request = SynthesisRequest::ssml("<speak>はい</speak>", DEFAULT_VOICE_SETTINGS)
            .with_voice_id("voice-123")
            .with_quality_mode(VoiceQualityMode::Fast);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["text"], "<speak>はい</speak>");
        assert_eq!(body["model_id"], "eleven_turbo_v2");
        assert_eq!(body["enable_ssml_parsing"], true);
        assert_eq!(body["voice_settings"]["use_speaker_boost"], true);
        assert!(body.get("voice_id").is_none());
        assert_eq!(request.voice_id, "voice-123");
    }
}
