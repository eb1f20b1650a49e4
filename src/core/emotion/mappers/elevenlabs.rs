//! ElevenLabs voice settings mapper.
//!
//! ElevenLabs has no explicit emotion control, so each tone is expressed
//! through the `voice_settings` object that accompanies the request.
//!
//! # Voice Settings
//!
//! - **Stability** (0.0-1.0): Lower values = more expressive/emotional
//! - **Similarity Boost** (0.0-1.0): Higher values = closer to original voice
//! - **Style** (0.0-1.0): Style exaggeration
//! - **Speaker Boost**: Sharpens speaker similarity, slightly slower
//!
//! # Mapping Strategy
//!
//! - Lively tones (cheerful, affectionate, encouraging) → low stability, high style
//! - Composed tones (calm, suave, gentle) → high stability, low style
//! - Whisper disables speaker boost to keep the breathy quality

use crate::core::emotion::mapper::{VoiceSettings, VoiceSettingsMapper};
use crate::core::emotion::types::VoiceTone;

/// Engine defaults, used when no tone is known.
pub const DEFAULT_VOICE_SETTINGS: VoiceSettings = VoiceSettings::new(0.5, 0.75, 0.0, true);

/// Voice settings mapper for ElevenLabs TTS.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElevenLabsVoiceMapper;

impl ElevenLabsVoiceMapper {
    /// Creates a new ElevenLabs mapper.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Returns (stability, similarity_boost, style, use_speaker_boost) for a tone.
    const fn tone_to_settings(tone: VoiceTone) -> VoiceSettings {
        let (stability, similarity_boost, style, use_speaker_boost) = match tone {
            VoiceTone::Gentle => (0.6, 0.8, 0.2, true),
            VoiceTone::Affectionate => (0.35, 0.75, 0.5, true),
            VoiceTone::Cheerful => (0.3, 0.75, 0.6, true),
            VoiceTone::Calm => (0.75, 0.8, 0.1, true),
            VoiceTone::Strict => (0.55, 0.85, 0.4, true),
            VoiceTone::Whisper => (0.7, 0.7, 0.15, false),
            VoiceTone::Encouraging => (0.4, 0.8, 0.5, true),
            VoiceTone::Suave => (0.65, 0.85, 0.3, true),
        };
        VoiceSettings::new(stability, similarity_boost, style, use_speaker_boost)
    }
}

impl VoiceSettingsMapper for ElevenLabsVoiceMapper {
    fn provider_id(&self) -> &'static str {
        "elevenlabs"
    }

    fn default_settings(&self) -> VoiceSettings {
        DEFAULT_VOICE_SETTINGS
    }

    fn settings_for(&self, tone: VoiceTone) -> VoiceSettings {
        Self::tone_to_settings(tone)
    }
}

// =============================================================================
// Tests
// =============================================================================
