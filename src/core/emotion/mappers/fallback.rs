//! Fallback voice settings mapper.
//!
//! Used for providers without tone-dependent engine settings. Every tone
//! resolves to the same neutral settings; expressiveness then comes from the
//! SSML prosody alone.

use crate::core::emotion::mapper::{VoiceSettings, VoiceSettingsMapper};
use crate::core::emotion::types::VoiceTone;

use super::elevenlabs::DEFAULT_VOICE_SETTINGS;

/// Mapper that ignores the tone.
#[derive(Debug, Clone, Copy)]
pub struct FallbackVoiceMapper {
    provider_id: &'static str,
}

impl FallbackVoiceMapper {
    /// Creates a fallback mapper for the given provider.
    #[inline]
    pub const fn new(provider_id: &'static str) -> Self {
        Self { provider_id }
    }
}

impl Default for FallbackVoiceMapper {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl VoiceSettingsMapper for FallbackVoiceMapper {
    fn provider_id(&self) -> &'static str {
        self.provider_id
    }

    fn default_settings(&self) -> VoiceSettings {
        DEFAULT_VOICE_SETTINGS
    }

    fn settings_for(&self, _tone: VoiceTone) -> VoiceSettings {
        DEFAULT_VOICE_SETTINGS
    }
}
