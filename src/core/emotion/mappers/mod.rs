//! Provider-specific voice settings mappers.
//!
//! | Mapper | Provider | Behavior |
//! |--------|----------|----------|
//! | `ElevenLabsVoiceMapper` | ElevenLabs | Per-tone stability/style table |
//! | `FallbackVoiceMapper` | Others | Neutral defaults for every tone |
//!
//! # Usage
//!
//! ```rust
//! use emotive_speech::core::emotion::mappers::get_mapper_for_provider;
//! use emotive_speech::core::emotion::{VoiceSettingsMapper, VoiceTone};
//!
//! let mapper = get_mapper_for_provider("elevenlabs");
//! let settings = mapper.resolve(Some(VoiceTone::Whisper));
//! assert!(!settings.use_speaker_boost);
//! ```

mod elevenlabs;
mod fallback;

pub use elevenlabs::{DEFAULT_VOICE_SETTINGS, ElevenLabsVoiceMapper};
pub use fallback::FallbackVoiceMapper;

use super::mapper::VoiceSettingsMapper;

/// Returns the voice settings mapper for a provider (case-insensitive).
///
/// Unknown providers get a [`FallbackVoiceMapper`].
pub fn get_mapper_for_provider(provider: &str) -> Box<dyn VoiceSettingsMapper> {
    match provider.to_lowercase().as_str() {
        "elevenlabs" | "eleven_labs" | "eleven-labs" => Box::new(ElevenLabsVoiceMapper::new()),
        _ => Box::new(FallbackVoiceMapper::default()),
    }
}

/// Returns whether a provider has tone-dependent voice settings.
#[inline]
pub fn provider_supports_tone_settings(provider: &str) -> bool {
    get_mapper_for_provider(provider).provider_id() != "unknown"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_mapper_elevenlabs_variants() {
        for provider in ["elevenlabs", "eleven_labs", "ELEVENLABS", "eleven-labs"] {
            let mapper = get_mapper_for_provider(provider);
            assert_eq!(mapper.provider_id(), "elevenlabs");
        }
    }

    #[test]
    fn test_get_mapper_unknown() {
        let mapper = get_mapper_for_provider("deepgram");
        assert_eq!(mapper.provider_id(), "unknown");
        assert!(!provider_supports_tone_settings("deepgram"));
        assert!(provider_supports_tone_settings("elevenlabs"));
    }
}
