//! Voice settings mapper trait.
//!
//! Prosody values (pitch, rate, volume) travel inside the SSML payload. Some
//! providers additionally expose coarse engine knobs that shape how
//! expressive a voice sounds. This module defines those knobs and the trait
//! that maps a tone onto them for a given provider.

use serde::{Deserialize, Serialize};

use super::types::VoiceTone;

// =============================================================================
// Voice Settings
// =============================================================================

/// Engine tuning parameters sent alongside a synthesis request.
///
/// Field names follow the ElevenLabs `voice_settings` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Voice stability (0.0 to 1.0). Lower is more expressive.
    pub stability: f32,
    /// Similarity to the original voice (0.0 to 1.0)
    pub similarity_boost: f32,
    /// Style exaggeration (0.0 to 1.0)
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl VoiceSettings {
    #[inline]
    pub const fn new(stability: f32, similarity_boost: f32, style: f32, use_speaker_boost: bool) -> Self {
        Self {
            stability,
            similarity_boost,
            style,
            use_speaker_boost,
        }
    }

    /// Returns whether every continuous knob lies in `[0.0, 1.0]`.
    pub fn is_in_range(&self) -> bool {
        [self.stability, self.similarity_boost, self.style]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

// =============================================================================
// Voice Settings Mapper Trait
// =============================================================================

/// Maps tones to provider-specific voice settings.
///
/// Implementations are pure table lookups: the same tone always yields the
/// same settings, and intensity plays no part. Unknown tone labels resolve to
/// the provider's default settings so classifier responses with new labels
/// still synthesize.
pub trait VoiceSettingsMapper: Send + Sync {
    /// Returns the provider identifier (e.g. "elevenlabs").
    fn provider_id(&self) -> &'static str;

    /// Settings used when no tone is supplied.
    fn default_settings(&self) -> VoiceSettings;

    /// Settings for a known tone.
    fn settings_for(&self, tone: VoiceTone) -> VoiceSettings;

    /// Resolves optional tone to settings, falling back to the defaults.
    fn resolve(&self, tone: Option<VoiceTone>) -> VoiceSettings {
        match tone {
            Some(tone) => self.settings_for(tone),
            None => self.default_settings(),
        }
    }

    /// Resolves a raw tone label. Never fails.
    fn resolve_label(&self, label: &str) -> VoiceSettings {
        match VoiceTone::from_str(label) {
            Some(tone) => self.settings_for(tone),
            None => {
                tracing::debug!(
                    provider = self.provider_id(),
                    label,
                    "Unrecognized tone label, using default voice settings"
                );
                self.default_settings()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
