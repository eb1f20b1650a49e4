//! Tone system for Japanese emotive speech.
//!
//! A classifier picks a [`VoiceTone`] and an [`IntensityLevel`] for the input
//! text. This module turns that pair into the two things a TTS request needs:
//!
//! ```text
//! ┌──────────────────────┐      ┌─────────────────────────┐
//! │ (tone, intensity)    │─────▶│ calculate_voice_        │──▶ pitch / rate / volume
//! │ 元気, high           │      │ modulation()            │    + emphasis (SSML)
//! └──────────────────────┘      └─────────────────────────┘
//!            │
//!            │                  ┌─────────────────────────┐
//!            └─────────────────▶│ VoiceSettingsMapper     │──▶ stability / similarity
//!                               │ (per provider)          │    / style / speaker boost
//!                               └─────────────────────────┘
//! ```
//!
//! Prosody values scale with intensity; voice settings do not.
//!
//! # Quick Start
//!
//! ```rust
//! use emotive_speech::core::emotion::{
//!     create_voice_modulation, get_mapper_for_provider, IntensityLevel, VoiceSettingsMapper,
//!     VoiceTone,
//! };
//!
//! let modulation = create_voice_modulation(VoiceTone::Gentle, IntensityLevel::Low);
//! assert_eq!(modulation.pitch, "-3.75%");
//!
//! let settings = get_mapper_for_provider("elevenlabs").resolve(Some(VoiceTone::Gentle));
//! assert!(settings.is_in_range());
//! ```

pub mod mapper;
pub mod mappers;
pub mod modulation;
pub mod types;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use types::{EmphasisLevel, IntensityLevel, ParameterRange, ToneParameterRange, VoiceTone};

pub use mapper::{VoiceSettings, VoiceSettingsMapper};

pub use mappers::{
    DEFAULT_VOICE_SETTINGS, ElevenLabsVoiceMapper, FallbackVoiceMapper, get_mapper_for_provider,
    provider_supports_tone_settings,
};

pub use modulation::{
    ModulationValues, VoiceModulation, calculate_voice_modulation, create_voice_modulation,
};

// =============================================================================
// Convenience Functions
// =============================================================================

/// Resolves voice settings for a provider from a raw tone label.
///
/// Unrecognized labels yield the provider's default settings.
pub fn resolve_voice_settings(provider: &str, tone_label: &str) -> VoiceSettings {
    get_mapper_for_provider(provider).resolve_label(tone_label)
}

// =============================================================================
// Tests
// =============================================================================
