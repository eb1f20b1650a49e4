//! Tone-to-prosody calculation.
//!
//! Each prosody value is a linear interpolation inside the tone's
//! [`ToneParameterRange`], using the intensity's factor:
//!
//! ```text
//! value = min + (max - min) * factor(intensity)
//! ```
//!
//! Values are rendered as SSML prosody attribute strings: pitch as a signed
//! percentage, rate as an unsigned percentage and volume as signed decibels.

use serde::{Deserialize, Serialize};

use super::types::{EmphasisLevel, IntensityLevel, ToneParameterRange, VoiceTone};

/// Prosody values derived from a tone and intensity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulationValues {
    /// Pitch shift, e.g. `"+8.75%"`
    pub pitch: String,
    /// Speaking rate, e.g. `"107.5%"`
    pub rate: String,
    /// Volume gain, e.g. `"+2.5dB"`
    pub volume: String,
    pub emphasis: EmphasisLevel,
}

/// Complete modulation for a synthesis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceModulation {
    #[serde(rename = "type")]
    pub tone: VoiceTone,
    pub intensity: IntensityLevel,
    pub pitch: String,
    pub rate: String,
    pub volume: String,
    pub emphasis: EmphasisLevel,
}

/// Calculates the prosody values for `tone` at `intensity`.
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::emotion::{calculate_voice_modulation, IntensityLevel, VoiceTone};
///
/// let values = calculate_voice_modulation(VoiceTone::Encouraging, IntensityLevel::High);
/// assert_eq!(values.pitch, "+8.75%");
/// assert_eq!(values.rate, "107.5%");
/// assert_eq!(values.volume, "+2.5dB");
/// ```
pub fn calculate_voice_modulation(tone: VoiceTone, intensity: IntensityLevel) -> ModulationValues {
    let ranges = ToneParameterRange::for_tone(tone);
    let factor = intensity.factor();

    let pitch = ranges.pitch.interpolate(factor);
    let rate = ranges.rate.interpolate(factor);
    let volume = ranges.volume.interpolate(factor);

    ModulationValues {
        pitch: format!("{}%", format_signed(pitch)),
        rate: format!("{}%", format_number(rate)),
        volume: format!("{}dB", format_signed(volume)),
        emphasis: intensity.emphasis(),
    }
}

/// Builds a [`VoiceModulation`] carrying the tone and intensity alongside the
/// calculated values.
pub fn create_voice_modulation(tone: VoiceTone, intensity: IntensityLevel) -> VoiceModulation {
    let values = calculate_voice_modulation(tone, intensity);
    VoiceModulation {
        tone,
        intensity,
        pitch: values.pitch,
        rate: values.rate,
        volume: values.volume,
        emphasis: values.emphasis,
    }
}

/// Shortest decimal representation, with negative zero folded to `0`.
fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

/// Like [`format_number`] but with a leading `+` for positive values.
fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_number(value))
    } else {
        format_number(value)
    }
}

// =============================================================================
// Tests
// =============================================================================
