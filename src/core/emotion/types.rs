//! Core tone types for the emotive speech system.
//!
//! A [`VoiceTone`] is the closed set of speaking styles the classifier may
//! choose from. Every per-tone table in the crate (prosody ranges, voice
//! settings, display metadata) is an exhaustive `match` on this enum, so a new
//! variant cannot be added without updating each of them.
//!
//! On the wire, tones use the Japanese labels produced by the classifier
//! (`"優しい"`, `"元気"`, ...). English names are accepted by
//! [`VoiceTone::from_str`] only, for command-line input.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Voice Tone Enum
// =============================================================================

/// Speaking tone selected for a synthesis request.
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::emotion::VoiceTone;
///
/// let tone = VoiceTone::Cheerful;
/// assert_eq!(tone.label(), "元気");
/// assert_eq!(VoiceTone::from_str("cheerful"), Some(VoiceTone::Cheerful));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceTone {
    /// Soft and warm (優しい)
    #[serde(rename = "優しい")]
    Gentle,
    /// Sweet, clingy and cute (甘え)
    #[serde(rename = "甘え")]
    Affectionate,
    /// Bright and lively (元気)
    #[serde(rename = "元気")]
    Cheerful,
    /// Composed and level (落ち着き)
    #[serde(rename = "落ち着き")]
    Calm,
    /// Stern and forceful (厳しい)
    #[serde(rename = "厳しい")]
    Strict,
    /// Hushed, secret-telling (ささやき)
    #[serde(rename = "ささやき")]
    Whisper,
    /// Supportive, cheering on (励まし)
    #[serde(rename = "励まし")]
    Encouraging,
    /// Low, relaxed and charming (イケメン)
    #[serde(rename = "イケメン")]
    Suave,
}

impl VoiceTone {
    /// Returns every tone, in display order.
    #[inline]
    pub const fn all() -> &'static [VoiceTone] {
        &[
            VoiceTone::Suave,
            VoiceTone::Gentle,
            VoiceTone::Affectionate,
            VoiceTone::Cheerful,
            VoiceTone::Calm,
            VoiceTone::Strict,
            VoiceTone::Whisper,
            VoiceTone::Encouraging,
        ]
    }

    /// Returns the Japanese label used by the classifier contract.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            VoiceTone::Gentle => "優しい",
            VoiceTone::Affectionate => "甘え",
            VoiceTone::Cheerful => "元気",
            VoiceTone::Calm => "落ち着き",
            VoiceTone::Strict => "厳しい",
            VoiceTone::Whisper => "ささやき",
            VoiceTone::Encouraging => "励まし",
            VoiceTone::Suave => "イケメン",
        }
    }

    /// Returns the lowercase English name.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            VoiceTone::Gentle => "gentle",
            VoiceTone::Affectionate => "affectionate",
            VoiceTone::Cheerful => "cheerful",
            VoiceTone::Calm => "calm",
            VoiceTone::Strict => "strict",
            VoiceTone::Whisper => "whisper",
            VoiceTone::Encouraging => "encouraging",
            VoiceTone::Suave => "suave",
        }
    }

    /// Short description of how the tone sounds.
    pub const fn description(&self) -> &'static str {
        match self {
            VoiceTone::Gentle => "柔らかく温かい話し方",
            VoiceTone::Affectionate => "甘えた、可愛らしい話し方",
            VoiceTone::Cheerful => "明るく活発な話し方",
            VoiceTone::Calm => "冷静で落ち着いた話し方",
            VoiceTone::Strict => "厳格で強い話し方",
            VoiceTone::Whisper => "小声で内緒話のような話し方",
            VoiceTone::Encouraging => "勇気づける、応援するような話し方",
            VoiceTone::Suave => "低くて落ち着いた魅力的な話し方",
        }
    }

    /// Emoji icon shown next to the tone in selectors.
    pub const fn icon(&self) -> &'static str {
        match self {
            VoiceTone::Gentle => "😊",
            VoiceTone::Affectionate => "🥺",
            VoiceTone::Cheerful => "😆",
            VoiceTone::Calm => "😌",
            VoiceTone::Strict => "😤",
            VoiceTone::Whisper => "🤫",
            VoiceTone::Encouraging => "💪",
            VoiceTone::Suave => "😎",
        }
    }

    /// Returns the tone whose Japanese label is exactly `label`.
    ///
    /// This is the classifier contract check: no trimming, no aliases.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().find(|t| t.label() == label).copied()
    }

    /// Parses a tone from its Japanese label or English name.
    ///
    /// Input is trimmed and English names are matched case-insensitively.
    /// Use [`VoiceTone::from_label`] where only the wire label is valid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use emotive_speech::core::emotion::VoiceTone;
    ///
    /// assert_eq!(VoiceTone::from_str("ささやき"), Some(VoiceTone::Whisper));
    /// assert_eq!(VoiceTone::from_str("WHISPER"), Some(VoiceTone::Whisper));
    /// assert_eq!(VoiceTone::from_str("無効なタイプ"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if let Some(tone) = Self::all().iter().find(|t| t.label() == trimmed) {
            return Some(*tone);
        }

        match trimmed.to_lowercase().as_str() {
            "gentle" => Some(VoiceTone::Gentle),
            "affectionate" => Some(VoiceTone::Affectionate),
            "cheerful" => Some(VoiceTone::Cheerful),
            "calm" => Some(VoiceTone::Calm),
            "strict" => Some(VoiceTone::Strict),
            "whisper" => Some(VoiceTone::Whisper),
            "encouraging" => Some(VoiceTone::Encouraging),
            "suave" => Some(VoiceTone::Suave),
            _ => None,
        }
    }
}

impl fmt::Display for VoiceTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Intensity Level
// =============================================================================

/// Named intensity of a tone.
///
/// Each level maps to an interpolation factor inside the tone's parameter
/// ranges:
/// - Low: 0.25
/// - Medium: 0.5
/// - High: 0.75
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Subtle expression
    Low,
    /// Moderate expression
    #[default]
    Medium,
    /// Strong expression
    High,
}

impl IntensityLevel {
    /// Returns all intensity levels in ascending order.
    #[inline]
    pub const fn all() -> &'static [IntensityLevel] {
        &[IntensityLevel::Low, IntensityLevel::Medium, IntensityLevel::High]
    }

    /// Interpolation factor applied to a tone's parameter ranges.
    #[inline]
    pub const fn factor(&self) -> f64 {
        match self {
            IntensityLevel::Low => 0.25,
            IntensityLevel::Medium => 0.5,
            IntensityLevel::High => 0.75,
        }
    }

    /// Emphasis level implied by this intensity, independent of tone.
    #[inline]
    pub const fn emphasis(&self) -> EmphasisLevel {
        match self {
            IntensityLevel::Low => EmphasisLevel::None,
            IntensityLevel::Medium => EmphasisLevel::Moderate,
            IntensityLevel::High => EmphasisLevel::Strong,
        }
    }

    /// Returns the level as a lowercase string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IntensityLevel::Low => "low",
            IntensityLevel::Medium => "medium",
            IntensityLevel::High => "high",
        }
    }

    /// Returns the level whose wire value is exactly `value`.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "low" => Some(IntensityLevel::Low),
            "medium" => Some(IntensityLevel::Medium),
            "high" => Some(IntensityLevel::High),
            _ => None,
        }
    }

    /// Parses an intensity level, trimmed and case-insensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(IntensityLevel::Low),
            "medium" => Some(IntensityLevel::Medium),
            "high" => Some(IntensityLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Emphasis Level
// =============================================================================

/// SSML `<emphasis>` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisLevel {
    /// No emphasis element is emitted
    #[default]
    None,
    Moderate,
    Strong,
}

impl EmphasisLevel {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EmphasisLevel::None => "none",
            EmphasisLevel::Moderate => "moderate",
            EmphasisLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for EmphasisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Tone Parameter Ranges
// =============================================================================

/// Closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Linear interpolation inside the range.
    #[inline]
    pub fn interpolate(&self, factor: f64) -> f64 {
        self.min + (self.max - self.min) * factor
    }

    /// Returns whether `min <= max`.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Prosody ranges for a single tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneParameterRange {
    /// Pitch shift in percent
    pub pitch: ParameterRange,
    /// Speaking rate in percent
    pub rate: ParameterRange,
    /// Volume gain in dB
    pub volume: ParameterRange,
}

impl ToneParameterRange {
    /// Returns the prosody ranges configured for `tone`.
    pub const fn for_tone(tone: VoiceTone) -> Self {
        let (pitch, rate, volume) = match tone {
            VoiceTone::Gentle => ((-5.0, 0.0), (85.0, 95.0), (-1.0, 0.0)),
            VoiceTone::Affectionate => ((5.0, 15.0), (90.0, 100.0), (0.0, 2.0)),
            VoiceTone::Cheerful => ((10.0, 20.0), (110.0, 130.0), (2.0, 4.0)),
            VoiceTone::Calm => ((-10.0, -5.0), (80.0, 90.0), (-2.0, 0.0)),
            VoiceTone::Strict => ((-5.0, 5.0), (100.0, 120.0), (2.0, 5.0)),
            VoiceTone::Whisper => ((0.0, 5.0), (70.0, 85.0), (-6.0, -3.0)),
            VoiceTone::Encouraging => ((5.0, 10.0), (100.0, 110.0), (1.0, 3.0)),
            VoiceTone::Suave => ((-12.0, -8.0), (80.0, 90.0), (1.0, 3.0)),
        };

        Self {
            pitch: ParameterRange::new(pitch.0, pitch.1),
            rate: ParameterRange::new(rate.0, rate.1),
            volume: ParameterRange::new(volume.0, volume.1),
        }
    }

    /// Returns whether every interval is ordered.
    pub fn is_valid(&self) -> bool {
        self.pitch.is_ordered() && self.rate.is_ordered() && self.volume.is_ordered()
    }
}

// =============================================================================
// Tests
// =============================================================================
