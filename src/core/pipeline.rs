//! Request composition.
//!
//! Turns input text plus a classifier [`AnalysisResult`] into a
//! [`SynthesisRequest`]:
//!
//! ```text
//! analysis.ssml? ──yes──▶ enhance_ssml ─────────────────────────┐
//!       │                                                        ▼
//!       no ──▶ preprocess ──▶ modulation ──▶ compose_prosody ──▶ validate ──▶ request
//!                                                                   ▲
//!                                     VoiceSettingsMapper(tone) ────┘
//! ```

use thiserror::Error;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::classifier::{AnalysisResult, ClassifierError};
use crate::core::emotion::{VoiceSettingsMapper, create_voice_modulation, get_mapper_for_provider};
use crate::core::request::{SynthesisRequest, VoiceQualityMode};
use crate::core::ssml::{compose_prosody_ssml, enhance_ssml, validate_ssml};
use crate::core::text::{PreprocessOptions, preprocess_japanese_text};
use crate::core::voices::DEFAULT_VOICE_ID;

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while producing speech.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Input text was empty or whitespace only
    #[error("Input text is empty")]
    EmptyText,

    /// Markup failed the structural check; raised before any synthesis call
    #[error("Invalid SSML format")]
    InvalidSsml,

    /// Classifier output could not be used
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// The synthesis provider failed
    #[error("Provider error: {0}")]
    Provider(String),
}

/// Result type for synthesis operations.
pub type SynthesisResult<T> = Result<T, SynthesisError>;

// =============================================================================
// Speech Pipeline
// =============================================================================

/// Composes synthesis requests for a provider, voice and model.
pub struct SpeechPipeline {
    mapper: Box<dyn VoiceSettingsMapper>,
    options: PreprocessOptions,
    voice_id: String,
    quality_mode: VoiceQualityMode,
}

impl Default for SpeechPipeline {
    fn default() -> Self {
        Self::new("elevenlabs")
    }
}

impl SpeechPipeline {
    /// Creates a pipeline for `provider` with default voice and options.
    pub fn new(provider: &str) -> Self {
        Self {
            mapper: get_mapper_for_provider(provider),
            options: PreprocessOptions::default(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            quality_mode: VoiceQualityMode::default(),
        }
    }

    /// Creates a pipeline from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.provider)
            .with_voice_id(config.voice_id.clone())
            .with_quality_mode(config.quality_mode)
            .with_options(config.preprocess)
    }

    pub fn with_options(mut self, options: PreprocessOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    pub fn with_quality_mode(mut self, quality_mode: VoiceQualityMode) -> Self {
        self.quality_mode = quality_mode;
        self
    }

    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    pub fn provider_id(&self) -> &'static str {
        self.mapper.provider_id()
    }

    /// Produces the SSML document for `text`.
    ///
    /// Markup supplied by the classifier wins over local composition.
    pub fn build_markup(&self, text: &str, analysis: &AnalysisResult) -> SynthesisResult<String> {
        let markup = match analysis.ssml.as_deref() {
            Some(ssml) => {
                debug!("Using classifier-provided SSML");
                enhance_ssml(ssml)
            }
            None => {
                let normalized = preprocess_japanese_text(text, &self.options);
                let modulation = create_voice_modulation(analysis.tone, analysis.intensity);
                debug!(
                    tone = %analysis.tone,
                    intensity = %analysis.intensity,
                    pitch = %modulation.pitch,
                    rate = %modulation.rate,
                    volume = %modulation.volume,
                    "Composing prosody SSML"
                );
                compose_prosody_ssml(&normalized, &modulation)
            }
        };

        if !validate_ssml(&markup) {
            return Err(SynthesisError::InvalidSsml);
        }
        Ok(markup)
    }

    /// Builds the enhanced request: SSML markup plus tone voice settings.
    pub fn compose(&self, text: &str, analysis: &AnalysisResult) -> SynthesisResult<SynthesisRequest> {
        if text.trim().is_empty() && analysis.ssml.is_none() {
            return Err(SynthesisError::EmptyText);
        }

        let markup = self.build_markup(text, analysis)?;
        let voice_settings = self.mapper.resolve(Some(analysis.tone));

        info!(
            provider = self.mapper.provider_id(),
            tone = %analysis.tone,
            intensity = %analysis.intensity,
            markup_len = markup.len(),
            "Composed synthesis request"
        );

        Ok(SynthesisRequest::ssml(markup, voice_settings)
            .with_voice_id(self.voice_id.clone())
            .with_quality_mode(self.quality_mode))
    }

    /// Builds the baseline request for the same voice and model: raw text,
    /// no SSML, default voice settings.
    pub fn compose_plain(&self, text: &str) -> SynthesisResult<SynthesisRequest> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        Ok(SynthesisRequest::plain_text(text)
            .with_voice_id(self.voice_id.clone())
            .with_quality_mode(self.quality_mode))
    }
}
