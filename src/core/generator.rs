//! End-to-end voice generation.
//!
//! [`VoiceGenerator`] drives one request through the external collaborators:
//!
//! 1. reject empty input
//! 2. classify the text ([`EmotionClassifier`])
//! 3. compose and validate the request ([`SpeechPipeline`])
//! 4. synthesize audio ([`SpeechSynthesizer`])
//!
//! No retries are attempted; collaborator errors are returned as-is.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{info, warn};

use crate::core::classifier::{AnalysisResult, EmotionClassifier};
use crate::core::pipeline::{SpeechPipeline, SynthesisError, SynthesisResult};
use crate::core::request::SynthesisRequest;

/// External text-to-speech transport.
///
/// Implementations send the request to the provider and return the encoded
/// audio. Failures should be reported as [`SynthesisError::Provider`].
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, request: &SynthesisRequest) -> SynthesisResult<Bytes>;
}

/// Output of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedVoice {
    pub analysis: AnalysisResult,
    pub request: SynthesisRequest,
    pub audio: Bytes,
}

/// Classifier + pipeline + synthesizer.
pub struct VoiceGenerator<C, S> {
    classifier: C,
    synthesizer: S,
    pipeline: SpeechPipeline,
}

impl<C, S> VoiceGenerator<C, S>
where
    C: EmotionClassifier,
    S: SpeechSynthesizer,
{
    pub fn new(classifier: C, synthesizer: S, pipeline: SpeechPipeline) -> Self {
        Self {
            classifier,
            synthesizer,
            pipeline,
        }
    }

    pub fn pipeline(&self) -> &SpeechPipeline {
        &self.pipeline
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    /// Classifies `text` and synthesizes it with the matching tone.
    pub async fn generate(&self, text: &str) -> SynthesisResult<GeneratedVoice> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let analysis = self.classifier.analyze(text).await.inspect_err(|e| {
            warn!(error = %e, "Emotion classification failed");
        })?;
        info!(
            tone = %analysis.tone,
            intensity = %analysis.intensity,
            reason = %analysis.reason,
            "Classified text"
        );

        let request = self.pipeline.compose(text, &analysis)?;
        let audio = self.synthesizer.synthesize(&request).await?;
        info!(audio_bytes = audio.len(), "Synthesized speech");

        Ok(GeneratedVoice {
            analysis,
            request,
            audio,
        })
    }

    /// Synthesizes the raw text without classification or SSML.
    pub async fn generate_plain(&self, text: &str) -> SynthesisResult<Bytes> {
        let request = self.pipeline.compose_plain(text)?;
        self.synthesizer.synthesize(&request).await
    }
}
