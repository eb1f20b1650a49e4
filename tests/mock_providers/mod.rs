//! Mock Collaborators
//!
//! In-process stand-ins for the external services the generator talks to:
//! - Emotion classifier (scripted raw model responses)
//! - Speech synthesizer (records requests, returns fake audio)
//!
//! Both count their calls so tests can assert which collaborators ran.

// Allow dead code in test infrastructure - not every test binary uses every mock
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use emotive_speech::{
    AnalysisResult, ClassifierError, ClassifierResult, EmotionClassifier, SpeechSynthesizer,
    SynthesisError, SynthesisRequest, SynthesisResult, parse_analysis_response,
};

/// Call counter shared by the mocks
#[derive(Debug, Default)]
pub struct MockStats {
    pub total_requests: AtomicU64,
    pub failed_requests: AtomicU64,
}

impl MockStats {
    pub fn record_success(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed_requests.load(Ordering::Relaxed)
    }
}

/// Classifier that replies with a fixed raw model response
pub struct MockClassifier {
    response: Result<String, String>,
    pub stats: MockStats,
}

impl MockClassifier {
    /// Replies with `raw`, parsed like a real model response
    pub fn responding(raw: impl Into<String>) -> Self {
        Self {
            response: Ok(raw.into()),
            stats: MockStats::default(),
        }
    }

    /// Fails every call as if the service were down
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            stats: MockStats::default(),
        }
    }
}

#[async_trait]
impl EmotionClassifier for MockClassifier {
    async fn analyze(&self, _text: &str) -> ClassifierResult<AnalysisResult> {
        let raw = match &self.response {
            Ok(raw) => raw,
            Err(message) => {
                self.stats.record_failure();
                return Err(ClassifierError::Unavailable(message.clone()));
            }
        };

        let result = parse_analysis_response(raw);
        match &result {
            Ok(_) => self.stats.record_success(),
            Err(_) => self.stats.record_failure(),
        }
        result
    }
}

/// Synthesizer that records every request and returns fake audio
pub struct MockSynthesizer {
    audio: Bytes,
    failure: Option<String>,
    pub requests: Mutex<Vec<SynthesisRequest>>,
    pub stats: MockStats,
}

impl MockSynthesizer {
    pub fn new() -> Self {
        Self {
            audio: Bytes::from_static(b"ID3\x04\x00mock-mp3"),
            failure: None,
            requests: Mutex::new(Vec::new()),
            stats: MockStats::default(),
        }
    }

    /// Fails every call with a provider error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    pub fn audio(&self) -> &Bytes {
        &self.audio
    }

    pub fn recorded(&self) -> Vec<SynthesisRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest) -> SynthesisResult<Bytes> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = &self.failure {
            self.stats.record_failure();
            return Err(SynthesisError::Provider(message.clone()));
        }

        self.stats.record_success();
        Ok(self.audio.clone())
    }
}
