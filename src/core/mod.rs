pub mod classifier;
pub mod emotion;
pub mod generator;
pub mod pipeline;
pub mod request;
pub mod ssml;
pub mod text;
pub mod voices;

// Re-export commonly used types for convenience
pub use classifier::{
    AnalysisResult, ClassifierError, ClassifierResult, EmotionClassifier, parse_analysis_response,
};

pub use emotion::{
    EmphasisLevel, IntensityLevel, VoiceModulation, VoiceSettings, VoiceSettingsMapper, VoiceTone,
    calculate_voice_modulation, create_voice_modulation, get_mapper_for_provider,
    resolve_voice_settings,
};

pub use generator::{GeneratedVoice, SpeechSynthesizer, VoiceGenerator};

pub use pipeline::{SpeechPipeline, SynthesisError, SynthesisResult};

pub use request::{SynthesisRequest, VoiceQualityMode};

pub use ssml::{compose_prosody_ssml, enhance_ssml, escape_ssml_text, validate_ssml};

pub use text::{JAPANESE_TEST_PHRASES, PreprocessOptions, preprocess_japanese_text};

pub use voices::{DEFAULT_VOICE_ID, VoiceOption, available_voices, find_voice};
