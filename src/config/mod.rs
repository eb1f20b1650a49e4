//! Configuration module for the emotive speech CLI
//!
//! Configuration comes from environment variables (including a `.env` file
//! loaded at startup) and an optional YAML file.
//! Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//!
//! # Example
//! ```rust,no_run
//! use emotive_speech::config::AppConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = AppConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config = AppConfig::from_file(&PathBuf::from("config.yaml"))?;
//! println!("Voice: {}", config.voice_id);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::core::request::VoiceQualityMode;
use crate::core::text::PreprocessOptions;
use crate::core::voices::DEFAULT_VOICE_ID;

mod env;
mod yaml;

pub use yaml::YamlConfig;

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Synthesis provider, selects the voice settings mapper
    pub provider: String,
    pub voice_id: String,
    pub quality_mode: VoiceQualityMode,
    pub preprocess: PreprocessOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: "elevenlabs".to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            quality_mode: VoiceQualityMode::default(),
            preprocess: PreprocessOptions::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables on top of defaults
    ///
    /// # Errors
    /// Returns an error if a boolean or quality mode variable has an invalid value.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = env::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Validation of the merged configuration fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        // .env is loaded in main.rs, so it is already part of the environment here
        let yaml_config = YamlConfig::from_file(path)?;

        let mut config = env::load()?;
        yaml_config.apply_to(&mut config);

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.provider.trim().is_empty() {
            return Err("Voice provider must not be empty".to_string());
        }
        if self.voice_id.trim().is_empty() {
            return Err("Voice ID must not be empty".to_string());
        }
        Ok(())
    }
}
