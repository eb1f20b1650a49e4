use serde::Deserialize;
use std::path::PathBuf;

use super::AppConfig;
use crate::core::request::VoiceQualityMode;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present in
/// the file override environment variables.
///
/// # Example YAML structure
/// ```yaml
/// voice:
///   provider: "elevenlabs"
///   voice_id: "GKDaBI8TKSBJVhsCLD6n"
///   quality_mode: "balanced"
///
/// preprocess:
///   convert_difficult_kanji: true
///   optimize_punctuation: true
///   process_numbers: false
///   add_pauses: true
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub voice: Option<VoiceYaml>,
    pub preprocess: Option<PreprocessYaml>,
}

/// Voice selection from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct VoiceYaml {
    /// Synthesis provider used for voice settings (e.g. "elevenlabs")
    pub provider: Option<String>,
    pub voice_id: Option<String>,
    /// One of `high_quality`, `balanced`, `fast`
    pub quality_mode: Option<VoiceQualityMode>,
}

/// Text preprocessing toggles from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PreprocessYaml {
    pub convert_difficult_kanji: Option<bool>,
    pub optimize_punctuation: Option<bool>,
    pub process_numbers: Option<bool>,
    pub add_pauses: Option<bool>,
}

impl YamlConfig {
    /// Load YAML configuration from a file
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }

    /// Overwrite `config` with every value set in this file
    pub fn apply_to(self, config: &mut AppConfig) {
        if let Some(voice) = self.voice {
            if let Some(provider) = voice.provider {
                config.provider = provider;
            }
            if let Some(voice_id) = voice.voice_id {
                config.voice_id = voice_id;
            }
            if let Some(quality_mode) = voice.quality_mode {
                config.quality_mode = quality_mode;
            }
        }

        if let Some(preprocess) = self.preprocess {
            let options = &mut config.preprocess;
            if let Some(v) = preprocess.convert_difficult_kanji {
                options.convert_difficult_kanji = v;
            }
            if let Some(v) = preprocess.optimize_punctuation {
                options.optimize_punctuation = v;
            }
            if let Some(v) = preprocess.process_numbers {
                options.process_numbers = v;
            }
            if let Some(v) = preprocess.add_pauses {
                options.add_pauses = v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_config_full() {
        let yaml = r#"
voice:
  provider: "elevenlabs"
  voice_id: "j210dv0vWm7fCknyQpbA"
  quality_mode: "fast"

preprocess:
  convert_difficult_kanji: false
  optimize_punctuation: true
  process_numbers: false
  add_pauses: true
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();

        let voice = config.voice.as_ref().unwrap();
        assert_eq!(voice.provider, Some("elevenlabs".to_string()));
        assert_eq!(voice.voice_id, Some("j210dv0vWm7fCknyQpbA".to_string()));
        assert_eq!(voice.quality_mode, Some(VoiceQualityMode::Fast));

        let preprocess = config.preprocess.as_ref().unwrap();
        assert_eq!(preprocess.convert_difficult_kanji, Some(false));
        assert_eq!(preprocess.process_numbers, Some(false));
    }

    #[test]
    fn test_yaml_config_empty() {
        let config: YamlConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.voice.is_none());
        assert!(config.preprocess.is_none());
    }

    #[test]
    fn test_yaml_invalid_quality_mode() {
        let result: Result<YamlConfig, _> = serde_yaml::from_str("voice:\n  quality_mode: ultra\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_to_only_overrides_present_values() {
        let yaml = r#"
voice:
  quality_mode: "balanced"
preprocess:
  add_pauses: false
"#;
        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        let mut app = AppConfig::default();
        config.apply_to(&mut app);

        assert_eq!(app.quality_mode, VoiceQualityMode::Balanced);
        assert!(!app.preprocess.add_pauses);
        assert!(app.preprocess.process_numbers);
        assert_eq!(app.provider, "elevenlabs");
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "voice:\n  provider: \"azure\"\n").unwrap();

        let config = YamlConfig::from_file(&path).unwrap();
        assert_eq!(config.voice.unwrap().provider, Some("azure".to_string()));
    }
}
