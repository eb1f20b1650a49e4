use std::env;

use super::AppConfig;
use crate::core::request::VoiceQualityMode;

/// Parse a boolean environment value (`true/false`, `1/0`, `yes/no`, `on/off`)
fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("Invalid boolean for {key}: {other}")),
    }
}

fn env_bool(key: &str, default: bool) -> Result<bool, String> {
    match env::var(key) {
        Ok(value) => parse_bool(key, &value),
        Err(_) => Ok(default),
    }
}

/// Read an environment variable, treating empty values as unset
fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Build configuration from environment variables on top of defaults
pub(super) fn load() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = AppConfig::default();

    if let Some(provider) = env_string("VOICE_PROVIDER") {
        config.provider = provider;
    }
    if let Some(voice_id) = env_string("VOICE_ID") {
        config.voice_id = voice_id;
    }
    if let Some(mode) = env_string("VOICE_QUALITY_MODE") {
        config.quality_mode = VoiceQualityMode::from_str(&mode)
            .ok_or_else(|| format!("Invalid VOICE_QUALITY_MODE: {mode}"))?;
    }

    let options = &mut config.preprocess;
    options.convert_difficult_kanji =
        env_bool("PREPROCESS_CONVERT_DIFFICULT_KANJI", options.convert_difficult_kanji)?;
    options.optimize_punctuation =
        env_bool("PREPROCESS_OPTIMIZE_PUNCTUATION", options.optimize_punctuation)?;
    options.process_numbers = env_bool("PREPROCESS_PROCESS_NUMBERS", options.process_numbers)?;
    options.add_pauses = env_bool("PREPROCESS_ADD_PAUSES", options.add_pauses)?;

    Ok(config)
}
