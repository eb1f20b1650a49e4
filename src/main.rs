use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use emotive_speech::{
    AnalysisResult, AppConfig, IntensityLevel, SpeechPipeline, VoiceQualityMode, VoiceTone,
    available_voices, create_voice_modulation, parse_analysis_response, preprocess_japanese_text,
};

/// Emotive Speech - tone-driven Japanese speech request builder
#[derive(Parser, Debug)]
#[command(name = "emotive-speech")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize Japanese text for synthesis
    Preprocess {
        /// Text to normalize
        text: String,
    },

    /// Calculate prosody values for a tone and intensity
    Modulation {
        /// Tone label (e.g. 元気) or English name (e.g. cheerful)
        #[arg(short = 't', long = "tone")]
        tone: String,

        /// low, medium or high
        #[arg(short = 'i', long = "intensity", default_value = "medium")]
        intensity: String,
    },

    /// Compose a synthesis request and print it as JSON
    Compose {
        /// Input text
        #[arg(long = "text")]
        text: String,

        /// Raw classifier response to read the tone from
        #[arg(short = 'a', long = "analysis", value_name = "FILE", conflicts_with = "tone")]
        analysis: Option<PathBuf>,

        /// Tone to use when no analysis file is given
        #[arg(short = 't', long = "tone")]
        tone: Option<String>,

        /// Intensity to use when no analysis file is given
        #[arg(short = 'i', long = "intensity", default_value = "medium")]
        intensity: String,

        /// Override the configured quality mode (high_quality, balanced, fast)
        #[arg(short = 'q', long = "quality")]
        quality: Option<String>,

        /// Also print the unprocessed baseline request
        #[arg(long = "with-plain")]
        with_plain: bool,
    },

    /// List available tones
    Tones,

    /// List available voices
    Voices,
}

fn parse_tone(value: &str) -> anyhow::Result<VoiceTone> {
    VoiceTone::from_str(value).ok_or_else(|| anyhow!("Unknown tone '{}'", value))
}

fn parse_intensity(value: &str) -> anyhow::Result<IntensityLevel> {
    IntensityLevel::from_str(value)
        .ok_or_else(|| anyhow!("Invalid intensity '{}'. Must be low, medium or high", value))
}

fn load_analysis(
    path: Option<PathBuf>,
    tone: Option<String>,
    intensity: &str,
) -> anyhow::Result<AnalysisResult> {
    if let Some(path) = path {
        let raw = fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
        return Ok(parse_analysis_response(&raw)?);
    }

    let Some(tone) = tone else {
        bail!("Either --analysis or --tone is required");
    };

    Ok(AnalysisResult::new(
        parse_tone(&tone)?,
        parse_intensity(intensity)?,
        "specified on command line",
    ))
}

fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration from file or environment
    let config = if let Some(config_path) = cli.config {
        info!("Loading configuration from {}", config_path.display());
        AppConfig::from_file(&config_path).map_err(|e| anyhow!(e.to_string()))?
    } else {
        AppConfig::from_env().map_err(|e| anyhow!(e.to_string()))?
    };

    match cli.command {
        Commands::Preprocess { text } => {
            println!("{}", preprocess_japanese_text(&text, &config.preprocess));
        }
        Commands::Modulation { tone, intensity } => {
            let modulation = create_voice_modulation(parse_tone(&tone)?, parse_intensity(&intensity)?);
            println!("{}", serde_json::to_string_pretty(&modulation)?);
        }
        Commands::Compose {
            text,
            analysis,
            tone,
            intensity,
            quality,
            with_plain,
        } => {
            let mut pipeline = SpeechPipeline::from_config(&config);
            if let Some(quality) = quality {
                let mode = VoiceQualityMode::from_str(&quality)
                    .ok_or_else(|| anyhow!("Invalid quality mode '{}'", quality))?;
                pipeline = pipeline.with_quality_mode(mode);
            }

            let analysis = load_analysis(analysis, tone, &intensity)?;
            let request = pipeline.compose(&text, &analysis)?;

            let mut output = serde_json::json!({
                "voice_id": request.voice_id,
                "analysis": analysis,
                "request": request,
            });
            if with_plain {
                output["plain_request"] = serde_json::to_value(pipeline.compose_plain(&text)?)?;
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Tones => {
            for tone in VoiceTone::all() {
                println!(
                    "{} {:<6} {:<12} {}",
                    tone.icon(),
                    tone.label(),
                    tone.as_str(),
                    tone.description()
                );
            }
        }
        Commands::Voices => {
            for voice in available_voices() {
                let marker = if voice.id == config.voice_id { "*" } else { " " };
                println!("{} {:<8} {}  {}", marker, voice.name, voice.id, voice.description);
            }
        }
    }

    Ok(())
}
