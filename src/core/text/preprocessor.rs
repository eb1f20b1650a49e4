//! Japanese text preprocessing pipeline.
//!
//! Stages run in a fixed order, each behind its own flag:
//!
//! ```text
//! lexicon ─▶ numerals ─▶ punctuation ─▶ pauses ─▶ whitespace
//! ```
//!
//! Lexical substitution runs first so substituted kana take part in the
//! long-run pause rule. Numerals run before pause insertion. Whitespace
//! normalization always runs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lexicon::substitute_difficult_terms;
use super::numerals::convert_numbers;
use super::punctuation::{insert_natural_pauses, normalize_whitespace, optimize_punctuation};

/// Sample phrases used for demos and benchmarks.
pub const JAPANESE_TEST_PHRASES: [&str; 8] = [
    "こんにちは、今日はよい天気ですね。",
    "ありがとうございました。またお会いしましょう。",
    "すみません、少し急いでいるのですが。",
    "お疲れさまでした。今日も一日頑張りましたね。",
    "おはようございます。今日も元気に頑張りましょう。",
    "それでは、会議を始めさせていただきます。",
    "申し訳ございませんが、もう一度説明していただけますか。",
    "とても美しい桜が咲いていますね。春らしくて素敵です。",
];

fn default_true() -> bool {
    true
}

/// Toggles for the preprocessing stages. Every stage is on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessOptions {
    /// Replace hard-to-read kanji and terms with kana.
    #[serde(default = "default_true", alias = "convertDifficultKanji")]
    pub convert_difficult_kanji: bool,
    /// Space out sentence and clause punctuation.
    #[serde(default = "default_true", alias = "optimizePunctuation")]
    pub optimize_punctuation: bool,
    /// Convert Arabic numerals to readings.
    #[serde(default = "default_true", alias = "processNumbers")]
    pub process_numbers: bool,
    /// Insert pauses before long kana runs and connectives.
    #[serde(default = "default_true", alias = "addPauses")]
    pub add_pauses: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            convert_difficult_kanji: true,
            optimize_punctuation: true,
            process_numbers: true,
            add_pauses: true,
        }
    }
}

impl PreprocessOptions {
    /// Options with every stage disabled. Only whitespace is normalized.
    pub const fn disabled() -> Self {
        Self {
            convert_difficult_kanji: false,
            optimize_punctuation: false,
            process_numbers: false,
            add_pauses: false,
        }
    }
}

/// Normalizes Japanese text for synthesis.
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::text::{preprocess_japanese_text, PreprocessOptions};
///
/// let out = preprocess_japanese_text("2024年の桜", &PreprocessOptions::default());
/// assert_eq!(out, "にせんにじゅうよん年のさくら");
/// ```
pub fn preprocess_japanese_text(text: &str, options: &PreprocessOptions) -> String {
    let mut processed = text.to_string();

    if options.convert_difficult_kanji {
        processed = substitute_difficult_terms(&processed);
    }

    if options.process_numbers {
        processed = convert_numbers(&processed);
    }

    if options.optimize_punctuation {
        processed = optimize_punctuation(&processed);
    }

    if options.add_pauses {
        processed = insert_natural_pauses(&processed);
    }

    let processed = normalize_whitespace(&processed);
    debug!(
        input_chars = text.chars().count(),
        output_chars = processed.chars().count(),
        "Preprocessed Japanese text"
    );
    processed
}
