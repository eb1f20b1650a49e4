//! Japanese text normalization for speech synthesis.
//!
//! - [`numerals`]: Arabic numerals to kana readings
//! - [`lexicon`]: fixed kanji/term substitution table
//! - [`punctuation`]: pause insertion and whitespace normalization
//! - [`preprocessor`]: the toggle-able pipeline combining all of the above

pub mod lexicon;
pub mod numerals;
pub mod preprocessor;
pub mod punctuation;

pub use lexicon::{entries, substitute_difficult_terms};
pub use numerals::{convert_numbers, read_number};
pub use preprocessor::{JAPANESE_TEST_PHRASES, PreprocessOptions, preprocess_japanese_text};
pub use punctuation::{insert_natural_pauses, normalize_whitespace, optimize_punctuation};
