//! Pause insertion at sentence, clause and connective boundaries.
//!
//! Pauses are written as an ideographic space (U+3000). The final
//! [`normalize_whitespace`] pass folds every whitespace run, including those
//! pauses, into a single ASCII space.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END_BEFORE_KANA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([。！？])\s*([あ-ん])").unwrap());
static COMMA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"、\s*").unwrap());
static EXCLAMATION_QUESTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([！？])\s*").unwrap());
static LONG_VOWEL_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"ー+").unwrap());

static LONG_KANA_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([、。])([あ-んア-ンー]{10,})").unwrap());
static CONNECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(そして|しかし|また|さらに|なお|ただし|ところで|ちなみに)").unwrap()
});

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Spaces out sentence and clause punctuation.
///
/// 1. `。！？` followed by hiragana gets a pause in between.
/// 2. Every `、` is followed by exactly one pause.
/// 3. Every `！？` is followed by exactly one pause.
/// 4. Repeated `ー` collapses to one.
pub fn optimize_punctuation(text: &str) -> String {
    let text = SENTENCE_END_BEFORE_KANA_RE.replace_all(text, "${1}\u{3000}${2}");
    let text = COMMA_RE.replace_all(&text, "、\u{3000}");
    let text = EXCLAMATION_QUESTION_RE.replace_all(&text, "${1}\u{3000}");
    LONG_VOWEL_RUN_RE.replace_all(&text, "ー").into_owned()
}

/// Adds pauses before long kana runs and discourse connectives.
///
/// A run of ten or more kana after `、` or `。` gets a pause in front of it.
/// Connectives (そして, しかし, また, ...) are matched as plain substrings.
pub fn insert_natural_pauses(text: &str) -> String {
    let text = LONG_KANA_RUN_RE.replace_all(text, "${1}\u{3000}${2}");
    CONNECTIVE_RE
        .replace_all(&text, "\u{3000}${1}")
        .into_owned()
}

/// Collapses every whitespace run to one ASCII space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(text, " ").trim().to_string()
}
