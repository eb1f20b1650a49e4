//! SSML envelope construction and structural checks.
//!
//! Only a presence check is performed: a document is valid SSML here when it
//! has a `<speak>` root opening before a closing `</speak>`. No schema
//! validation is attempted.

use crate::core::emotion::{EmphasisLevel, VoiceModulation};

const SPEAK_OPEN: &str = "<speak>";
const SPEAK_CLOSE: &str = "</speak>";

/// Returns `true` when `ssml` contains `<speak>` followed later by `</speak>`.
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::ssml::validate_ssml;
///
/// assert!(validate_ssml("<speak>こんにちは</speak>"));
/// assert!(!validate_ssml("</speak><speak>"));
/// assert!(!validate_ssml(""));
/// ```
pub fn validate_ssml(ssml: &str) -> bool {
    if ssml.is_empty() {
        return false;
    }

    ssml.find(SPEAK_OPEN)
        .map(|start| &ssml[start + SPEAK_OPEN.len()..])
        .is_some_and(|rest| rest.contains(SPEAK_CLOSE))
}

/// Escapes the XML-reserved characters `& < > " '`.
pub fn escape_ssml_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Ensures `input` is wrapped in a `<speak>` envelope.
///
/// Input that already carries both `<speak>` and `</speak>` is returned
/// unchanged. Anything else is treated as plain text, escaped and wrapped.
/// Applying this twice gives the same result as applying it once.
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::ssml::enhance_ssml;
///
/// assert_eq!(enhance_ssml("A & B"), "<speak>A &amp; B</speak>");
/// assert_eq!(enhance_ssml("<speak>はい</speak>"), "<speak>はい</speak>");
/// ```
pub fn enhance_ssml(input: &str) -> String {
    if input.contains(SPEAK_OPEN) && input.contains(SPEAK_CLOSE) {
        return input.to_string();
    }

    format!("{SPEAK_OPEN}{}{SPEAK_CLOSE}", escape_ssml_text(input))
}

/// Builds a prosody-wrapped SSML document for normalized text.
///
/// ```text
/// <speak><prosody pitch=".." rate=".." volume=".."><emphasis level="..">text</emphasis></prosody></speak>
/// ```
///
/// The emphasis element is omitted when the modulation's emphasis is `none`.
pub fn compose_prosody_ssml(text: &str, modulation: &VoiceModulation) -> String {
    let escaped = escape_ssml_text(text);

    let body = match modulation.emphasis {
        EmphasisLevel::None => escaped,
        level => format!("<emphasis level=\"{}\">{}</emphasis>", level.as_str(), escaped),
    };

    format!(
        "{SPEAK_OPEN}<prosody pitch=\"{}\" rate=\"{}\" volume=\"{}\">{}</prosody>{SPEAK_CLOSE}",
        modulation.pitch, modulation.rate, modulation.volume, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emotion::{IntensityLevel, VoiceTone, create_voice_modulation};

    #[test]
    fn test_validate_ssml() {
        assert!(validate_ssml("<speak>テスト</speak>"));
        assert!(validate_ssml("前置き<speak>\n複数行\n</speak>後置き"));
        assert!(validate_ssml("<speak></speak>"));
    }

    #[test]
    fn test_validate_ssml_rejects() {
        assert!(!validate_ssml(""));
        assert!(!validate_ssml("テスト"));
        assert!(!validate_ssml("<speak>閉じていない"));
        assert!(!validate_ssml("開いていない</speak>"));
        assert!(!validate_ssml("</speak>逆順<speak>"));
        assert!(!validate_ssml("<speak version=\"1.0\">属性付き</speak>"));
    }

    #[test]
    fn test_escape_ssml_text() {
        assert_eq!(
            escape_ssml_text(r#"<a href="x">Tom's & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&apos;s &amp; Jerry&lt;/a&gt;"
        );
        assert_eq!(escape_ssml_text("こんにちは"), "こんにちは");
    }

    #[test]
    fn test_escape_existing_entities_once() {
        assert_eq!(escape_ssml_text("&lt;"), "&amp;lt;");
        assert_eq!(escape_ssml_text(""), "");
    }

    #[test]
    fn test_enhance_wraps_plain_text() {
        assert_eq!(enhance_ssml("こんにちは"), "<speak>こんにちは</speak>");
        assert_eq!(enhance_ssml("1 < 2"), "<speak>1 &lt; 2</speak>");
        assert_eq!(enhance_ssml(""), "<speak></speak>");
    }

    #[test]
    fn test_enhance_passes_through_ssml() {
        let ssml = "<speak><prosody rate=\"90%\">はい</prosody></speak>";
        assert_eq!(enhance_ssml(ssml), ssml);
    }

    #[test]
    fn test_enhance_escapes_partial_markup() {
        assert_eq!(enhance_ssml("<speak>途中"), "<speak>&lt;speak&gt;途中</speak>");
    }

    #[test]
    fn test_enhance_is_idempotent() {
        for input in ["こんにちは", "A & B", "<speak>途中", "<speak>済み</speak>", ""] {
            let once = enhance_ssml(input);
            assert_eq!(enhance_ssml(&once), once);
            assert!(validate_ssml(&once));
        }
    }

    #[test]
    fn test_compose_with_emphasis() {
        let modulation = create_voice_modulation(VoiceTone::Cheerful, IntensityLevel::High);
        assert_eq!(
            compose_prosody_ssml("やったー", &modulation),
            "<speak><prosody pitch=\"+17.5%\" rate=\"125%\" volume=\"+3.5dB\">\
             <emphasis level=\"strong\">やったー</emphasis></prosody></speak>"
        );
    }

    #[test]
    fn test_compose_without_emphasis() {
        let modulation = create_voice_modulation(VoiceTone::Gentle, IntensityLevel::Low);
        assert_eq!(
            compose_prosody_ssml("A&B", &modulation),
            "<speak><prosody pitch=\"-3.75%\" rate=\"87.5%\" volume=\"-0.75dB\">A&amp;B</prosody></speak>"
        );
    }

    #[test]
    fn test_composed_document_is_valid() {
        for tone in VoiceTone::all() {
            for intensity in IntensityLevel::all() {
                let modulation = create_voice_modulation(*tone, *intensity);
                let ssml = compose_prosody_ssml("<テスト>", &modulation);
                assert!(validate_ssml(&ssml));
                assert_eq!(enhance_ssml(&ssml), ssml);
            }
        }
    }
}
