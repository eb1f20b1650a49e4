//! Fixed substitution table for hard-to-read kanji and terms.
//!
//! The speech engine has no reading disambiguation for Japanese, so terms
//! with ambiguous or rare readings are rewritten to kana before synthesis.
//! Matching is exact and case-sensitive. Terms not in the table pass through.

/// `(source, replacement)` pairs applied in order.
///
/// No replacement contains any source key, so a replacement never re-triggers
/// another entry.
static DIFFICULT_TERMS: &[(&str, &str)] = &[
    // Personal-name kanji
    ("雄", "ゆう"),
    ("雅", "まさ"),
    ("智", "とも"),
    ("哲", "てつ"),
    ("慶", "けい"),
    ("恵", "え"),
    ("惠", "え"),
    ("瞳", "ひとみ"),
    ("翔", "しょう"),
    // Flowers and plants
    ("薔薇", "ばら"),
    ("紫陽花", "あじさい"),
    ("向日葵", "ひまわり"),
    ("百合", "ゆり"),
    ("椿", "つばき"),
    ("桜", "さくら"),
    ("梅", "うめ"),
    // Business
    ("企画", "きかく"),
    ("戦略", "せんりゃく"),
    ("効率", "こうりつ"),
    ("品質", "ひんしつ"),
    ("技術", "ぎじゅつ"),
    ("開発", "かいはつ"),
    ("設計", "せっけい"),
    ("実装", "じっそう"),
    // IT acronyms
    ("API", "エーピーアイ"),
    ("UI", "ユーアイ"),
    ("UX", "ユーエックス"),
    ("AI", "エーアイ"),
    ("ML", "エムエル"),
    ("IoT", "アイオーティー"),
    ("DX", "ディーエックス"),
];

/// Returns the substitution table.
#[inline]
pub fn entries() -> &'static [(&'static str, &'static str)] {
    DIFFICULT_TERMS
}

/// Replaces every occurrence of each table term with its reading.
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::text::substitute_difficult_terms;
///
/// assert_eq!(substitute_difficult_terms("桜と梅"), "さくらとうめ");
/// assert_eq!(substitute_difficult_terms("APIとUI"), "エーピーアイとユーアイ");
/// ```
pub fn substitute_difficult_terms(text: &str) -> String {
    DIFFICULT_TERMS
        .iter()
        .fold(text.to_string(), |acc, (source, replacement)| {
            if acc.contains(source) {
                acc.replace(source, replacement)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacements_never_contain_keys() {
        for (_, replacement) in entries() {
            for (source, _) in entries() {
                assert!(
                    !replacement.contains(source),
                    "replacement {} contains key {}",
                    replacement,
                    source
                );
            }
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let table = entries();
        for (i, (a, _)) in table.iter().enumerate() {
            for (b, _) in &table[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_every_entry_applies() {
        for (source, replacement) in entries() {
            assert_eq!(substitute_difficult_terms(source), *replacement);
        }
    }

    #[test]
    fn test_replacement_is_exhaustive() {
        assert_eq!(substitute_difficult_terms("桜、桜、桜"), "さくら、さくら、さくら");
    }

    #[test]
    fn test_compound_terms() {
        assert_eq!(
            substitute_difficult_terms("庭に薔薇と紫陽花と向日葵が咲いた"),
            "庭にばらとあじさいとひまわりが咲いた"
        );
        assert_eq!(
            substitute_difficult_terms("新しい企画の開発と実装"),
            "新しいきかくのかいはつとじっそう"
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(substitute_difficult_terms("api"), "api");
        assert_eq!(substitute_difficult_terms("IoT"), "アイオーティー");
        assert_eq!(substitute_difficult_terms("iot"), "iot");
    }

    #[test]
    fn test_unmapped_text_passes_through() {
        let text = "今日はよい天気ですね。";
        assert_eq!(substitute_difficult_terms(text), text);
        assert_eq!(substitute_difficult_terms(""), "");
    }
}
