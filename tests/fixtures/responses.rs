//! Classifier Response Fixtures

/// Fenced JSON block, cheerful tone, no markup
pub const CHEERFUL_FENCED: &str = r#"分析しました。

```json
{
  "type": "元気",
  "intensity": "high",
  "reason": "明るい挨拶で、語尾も弾んでいるため"
}
```
"#;

/// Bare object surrounded by chatter, trailing comma
pub const GENTLE_BARE_TRAILING_COMMA: &str = r#"結果は次の通りです {"type": "優しい", "intensity": "low", "reason": "丁寧で柔らかい表現",} 以上"#;

/// Classifier supplies its own markup
pub const WHISPER_WITH_SSML: &str = r#"```json
{
  "type": "ささやき",
  "intensity": "medium",
  "reason": "内緒話の文脈",
  "ssml": "<speak><prosody rate=\"75%\" volume=\"x-soft\">ないしょだよ</prosody></speak>"
}
```"#;

/// Classifier markup that is closed before it is opened
pub const BROKEN_SSML: &str = r#"{"type": "厳しい", "intensity": "high", "reason": "命令口調", "ssml": "</speak>だめです<speak>"}"#;

/// Tone outside the known set
pub const UNKNOWN_TONE: &str = r#"{"type": "皮肉", "intensity": "medium", "reason": "皮肉っぽい"}"#;

/// No JSON at all
pub const NO_JSON: &str = "申し訳ありませんが、分析できませんでした。";

/// Input texts paired with the tone label used in tests
pub const SAMPLE_TEXTS: &[(&str, &str)] = &[
    ("2024年4月1日、新しい企画が始まります！", "元気"),
    ("今日は3時に桜を見に行きましょう。", "優しい"),
    ("満足度は95%でした。そして来年も続けます。", "励まし"),
];
