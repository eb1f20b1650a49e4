//! Catalog of Japanese voices available for synthesis.

use serde::{Deserialize, Serialize};

/// Voice used when none is configured (Asahi).
pub const DEFAULT_VOICE_ID: &str = "GKDaBI8TKSBJVhsCLD6n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Male,
    Female,
    Neutral,
}

/// A selectable voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoiceOption {
    pub id: &'static str,
    pub name: &'static str,
    pub gender: VoiceGender,
    pub languages: &'static [&'static str],
    pub description: &'static str,
}

static AVAILABLE_VOICES: &[VoiceOption] = &[
    VoiceOption {
        id: DEFAULT_VOICE_ID,
        name: "Asahi",
        gender: VoiceGender::Male,
        languages: &["ja-JP"],
        description: "Japanese male",
    },
    VoiceOption {
        id: "j210dv0vWm7fCknyQpbA",
        name: "Hinata",
        gender: VoiceGender::Male,
        languages: &["ja-JP"],
        description: "Young Japanese male calm voice. Suitable for narration, news, and audiobooks.",
    },
    VoiceOption {
        id: "bqpOyYNUu11tjjvRUbKn",
        name: "Yamato",
        gender: VoiceGender::Male,
        languages: &["ja-JP"],
        description: "A Japanese male voice. 20s - 30s. Perfect for Youtube, audiobooks, and any type of content",
    },
];

/// Returns every catalogued voice.
#[inline]
pub fn available_voices() -> &'static [VoiceOption] {
    AVAILABLE_VOICES
}

/// Looks a voice up by id or by name (case-insensitive).
pub fn find_voice(key: &str) -> Option<&'static VoiceOption> {
    AVAILABLE_VOICES
        .iter()
        .find(|v| v.id == key || v.name.eq_ignore_ascii_case(key))
}
