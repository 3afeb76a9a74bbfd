use serde::Serialize;

use super::DEFAULT_VOICE;

/// Static voice catalog, mirroring the Neural2 voices the settings UI
/// offers. The first voice in each language is that language's default.
#[derive(Debug, Serialize)]
pub struct VoiceOption {
    pub name: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
    pub voices: &'static [VoiceOption],
}

pub const LANGUAGES: &[Language] = &[
    Language {
        code: "en-US",
        label: "English (US)",
        voices: &[
            VoiceOption { name: "en-US-Neural2-A", label: "US Female (Neural A)" },
            VoiceOption { name: "en-US-Neural2-C", label: "US Female (Neural C)" },
            VoiceOption { name: "en-US-Neural2-D", label: "US Male (Neural D)" },
            VoiceOption { name: "en-US-Neural2-F", label: "US Female (Neural F)" },
            VoiceOption { name: "en-US-Neural2-G", label: "US Female (Neural G)" },
            VoiceOption { name: "en-US-Neural2-H", label: "US Female (Neural H)" },
            VoiceOption { name: "en-US-Neural2-I", label: "US Male (Neural I)" },
            VoiceOption { name: "en-US-Neural2-J", label: "US Male (Neural J)" },
        ],
    },
    Language {
        code: "en-IN",
        label: "English (India)",
        voices: &[
            VoiceOption { name: "en-IN-Neural2-A", label: "Indian Female" },
            VoiceOption { name: "en-IN-Neural2-B", label: "Indian Male" },
            VoiceOption { name: "en-IN-Neural2-C", label: "Indian Male 2" },
            VoiceOption { name: "en-IN-Neural2-D", label: "Indian Female 2" },
        ],
    },
    Language {
        code: "hi-IN",
        label: "Hindi",
        voices: &[
            VoiceOption { name: "hi-IN-Neural2-A", label: "Hindi Female" },
            VoiceOption { name: "hi-IN-Neural2-B", label: "Hindi Male" },
            VoiceOption { name: "hi-IN-Neural2-C", label: "Hindi Male 2" },
            VoiceOption { name: "hi-IN-Neural2-D", label: "Hindi Female 2" },
        ],
    },
    Language {
        code: "es-ES",
        label: "Spanish",
        voices: &[
            VoiceOption { name: "es-ES-Neural2-A", label: "Spanish Female" },
            VoiceOption { name: "es-ES-Neural2-B", label: "Spanish Male" },
        ],
    },
    Language {
        code: "fr-FR",
        label: "French",
        voices: &[
            VoiceOption { name: "fr-FR-Neural2-A", label: "French Female" },
            VoiceOption { name: "fr-FR-Neural2-B", label: "French Male" },
        ],
    },
];

/// Default voice a client should present after switching to `language`.
/// Unknown languages fall back to the global default.
pub fn default_voice(language: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|l| l.code == language)
        .and_then(|l| l.voices.first())
        .map(|v| v.name)
        .unwrap_or(DEFAULT_VOICE)
}
