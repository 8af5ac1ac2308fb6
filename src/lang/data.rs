use crate::lang::{AliasTable, Lang, Stoplist};

use paste::paste;
use phf::{phf_map, phf_set};

/// ---------------------------------------------------------------------------
///    Macro – generates constants, alias slices and the lookup table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $code:ident, $key:literal, $name:literal,
        aliases: [ $($alias:literal),* $(,)? ]
    );* $(;)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { key: $key, name: $name };
        )*

        // Per-language alias slices + global lookup table
        paste! {
            $(
                static [<$code _ALIASES>]: &[&str] = &[$($alias),*];
            )*

            pub static ALIAS_TABLE: AliasTable = phf_map! {
                $(
                    $key => [<$code _ALIASES>],
                )*
            };
        }

        static ALL_LANGS: &[Lang] = &[$($code),*];

        /// Every language with an alias entry, in definition order.
        pub fn all_langs() -> &'static [Lang] {
            ALL_LANGS
        }

        /// Case-insensitive lookup by display name or key.
        pub fn from_name(name: &str) -> Option<Lang> {
            let lower = name.trim().to_lowercase();
            match lower.as_str() {
                $(
                    $key => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Alias definitions (single source of truth)
//    Every alias list starts with the key itself so the identity search
//    always runs first.
// ---------------------------------------------------------------------------
define_languages! {
    ENGLISH,    "english",    "English",    aliases: ["english"];
    CHINESE,    "chinese",    "Chinese",    aliases: ["chinese", "mandarin", "cantonese", "putonghua"];
    SPANISH,    "spanish",    "Spanish",    aliases: ["spanish", "castilian"];
    FRENCH,     "french",     "French",     aliases: ["french"];
    GERMAN,     "german",     "German",     aliases: ["german"];
    PORTUGUESE, "portuguese", "Portuguese", aliases: ["portuguese"];
    JAPANESE,   "japanese",   "Japanese",   aliases: ["japanese"];
    KOREAN,     "korean",     "Korean",     aliases: ["korean"];
    ITALIAN,    "italian",    "Italian",    aliases: ["italian"];
    DUTCH,      "dutch",      "Dutch",      aliases: ["dutch"];
    RUSSIAN,    "russian",    "Russian",    aliases: ["russian"];
    ARABIC,     "arabic",     "Arabic",     aliases: ["arabic"];
    HINDI,      "hindi",      "Hindi",      aliases: ["hindi"];
    POLISH,     "polish",     "Polish",     aliases: ["polish"];
    TURKISH,    "turkish",    "Turkish",    aliases: ["turkish"];
    THAI,       "thai",       "Thai",       aliases: ["thai"];
    VIETNAMESE, "vietnamese", "Vietnamese", aliases: ["vietnamese"];
    INDONESIAN, "indonesian", "Indonesian", aliases: ["indonesian", "bahasa"];
    SWEDISH,    "swedish",    "Swedish",    aliases: ["swedish"];
    BENGALI,    "bengali",    "Bengali",    aliases: ["bengali", "bangla"];
    URDU,       "urdu",       "Urdu",       aliases: ["urdu"];
}

/// Names the known-language fallback scans for, in scan order.
///
/// Order matters: fallback results are reported in this order, and the first
/// name equal to the whole text wins the single-language short-circuit.
pub static KNOWN_LANGUAGES: &[&str] = &[
    "english", "chinese", "mandarin", "cantonese", "spanish", "french",
    "german", "portuguese", "japanese", "korean", "italian", "dutch",
    "russian", "arabic", "hindi", "bengali", "urdu", "punjabi",
    "tamil", "telugu", "marathi", "gujarati", "nepali", "sinhala",
    "polish", "turkish", "thai", "vietnamese", "indonesian", "malay",
    "tagalog", "filipino", "swedish", "norwegian", "danish", "finnish",
    "icelandic", "greek", "hebrew", "persian", "pashto", "dari",
    "ukrainian", "czech", "slovak", "hungarian", "romanian", "bulgarian",
    "serbian", "croatian", "bosnian", "slovenian", "albanian", "macedonian",
    "armenian", "georgian", "kazakh", "uzbek", "mongolian", "khmer",
    "lao", "burmese", "swahili", "amharic", "somali", "hausa",
    "yoruba", "igbo", "zulu", "afrikaans", "catalan", "creole",
    "quechua", "aymara", "guarani",
];

/// Captured names that are bookkeeping words rather than languages.
pub static STOPLIST: Stoplist = phf_set! {
    "other",
    "none",
    "note",
    "total",
    "unspecified",
};
