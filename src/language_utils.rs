use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language utilities for subtitle language codes
///
/// This module maps the 2-letter and 3-letter codes found in subtitle
/// file names to display names and to the 3-letter form used when
/// naming new subtitle files. Every lookup is derived from the single
/// `LANGUAGES` table below.
/// A supported subtitle language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// English display name
    pub name: &'static str,
    /// 2-letter code (ISO 639-1)
    pub code2: &'static str,
    /// Preferred 3-letter code, the target of normalization
    pub code3: &'static str,
    /// Other codes seen in the wild (ISO 639-2/B forms, macrolanguage members)
    pub aliases: &'static [&'static str],
}

impl Language {
    const fn new(
        name: &'static str,
        code2: &'static str,
        code3: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self { name, code2, code3, aliases }
    }

    /// Every code that identifies this language, lowercase
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        [self.code2, self.code3]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }

    /// Whether this is the default subtitle language
    pub fn is_default(&self) -> bool {
        self.code3 == DEFAULT_LANGUAGE.code3
    }
}

/// English, written to `<name>.srt` with no language suffix
pub const DEFAULT_LANGUAGE: Language = Language::new("English", "en", "eng", &[]);

static LANGUAGES: &[Language] = &[
    DEFAULT_LANGUAGE,
    Language::new("Thai", "th", "tha", &[]),
    Language::new("Vietnamese", "vi", "vie", &[]),
    Language::new("Indonesian", "id", "ind", &[]),
    Language::new("Malay", "ms", "msa", &["may"]),
    Language::new("Filipino", "tl", "tgl", &["fil"]),
    Language::new("Chinese", "zh", "zho", &["chi", "cmn"]),
    Language::new("Japanese", "ja", "jpn", &[]),
    Language::new("Korean", "ko", "kor", &[]),
    Language::new("Burmese", "my", "mya", &["bur"]),
    Language::new("Khmer", "km", "khm", &[]),
    Language::new("Lao", "lo", "lao", &[]),
    Language::new("Hindi", "hi", "hin", &[]),
    Language::new("Bengali", "bn", "ben", &[]),
    Language::new("Tamil", "ta", "tam", &[]),
    Language::new("Telugu", "te", "tel", &[]),
    Language::new("Urdu", "ur", "urd", &[]),
    Language::new("Arabic", "ar", "ara", &[]),
    Language::new("Hebrew", "he", "heb", &[]),
    Language::new("Persian", "fa", "fas", &["per"]),
    Language::new("Turkish", "tr", "tur", &[]),
    Language::new("Russian", "ru", "rus", &[]),
    Language::new("Ukrainian", "uk", "ukr", &[]),
    Language::new("Polish", "pl", "pol", &[]),
    Language::new("Czech", "cs", "ces", &["cze"]),
    Language::new("Slovak", "sk", "slk", &["slo"]),
    Language::new("Hungarian", "hu", "hun", &[]),
    Language::new("Romanian", "ro", "ron", &["rum"]),
    Language::new("Bulgarian", "bg", "bul", &[]),
    Language::new("Greek", "el", "ell", &["gre"]),
    Language::new("Serbian", "sr", "srp", &[]),
    Language::new("Croatian", "hr", "hrv", &[]),
    Language::new("German", "de", "deu", &["ger"]),
    Language::new("French", "fr", "fra", &["fre"]),
    Language::new("Spanish", "es", "spa", &[]),
    Language::new("Portuguese", "pt", "por", &[]),
    Language::new("Italian", "it", "ita", &[]),
    Language::new("Dutch", "nl", "nld", &["dut"]),
    Language::new("Swedish", "sv", "swe", &[]),
    Language::new("Norwegian", "no", "nor", &[]),
    Language::new("Danish", "da", "dan", &[]),
    Language::new("Finnish", "fi", "fin", &[]),
];

// Every code and alias, pointing back at its record
static LANGUAGE_BY_CODE: Lazy<HashMap<&'static str, &'static Language>> = Lazy::new(|| {
    LANGUAGES
        .iter()
        .flat_map(|lang| lang.codes().map(move |code| (code, lang)))
        .collect()
});

static CODE3_BY_CODE2: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    LANGUAGES
        .iter()
        .map(|lang| (lang.code2, lang.code3))
        .collect()
});

/// All supported languages, English first
pub fn supported_languages() -> &'static [Language] {
    LANGUAGES
}

/// Find the language record for any known code or alias
pub fn find_language(code: &str) -> Option<&'static Language> {
    let normalized_code = code.trim().to_lowercase();
    LANGUAGE_BY_CODE.get(normalized_code.as_str()).copied()
}

/// Check whether a code names a language in the table
///
/// Filename parsing deliberately does not call this; it is here for
/// callers that want strict input validation.
pub fn is_known_language_code(code: &str) -> bool {
    find_language(code).is_some()
}

/// Get the display name for a language code
///
/// Unknown codes are echoed back uppercased so the UI always has
/// something to show.
pub fn get_language_name(code: &str) -> String {
    match LANGUAGE_BY_CODE.get(code.to_lowercase().as_str()) {
        Some(lang) => lang.name.to_string(),
        None => {
            debug!("No display name for language code '{}'", code);
            code.to_uppercase()
        }
    }
}

/// Normalize a language code for use in a subtitle file name
///
/// Returns `None` for English, which is the default and carries no
/// suffix. Known 2-letter codes become their 3-letter form; anything
/// else is lowercased and passed through. Surrounding whitespace is
/// ignored, so blank input is the default language too.
pub fn normalize_language_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lowered = trimmed.to_lowercase();
    if lowered == DEFAULT_LANGUAGE.code2 || lowered == DEFAULT_LANGUAGE.code3 {
        return None;
    }

    if lowered.len() == 2 {
        if let Some(code3) = CODE3_BY_CODE2.get(lowered.as_str()) {
            return Some((*code3).to_string());
        }
    }

    Some(lowered)
}

/// Check if two language codes represent the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (find_language(code1), find_language(code2)) {
        (Some(lang1), Some(lang2)) => lang1.code3 == lang2.code3,
        (None, None) => {
            let code1 = code1.trim();
            !code1.is_empty() && code1.eq_ignore_ascii_case(code2.trim())
        }
        _ => false,
    }
}
