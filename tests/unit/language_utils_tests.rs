/*!
 * Tests for language code utilities
 */

use subshelf::file_utils::{build_subtitle_file_name, parse_language_from_filename};
use subshelf::language_utils::{
    DEFAULT_LANGUAGE, find_language, get_language_name, is_known_language_code,
    language_codes_match, normalize_language_code, supported_languages,
};

/// Test display names for 2- and 3-letter codes in any case
#[test]
fn test_get_language_name_withKnownCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("th"), "Thai");
    assert_eq!(get_language_name("TH"), "Thai");
    assert_eq!(get_language_name("tha"), "Thai");
    assert_eq!(get_language_name("ThA"), "Thai");
    assert_eq!(get_language_name("en"), "English");
    assert_eq!(get_language_name("eng"), "English");
    assert_eq!(get_language_name("fre"), "French");
    assert_eq!(get_language_name("cmn"), "Chinese");
    assert_eq!(get_language_name("tgl"), "Filipino");
    assert_eq!(get_language_name("bur"), "Burmese");
}

/// Every code in the table resolves to its record's name
#[test]
fn test_get_language_name_withEveryTableCode_shouldResolve() {
    for lang in supported_languages() {
        for code in lang.codes() {
            assert_eq!(get_language_name(code), lang.name);
            assert_eq!(get_language_name(&code.to_uppercase()), lang.name);
        }
    }
}

/// Unknown codes are echoed back uppercased
#[test]
fn test_get_language_name_withUnknownCodes_shouldReturnUppercasedInput() {
    assert_eq!(get_language_name("xx"), "XX");
    assert_eq!(get_language_name("xyz"), "XYZ");
    assert_eq!(get_language_name("klingon"), "KLINGON");
    assert_eq!(get_language_name(""), "");
}

/// English aliases normalize to the default (no suffix)
#[test]
fn test_normalize_language_code_withEnglish_shouldReturnNone() {
    assert_eq!(normalize_language_code("en"), None);
    assert_eq!(normalize_language_code("EN"), None);
    assert_eq!(normalize_language_code("eng"), None);
    assert_eq!(normalize_language_code("ENG"), None);
}

/// 2-letter codes become 3-letter, others pass through lowercased
#[test]
fn test_normalize_language_code_withOtherCodes_shouldMapOrPassThrough() {
    assert_eq!(normalize_language_code("th").as_deref(), Some("tha"));
    assert_eq!(normalize_language_code("TH").as_deref(), Some("tha"));
    assert_eq!(normalize_language_code("tha").as_deref(), Some("tha"));
    assert_eq!(normalize_language_code("de").as_deref(), Some("deu"));
    assert_eq!(normalize_language_code("my").as_deref(), Some("mya"));

    // Aliases and unknown codes are not rewritten
    assert_eq!(normalize_language_code("FRE").as_deref(), Some("fre"));
    assert_eq!(normalize_language_code("xx").as_deref(), Some("xx"));
    assert_eq!(normalize_language_code("Klingon").as_deref(), Some("klingon"));
}

/// Blank input is treated as the default language
#[test]
fn test_normalize_language_code_withBlankInput_shouldReturnNone() {
    assert_eq!(normalize_language_code(""), None);
    assert_eq!(normalize_language_code("   "), None);
}

/// Surrounding whitespace is ignored before normalizing
#[test]
fn test_normalize_language_code_withPaddedInput_shouldNormalizeTrimmedCode() {
    assert_eq!(normalize_language_code(" en"), None);
    assert_eq!(normalize_language_code("ENG\t"), None);
    assert_eq!(normalize_language_code(" th ").as_deref(), Some("tha"));
    assert_eq!(normalize_language_code(" Klingon ").as_deref(), Some("klingon"));
}

/// Normalizing a normalized code changes nothing
#[test]
fn test_normalize_language_code_appliedTwice_shouldBeStable() {
    for lang in supported_languages() {
        for code in lang.codes() {
            let once = normalize_language_code(code);
            let twice = normalize_language_code(once.as_deref().unwrap_or("en"));
            assert_eq!(once, twice, "code '{}'", code);
        }
    }
}

/// Building then parsing a file name recovers the normalized code
#[test]
fn test_normalizedCode_throughFileName_shouldRoundTrip() {
    for lang in supported_languages() {
        for code in lang.codes() {
            let normalized = normalize_language_code(code);
            let file_name = build_subtitle_file_name("Movie.mkv", normalized.as_deref());
            assert_eq!(parse_language_from_filename(&file_name), normalized, "code '{}'", code);
        }
    }
}

/// Record lookups accept any code form
#[test]
fn test_find_language_withAnyCodeForm_shouldReturnRecord() {
    let french = find_language("fr").expect("French should be known");
    assert_eq!(french.code3, "fra");
    assert_eq!(find_language("FRA"), Some(french));
    assert_eq!(find_language(" fre "), Some(french));
    assert_eq!(find_language("en"), Some(&DEFAULT_LANGUAGE));
    assert!(find_language("xx").is_none());

    assert!(is_known_language_code("tgl"));
    assert!(!is_known_language_code("v2"));
}

/// Test matching of different language code forms
#[test]
fn test_language_codes_match_withVariousCodes_shouldMatchSameLanguage() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("fr", "fre"));
    assert!(language_codes_match("fra", "FRE"));
    assert!(language_codes_match("zh", "cmn"));
    assert!(language_codes_match("xx", "XX"));

    assert!(!language_codes_match("en", "fra"));
    assert!(!language_codes_match("xx", "fr"));
    assert!(!language_codes_match("", ""));
}

/// Every 2-letter code in the table is a real ISO 639-1 code
#[test]
fn test_supported_languages_code2_shouldBeIso6391() {
    for lang in supported_languages() {
        assert!(
            isolang::Language::from_639_1(lang.code2).is_some(),
            "'{}' is not ISO 639-1",
            lang.code2
        );
    }
}
