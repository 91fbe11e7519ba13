// SPDX-License-Identifier: PMPL-1.0-or-later

//! BCP-47 tag normalisation against a closed allow-list.
//!
//! Accepted spellings match case-insensitively and map to one canonical
//! tag, so `"eNg"` and `"EN"` both become `"en"` and `"dE-aT"` becomes
//! `"de-AT"`. Anything outside the list is rejected with a warning; this is
//! not a general BCP-47 parser and does no fallback between tags.

/// Accepted spelling and its canonical tag, sorted case-insensitively.
const ALLOW_LIST: &[(&str, &str)] = &[
    ("ar", "ar"),
    ("de", "de"),
    ("de-AT", "de-AT"),
    ("de-CH", "de-CH"),
    ("deu", "de"),
    ("en", "en"),
    ("eng", "en"),
    ("es", "es"),
    ("esp", "es"),
    ("fr", "fr"),
    ("fr-CH", "fr-CH"),
    ("fre", "fr"),
    ("hu", "hu"),
    ("it", "it"),
    ("it-CH", "it-CH"),
    ("ita", "it"),
    ("nl", "nl"),
    ("spa", "es"),
    ("tr", "tr"),
    ("vi", "vi"),
];

/// Canonical BCP-47 tag for `tag`, or `None` when no tag was given or the
/// tag is not on the allow-list.
///
/// # Examples
/// ```
/// use iso_lang_finder::bcp47::translate_tag;
/// assert_eq!(translate_tag(Some("dE-aT")), Some("de-AT"));
/// assert_eq!(translate_tag(Some("eNg")), Some("en"));
/// assert_eq!(translate_tag(None), None);
/// ```
pub fn translate_tag(tag: Option<&str>) -> Option<&'static str> {
    let tag = tag?;
    let translated = lookup(tag);
    if translated.is_none() {
        tracing::warn!(
            "the language '{}' does not match the accepted BCP-47 values; accepted values are: [{}]",
            tag,
            accepted_tags().join(", ")
        );
    }
    translated
}

/// Every accepted spelling, in case-insensitive order.
pub fn accepted_tags() -> Vec<&'static str> {
    ALLOW_LIST.iter().map(|&(key, _)| key).collect()
}

fn lookup(tag: &str) -> Option<&'static str> {
    ALLOW_LIST
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(tag))
        .map(|&(_, canonical)| canonical)
}
