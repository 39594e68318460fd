//! Language tag → locale code resolution for `xml:lang` attributes.

use unic_langid::LanguageIdentifier;

/// Resolves a language tag to the locale code written into `xml:lang`
/// and the `source-language`/`target-language` attributes.
///
/// Valid BCP 47 tags are canonicalized (`pt-br` → `pt-BR`); anything
/// else passes through unchanged so callers with private tag schemes
/// still round-trip.
pub fn locale_code(language_tag: &str) -> String {
    match language_tag.parse::<LanguageIdentifier>() {
        Ok(identifier) => identifier.to_string(),
        Err(_) => language_tag.to_string(),
    }
}
