// SPDX-License-Identifier: MPL-2.0
//! Locale registry with fail-closed resolution.
//!
//! The registry holds the static set of locales the site is built for, with
//! exactly one designated default. Requested locale codes (typically a URL
//! segment) are resolved by exact match against the registered codes; any
//! unsupported or malformed code resolves to the default locale instead of
//! failing, so a bad URL segment can never take the site down.

use crate::error::{Error, Result};
use unic_langid::LanguageIdentifier;

/// Locale codes served by the documentation site, in sidebar listing order.
/// `en` is the default.
const SITE_LOCALE_CODES: &[&str] = &[
    "af-ZA", "ar-SA", "de-DE", "en", "es-ES", "fr-FR", "hi-IN", "id-ID", "it-IT", "ja-JP",
    "lv-LV", "lt-LT", "nl-NL", "pt-BR", "pt-PT", "pl-PL", "ro-RO", "ru-RU", "tr-TR", "uk-UA",
    "vi-VN",
];

/// A registered locale.
///
/// `code` is the canonical BCP-47-like tag used in URLs and as the join key
/// into catalogs and translation tables. `hreflang` is the short code used
/// for alternate-link generation: the language subtag alone, unless two
/// regional variants of the same language are registered (e.g. `pt-BR` and
/// `pt-PT`), in which case the full tag is kept to disambiguate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: LanguageIdentifier,
    code: String,
    hreflang: String,
    is_default: bool,
}

impl Locale {
    /// Returns the canonical locale code (e.g. `"de-DE"`).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the hreflang short code (e.g. `"de"`, or `"pt-BR"` where the
    /// language subtag alone would be ambiguous).
    #[must_use]
    pub fn hreflang(&self) -> &str {
        &self.hreflang
    }

    /// Returns the parsed language identifier.
    #[must_use]
    pub fn tag(&self) -> &LanguageIdentifier {
        &self.tag
    }

    /// Returns `true` for the registry's default locale.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// Static set of supported locales with a single default and fail-closed
/// resolution.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    default_index: usize,
}

impl LocaleRegistry {
    /// Builds a registry from locale codes in listing order.
    ///
    /// `default_code` must be one of `codes`. Fails on malformed or
    /// duplicate codes, so a bad locale table is caught at startup rather
    /// than during request handling.
    pub fn new(codes: &[&str], default_code: &str) -> Result<Self> {
        let mut tags: Vec<LanguageIdentifier> = Vec::with_capacity(codes.len());
        for code in codes {
            let tag: LanguageIdentifier = code
                .parse()
                .map_err(|_| Error::Locale(format!("malformed locale code '{}'", code)))?;
            if tags.contains(&tag) {
                return Err(Error::Locale(format!("duplicate locale code '{}'", code)));
            }
            tags.push(tag);
        }

        let default_tag: LanguageIdentifier = default_code
            .parse()
            .map_err(|_| Error::Locale(format!("malformed default locale '{}'", default_code)))?;
        let default_index = tags
            .iter()
            .position(|tag| *tag == default_tag)
            .ok_or_else(|| {
                Error::Locale(format!("default locale '{}' is not registered", default_code))
            })?;

        let locales = tags
            .iter()
            .enumerate()
            .map(|(index, tag)| {
                let language = tag.language.as_str();
                let ambiguous = tags
                    .iter()
                    .filter(|other| other.language.as_str() == language)
                    .count()
                    > 1;
                let code = tag.to_string();
                let hreflang = if ambiguous { code.clone() } else { language.to_string() };
                Locale {
                    tag: tag.clone(),
                    code,
                    hreflang,
                    is_default: index == default_index,
                }
            })
            .collect();

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Builds the documentation site's standard 21-locale registry with
    /// `en` as the default.
    #[must_use]
    pub fn site_default() -> Self {
        Self::new(SITE_LOCALE_CODES, "en").expect("built-in locale table is valid")
    }

    /// Resolves a requested locale code.
    ///
    /// Exact match against a registered code wins (input is canonicalized
    /// first, so `"DE-de"` resolves to `de-DE`). Unsupported or malformed
    /// codes resolve to the default locale; this never fails.
    #[must_use]
    pub fn resolve(&self, code: &str) -> &Locale {
        if let Ok(tag) = code.parse::<LanguageIdentifier>() {
            if let Some(locale) = self.locales.iter().find(|locale| locale.tag == tag) {
                return locale;
            }
        }
        self.default_locale()
    }

    /// Returns the default locale.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.locales[self.default_index]
    }

    /// Returns all registered locales in listing order.
    #[must_use]
    pub fn supported_locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Returns `true` if `code` is a registered locale.
    #[must_use]
    pub fn is_supported(&self, code: &str) -> bool {
        match code.parse::<LanguageIdentifier>() {
            Ok(tag) => self.locales.iter().any(|locale| locale.tag == tag),
            Err(_) => false,
        }
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::site_default()
    }
}
