//! Localizers
//!
//! A [`Localizer`] resolves message keys for one language; [`Localizations`]
//! holds one per supported language and routes requests, defaulting the
//! language when it is empty or unsupported. Both are immutable after
//! construction, so resolution is lock-free and thread-safe.

use crate::{
    Catalog, DEFAULT_LANGUAGE, MessageBundle, SUPPORTED_LANGUAGES, plural_category,
};
use tracing::error;

/// Per-language message resolver.
///
/// Falls back to the baseline language's bundle for keys the language does
/// not carry.
#[derive(Debug, Clone)]
pub struct Localizer {
    language: String,
    bundle: MessageBundle,
    fallback: MessageBundle,
}

impl Localizer {
    fn new(language: &str, bundle: MessageBundle, fallback: MessageBundle) -> Self {
        Self {
            language: language.to_string(),
            bundle,
            fallback,
        }
    }

    /// The language this localizer serves.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Resolve a message key with a plural count and positional arguments.
    ///
    /// Arguments are exposed to the message text as `{arg0}`, `{arg1}`, …
    /// placeholders. An unresolvable key logs an error and produces the
    /// empty string; a render never aborts over a missing message.
    pub fn localise(&self, key: &str, plural_count: i64, args: &[String]) -> String {
        let category = plural_category(&self.language, plural_count);

        let Some(template) = self
            .bundle
            .resolve(key, category)
            .or_else(|| self.fallback.resolve(key, category))
        else {
            error!(key, language = %self.language, "key not found in locale files");
            return String::new();
        };

        let mut text = template.to_string();
        for (i, argument) in args.iter().enumerate() {
            text = text.replace(&format!("{{arg{i}}}"), argument);
        }
        text
    }
}

/// One localizer per supported language, derived from a loaded catalog.
#[derive(Debug, Clone)]
pub struct Localizations {
    localizers: Vec<Localizer>,
}

impl Localizations {
    /// Build localizers for every supported language from the catalog.
    ///
    /// Languages with no loaded bundle still get a localizer; it resolves
    /// through the baseline bundle alone.
    pub fn new(catalog: Catalog) -> Self {
        let fallback = catalog
            .bundle(DEFAULT_LANGUAGE)
            .cloned()
            .unwrap_or_default();

        let localizers = SUPPORTED_LANGUAGES
            .iter()
            .map(|language| {
                let bundle = catalog.bundle(language).cloned().unwrap_or_default();
                Localizer::new(language, bundle, fallback.clone())
            })
            .collect();

        Self { localizers }
    }

    /// Get the localizer for a language.
    pub fn localizer(&self, language: &str) -> Option<&Localizer> {
        self.localizers.iter().find(|l| l.language() == language)
    }

    /// Localise text based on a key.
    ///
    /// An empty key logs and resolves to the empty string. An empty or
    /// unsupported language falls back to the baseline language.
    pub fn localise(&self, key: &str, language: &str, plural_count: i64, args: &[String]) -> String {
        if key.is_empty() {
            error!("no locale lookup key provided");
            return String::new();
        }

        let localizer = self
            .localizer(language)
            .or_else(|| self.localizer(DEFAULT_LANGUAGE));

        match localizer {
            Some(localizer) => localizer.localise(key, plural_count, args),
            None => String::new(),
        }
    }
}
