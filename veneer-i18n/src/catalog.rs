//! The message catalog
//!
//! One [`MessageBundle`] per supported language, assembled at startup from
//! the fixed set of bundle categories and frozen afterwards. Bundle load is
//! best-effort: a missing or malformed file logs a diagnostic and the
//! language keeps whatever else loaded.

use crate::{MessageBundle, SUPPORTED_LANGUAGES};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// The functional bundle categories loaded for every language.
pub const BUNDLE_CATEGORIES: &[&str] = &["core", "service"];

/// All loaded message bundles, keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bundles: HashMap<String, MessageBundle>,
}

impl Catalog {
    /// Load the catalog through a resource loader.
    ///
    /// For every supported language and bundle category the loader is asked
    /// for `locales/{category}.{language}.toml`. Load and parse failures
    /// are logged and skipped, never fatal.
    pub fn load<F>(loader: F) -> Self
    where
        F: Fn(&str) -> std::io::Result<Vec<u8>>,
    {
        let mut bundles = HashMap::new();

        for language in SUPPORTED_LANGUAGES {
            let bundle: &mut MessageBundle = bundles.entry(language.to_string()).or_default();

            for category in BUNDLE_CATEGORIES {
                let resource = bundle_resource(category, language);

                let bytes = match loader(&resource) {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        warn!(resource, %err, "failed to get locale file");
                        continue;
                    }
                };

                let text = match std::str::from_utf8(&bytes) {
                    Ok(text) => text,
                    Err(err) => {
                        warn!(resource, %err, "locale file is not valid UTF-8");
                        continue;
                    }
                };

                match MessageBundle::from_toml(text) {
                    Ok(parsed) => bundle.merge(parsed),
                    Err(err) => warn!(resource, %err, "failed to parse locale file"),
                }
            }
        }

        Self { bundles }
    }

    /// Load the catalog from bundle files under `root/locales/`.
    pub fn load_from_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self::load(|resource| std::fs::read(root.join(resource)))
    }

    /// Add or replace the bundle for a language.
    pub fn add_bundle(&mut self, language: impl Into<String>, bundle: MessageBundle) {
        self.bundles.insert(language.into(), bundle);
    }

    /// Get the bundle for a language.
    pub fn bundle(&self, language: &str) -> Option<&MessageBundle> {
        self.bundles.get(language)
    }
}

fn bundle_resource(category: &str, language: &str) -> String {
    format!("locales/{category}.{language}.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_load_merges_categories() {
        let catalog = Catalog::load(|resource| match resource {
            "locales/core.en.toml" => Ok(b"CoreMessage = \"core\"".to_vec()),
            "locales/service.en.toml" => Ok(b"ServiceMessage = \"service\"".to_vec()),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, "no such asset")),
        });

        let en = catalog.bundle("en").unwrap();
        assert!(en.has("CoreMessage"));
        assert!(en.has("ServiceMessage"));

        // cy bundles were all missing; the language stays present, empty.
        assert!(catalog.bundle("cy").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_bundle_does_not_poison_language() {
        let catalog = Catalog::load(|resource| match resource {
            "locales/core.en.toml" => Ok(b"{{{ not toml".to_vec()),
            "locales/service.en.toml" => Ok(b"Ok = \"fine\"".to_vec()),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, "no such asset")),
        });

        let en = catalog.bundle("en").unwrap();
        assert!(en.has("Ok"));
        assert_eq!(en.len(), 1);
    }

    #[test]
    fn test_unknown_language_absent() {
        let catalog = Catalog::default();
        assert!(catalog.bundle("fr").is_none());
    }
}
