//! Language-scoped canonical URLs
//!
//! Upstream URIs arrive inconsistently: sometimes bare paths, sometimes
//! full URLs with scheme, host and port. [`set_language`] normalizes a
//! (domain, uri) pair and re-emits it scoped to the target language, with
//! the baseline language on the `www.` host and every other supported
//! language on its own subdomain.

use crate::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES, is_supported};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static SCHEME_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^/]+(.*)").expect("scheme/host pattern"));

/// Produce the language-scoped canonical URL for a domain and URI.
///
/// An unsupported target language logs a diagnostic and falls back to the
/// baseline form.
///
/// # Example
///
/// ```
/// use veneer_i18n::set_language;
///
/// assert_eq!(
///     set_language("example.com", "/about", "en"),
///     "https://www.example.com/about"
/// );
/// assert_eq!(
///     set_language("example.com", "/about", "cy"),
///     "https://cy.example.com/about"
/// );
/// ```
pub fn set_language(domain: &str, uri: &str, language: &str) -> String {
    let supported = is_supported(language);

    // Drop any scheme, host and port the uri came in with, keeping only
    // the path and query.
    let uri = SCHEME_HOST
        .captures(uri)
        .and_then(|c| c.get(1))
        .map_or(uri, |m| m.as_str());

    let url = format!("{domain}{uri}");

    let mut stripped = url.replacen("https://", "", 1);
    stripped = stripped.replacen("www.", "", 1);

    // Strip an existing language scope so it is not doubled up. The prefix
    // must be followed by a separator; a remainder shorter than the locale
    // code falls through untouched.
    for locale in SUPPORTED_LANGUAGES {
        if let Some(rest) = stripped.strip_prefix(locale) {
            if let Some(rest) = rest.strip_prefix(['.', '/']) {
                stripped = rest.to_string();
                break;
            }
        }
    }

    if !supported {
        warn!(language, fallback = DEFAULT_LANGUAGE, "language is not supported");
    }

    if language == DEFAULT_LANGUAGE || !supported {
        format!("https://www.{stripped}")
    } else {
        format!("https://{language}.{stripped}")
    }
}
