//! The supported-language set.
//!
//! A fixed, process-wide enumeration of locale codes plus the designated
//! baseline language. Everything that resolves a language (localizers, the
//! URL rewriter) consults this set.

/// Locale codes the renderer can serve.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "cy"];

/// Baseline language used when a request's language is empty or
/// unsupported.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Whether `language` is in the supported set.
pub fn is_supported(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages() {
        assert!(is_supported("en"));
        assert!(is_supported("cy"));
        assert!(!is_supported("fr"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_default_language_is_supported() {
        assert!(is_supported(DEFAULT_LANGUAGE));
    }
}
