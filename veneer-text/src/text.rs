//! Small string utilities used by the template helpers.

/// Make an ASCII, URL-safe slug: lowercase, hyphen-separated, diacritics
/// stripped.
pub fn slugify(s: &str) -> String {
    slug::slugify(s)
}

/// Build the download URI for a legacy dataset file.
///
/// Concatenating strings inside an href attribute sends the value through
/// the engine's HTML escaping. Links should stay readable, so the full URI
/// is built here and inserted into the template verbatim.
pub fn legacy_dataset_download_uri(page_uri: &str, filename: &str) -> String {
    format!("/file?uri={page_uri}/{filename}")
}

/// Concatenate tokens in order, with no separator.
pub fn concatenate<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for token in tokens {
        result.push_str(token.as_ref());
    }
    result
}

/// Truncate `text` to at most `max_length` characters, trimming trailing
/// whitespace and appending "...".
///
/// The boundary is strict: text of exactly `max_length` characters is
/// truncated, only strictly shorter text passes through unchanged.
pub fn truncate_to_maximum_characters(text: &str, max_length: usize) -> String {
    if text.chars().count() < max_length {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_length).collect();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("Crime in England and Wales"), "crime-in-england-and-wales");
        assert_eq!(slugify("Économie française"), "economie-francaise");
    }

    #[test]
    fn test_legacy_dataset_download_uri() {
        assert_eq!(
            legacy_dataset_download_uri("/economy/gdp/current", "data.csv"),
            "/file?uri=/economy/gdp/current/data.csv"
        );
    }

    #[test]
    fn test_concatenate() {
        assert_eq!(concatenate(["a", "b", "c"]), "abc");
        assert_eq!(concatenate(Vec::<String>::new()), "");
    }

    #[test]
    fn test_truncate_shorter_text_unchanged() {
        assert_eq!(truncate_to_maximum_characters("hello", 6), "hello");
    }

    #[test]
    fn test_truncate_exact_length_is_truncated() {
        // Strict < boundary: exactly max_length characters still truncates.
        assert_eq!(truncate_to_maximum_characters("hello", 5), "hello...");
    }

    #[test]
    fn test_truncate_trims_trailing_whitespace() {
        assert_eq!(truncate_to_maximum_characters("hello world", 6), "hello...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_to_maximum_characters("héllo wörld", 6), "héllo...");
    }
}
