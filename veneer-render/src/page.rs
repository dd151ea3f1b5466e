//! Common page model
//!
//! Fields shared by every page type; page-type-specific data hangs off the
//! structure the caller serializes alongside these. The gateway itself
//! does not validate any of this — helpers check field presence against
//! the serialized form at render time.

use serde::{Deserialize, Serialize};

/// Data common to every rendered page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(rename = "type")]
    pub page_type: String,
    pub dataset_id: String,
    pub dataset_title: String,
    pub uri: String,
    pub taxonomy: Vec<TaxonomyNode>,
    pub breadcrumb: Vec<TaxonomyNode>,
    pub is_in_filter_breadcrumb: bool,
    pub service_message: String,
    pub metadata: Metadata,
    pub search_disabled: bool,
    pub site_domain: String,
    pub pattern_library_assets_path: String,
    pub language: String,
    pub release_date: String,
    pub beta_banner_enabled: bool,
    pub cookies_preferences_set: bool,
    pub cookies_policy: CookiesPolicy,
    #[serde(rename = "has_jsonld")]
    pub has_json_ld: bool,
    pub feature_flags: FeatureFlags,
}

impl Page {
    /// Instantiate the base page with its configurable fields.
    pub fn new(assets_path: impl Into<String>, site_domain: impl Into<String>) -> Self {
        Self {
            pattern_library_assets_path: assets_path.into(),
            site_domain: site_domain.into(),
            ..Self::default()
        }
    }
}

/// A node in the site taxonomy or a breadcrumb trail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyNode {
    pub title: String,
    pub uri: String,
    pub children: Vec<TaxonomyNode>,
}

/// Page metadata rendered into the document head.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// The visitor's cookie consent choices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CookiesPolicy {
    pub essential: bool,
    pub usage: bool,
}

/// Feature toggles the templates branch on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub hide_cookie_banner: bool,
}

/// JSON body written when a template fails to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page() {
        let page = Page::new("/assets", "example.com");
        assert_eq!(page.pattern_library_assets_path, "/assets");
        assert_eq!(page.site_domain, "example.com");
        assert!(page.uri.is_empty());
    }

    #[test]
    fn test_page_serializes_renamed_fields() {
        let mut page = Page::default();
        page.page_type = "dataset_landing_page".to_string();
        page.has_json_ld = true;

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["type"], "dataset_landing_page");
        assert_eq!(value["has_jsonld"], true);
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_string(&ErrorResponse {
            error: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"error":"boom"}"#);
    }
}
