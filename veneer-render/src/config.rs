//! Configuration for the rendering gateway

use std::path::PathBuf;

/// Configuration for the template engine behind the gateway.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory containing template files
    pub template_dir: PathBuf,

    /// Template file extension (default: ".hbs")
    pub template_extension: String,

    /// Error on missing variables instead of rendering nothing
    pub strict_mode: bool,

    /// HTML-escape interpolated values (default: true)
    pub escape_html: bool,
}

impl RenderConfig {
    /// Create a new configuration with a template directory.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            template_extension: ".hbs".to_string(),
            strict_mode: false,
            escape_html: true,
        }
    }

    /// Set the template file extension.
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.template_extension = ext.into();
        self
    }

    /// Enable strict mode (error on missing variables).
    pub fn with_strict_mode(mut self, enable: bool) -> Self {
        self.strict_mode = enable;
        self
    }

    /// Enable or disable HTML escaping.
    pub fn with_escape_html(mut self, enable: bool) -> Self {
        self.escape_html = enable;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new("templates")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = RenderConfig::new("views")
            .with_extension(".html")
            .with_strict_mode(true)
            .with_escape_html(false);

        assert_eq!(config.template_dir, PathBuf::from("views"));
        assert_eq!(config.template_extension, ".html");
        assert!(config.strict_mode);
        assert!(!config.escape_html);
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();

        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.template_extension, ".hbs");
        assert!(!config.strict_mode);
        assert!(config.escape_html);
    }
}
