//! Template engine wrapper
//!
//! Owns the handlebars registry. Templates and helpers are installed at
//! construction and never change afterwards, so rendering only ever takes
//! `&self`; the gateway layers its output-path locking on top.

use crate::{AssetSource, RenderConfig, RenderError, Result, helpers};
use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use veneer_i18n::Localizations;

/// Handlebars engine with the Veneer helper registry installed.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    config: RenderConfig,
}

impl TemplateEngine {
    /// Create an engine with the given configuration and localizations.
    ///
    /// The helper registry is built here, once; no helper is ever added or
    /// replaced after construction.
    pub fn new(config: RenderConfig, localizations: Arc<Localizations>) -> Self {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(config.strict_mode);

        if !config.escape_html {
            handlebars.register_escape_fn(handlebars::no_escape);
        }

        helpers::register_helpers(&mut handlebars, localizations);

        Self { handlebars, config }
    }

    /// Load all templates from the configured directory.
    pub fn load_templates(&mut self) -> Result<()> {
        if !self.config.template_dir.exists() {
            return Err(RenderError::Config(format!(
                "template directory not found: {:?}",
                self.config.template_dir
            )));
        }

        let dir = self.config.template_dir.clone();
        self.load_templates_from_dir(&dir)
    }

    /// Load templates from a directory recursively.
    fn load_templates_from_dir(&mut self, dir: &Path) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                self.load_templates_from_dir(&path)?;
            } else if let Some(ext) = path.extension() {
                if ext == self.config.template_extension.trim_start_matches('.') {
                    let template_name = path
                        .strip_prefix(&self.config.template_dir)
                        .unwrap_or(&path)
                        .with_extension("")
                        .to_string_lossy()
                        .replace('\\', "/");

                    let template_content = fs::read_to_string(&path)?;
                    self.handlebars
                        .register_template_string(&template_name, template_content)?;
                }
            }
        }

        Ok(())
    }

    /// Load templates from a bundled-asset source.
    ///
    /// Assets are filtered by the configured extension; a leading
    /// `templates/` path segment is dropped from the template name.
    pub fn load_templates_from_assets(&mut self, assets: &dyn AssetSource) -> Result<()> {
        let ext = self.config.template_extension.trim_start_matches('.');

        for name in assets.names() {
            let Some(stem) = name
                .strip_suffix(ext)
                .and_then(|s| s.strip_suffix('.'))
            else {
                continue;
            };
            let template_name = stem.strip_prefix("templates/").unwrap_or(stem);

            let bytes = assets.get(&name)?;
            let content = String::from_utf8_lossy(&bytes).into_owned();
            self.handlebars
                .register_template_string(template_name, content)?;
        }

        Ok(())
    }

    /// Register a template from a string.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(RenderError::from)
    }

    /// Check if a template exists.
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Get the list of registered template names.
    pub fn template_names(&self) -> Vec<String> {
        self.handlebars.get_templates().keys().cloned().collect()
    }

    /// Render a named template with bound data to a byte sink.
    pub fn render_to_write<T: Serialize>(
        &self,
        name: &str,
        data: &T,
        writer: &mut dyn Write,
    ) -> Result<()> {
        if !self.handlebars.has_template(name) {
            return Err(RenderError::TemplateNotFound(name.to_string()));
        }

        self.handlebars
            .render_to_write(name, data, writer)
            .map_err(RenderError::from)
    }

    /// Get the configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;
    use veneer_i18n::Catalog;

    fn test_engine() -> TemplateEngine {
        TemplateEngine::new(
            RenderConfig::default(),
            Arc::new(Localizations::new(Catalog::default())),
        )
    }

    fn create_test_templates() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let templates_dir = temp_dir.path().join("templates");
        fs::create_dir(&templates_dir).unwrap();

        fs::write(templates_dir.join("hello.hbs"), "<h1>Hello {{name}}!</h1>").unwrap();
        fs::write(
            templates_dir.join("list.hbs"),
            "{{#each items}}<li>{{this}}</li>{{/each}}",
        )
        .unwrap();

        temp_dir
    }

    #[test]
    fn test_load_templates_from_dir() {
        let temp_dir = create_test_templates();
        let mut engine = TemplateEngine::new(
            RenderConfig::new(temp_dir.path().join("templates")),
            Arc::new(Localizations::new(Catalog::default())),
        );
        engine.load_templates().unwrap();

        assert!(engine.has_template("hello"));
        assert!(engine.has_template("list"));
        assert!(!engine.has_template("missing"));
    }

    #[test]
    fn test_missing_template_dir_is_config_error() {
        let mut engine = TemplateEngine::new(
            RenderConfig::new("/definitely/not/here"),
            Arc::new(Localizations::new(Catalog::default())),
        );
        assert!(matches!(
            engine.load_templates(),
            Err(RenderError::Config(_))
        ));
    }

    #[test]
    fn test_load_templates_from_assets() {
        let mut assets: HashMap<String, Vec<u8>> = HashMap::new();
        assets.insert(
            "templates/hello.hbs".to_string(),
            b"<h1>Hello {{name}}!</h1>".to_vec(),
        );
        assets.insert("styles/main.css".to_string(), b"body {}".to_vec());

        let mut engine = test_engine();
        engine.load_templates_from_assets(&assets).unwrap();

        assert!(engine.has_template("hello"));
        assert_eq!(engine.template_names(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_render_to_write() {
        let mut engine = test_engine();
        engine
            .register_template("greet", "<p>{{greeting}}</p>")
            .unwrap();

        let mut out = Vec::new();
        engine
            .render_to_write("greet", &json!({"greeting": "hi"}), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_render_unknown_template() {
        let engine = test_engine();
        let mut out = Vec::new();
        assert!(matches!(
            engine.render_to_write("nope", &json!({}), &mut out),
            Err(RenderError::TemplateNotFound(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_strict_mode_errors_on_missing_variable() {
        let mut engine = TemplateEngine::new(
            RenderConfig::default().with_strict_mode(true),
            Arc::new(Localizations::new(Catalog::default())),
        );
        engine.register_template("strict", "{{missing}}").unwrap();

        let mut out = Vec::new();
        assert!(engine
            .render_to_write("strict", &json!({}), &mut out)
            .is_err());
    }

    #[test]
    fn test_escaping_defaults_on() {
        let mut engine = test_engine();
        engine.register_template("raw", "{{value}}").unwrap();

        let mut out = Vec::new();
        engine
            .render_to_write("raw", &json!({"value": "<b>"}), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "&lt;b&gt;");
    }
}
