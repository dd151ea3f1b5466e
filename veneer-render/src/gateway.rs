//! The rendering gateway
//!
//! The single entry point callers hold for the life of the process. HTML
//! and JSON rendering each serialize behind their own mutex, so the two
//! output paths never block each other.

use crate::{AssetSource, ErrorResponse, RenderConfig, Result, TemplateEngine};
use parking_lot::Mutex;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, error, info};
use veneer_i18n::Localizations;

/// Concurrency-safe facade over the template engine.
pub struct Renderer {
    engine: TemplateEngine,
    html_lock: Mutex<()>,
    json_lock: Mutex<()>,
}

impl Renderer {
    /// Create a renderer, loading templates from the configured directory.
    pub fn new(config: RenderConfig, localizations: Arc<Localizations>) -> Result<Self> {
        let mut engine = TemplateEngine::new(config, localizations);
        engine.load_templates()?;
        Ok(Self::from_engine(engine))
    }

    /// Create a renderer, loading templates from a bundled-asset source.
    pub fn with_assets(
        config: RenderConfig,
        localizations: Arc<Localizations>,
        assets: &dyn AssetSource,
    ) -> Result<Self> {
        let mut engine = TemplateEngine::new(config, localizations);
        engine.load_templates_from_assets(assets)?;
        Ok(Self::from_engine(engine))
    }

    fn from_engine(engine: TemplateEngine) -> Self {
        Self {
            engine,
            html_lock: Mutex::new(()),
            json_lock: Mutex::new(()),
        }
    }

    /// Render a page as HTML, falling back to a JSON error body when the
    /// template fails.
    ///
    /// The error fallback never fails the call: a render failure is logged
    /// and reported to the client as `{"error": "..."}` with status 500.
    pub fn page<T: Serialize>(&self, out: &mut dyn Write, page: &T, template_name: &str) {
        match self.html(out, 200, template_name, page) {
            Ok(()) => {
                info!(template = template_name, "rendered template");
            }
            Err(err) => {
                error!(template = template_name, %err, "failed to render template");
                let body = ErrorResponse {
                    error: err.to_string(),
                };
                if let Err(err) = self.json(out, 500, &body) {
                    error!(%err, "failed to write error response");
                }
            }
        }
    }

    /// Render a named template as HTML to the given sink.
    ///
    /// Output is staged in a scratch buffer and copied to the sink only
    /// when the whole template executed; a mid-template failure leaves the
    /// sink untouched.
    pub fn html<T: Serialize>(
        &self,
        out: &mut dyn Write,
        status: u16,
        name: &str,
        data: &T,
    ) -> Result<()> {
        let _guard = self.html_lock.lock();
        debug!(template = name, status, "rendering html");

        let mut buf = Vec::new();
        self.engine.render_to_write(name, data, &mut buf)?;
        out.write_all(&buf)?;
        Ok(())
    }

    /// Write a value as a JSON body to the given sink.
    pub fn json<T: Serialize>(&self, out: &mut dyn Write, status: u16, value: &T) -> Result<()> {
        let _guard = self.json_lock.lock();
        debug!(status, "writing json");
        serde_json::to_writer(out, value)?;
        Ok(())
    }

    /// The engine behind the gateway.
    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use veneer_i18n::Catalog;

    fn test_renderer() -> Renderer {
        let mut assets: HashMap<String, Vec<u8>> = HashMap::new();
        assets.insert(
            "templates/greeting.hbs".to_string(),
            b"<p>Hello {{name}}</p>".to_vec(),
        );
        assets.insert(
            "templates/broken.hbs".to_string(),
            b"{{humanSize size}}".to_vec(),
        );
        assets.insert(
            "templates/report.hbs".to_string(),
            b"<h1>Report</h1><p>intro</p>{{humanSize size}}".to_vec(),
        );

        Renderer::with_assets(
            RenderConfig::default(),
            Arc::new(Localizations::new(Catalog::default())),
            &assets,
        )
        .unwrap()
    }

    #[test]
    fn test_page_renders_html() {
        let renderer = test_renderer();
        let mut out = Vec::new();
        renderer.page(&mut out, &json!({"name": "world"}), "greeting");
        assert_eq!(String::from_utf8(out).unwrap(), "<p>Hello world</p>");
    }

    #[test]
    fn test_page_falls_back_to_json_error() {
        let renderer = test_renderer();
        let mut out = Vec::new();
        renderer.page(&mut out, &json!({"size": "not a number"}), "broken");

        let body: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_failure_after_static_output_still_yields_clean_json() {
        // The helper fails only after the static heading and paragraph
        // have executed; none of that may reach the sink.
        let renderer = test_renderer();
        let mut out = Vec::new();
        renderer.page(&mut out, &json!({"size": "abc"}), "report");

        let body: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_failed_html_render_writes_nothing() {
        let renderer = test_renderer();
        let mut out = Vec::new();
        assert!(
            renderer
                .html(&mut out, 200, "report", &json!({"size": "abc"}))
                .is_err()
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_json() {
        let renderer = test_renderer();
        let mut out = Vec::new();
        renderer.json(&mut out, 200, &json!({"ok": true})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), r#"{"ok":true}"#);
    }

    #[test]
    fn test_html_unknown_template_is_error() {
        let renderer = test_renderer();
        let mut out = Vec::new();
        assert!(renderer.html(&mut out, 200, "missing", &json!({})).is_err());
        assert!(out.is_empty());
    }
}
