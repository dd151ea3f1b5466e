//! Server-side page rendering for Veneer services
//!
//! Wraps a handlebars engine with the full Veneer helper registry, a
//! localized-message catalog, and a concurrency-safe gateway that falls
//! back to a JSON error body when a page fails to render.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use veneer_render::{Catalog, Localizations, Page, RenderConfig, Renderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::load_from_dir(".");
//! let renderer = Renderer::new(
//!     RenderConfig::new("templates"),
//!     Arc::new(Localizations::new(catalog)),
//! )?;
//!
//! let page = Page::new("/assets", "example.com");
//! let mut body = Vec::new();
//! renderer.page(&mut body, &page, "homepage");
//! # Ok(())
//! # }
//! ```

mod assets;
mod config;
mod engine;
mod error;
mod gateway;
mod helpers;
mod page;

pub use assets::AssetSource;
pub use config::RenderConfig;
pub use engine::TemplateEngine;
pub use error::{RenderError, Result};
pub use gateway::Renderer;
pub use helpers::register_helpers;
pub use page::{CookiesPolicy, ErrorResponse, FeatureFlags, Metadata, Page, TaxonomyNode};

pub use veneer_i18n::{Catalog, Localizations};
