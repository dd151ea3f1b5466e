//! Message catalogs and language-scoped URLs for the Veneer page renderer.
//!
//! A [`Catalog`] is loaded once at startup from per-language TOML message
//! bundles supplied by a resource loader, then frozen. [`Localizations`]
//! derives one [`Localizer`] per supported language from the catalog and
//! resolves `(key, language, plural count, arguments)` tuples to display
//! strings at request time. All post-initialization state is immutable, so
//! lookups are reentrant with no locking.
//!
//! Missing or malformed bundles never abort startup; the affected language
//! simply serves fewer messages. An unresolvable key logs an error and
//! resolves to the empty string.
//!
//! # Quick Start
//!
//! ```
//! use veneer_i18n::{Catalog, Localizations, MessageBundle};
//!
//! let mut catalog = Catalog::default();
//! let mut en = MessageBundle::default();
//! en.add("Greeting", "Hello, {arg0}!");
//! catalog.add_bundle("en", en);
//!
//! let localizations = Localizations::new(catalog);
//! let text = localizations.localise("Greeting", "en", 1, &["world".to_string()]);
//! assert_eq!(text, "Hello, world!");
//! ```

mod bundle;
mod catalog;
mod error;
mod language;
mod localizer;
mod plural;
mod url;

pub use bundle::{Message, MessageBundle};
pub use catalog::{BUNDLE_CATEGORIES, Catalog};
pub use error::I18nError;
pub use language::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES, is_supported};
pub use localizer::{Localizations, Localizer};
pub use plural::{PluralCategory, PluralRules, plural_category};
pub use url::set_language;

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;
