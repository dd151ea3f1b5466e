//! Message bundles
//!
//! One bundle holds the messages of a single language for one functional
//! category. The on-disk format is TOML: a bare string for a simple
//! message, or a table of plural-category keys for plural messages.
//!
//! ```toml
//! ServiceName = "Data explorer"
//!
//! [DatasetCount]
//! description = "Shown above dataset search results"
//! one = "{arg0} dataset"
//! other = "{arg0} datasets"
//! ```

use crate::{PluralCategory, Result};
use std::collections::HashMap;

/// A single message: either plain text or a set of plural forms.
#[derive(Debug, Clone)]
pub enum Message {
    /// Plain message text
    Simple(String),
    /// Plural forms keyed by CLDR category
    Plural(HashMap<PluralCategory, String>),
}

/// Messages of one language, keyed by message key.
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    messages: HashMap<String, Message>,
}

impl MessageBundle {
    /// Parse a bundle from TOML text.
    ///
    /// Table entries whose keys are not plural categories (`description`,
    /// `hash`, …) are translator metadata and are ignored.
    pub fn from_toml(text: &str) -> Result<Self> {
        let table: toml::Table = text.parse()?;
        let mut bundle = Self::default();

        for (key, value) in table {
            match value {
                toml::Value::String(s) => {
                    bundle.messages.insert(key, Message::Simple(s));
                }
                toml::Value::Table(forms) => {
                    let mut plural = HashMap::new();
                    for (form, v) in forms {
                        if let toml::Value::String(s) = v {
                            if let Ok(category) = PluralCategory::from_str(&form) {
                                plural.insert(category, s);
                            }
                        }
                    }
                    if !plural.is_empty() {
                        bundle.messages.insert(key, Message::Plural(plural));
                    }
                }
                _ => {}
            }
        }

        Ok(bundle)
    }

    /// Add a simple message.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages
            .insert(key.into(), Message::Simple(message.into()));
    }

    /// Add a plural form for a message.
    pub fn add_plural(
        &mut self,
        key: impl Into<String>,
        category: PluralCategory,
        message: impl Into<String>,
    ) {
        let entry = self
            .messages
            .entry(key.into())
            .or_insert_with(|| Message::Plural(HashMap::new()));
        if let Message::Plural(forms) = entry {
            forms.insert(category, message.into());
        } else {
            *entry = Message::Plural(HashMap::from([(category, message.into())]));
        }
    }

    /// Get a message.
    pub fn get(&self, key: &str) -> Option<&Message> {
        self.messages.get(key)
    }

    /// Resolve a key to the message text for a plural category.
    ///
    /// Plural messages fall back to the `other` form when the exact
    /// category is absent.
    pub fn resolve(&self, key: &str, category: PluralCategory) -> Option<&str> {
        match self.messages.get(key)? {
            Message::Simple(s) => Some(s.as_str()),
            Message::Plural(forms) => forms
                .get(&category)
                .or_else(|| forms.get(&PluralCategory::Other))
                .map(|s| s.as_str()),
        }
    }

    /// Check if the bundle has a message.
    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Absorb every message of `other`, overwriting duplicate keys.
    pub fn merge(&mut self, other: MessageBundle) {
        self.messages.extend(other.messages);
    }

    /// Number of messages in the bundle.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the bundle holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
