//! Pluralization rules
//!
//! CLDR plural categories for the supported languages. English needs two
//! forms (one, other); Welsh uses all six.

use crate::{I18nError, Result};

/// CLDR plural categories.
///
/// Not all languages use all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Zero items (Welsh)
    Zero,
    /// One item
    One,
    /// Two items (Welsh)
    Two,
    /// Few items (Welsh: 3)
    Few,
    /// Many items (Welsh: 6)
    Many,
    /// All other cases
    Other,
}

impl PluralCategory {
    /// Parse from a bundle key.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "few" => Ok(Self::Few),
            "many" => Ok(Self::Many),
            "other" => Ok(Self::Other),
            _ => Err(I18nError::InvalidPluralCategory(s.to_string())),
        }
    }

    /// Convert to the bundle key form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plural rules for a specific language.
pub trait PluralRules {
    /// Get the plural category for a count.
    fn category(&self, n: i64) -> PluralCategory;
}

/// Get the plural category for a count in a language.
///
/// # Example
///
/// ```
/// use veneer_i18n::{PluralCategory, plural_category};
///
/// assert_eq!(plural_category("en", 1), PluralCategory::One);
/// assert_eq!(plural_category("en", 2), PluralCategory::Other);
/// assert_eq!(plural_category("cy", 0), PluralCategory::Zero);
/// ```
pub fn plural_category(language: &str, n: i64) -> PluralCategory {
    let rules = rules_for(language);
    rules.category(n)
}

// Unknown languages take the English rule; the catalog only carries
// supported languages anyway.
fn rules_for(language: &str) -> &'static dyn PluralRules {
    match language {
        "cy" => &WelshPlurals,
        _ => &EnglishPlurals,
    }
}

/// English pluralization.
///
/// - one: 1
/// - other: rest
struct EnglishPlurals;

impl PluralRules for EnglishPlurals {
    fn category(&self, n: i64) -> PluralCategory {
        if n.abs() == 1 {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }
}

/// Welsh pluralization.
///
/// - zero: 0
/// - one: 1
/// - two: 2
/// - few: 3
/// - many: 6
/// - other: rest
struct WelshPlurals;

impl PluralRules for WelshPlurals {
    fn category(&self, n: i64) -> PluralCategory {
        match n.abs() {
            0 => PluralCategory::Zero,
            1 => PluralCategory::One,
            2 => PluralCategory::Two,
            3 => PluralCategory::Few,
            6 => PluralCategory::Many,
            _ => PluralCategory::Other,
        }
    }
}
