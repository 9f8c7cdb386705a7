//! Error types for catalog, locale, and glyph-table construction.
//!
//! Only construction-time APIs return these. Lookup and substitution never
//! fail: unknown keys fall back to the key itself and unknown icons are
//! logged and left in place.

use thiserror::Error;

/// Errors from i18n operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// A locale tag was malformed.
    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),
    /// An icon was registered with a value that is not a Unicode scalar.
    #[error("icon '{name}' has invalid code point U+{code_point:X}")]
    InvalidCodePoint { name: String, code_point: u32 },
    /// A catalog store could not produce a bundle.
    #[error("catalog store failed for '{base_name}' ({locale}): {message}")]
    Store {
        base_name: String,
        locale: String,
        message: String,
    },
}

/// Standard result type for i18n construction APIs.
pub type Result<T> = std::result::Result<T, I18nError>;
