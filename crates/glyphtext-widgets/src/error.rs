//! Error types for font registration and configuration loading.

use glyphtext_i18n::I18nError;
use thiserror::Error;

/// Errors from registering the icon font with the host.
#[derive(Debug, Error)]
pub enum FontError {
    /// The host has no icon face to offer.
    #[error("icon font unavailable: {0}")]
    Unavailable(String),
    /// Reading the font resource failed.
    #[error("failed to read icon font: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading a [`TextManagerConfig`](crate::config::TextManagerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// The configured locale tag or icon table is invalid.
    #[error(transparent)]
    I18n(#[from] I18nError),
    /// Validation errors.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
