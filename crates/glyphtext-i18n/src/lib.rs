#![forbid(unsafe_code)]

//! Localization foundation for glyphtext.
//!
//! Provides locale-scoped message catalogs with bundle fallback, a
//! single-pass placeholder tokenizer, positional argument binding, and
//! icon glyph substitution.
//!
//! # Pipeline
//! ```text
//! key ─► MessageCatalog::lookup ─► placeholder::bind ─► IconSubstitutor::resolve ─► ResolvedText
//! ```
//!
//! This crate knows nothing about widgets or fonts. `glyphtext-widgets`
//! applies its output to widget capabilities.

pub mod catalog;
pub mod error;
pub mod icons;
pub mod locale;
pub mod placeholder;

pub use catalog::{CatalogStore, LocaleStrings, MemoryStore, MessageCatalog};
pub use error::I18nError;
pub use icons::{GlyphSpan, ICON_SCALE, IconGlyphTable, IconSubstitutor, ResolvedText};
pub use locale::Locale;
pub use placeholder::{Token, bind, tokenize, tokenize_icons};
