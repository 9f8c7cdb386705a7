//! Startup configuration for [`TextManager`](crate::manager::TextManager).
//!
//! ```toml
//! # glyphtext.toml
//! base_name = "app.freerouting.gui.MainMenu"
//! locale = "de-DE"
//! tooltip_suffix = "_tooltip"
//! icon_scale = 1.5
//! icon_font_family = "Material Design Icons"
//!
//! [icons]
//! content-save = 0xF0193
//! ```
//!
//! Every field has a default, so an empty file yields
//! [`TextManagerConfig::default`].

use std::collections::BTreeMap;
#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use glyphtext_i18n::{ICON_SCALE, IconGlyphTable, Locale};

use crate::applier::TOOLTIP_SUFFIX;
use crate::error::ConfigError;
use crate::font::MATERIAL_DESIGN_ICONS_FAMILY;

/// Tunable parameters of a text manager.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct TextManagerConfig {
    /// Base identifier used to locate catalog bundles.
    pub base_name: String,
    /// Initial locale tag; empty selects the root bundle.
    pub locale: String,
    /// Suffix appended to a key to find its tooltip.
    pub tooltip_suffix: String,
    /// Glyph size relative to the widget's base font.
    pub icon_scale: f32,
    /// Family expected from the host's icon face.
    pub icon_font_family: String,
    /// Extra icons merged over the bundled set (name → code point).
    pub icons: BTreeMap<String, u32>,
}

impl Default for TextManagerConfig {
    fn default() -> Self {
        Self {
            base_name: "messages".into(),
            locale: String::new(),
            tooltip_suffix: TOOLTIP_SUFFIX.into(),
            icon_scale: ICON_SCALE,
            icon_font_family: MATERIAL_DESIGN_ICONS_FAMILY.into(),
            icons: BTreeMap::new(),
        }
    }
}

impl TextManagerConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Check parameters are within acceptable ranges.
    ///
    /// Returns a list of problems; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.base_name.trim().is_empty() {
            errors.push("base_name must not be empty".to_string());
        }
        if let Err(err) = Locale::parse(&self.locale) {
            errors.push(err.to_string());
        }
        if self.tooltip_suffix.is_empty() {
            errors.push("tooltip_suffix must not be empty".to_string());
        }
        if !self.icon_scale.is_finite() || self.icon_scale <= 0.0 {
            errors.push(format!(
                "icon_scale must be finite and > 0, got {}",
                self.icon_scale
            ));
        }
        for (name, &code_point) in &self.icons {
            if char::from_u32(code_point).is_none() {
                errors.push(format!(
                    "icon '{name}' has invalid code point U+{code_point:X}"
                ));
            }
        }

        errors
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Parsed initial locale.
    pub fn parsed_locale(&self) -> Result<Locale, ConfigError> {
        Ok(Locale::parse(&self.locale)?)
    }

    /// Bundled icons with the configured extras merged over them.
    pub fn glyph_table(&self) -> Result<IconGlyphTable, ConfigError> {
        let mut table = IconGlyphTable::material_design();
        for (name, &code_point) in &self.icons {
            table = table.with_icon(name.clone(), code_point)?;
        }
        Ok(table)
    }
}
