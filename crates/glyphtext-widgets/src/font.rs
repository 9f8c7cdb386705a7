//! Font descriptors and icon face registration.
//!
//! Loading font binaries belongs to the host rendering environment. This
//! module only models what the applier needs: a face family to switch a
//! widget to, and a [`FontHost`] that either registers one or reports that
//! none is available.

use crate::error::FontError;

/// Family name of the bundled icon face.
pub const MATERIAL_DESIGN_ICONS_FAMILY: &str = "Material Design Icons";

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
}

/// A concrete font selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Family name as the host knows it.
    pub family: String,
    /// Weight/slant variant.
    pub style: FontStyle,
    /// Size in points.
    pub size: f32,
}

impl FontSpec {
    /// Font of `family` in `style` at `size` points.
    #[must_use]
    pub fn new(family: impl Into<String>, style: FontStyle, size: f32) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    /// Same family with a different style and size.
    #[must_use]
    pub fn derive(&self, style: FontStyle, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            style,
            size,
        }
    }
}

/// Handle to an icon face registered with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFont {
    family: String,
}

impl IconFont {
    /// Handle for a face the host registered under `family`.
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }

    /// Registered family name.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Plain icon face sized `scale` times `base`.
    #[must_use]
    pub fn derive_for(&self, base: &FontSpec, scale: f32) -> FontSpec {
        FontSpec::new(self.family.clone(), FontStyle::Plain, base.size * scale)
    }
}

/// Host environment that can register the icon face.
pub trait FontHost {
    /// Load and register the icon font.
    fn register_icon_font(&mut self) -> Result<IconFont, FontError>;
}

/// Headless host: registers a fixed family, or reports it missing.
#[derive(Debug, Clone, Default)]
pub struct StaticFontHost {
    family: Option<String>,
}

impl StaticFontHost {
    /// A host that provides `family`.
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
        }
    }

    /// A host with no icon face.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { family: None }
    }
}

impl FontHost for StaticFontHost {
    fn register_icon_font(&mut self) -> Result<IconFont, FontError> {
        self.family
            .as_deref()
            .map(IconFont::new)
            .ok_or_else(|| FontError::Unavailable("no icon face bundled with host".into()))
    }
}
