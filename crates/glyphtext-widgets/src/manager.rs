//! Application-facing text manager.
//!
//! Owns the catalog store, the active [`MessageCatalog`], the shared glyph
//! table and the registered icon face, and exposes the three operations UI
//! code calls: [`set_locale`](TextManager::set_locale),
//! [`get_text`](TextManager::get_text) and [`set_text`](TextManager::set_text).
//!
//! # Locale switching
//!
//! The active catalog lives in an [`ArcSwap`]. `set_locale` loads the new
//! catalog off to the side and publishes it with one atomic store, so a
//! reader sees either the old catalog or the new one, never a mix. Snapshots
//! from [`catalog`](TextManager::catalog) stay valid after a swap.
//!
//! # Failure policy
//!
//! Nothing here returns an error after construction, and construction only
//! fails for invalid configuration. Missing bundles, a missing icon face,
//! unknown icons and unsupported widgets are logged and absorbed.

use std::sync::Arc;

use arc_swap::ArcSwap;
use glyphtext_i18n::{
    CatalogStore, IconGlyphTable, IconSubstitutor, Locale, MessageCatalog, ResolvedText,
};

use crate::applier::{TOOLTIP_SUFFIX, TextApplier};
use crate::capability::{Applied, Widget};
use crate::config::TextManagerConfig;
use crate::error::ConfigError;
use crate::font::{FontHost, IconFont};

type SharedStore = Box<dyn CatalogStore + Send + Sync>;

/// Localized text service for a widget tree.
pub struct TextManager {
    store: SharedStore,
    base_name: String,
    catalog: ArcSwap<MessageCatalog>,
    icons: IconSubstitutor,
    icon_font: Option<IconFont>,
    tooltip_suffix: String,
}

impl std::fmt::Debug for TextManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextManager")
            .field("base_name", &self.base_name)
            .field("locale", &self.locale())
            .field("icons", &self.icons)
            .field("icon_font", &self.icon_font)
            .field("tooltip_suffix", &self.tooltip_suffix)
            .finish_non_exhaustive()
    }
}

impl TextManager {
    /// Load the catalog for `(base_name, locale)` and register the icon face.
    ///
    /// Uses the bundled glyph table. A font host failure is logged and icon
    /// slots are then left unresolved.
    pub fn new<S, H>(base_name: impl Into<String>, locale: Locale, store: S, host: &mut H) -> Self
    where
        S: CatalogStore + Send + Sync + 'static,
        H: FontHost + ?Sized,
    {
        Self::build(
            base_name.into(),
            locale,
            Box::new(store),
            host,
            Arc::new(IconGlyphTable::material_design()),
        )
    }

    /// Build from validated configuration.
    pub fn from_config<S, H>(
        config: &TextManagerConfig,
        store: S,
        host: &mut H,
    ) -> Result<Self, ConfigError>
    where
        S: CatalogStore + Send + Sync + 'static,
        H: FontHost + ?Sized,
    {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }

        let mut manager = Self::build(
            config.base_name.clone(),
            config.parsed_locale()?,
            Box::new(store),
            host,
            Arc::new(config.glyph_table()?),
        );
        manager.icons = manager.icons.with_scale(config.icon_scale);
        manager.tooltip_suffix = config.tooltip_suffix.clone();

        if let Some(font) = &manager.icon_font
            && font.family() != config.icon_font_family
        {
            tracing::warn!(
                expected = %config.icon_font_family,
                registered = font.family(),
                "host registered a different icon family than configured"
            );
        }

        Ok(manager)
    }

    fn build<H: FontHost + ?Sized>(
        base_name: String,
        locale: Locale,
        store: SharedStore,
        host: &mut H,
        table: Arc<IconGlyphTable>,
    ) -> Self {
        let catalog = MessageCatalog::load(&store, base_name.as_str(), locale);

        let (icons, icon_font) = match host.register_icon_font() {
            Ok(font) => {
                tracing::debug!(family = font.family(), "icon font registered");
                (IconSubstitutor::new(table), Some(font))
            }
            Err(err) => {
                tracing::error!(error = %err, "problem loading the icon font; icons disabled");
                (IconSubstitutor::disabled(table), None)
            }
        };

        Self {
            store,
            base_name,
            catalog: ArcSwap::from_pointee(catalog),
            icons,
            icon_font,
            tooltip_suffix: TOOLTIP_SUFFIX.to_string(),
        }
    }

    /// Reload the catalog for the recorded base name under `locale`.
    pub fn set_locale(&self, locale: Locale) {
        let catalog = MessageCatalog::load(&self.store, self.base_name.as_str(), locale);
        tracing::debug!(
            base_name = %self.base_name,
            locale = %catalog.locale(),
            "catalog reloaded"
        );
        self.catalog.store(Arc::new(catalog));
    }

    /// Locale of the active catalog.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.catalog.load().locale().clone()
    }

    /// Base identifier used to locate bundles.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Snapshot of the active catalog.
    #[must_use]
    pub fn catalog(&self) -> Arc<MessageCatalog> {
        self.catalog.load_full()
    }

    /// Registered icon face, if the host provided one.
    #[must_use]
    pub fn icon_font(&self) -> Option<&IconFont> {
        self.icon_font.as_ref()
    }

    /// Icon substitutor in use.
    #[must_use]
    pub fn icons(&self) -> &IconSubstitutor {
        &self.icons
    }

    /// Bound (not icon-resolved) text for `key`; `key` itself when unknown.
    #[must_use]
    pub fn get_text<S: AsRef<str>>(&self, key: &str, args: &[S]) -> String {
        let catalog = self.catalog.load();
        self.applier(&catalog).get_text(key, args)
    }

    /// Fully resolved text for `key`.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, key: &str, args: &[S]) -> ResolvedText {
        let catalog = self.catalog.load();
        self.applier(&catalog).resolve(key, args)
    }

    /// Resolve `key` and apply text, tooltip and icon font to `widget`.
    pub fn set_text<S: AsRef<str>>(&self, widget: &mut dyn Widget, key: &str, args: &[S]) -> Applied {
        let catalog = self.catalog.load();
        self.applier(&catalog).apply(widget, key, args)
    }

    fn applier<'a>(&'a self, catalog: &'a MessageCatalog) -> TextApplier<'a> {
        TextApplier::new(catalog, &self.icons)
            .with_icon_font(self.icon_font.as_ref())
            .with_tooltip_suffix(&self.tooltip_suffix)
    }
}
