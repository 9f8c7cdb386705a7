#![forbid(unsafe_code)]

//! glyphtext public facade crate.
//!
//! Localized, icon-aware text for widget trees. This crate re-exports the
//! stable surface of the internal crates and offers a prelude for day-to-day
//! usage.
//!
//! ```
//! use glyphtext::prelude::*;
//!
//! let store = MemoryStore::new().with_bundle(
//!     "gui",
//!     Locale::ROOT,
//!     LocaleStrings::new().with("fix", "Fix {{count}} errors"),
//! );
//! let manager = TextManager::new("gui", Locale::ROOT, store, &mut StaticFontHost::unavailable());
//! assert_eq!(manager.get_text("fix", &["3"]), "Fix 3 errors");
//! assert_eq!(manager.get_text("quit", &["3"]), "quit");
//! ```

// --- i18n re-exports -------------------------------------------------------

pub use glyphtext_i18n::{
    CatalogStore, GlyphSpan, I18nError, ICON_SCALE, IconGlyphTable, IconSubstitutor, Locale,
    LocaleStrings, MemoryStore, MessageCatalog, ResolvedText, Token, bind, tokenize,
    tokenize_icons,
};

// --- Widget re-exports -----------------------------------------------------

pub use glyphtext_widgets::{
    Applied, Capabilities, ConfigError, FontError, FontHost, FontOverridable, FontSpec, FontStyle,
    IconFont, StaticFontHost, TOOLTIP_SUFFIX, TextApplier, TextManager, TextManagerConfig,
    TextSettable, TooltipSettable, Widget,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Applied, FontHost, FontOverridable, FontSpec, Locale, LocaleStrings, MemoryStore,
        StaticFontHost, TextManager, TextSettable, TooltipSettable, Widget,
    };

    pub use crate::{i18n, widgets};
}

pub use glyphtext_i18n as i18n;
pub use glyphtext_widgets as widgets;
