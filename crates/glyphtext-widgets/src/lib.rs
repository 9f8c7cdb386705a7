#![forbid(unsafe_code)]

//! Widget-side plumbing for glyphtext.
//!
//! Turns catalog keys into widget state: display text, tooltip, and the
//! icon font override needed when text carries icon glyphs. Widgets are
//! described by the capabilities they expose ([`capability`]) rather than
//! by concrete type.
//!
//! # Role in glyphtext
//! `glyphtext-i18n` produces [`ResolvedText`](glyphtext_i18n::ResolvedText);
//! this crate decides which parts of it a widget can take and applies them.

pub mod applier;
pub mod capability;
pub mod config;
pub mod error;
pub mod font;
pub mod manager;

pub use applier::{TOOLTIP_SUFFIX, TextApplier};
pub use capability::{
    Applied, Capabilities, FontOverridable, TextSettable, TooltipSettable, Widget,
};
pub use config::TextManagerConfig;
pub use error::{ConfigError, FontError};
pub use font::{FontHost, FontSpec, FontStyle, IconFont, MATERIAL_DESIGN_ICONS_FAMILY, StaticFontHost};
pub use manager::TextManager;
