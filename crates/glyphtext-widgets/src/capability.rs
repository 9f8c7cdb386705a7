//! Widget capability interfaces.
//!
//! Widgets are not classified by concrete type. An adapter implements
//! [`Widget`] and hands out a view for each capability it supports:
//!
//! | Capability | Trait | Used for |
//! |------------|-------|----------|
//! | text | [`TextSettable`] | resolved display text |
//! | tooltip | [`TooltipSettable`] | `<key>_tooltip` text |
//! | font | [`FontOverridable`] | icon face at enlarged size |
//!
//! New widget kinds plug in by implementing these traits; the applier never
//! changes.

use bitflags::bitflags;

use crate::font::FontSpec;

/// A widget that displays a text string.
pub trait TextSettable {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

/// A widget that shows a tooltip.
pub trait TooltipSettable {
    /// Replace the tooltip text.
    fn set_tooltip(&mut self, tooltip: &str);
}

/// A widget whose font can be replaced.
pub trait FontOverridable {
    /// Current font.
    fn font(&self) -> FontSpec;
    /// Replace the font.
    fn set_font(&mut self, font: FontSpec);
}

bitflags! {
    /// Capability set of a widget.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Supports [`TextSettable`].
        const TEXT = 0b001;
        /// Supports [`TooltipSettable`].
        const TOOLTIP = 0b010;
        /// Supports [`FontOverridable`].
        const FONT = 0b100;
    }
}

bitflags! {
    /// What a single apply call changed on a widget.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Applied: u8 {
        /// Text was set.
        const TEXT = 0b001;
        /// Tooltip was set.
        const TOOLTIP = 0b010;
        /// Font was overridden.
        const FONT = 0b100;
    }
}

/// Target of text application.
///
/// Every capability view defaults to `None`; implement the ones the widget
/// supports.
pub trait Widget {
    /// Name used in diagnostics.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Text capability.
    fn as_text(&mut self) -> Option<&mut dyn TextSettable> {
        None
    }

    /// Tooltip capability.
    fn as_tooltip(&mut self) -> Option<&mut dyn TooltipSettable> {
        None
    }

    /// Font override capability.
    fn as_font(&mut self) -> Option<&mut dyn FontOverridable> {
        None
    }

    /// Summary of the supported capabilities.
    fn capabilities(&mut self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::TEXT, self.as_text().is_some());
        caps.set(Capabilities::TOOLTIP, self.as_tooltip().is_some());
        caps.set(Capabilities::FONT, self.as_font().is_some());
        caps
    }
}
