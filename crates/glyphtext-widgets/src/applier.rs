//! Resolve catalog text and apply it to a widget.
//!
//! Per call:
//! 1. `lookup → bind → resolve` produces the display text.
//! 2. `<key><suffix>` goes through `lookup → bind` for the tooltip; a
//!    missing or empty tooltip is dropped.
//! 3. Each supported capability receives its part.
//!
//! # Font override
//!
//! When the display text contains glyphs, the whole widget switches to the
//! icon face at `scale × current size`. Rendering surfaces here take one
//! font per string, so glyph spans cannot be styled individually and the
//! surrounding text renders in the icon face too.

use glyphtext_i18n::{IconSubstitutor, MessageCatalog, ResolvedText, bind};

use crate::capability::{Applied, Widget};
use crate::font::IconFont;

/// Default suffix appended to a key to find its tooltip.
pub const TOOLTIP_SUFFIX: &str = "_tooltip";

/// Borrowing view over the pieces needed to resolve and apply text.
#[derive(Debug, Clone, Copy)]
pub struct TextApplier<'a> {
    catalog: &'a MessageCatalog,
    icons: &'a IconSubstitutor,
    icon_font: Option<&'a IconFont>,
    tooltip_suffix: &'a str,
}

impl<'a> TextApplier<'a> {
    #[must_use]
    pub fn new(catalog: &'a MessageCatalog, icons: &'a IconSubstitutor) -> Self {
        Self {
            catalog,
            icons,
            icon_font: None,
            tooltip_suffix: TOOLTIP_SUFFIX,
        }
    }

    /// Face used for font override. Without one, glyph text is still set but
    /// the widget font is left alone.
    #[must_use]
    pub fn with_icon_font(mut self, icon_font: Option<&'a IconFont>) -> Self {
        self.icon_font = icon_font;
        self
    }

    #[must_use]
    pub fn with_tooltip_suffix(mut self, suffix: &'a str) -> Self {
        self.tooltip_suffix = suffix;
        self
    }

    /// Bound template for `key`, or `key` itself when the catalog lacks it.
    #[must_use]
    pub fn get_text<S: AsRef<str>>(&self, key: &str, args: &[S]) -> String {
        match self.catalog.get(key) {
            Some(template) => bind(template, args),
            None => key.to_string(),
        }
    }

    /// Display text with icon slots resolved.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, key: &str, args: &[S]) -> ResolvedText {
        self.icons.resolve(&self.get_text(key, args))
    }

    /// Tooltip for `key`, if the catalog has a non-empty one.
    #[must_use]
    pub fn tooltip<S: AsRef<str>>(&self, key: &str, args: &[S]) -> Option<String> {
        let tooltip_key = format!("{key}{}", self.tooltip_suffix);
        let tooltip = self.get_text(&tooltip_key, args);
        (!tooltip.is_empty() && tooltip != tooltip_key).then_some(tooltip)
    }

    /// Resolve `key` and apply it to every capability `widget` supports.
    ///
    /// A widget with no capabilities is logged and left untouched.
    pub fn apply<S: AsRef<str>>(&self, widget: &mut dyn Widget, key: &str, args: &[S]) -> Applied {
        if widget.capabilities().is_empty() {
            tracing::warn!(
                widget = widget.type_name(),
                key,
                "widget type is not supported; text not applied"
            );
            return Applied::empty();
        }

        let resolved = self.resolve(key, args);
        let mut applied = Applied::empty();

        if let Some(target) = widget.as_text() {
            target.set_text(&resolved.text);
            applied |= Applied::TEXT;
        }

        if let Some(tooltip) = self.tooltip(key, args)
            && let Some(target) = widget.as_tooltip()
        {
            target.set_tooltip(&tooltip);
            applied |= Applied::TOOLTIP;
        }

        if resolved.has_glyphs()
            && let Some(target) = widget.as_font()
        {
            match self.icon_font {
                Some(icon_font) => {
                    let base = target.font();
                    target.set_font(icon_font.derive_for(&base, self.icons.scale()));
                    applied |= Applied::FONT;
                }
                None => {
                    tracing::debug!(key, "no icon font registered; widget font unchanged");
                }
            }
        }

        applied
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glyphtext_i18n::{IconGlyphTable, Locale, LocaleStrings};

    use super::*;
    use crate::capability::{FontOverridable, TextSettable, TooltipSettable};
    use crate::font::{FontSpec, FontStyle};

    const NO_ARGS: &[&str] = &[];

    #[derive(Debug)]
    struct Button {
        text: Option<String>,
        tooltip: Option<String>,
        font: FontSpec,
    }

    impl Default for Button {
        fn default() -> Self {
            Self {
                text: None,
                tooltip: None,
                font: FontSpec::new("Sans", FontStyle::Plain, 12.0),
            }
        }
    }

    impl TextSettable for Button {
        fn set_text(&mut self, text: &str) {
            self.text = Some(text.to_string());
        }
    }

    impl TooltipSettable for Button {
        fn set_tooltip(&mut self, tooltip: &str) {
            self.tooltip = Some(tooltip.to_string());
        }
    }

    impl FontOverridable for Button {
        fn font(&self) -> FontSpec {
            self.font.clone()
        }

        fn set_font(&mut self, font: FontSpec) {
            self.font = font;
        }
    }

    impl Widget for Button {
        fn as_text(&mut self) -> Option<&mut dyn TextSettable> {
            Some(self)
        }

        fn as_tooltip(&mut self) -> Option<&mut dyn TooltipSettable> {
            Some(self)
        }

        fn as_font(&mut self) -> Option<&mut dyn FontOverridable> {
            Some(self)
        }
    }

    fn catalog() -> MessageCatalog {
        let strings = LocaleStrings::new()
            .with("fix", "Fix {{count}} errors")
            .with("fix_tooltip", "Repairs {{count}} problems")
            .with("undo", "{{icon:undo}} Undo")
            .with("blank", "Blank")
            .with("blank_tooltip", "");
        MessageCatalog::from_strings("app", Locale::ROOT, strings)
    }

    fn icons() -> IconSubstitutor {
        IconSubstitutor::new(Arc::new(IconGlyphTable::material_design()))
    }

    #[test]
    fn get_text_binds_and_falls_back() {
        let (catalog, icons) = (catalog(), icons());
        let applier = TextApplier::new(&catalog, &icons);
        assert_eq!(applier.get_text("fix", &["3"]), "Fix 3 errors");
        assert_eq!(applier.get_text("missing {{x}}", &["3"]), "missing {{x}}");
    }

    #[test]
    fn tooltip_absent_or_empty_is_none() {
        let (catalog, icons) = (catalog(), icons());
        let applier = TextApplier::new(&catalog, &icons);
        assert_eq!(applier.tooltip("fix", &["2"]).as_deref(), Some("Repairs 2 problems"));
        assert_eq!(applier.tooltip("undo", NO_ARGS), None);
        assert_eq!(applier.tooltip("blank", NO_ARGS), None);
    }

    #[test]
    fn custom_tooltip_suffix() {
        let strings = LocaleStrings::new().with("go", "Go").with("go.hint", "Start");
        let catalog = MessageCatalog::from_strings("app", Locale::ROOT, strings);
        let icons = icons();
        let applier = TextApplier::new(&catalog, &icons).with_tooltip_suffix(".hint");
        assert_eq!(applier.tooltip("go", NO_ARGS).as_deref(), Some("Start"));
    }

    #[test]
    fn apply_sets_text_and_tooltip() {
        let (catalog, icons) = (catalog(), icons());
        let mut button = Button::default();
        let applied = TextApplier::new(&catalog, &icons).apply(&mut button, "fix", &["3"]);

        assert_eq!(applied, Applied::TEXT | Applied::TOOLTIP);
        assert_eq!(button.text.as_deref(), Some("Fix 3 errors"));
        assert_eq!(button.tooltip.as_deref(), Some("Repairs 3 problems"));
        assert_eq!(button.font.family, "Sans");
    }

    #[test]
    fn apply_overrides_font_once_for_glyphs() {
        let (catalog, icons) = (catalog(), icons());
        let face = IconFont::new("Icons");
        let mut button = Button::default();
        let applied = TextApplier::new(&catalog, &icons)
            .with_icon_font(Some(&face))
            .apply(&mut button, "undo", NO_ARGS);

        assert_eq!(applied, Applied::TEXT | Applied::FONT);
        assert_eq!(button.font.family, "Icons");
        assert!((button.font.size - 18.0).abs() < f32::EPSILON);
        assert_eq!(button.tooltip, None);
    }

    #[test]
    fn apply_without_icon_font_keeps_widget_font() {
        let (catalog, icons) = (catalog(), icons());
        let mut button = Button::default();
        let applied = TextApplier::new(&catalog, &icons).apply(&mut button, "undo", NO_ARGS);

        assert_eq!(applied, Applied::TEXT);
        assert_eq!(button.font, FontSpec::new("Sans", FontStyle::Plain, 12.0));
    }
}
