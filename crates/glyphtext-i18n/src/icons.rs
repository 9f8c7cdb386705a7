//! Icon glyph table and `{{icon:name}}` substitution.
//!
//! [`IconGlyphTable`] maps icon names to code points in the bundled icon
//! font. [`IconSubstitutor`] replaces icon slots with those glyphs and
//! reports where each glyph landed so the caller can render it in the icon
//! face at an enlarged size.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Unknown icon name | Logged at `error`, slot left as written, rest of string processed |
//! | No icon font | Substitutor is [`disabled`](IconSubstitutor::disabled); every slot left as written |

use std::ops::Range;
use std::sync::Arc;

use ahash::AHashMap;

use crate::error::{I18nError, Result};
use crate::placeholder::{Token, tokenize_icons};

/// Render scale of icon glyphs relative to the widget's base font size.
pub const ICON_SCALE: f32 = 1.5;

/// Icons shipped with the bundled Material Design Icons face.
const MATERIAL_DESIGN_ICONS: &[(&str, u32)] = &[
    ("auto-fix", 0xF0068),
    ("undo", 0xF054C),
    ("redo", 0xF044E),
    ("alert", 0xF0026),
    ("close-octagon", 0xF015C),
];

/// Immutable icon name → glyph mapping.
#[derive(Debug, Clone, Default)]
pub struct IconGlyphTable {
    glyphs: AHashMap<String, char>,
}

impl IconGlyphTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled Material Design Icons set.
    #[must_use]
    pub fn material_design() -> Self {
        let glyphs = MATERIAL_DESIGN_ICONS
            .iter()
            .filter_map(|&(name, cp)| char::from_u32(cp).map(|glyph| (name.to_string(), glyph)))
            .collect();
        Self { glyphs }
    }

    /// Add or replace an icon.
    ///
    /// Fails when `code_point` is not a Unicode scalar value.
    pub fn with_icon(mut self, name: impl Into<String>, code_point: u32) -> Result<Self> {
        let name = name.into();
        let glyph = char::from_u32(code_point)
            .ok_or_else(|| I18nError::InvalidCodePoint {
                name: name.clone(),
                code_point,
            })?;
        self.glyphs.insert(name, glyph);
        Ok(self)
    }

    /// Glyph for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<char> {
        self.glyphs.get(name).copied()
    }

    /// Number of icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the table has no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Icon names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.glyphs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// A substituted glyph inside [`ResolvedText::text`].
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSpan {
    /// Byte range of the glyph in the resolved text.
    pub range: Range<usize>,
    /// The substituted glyph.
    pub glyph: char,
    /// Icon name the glyph came from.
    pub name: String,
    /// Requested size relative to the base font.
    pub scale: f32,
}

/// Fully resolved display text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedText {
    /// Final string.
    pub text: String,
    /// Glyph spans, left to right.
    pub spans: Vec<GlyphSpan>,
    /// Icon names that were not in the table, left to right.
    pub unresolved: Vec<String>,
}

impl ResolvedText {
    /// Plain text with no glyphs.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Whether any span needs the icon face.
    #[must_use]
    pub fn has_glyphs(&self) -> bool {
        !self.spans.is_empty()
    }
}

/// Replaces `{{icon:name}}` slots with glyphs from an [`IconGlyphTable`].
#[derive(Debug, Clone)]
pub struct IconSubstitutor {
    table: Arc<IconGlyphTable>,
    scale: f32,
    enabled: bool,
}

impl IconSubstitutor {
    /// Substitute from `table` at [`ICON_SCALE`].
    #[must_use]
    pub fn new(table: Arc<IconGlyphTable>) -> Self {
        Self {
            table,
            scale: ICON_SCALE,
            enabled: true,
        }
    }

    /// A substitutor for when no icon face could be registered.
    ///
    /// Icon slots pass through unchanged and no spans are reported.
    #[must_use]
    pub fn disabled(table: Arc<IconGlyphTable>) -> Self {
        Self {
            enabled: false,
            ..Self::new(table)
        }
    }

    /// Override the glyph render scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Glyph render scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether glyphs are substituted at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The shared glyph table.
    #[must_use]
    pub fn table(&self) -> &Arc<IconGlyphTable> {
        &self.table
    }

    /// Resolve every icon slot in `text`.
    ///
    /// Argument slots that survived binding are copied through untouched.
    #[must_use]
    pub fn resolve(&self, text: &str) -> ResolvedText {
        if !self.enabled {
            return ResolvedText::plain(text);
        }

        let mut resolved = ResolvedText {
            text: String::with_capacity(text.len()),
            ..ResolvedText::default()
        };

        for token in tokenize_icons(text) {
            let Token::Icon { raw, name } = token else {
                resolved.text.push_str(token.raw());
                continue;
            };

            match self.table.get(name) {
                Some(glyph) => {
                    let start = resolved.text.len();
                    resolved.text.push(glyph);
                    resolved.spans.push(GlyphSpan {
                        range: start..resolved.text.len(),
                        glyph,
                        name: name.to_string(),
                        scale: self.scale,
                    });
                }
                None => {
                    tracing::error!(icon = name, "unknown icon; leaving placeholder in place");
                    resolved.text.push_str(raw);
                    resolved.unresolved.push(name.to_string());
                }
            }
        }

        resolved
    }
}
