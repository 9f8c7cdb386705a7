//! Template tokenizer and positional argument binding.
//!
//! Templates carry two placeholder grammars sharing one delimiter:
//!
//! - `{{name}}`: an argument slot, bound positionally by [`bind`].
//! - `{{icon:name}}`: an icon slot, left for
//!   [`IconSubstitutor`](crate::icons::IconSubstitutor).
//!
//! # Token grammar
//!
//! A token opens at `{{` and closes at the first `}}` that leaves a
//! non-empty inner text. Inner text never spans a line break (`\n`, `\r`,
//! U+0085, U+2028, U+2029); an opener with no valid close is literal text.
//! Nesting is not supported: `{{a{{b}}` is a single token with inner text
//! `a{{b`.
//!
//! [`tokenize_icons`] applies the same rules to `{{icon:` openers alone.
//! Icon substitution runs on bound text, where argument values may contain
//! stray `{{`, so it must not see argument slots at all.
//!
//! # Binding
//!
//! Argument tokens are visited left to right. Each occurrence consumes one
//! positional argument while arguments remain. Identical token texts share
//! one value: the argument consumed by the first occurrence. A repeated
//! token therefore spends an argument without using it, shifting every
//! later slot by one. This matches the long-standing behavior of existing
//! catalogs and is kept for compatibility.
//!
//! Bound values are inserted verbatim and never re-scanned for argument
//! tokens.

use ahash::AHashMap;

/// Prefix marking an icon slot.
pub const ICON_PREFIX: &str = "icon:";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const ICON_OPEN: &str = "{{icon:";

/// One piece of a tokenized template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text, emitted as-is.
    Literal(&'a str),
    /// `{{name}}` argument slot.
    Arg {
        /// Full token text including braces.
        raw: &'a str,
        /// Inner text.
        name: &'a str,
    },
    /// `{{icon:name}}` icon slot.
    Icon {
        /// Full token text including braces.
        raw: &'a str,
        /// Icon name after the `icon:` prefix. Empty only from [`tokenize`].
        name: &'a str,
    },
}

impl<'a> Token<'a> {
    /// Source text of this token.
    #[must_use]
    pub fn raw(&self) -> &'a str {
        match *self {
            Token::Literal(text) => text,
            Token::Arg { raw, .. } | Token::Icon { raw, .. } => raw,
        }
    }

    /// Whether this token is a placeholder of either kind.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Token::Literal(_))
    }
}

/// Split `text` into literal, argument and icon tokens in one pass.
///
/// Concatenating [`Token::raw`] over the result reproduces `text`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(OPEN) {
        let open = pos + offset;
        let Some(close) = find_close(text, open + OPEN.len()) else {
            // `{` is one byte, so open + 1 stays on a char boundary.
            pos = open + 1;
            continue;
        };

        if literal_start < open {
            tokens.push(Token::Literal(&text[literal_start..open]));
        }

        let raw = &text[open..close + CLOSE.len()];
        let inner = &text[open + OPEN.len()..close];
        tokens.push(match inner.strip_prefix(ICON_PREFIX) {
            Some(name) => Token::Icon { raw, name },
            None => Token::Arg { raw, name: inner },
        });

        pos = close + CLOSE.len();
        literal_start = pos;
    }

    if literal_start < text.len() {
        tokens.push(Token::Literal(&text[literal_start..]));
    }
    tokens
}

/// Split `text` into literal and icon tokens, ignoring argument slots.
///
/// Only `{{icon:` opens a token here, so text that would read as an
/// argument slot (for example a bound value containing `{{`) cannot
/// swallow a following icon slot. The icon name must be non-empty; the
/// first `}}` after it closes the token.
#[must_use]
pub fn tokenize_icons(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(ICON_OPEN) {
        let open = pos + offset;
        let name_start = open + ICON_OPEN.len();
        let Some(close) = find_close(text, name_start) else {
            pos = open + 1;
            continue;
        };

        if literal_start < open {
            tokens.push(Token::Literal(&text[literal_start..open]));
        }
        tokens.push(Token::Icon {
            raw: &text[open..close + CLOSE.len()],
            name: &text[name_start..close],
        });

        pos = close + CLOSE.len();
        literal_start = pos;
    }

    if literal_start < text.len() {
        tokens.push(Token::Literal(&text[literal_start..]));
    }
    tokens
}

/// Byte index of the `}}` closing a token whose inner text starts at
/// `inner_start`. The inner text must be non-empty.
fn find_close(text: &str, inner_start: usize) -> Option<usize> {
    let first = text[inner_start..].chars().next()?;
    if is_line_break(first) {
        return None;
    }

    let search_from = inner_start + first.len_utf8();
    let close = search_from + text[search_from..].find(CLOSE)?;
    if text[inner_start..close].contains(is_line_break) {
        return None;
    }
    Some(close)
}

/// Characters an inner text may not contain.
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Bind positional `args` into the argument slots of `template`.
///
/// Icon slots are copied through untouched and consume no argument.
/// Slots left over once arguments run out stay in the output as written.
///
/// ```
/// use glyphtext_i18n::placeholder::bind;
///
/// assert_eq!(bind("Fix {{count}} errors", &["3"]), "Fix 3 errors");
/// assert_eq!(
///     bind("{{icon:undo}} Undo {{n}} steps", &["2"]),
///     "{{icon:undo}} Undo 2 steps"
/// );
/// assert_eq!(bind("{{a}} and {{b}}", &["x"]), "x and {{b}}");
/// ```
#[must_use]
pub fn bind<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let tokens = tokenize(template);
    let mut bound: AHashMap<&str, &str> = AHashMap::new();
    let mut cursor = 0;

    for token in &tokens {
        if let Token::Arg { raw, .. } = *token
            && cursor < args.len()
        {
            bound.entry(raw).or_insert(args[cursor].as_ref());
            cursor += 1;
        }
    }

    if cursor < args.len() {
        tracing::debug!(
            supplied = args.len(),
            consumed = cursor,
            "template has fewer argument slots than supplied arguments"
        );
    }

    let mut out = String::with_capacity(template.len());
    for token in &tokens {
        match *token {
            Token::Arg { raw, .. } => out.push_str(bound.get(raw).copied().unwrap_or(raw)),
            other => out.push_str(other.raw()),
        }
    }
    out
}
