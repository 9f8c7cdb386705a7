//! Property-based invariant tests for the i18n subsystem.
//!
//! Verifies structural guarantees of the tokenizer, binding, substitution
//! and catalog:
//!
//! 1. Tokenizing and concatenating raw pieces reproduces the input
//! 2. Binding a template with no braces is identity
//! 3. N distinct argument slots with N arguments bind in order
//! 4. Icon slots never consume arguments
//! 5. Missing args leave placeholder tokens intact
//! 6. Catalog: missing key always returns the key itself
//! 7. Substitution with no icon slots is identity
//! 8. Glyph spans are ordered, disjoint, and point at their glyph
//! 9. Locale parsing never panics on arbitrary strings

use std::sync::Arc;

use glyphtext_i18n::catalog::{LocaleStrings, MessageCatalog};
use glyphtext_i18n::icons::{IconGlyphTable, IconSubstitutor};
use glyphtext_i18n::locale::Locale;
use glyphtext_i18n::placeholder::{Token, bind, tokenize, tokenize_icons};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn substitutor() -> IconSubstitutor {
    IconSubstitutor::new(Arc::new(IconGlyphTable::material_design()))
}

fn icon_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["auto-fix", "undo", "redo", "alert", "close-octagon", "nope"])
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Tokenize round-trips
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tokenize_concat_is_identity(text in "[a-z{}:\n ]{0,40}") {
        let rebuilt: String = tokenize(&text).iter().map(Token::raw).collect();
        prop_assert_eq!(&rebuilt, &text);
        let rebuilt: String = tokenize_icons(&text).iter().map(Token::raw).collect();
        prop_assert_eq!(rebuilt, text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. No braces → identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bind_no_placeholders_identity(
        text in "[a-zA-Z0-9 .,!?]*",
        args in prop::collection::vec("[a-z]{0,5}", 0..4),
    ) {
        prop_assert_eq!(bind(&text, &args), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Positional order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn distinct_slots_bind_in_order(values in prop::collection::vec("[A-Z]{1,6}", 1..6)) {
        let template: String = (0..values.len())
            .map(|i| format!("<{{{{slot{i}}}}}>"))
            .collect();
        let expected: String = values.iter().map(|v| format!("<{v}>")).collect();
        prop_assert_eq!(bind(&template, &values), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Icon slots do not consume arguments
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn icon_slots_do_not_consume(icon in icon_name(), value in "[a-z]{1,8}") {
        let template = format!("{{{{icon:{icon}}}}} {{{{x}}}}");
        let bound = bind(&template, &[value.as_str()]);
        prop_assert_eq!(bound, format!("{{{{icon:{icon}}}}} {value}"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Missing args leave tokens intact
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_args_preserve_tokens(name in "[a-z]{1,10}") {
        let template = format!("Value: {{{{{name}}}}}");
        let no_args: [&str; 0] = [];
        prop_assert_eq!(bind(&template, &no_args), template);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Missing key returns key
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn catalog_missing_key_returns_key(key in "[a-z_.]{1,20}") {
        let strings = LocaleStrings::new().with("known.key", "Known");
        let catalog = MessageCatalog::from_strings("app", Locale::ROOT, strings);
        if key != "known.key" {
            prop_assert_eq!(catalog.lookup(&key), key.as_str());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Substitution without icon slots is identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_without_icons_identity(text in "[a-zA-Z0-9 {}]*") {
        prop_assume!(!text.contains("{{icon:"));
        let resolved = substitutor().resolve(&text);
        prop_assert_eq!(resolved.text, text);
        prop_assert!(resolved.spans.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Spans are ordered and accurate
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn spans_ordered_and_accurate(
        parts in prop::collection::vec((icon_name(), "[a-zé ]{0,4}"), 0..6),
    ) {
        let template: String = parts
            .iter()
            .map(|(icon, filler)| format!("{filler}{{{{icon:{icon}}}}}"))
            .collect();
        let resolved = substitutor().resolve(&template);

        let known = parts.iter().filter(|(icon, _)| *icon != "nope").count();
        prop_assert_eq!(resolved.spans.len(), known);
        prop_assert_eq!(resolved.unresolved.len(), parts.len() - known);

        let mut last_end = 0;
        for span in &resolved.spans {
            prop_assert!(span.range.start >= last_end);
            let slice = &resolved.text[span.range.clone()];
            prop_assert_eq!(slice.chars().next(), Some(span.glyph));
            prop_assert_eq!(slice.len(), span.glyph.len_utf8());
            last_end = span.range.end;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Locale parsing never panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn locale_parse_never_panics(tag in "\\PC{0,12}") {
        if let Ok(locale) = Locale::parse(&tag) {
            let chain = locale.candidates();
            prop_assert_eq!(chain.last(), Some(&Locale::ROOT));
        }
    }
}
