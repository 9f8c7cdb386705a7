#![no_main]

use std::sync::Arc;

use glyphtext_i18n::{IconGlyphTable, IconSubstitutor, Token, bind, tokenize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 4096 {
        return;
    }

    // Raw pieces must reassemble the input exactly.
    let rebuilt: String = tokenize(text).iter().map(Token::raw).collect();
    assert_eq!(rebuilt, text, "tokenize lost or duplicated input");

    // Binding with no arguments is identity.
    let no_args: [&str; 0] = [];
    assert_eq!(bind(text, &no_args), text);

    // Binding and resolving must never panic.
    let bound = bind(text, &["a", "{{b}}", "{{icon:undo}}"]);
    let resolved = IconSubstitutor::new(Arc::new(IconGlyphTable::material_design())).resolve(&bound);
    for span in &resolved.spans {
        assert!(resolved.text.is_char_boundary(span.range.start));
        assert!(resolved.text.is_char_boundary(span.range.end));
    }
});
