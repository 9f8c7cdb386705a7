#![no_main]

use std::sync::Arc;

use arbitrary::Arbitrary;
use glyphtext_i18n::{IconGlyphTable, IconSubstitutor, bind};
use libfuzzer_sys::fuzz_target;

const ICONS: [&str; 6] = ["auto-fix", "undo", "redo", "alert", "close-octagon", "missing"];

#[derive(Debug, Arbitrary)]
enum Piece {
    Text(String),
    Arg(u8),
    Icon(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    pieces: Vec<Piece>,
    args: Vec<String>,
}

fuzz_target!(|input: Input| {
    if input.pieces.len() > 64 || input.args.len() > 16 {
        return;
    }

    let mut template = String::new();
    for piece in &input.pieces {
        match piece {
            Piece::Text(t) => template.push_str(&t.replace(['{', '}'], "")),
            Piece::Arg(n) => template.push_str(&format!("{{{{a{n}}}}}")),
            Piece::Icon(n) => {
                let name = ICONS[usize::from(*n) % ICONS.len()];
                template.push_str(&format!("{{{{icon:{name}}}}}"));
            }
        }
    }

    let bound = bind(&template, &input.args);
    let resolved = IconSubstitutor::new(Arc::new(IconGlyphTable::material_design())).resolve(&bound);

    let icon_slots = input
        .pieces
        .iter()
        .filter(|p| matches!(p, Piece::Icon(_)))
        .count();
    // Argument values may add icon slots or swallow one template slot into
    // a longer unknown name, but never hide a template slot outright.
    assert!(resolved.spans.len() + resolved.unresolved.len() >= icon_slots);

    let mut last_end = 0;
    for span in &resolved.spans {
        assert!(span.range.start >= last_end, "spans out of order");
        let slice = &resolved.text[span.range.clone()];
        assert_eq!(slice.chars().collect::<Vec<_>>(), vec![span.glyph]);
        last_end = span.range.end;
    }
});
