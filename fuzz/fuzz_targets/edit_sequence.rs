#![no_main]

use folio::Session;
use folio::doctree::{DocIndex, validate};
use folio::input_core::Key;
use libfuzzer_sys::fuzz_target;

const NAMED: &[&str] = &[
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "ArrowDown",
    "Backspace",
    "Delete",
    "Enter",
    "Tab",
];

fn key_for(byte: u8) -> Key {
    match byte {
        0..=0x1f => Key::from_name(NAMED[usize::from(byte) % NAMED.len()]),
        0x20..=0x7e => Key::Char(char::from(byte)),
        0x7f => Key::Char('€'),
        _ => Key::from_name(NAMED[usize::from(byte & 0x07)]),
    }
}

fuzz_target!(|data: &[u8]| {
    let mut session = Session::with_sample();
    for (step, &byte) in data.iter().take(4096).enumerate() {
        session.handle_key(&key_for(byte));
        if step % 257 == 256 {
            session.render();
        }

        let doc = session.document();
        assert!(validate(doc.root()).is_empty());
        let index = DocIndex::build(doc.root());
        let cursor = session.cursor();
        assert!(index.is_leaf_like(cursor.leaf));
        assert!(cursor.offset <= index.char_len(cursor.leaf).unwrap_or(0));
        assert!(session.caret().x >= 0.0);
    }
});
