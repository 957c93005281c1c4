//! Tests for the session state machine

use std::sync::Arc;

use cintab_table::TableModel;

use super::*;
use crate::core::keycode::{Key, KeyEvent, KeyModifiers};

mod composing;

/// A small phonetic-style table: four selection keys, an end key that is
/// not itself a composition key, and entries of varying candidate counts.
fn phonetic_table() -> Arc<TableModel> {
    Arc::new(
        TableModel::from_toml_str(
            r#"
            cname = "測試"
            selkey = "asdf"
            endkey = "3"

            [keyname]
            n = "ㄋ"
            i = "ㄧ"
            e = "ㄜ"

            [chardef]
            NI = ["你", "尼", "妮", "擬"]
            NI3 = ["你"]
            NII = ["倪", "妳"]
            NE = ["呢", "訥", "內", "餒", "嫩", "能"]
            E = ["之"]
            "#,
        )
        .unwrap(),
    )
}

fn engine() -> InputEngine {
    InputEngine::new(phonetic_table())
}

fn press(ch: char) -> KeyEvent {
    KeyEvent::press_char(ch)
}

fn press_key(key: Key) -> KeyEvent {
    KeyEvent::press(key)
}

fn press_shift(ch: char) -> KeyEvent {
    KeyEvent::new(Key::Char(ch), KeyModifiers::new().with_shift(true), true)
}

fn release(ch: char) -> KeyEvent {
    KeyEvent::new(Key::Char(ch), KeyModifiers::default(), false)
}

/// Type a sequence of plain character keys.
fn type_keys(engine: &mut InputEngine, keys: &str) {
    for ch in keys.chars() {
        engine.process_key(&press(ch));
    }
}
