//! cintab-im: the decision core of a CIN table based input method
//!
//! Given an immutable [`cintab_table::TableModel`] and a stream of key
//! events, [`InputEngine`] builds a composition, resolves and cycles
//! candidates, and returns a [`Verdict`] per keystroke. Rendering, table
//! file parsing and host-framework wiring live outside this crate.

pub mod config;
pub mod core;

pub use core::engine::{EngineError, ErrorNotifier, InputEngine, Verdict};
pub use core::keycode::{Key, KeyEvent, KeyModifiers};
pub use core::session::{SessionContext, SessionState};
