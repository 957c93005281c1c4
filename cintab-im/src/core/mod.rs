//! Core input method functionality
//!
//! This module contains the session state machine and keystroke processing.

pub mod candidate;
pub mod engine;
pub mod keycode;
pub mod session;
