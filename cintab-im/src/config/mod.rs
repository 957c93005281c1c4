//! Configuration for the input method

pub mod settings;

pub use settings::{BehaviorSettings, Settings};
