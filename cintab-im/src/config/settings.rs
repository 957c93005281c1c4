//! Settings configuration
//!
//! User-configurable behavior knobs for the engine. Default values are
//! defined in `config/default.toml`; hosts hand user TOML content over as a
//! string (this crate performs no file I/O).

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Legacy key-handling behavior
    pub behavior: BehaviorSettings,
}

/// Key-handling conventions inherited from Array30/Boshiamy-era layouts.
/// They are on by default but are engine settings rather than table data,
/// so hosts can switch them off per input method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorSettings {
    /// Shift+, and Shift+. cycle the candidate window while selecting
    #[serde(default)]
    pub shift_cycle_keys: bool,
    /// A shift-modified key always acts as a selection key while composing,
    /// even when it doubles as a composition or end key
    #[serde(default)]
    pub shift_selects: bool,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

impl Settings {
    /// Parse user TOML content merged on top of default.toml.
    pub fn from_toml_str(user_content: &str) -> Result<Self> {
        let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
        let user: toml::Value = toml::from_str(user_content)?;
        merge_toml(&mut base, &user);
        let settings: Settings = base.try_into()?;
        Ok(settings)
    }
}
