//! Parsed table configuration
//!
//! `TableConfig` is the normalized output of an external CIN table parser.
//! This crate never reads raw `.cin` files; hosts hand the parsed structure
//! over as TOML or JSON (or build it directly) and `TableModel::from_config`
//! turns it into the typed, uppercased model the engine works with.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::Result;

/// A parsed CIN table, field for field.
///
/// Field names follow the CIN/GCIN conventions; the uppercase directive
/// spellings found in table headers are accepted as aliases.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Chinese display name of the table
    pub cname: Option<String>,
    /// English display name of the table
    pub ename: Option<String>,
    /// Key character to display glyph (e.g. "N" -> "ㄋ")
    pub keyname: HashMap<String, String>,
    /// Composition string to ordered candidate strings
    pub chardef: HashMap<String, Vec<String>>,
    /// Selection keys, in window order
    pub selkey: String,
    /// Maximum composition length, 0 = unbounded
    pub max_keystroke: usize,
    /// Keys that force conversion mid-composition
    pub endkey: String,
    /// Group id to member keys, for position-independent layouts
    #[serde(alias = "KEYGROUPS")]
    pub keygroups: HashMap<String, String>,
    /// Override table consulted when converting explicitly
    #[serde(alias = "KEYSTROKE_REMAP")]
    pub keystroke_remap: Option<HashMap<String, Vec<String>>>,
    /// Override table for selection-only lookups (GCIN `%quick`)
    pub quick: Option<HashMap<String, Vec<String>>>,
    /// Override table for selection-only lookups (XCIN 2.3 `%quickkey`,
    /// deprecated in XCIN 2.5; `quick` wins when both are present)
    pub quickkey: Option<HashMap<String, Vec<String>>>,
    /// Prepend Space to the selection keys
    #[serde(alias = "SELKEY_SHIFT")]
    pub selkey_shift: bool,
    /// Space commits the first candidate right after conversion
    #[serde(alias = "SPACE_AUTOUP")]
    pub space_autoup: bool,
    /// Convert as soon as the composition reaches max length
    #[serde(alias = "AUTO_FULLUP")]
    pub auto_fullup: bool,
    /// GCIN space_style preset, -1 = unset
    pub space_style: i32,
    /// GTAB flag bits
    pub flag: u32,
}

impl TableConfig {
    /// Parse a table configuration from TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a table configuration from JSON content.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            cname: None,
            ename: None,
            keyname: HashMap::new(),
            chardef: HashMap::new(),
            selkey: String::new(),
            max_keystroke: 0,
            endkey: String::new(),
            keygroups: HashMap::new(),
            keystroke_remap: None,
            quick: None,
            quickkey: None,
            selkey_shift: false,
            space_autoup: false,
            auto_fullup: false,
            // -1 marks "no preset", matching the GCIN convention
            space_style: -1,
            flag: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_toml() {
        let config = TableConfig::from_toml_str(
            r#"
            ename = "Quick"
            selkey = "asdf"
            max_keystroke = 2

            [keyname]
            n = "ㄋ"
            i = "ㄧ"

            [chardef]
            NI = ["你", "尼"]
            "#,
        )
        .unwrap();

        assert_eq!(config.ename.as_deref(), Some("Quick"));
        assert_eq!(config.selkey, "asdf");
        assert_eq!(config.max_keystroke, 2);
        assert_eq!(config.chardef["NI"], vec!["你", "尼"]);
    }

    #[test]
    fn test_config_from_json_with_aliases() {
        let config = TableConfig::from_json_str(
            r#"{
                "selkey": "1234567890",
                "SELKEY_SHIFT": true,
                "KEYSTROKE_REMAP": { "A": ["啊"] }
            }"#,
        )
        .unwrap();

        assert!(config.selkey_shift);
        assert_eq!(config.keystroke_remap.unwrap()["A"], vec!["啊"]);
    }

    #[test]
    fn test_config_defaults() {
        let config = TableConfig::from_toml_str("").unwrap();
        assert_eq!(config.max_keystroke, 0);
        assert_eq!(config.flag, 0);
        assert_eq!(config.space_style, -1);
        assert!(config.keyname.is_empty());
        assert!(config.quick.is_none());
    }

    #[test]
    fn test_config_invalid_toml() {
        assert!(TableConfig::from_toml_str("selkey = [").is_err());
    }
}
