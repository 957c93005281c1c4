//! Typed table model and key classification
//!
//! `TableModel` is the immutable, uppercased form of a `TableConfig`. It
//! answers the classification queries the session state machine needs (is
//! this key a composition key, a selection key, an end key, a member of a
//! key group) and performs candidate lookup with override-table preference.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::warn;

use crate::config::TableConfig;
use crate::error::Result;

/// GTAB flag: convert as soon as the composition is full.
const FLAG_GTAB_PRESS_FULL_AUTO_SEND: u32 = 0x80;
/// GTAB flag: convert as soon as exactly one candidate matches.
const FLAG_GTAB_UNIQUE_AUTO_SEND: u32 = 0x100;

/// Behavior flags resolved from explicit options, `space_style` presets and
/// GTAB flag bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Space is prepended to the selection keys
    pub selection_key_shift: bool,
    /// Space commits the first candidate right after conversion
    pub auto_commit_on_space: bool,
    /// Convert as soon as the composition reaches max length
    pub auto_commit_on_full: bool,
    /// Convert as soon as exactly one candidate matches
    pub auto_commit_on_single_candidate: bool,
}

/// Which lookup table takes precedence when resolving candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Explicit conversion (Space / end key): prefer the override-conversion
    /// table when it has a matching key
    Conversion,
    /// Composition refresh: prefer the override-selection table when it has
    /// a matching key
    Selection,
}

/// An immutable input table, shared read-only across sessions.
#[derive(Debug, Clone)]
pub struct TableModel {
    /// Display name of the table
    name: String,
    /// Uppercased key character to display glyph
    key_names: HashMap<char, String>,
    /// Uppercased composition string to ordered candidates
    entries: HashMap<String, Vec<String>>,
    /// Selection keys in window order, uppercased
    selection_keys: Vec<char>,
    /// Maximum composition length, 0 = unbounded
    max_composition_len: usize,
    /// Keys that force conversion mid-composition
    end_keys: HashSet<char>,
    /// Key to group id, pre-indexed from the group definitions
    group_of: HashMap<char, u32>,
    /// Override table for explicit conversion
    override_conversion: Option<HashMap<String, Vec<String>>>,
    /// Override table for selection-only lookups
    override_selection: Option<HashMap<String, Vec<String>>>,
    options: TableOptions,
}

fn uppercase_keys(table: HashMap<String, Vec<String>>) -> HashMap<String, Vec<String>> {
    table
        .into_iter()
        .map(|(k, v)| (k.to_uppercase(), v))
        .collect()
}

impl TableModel {
    /// Build a model from a parsed table configuration.
    ///
    /// This is the only way table data enters the engine: every field is
    /// consumed explicitly, all keys are uppercased, and the `space_style`
    /// / `flag` compatibility presets are folded into `TableOptions`.
    pub fn from_config(config: TableConfig) -> Self {
        let mut options = TableOptions {
            selection_key_shift: config.selkey_shift,
            auto_commit_on_space: config.space_autoup,
            auto_commit_on_full: config.auto_fullup,
            auto_commit_on_single_candidate: false,
        };

        match config.space_style {
            1 => {
                // Boshiamy
                options.selection_key_shift = true;
                options.auto_commit_on_space = true;
            }
            2 => {
                // Simplex
                options.auto_commit_on_full = true;
            }
            // Windows Array30, Changjie
            4 => {}
            8 => {
                // Dayi
                options.selection_key_shift = true;
            }
            -1 => {}
            other => warn!("unknown space_style: {}", other),
        }

        if config.flag & FLAG_GTAB_PRESS_FULL_AUTO_SEND != 0 {
            options.auto_commit_on_full = true;
        }
        if config.flag & FLAG_GTAB_UNIQUE_AUTO_SEND != 0 {
            // Only seen on greek.cin
            options.auto_commit_on_single_candidate = true;
        }

        let key_names = config
            .keyname
            .iter()
            .filter_map(|(k, glyph)| {
                let c = k.chars().next()?;
                Some((c.to_ascii_uppercase(), glyph.clone()))
            })
            .collect();

        let mut selection_keys: Vec<char> = config
            .selkey
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if options.selection_key_shift {
            selection_keys.insert(0, ' ');
        }

        let end_keys = config
            .endkey
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let mut group_of = HashMap::new();
        for (id, keys) in &config.keygroups {
            let Ok(id) = id.parse::<u32>() else {
                warn!("ignoring key group with non-numeric id: {}", id);
                continue;
            };
            for c in keys.chars() {
                group_of.insert(c.to_ascii_uppercase(), id);
            }
        }

        let name = config
            .cname
            .or(config.ename)
            .unwrap_or_default();

        Self {
            name,
            key_names,
            entries: uppercase_keys(config.chardef),
            selection_keys,
            max_composition_len: config.max_keystroke,
            end_keys,
            group_of,
            override_conversion: config.keystroke_remap.map(uppercase_keys),
            override_selection: config.quick.or(config.quickkey).map(uppercase_keys),
            options,
        }
    }

    /// Build a model straight from TOML table content.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(Self::from_config(TableConfig::from_toml_str(content)?))
    }

    /// Build a model straight from JSON table content.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(Self::from_config(TableConfig::from_json_str(content)?))
    }

    /// Display name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Number of candidates visible at once (the cycling window size).
    pub fn selection_key_count(&self) -> usize {
        self.selection_keys.len()
    }

    /// Maximum composition length, 0 = unbounded.
    pub fn max_composition_len(&self) -> usize {
        self.max_composition_len
    }

    /// True iff the key has a display name, i.e. participates in ordinary
    /// composition.
    pub fn is_composition_key(&self, key: char) -> bool {
        self.key_names.contains_key(&key.to_ascii_uppercase())
    }

    /// True iff `composition + key` is a literal entry key. Some tables
    /// (Array30 among them) reuse selection keys or digits inside specific
    /// compositions without listing them as composition keys.
    pub fn can_extend_composition(&self, composition: &str, key: char) -> bool {
        let mut extended = composition.to_uppercase();
        extended.push(key.to_ascii_uppercase());
        self.entries.contains_key(&extended)
    }

    pub fn is_selection_key(&self, key: char) -> bool {
        self.selection_keys.contains(&key.to_ascii_uppercase())
    }

    /// Position of `key` within the selection keys, i.e. its offset into the
    /// visible candidate window.
    pub fn selection_index(&self, key: char) -> Option<usize> {
        let key = key.to_ascii_uppercase();
        self.selection_keys.iter().position(|&s| s == key)
    }

    pub fn is_end_key(&self, key: char) -> bool {
        self.end_keys.contains(&key.to_ascii_uppercase())
    }

    /// Group id containing `key`, if the table defines key groups.
    pub fn key_group_of(&self, key: char) -> Option<u32> {
        self.group_of.get(&key.to_ascii_uppercase()).copied()
    }

    /// True iff the override-selection table has an entry for `composition`.
    pub fn has_selection_override(&self, composition: &str) -> bool {
        self.override_selection
            .as_ref()
            .is_some_and(|table| table.contains_key(&composition.to_uppercase()))
    }

    /// Look up the candidates for `composition`, honoring the override table
    /// for the given mode when it has a matching key.
    pub fn lookup(&self, composition: &str, mode: LookupMode) -> Option<&[String]> {
        let key = composition.to_uppercase();
        let override_table = match mode {
            LookupMode::Conversion => self.override_conversion.as_ref(),
            LookupMode::Selection => self.override_selection.as_ref(),
        };
        if let Some(table) = override_table
            && let Some(candidates) = table.get(&key)
        {
            return Some(candidates);
        }
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Render a composition for UI echo, substituting each key with its
    /// display glyph (falling back to the raw key).
    pub fn display_composition(&self, composition: &str) -> String {
        composition
            .chars()
            .map(|c| match self.key_names.get(&c.to_ascii_uppercase()) {
                Some(glyph) => glyph.clone(),
                None => c.to_string(),
            })
            .collect()
    }

    /// Normalize a composition key by group ids: one representative key per
    /// group, ordered by ascending group id rather than typing order.
    ///
    /// Returns `None` when any existing composition character is not a
    /// member of any group; the caller then appends in typing order instead.
    pub fn composition_by_groups(
        &self,
        composition: &str,
        new_group: u32,
        key: char,
    ) -> Option<String> {
        let mut key_by_group = BTreeMap::new();
        for c in composition.chars() {
            // Later keys win within a group, so the most recent contribution
            // of each group is kept.
            key_by_group.insert(self.key_group_of(c)?, c);
        }
        key_by_group.insert(new_group, key);
        Some(key_by_group.values().collect())
    }
}
