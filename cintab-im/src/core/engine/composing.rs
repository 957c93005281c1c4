//! Composing-state key handling

use super::*;
use crate::core::keycode::Key;

impl InputEngine {
    /// Process a key while building the composition.
    pub(super) fn process_key_composing(&mut self, event: &KeyEvent) -> Verdict {
        match event.key {
            Key::Backspace => {
                if self.delete_last() {
                    Verdict::Processed
                } else {
                    Verdict::Ignored
                }
            }

            Key::Escape => {
                if self.ctx.is_composition_empty() {
                    Verdict::Ignored
                } else {
                    self.ctx.reset();
                    Verdict::Processed
                }
            }

            Key::Char(' ') => self.convert_composition(),

            Key::Char(key) => {
                // A single key may be an end key, a selection key and a
                // composition key at once; Array30-style tables use all
                // three meanings of [0-9] depending on context. A
                // shift-modified key skips straight to selection handling
                // (when the legacy behavior is enabled).
                let bypass = event.modifiers.shift_key && self.settings.behavior.shift_selects;
                if !bypass && let Some(verdict) = self.compose_with(key) {
                    return verdict;
                }

                if self.table.is_selection_key(key) && !self.ctx.candidates.is_empty() {
                    return self.select_and_commit(key);
                }
                Verdict::Ignored
            }

            _ => Verdict::Ignored,
        }
    }

    /// Try to treat `key` as composition input. Returns `None` when the key
    /// should fall through to selection handling.
    fn compose_with(&mut self, key: char) -> Option<Verdict> {
        // An end key that completes a literal entry converts immediately.
        if self.table.is_end_key(key) && self.table.can_extend_composition(&self.ctx.composition, key)
        {
            self.append_key(key);
            return Some(self.convert_composition());
        }

        // A selection key with an override-selection match picks from the
        // already-resolved quick candidates instead of composing.
        if self.table.is_selection_key(key)
            && self.table.has_selection_override(&self.ctx.composition)
        {
            return None;
        }

        // For Array30/XCIN25, W[0-9] entries exist while [0-9] are not
        // composition keys, hence the can_extend_composition arm.
        if self.table.is_composition_key(key)
            || self.table.can_extend_composition(&self.ctx.composition, key)
        {
            if !self.append_key(key) {
                return Some(self.fail(EngineError::CompositionFull {
                    max: self.table.max_composition_len(),
                }));
            }
            if self.table.options().auto_commit_on_full && self.is_full_composition() {
                return Some(self.convert_composition());
            }
            if self.table.options().auto_commit_on_single_candidate
                && self.ctx.candidates.len() == 1
            {
                return Some(self.convert_composition());
            }
            // The key only extended a literal entry; nothing further can be
            // composed with it, so convert now.
            if !self.table.is_composition_key(key) {
                return Some(self.convert_composition());
            }
            return Some(Verdict::Processed);
        }

        None
    }
}
