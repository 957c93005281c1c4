//! Composition buffer operations (append, delete, refresh)

use cintab_table::LookupMode;
use tracing::trace;

use super::*;

impl InputEngine {
    /// True iff the composition has reached the table's length bound.
    pub(super) fn is_full_composition(&self) -> bool {
        let max = self.table.max_composition_len();
        max > 0 && self.ctx.composition.chars().count() >= max
    }

    /// Append a key to the composition, fails when the composition is full.
    ///
    /// A key belonging to a key group rebuilds the composition in group
    /// order; when any existing character has no group the rebuild is
    /// abandoned and the key is appended in typing order. On success the
    /// display echo and candidates are refreshed.
    pub(super) fn append_key(&mut self, key: char) -> bool {
        if self.is_full_composition() {
            return false;
        }

        let regrouped = self
            .table
            .key_group_of(key)
            .and_then(|group| {
                self.table
                    .composition_by_groups(&self.ctx.composition, group, key)
            });
        match regrouped {
            Some(composition) => self.ctx.composition = composition,
            None => self.ctx.composition.push(key),
        }

        trace!("composition: {}", self.ctx.composition);
        self.refresh_display();
        self.refresh_candidates(LookupMode::Selection);
        true
    }

    /// Remove the last composition character; fails on an empty
    /// composition.
    pub(super) fn delete_last(&mut self) -> bool {
        if self.ctx.composition.pop().is_none() {
            return false;
        }
        self.refresh_display();
        self.refresh_candidates(LookupMode::Selection);
        true
    }

    /// Recompute the display echo from the composition and key glyphs.
    fn refresh_display(&mut self) {
        self.ctx.display_composition = self.table.display_composition(&self.ctx.composition);
    }

    /// Re-resolve candidates for the current composition, returning whether
    /// any were found. The window moves back to the front; cycling never
    /// goes through here.
    pub(super) fn refresh_candidates(&mut self, mode: LookupMode) -> bool {
        let candidates = self
            .table
            .lookup(&self.ctx.composition, mode)
            .map(|candidates| candidates.to_vec())
            .unwrap_or_default();
        self.ctx.candidates.set_candidates(candidates);
        !self.ctx.candidates.is_empty()
    }
}
