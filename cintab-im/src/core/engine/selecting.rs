//! SelectingCandidate-state key handling

use super::*;
use crate::core::keycode::Key;

impl InputEngine {
    /// Process a key while browsing the candidate window.
    pub(super) fn process_key_selecting(&mut self, event: &KeyEvent) -> Verdict {
        let mut key = event.key;
        if event.modifiers.shift_key {
            key = match key {
                // Legacy Array30-era remap: shifted comma/period cycle
                Key::Char(',') if self.settings.behavior.shift_cycle_keys => Key::Char('<'),
                Key::Char('.') if self.settings.behavior.shift_cycle_keys => Key::Char('>'),
                Key::Char(c) if self.table.is_selection_key(c) => key,
                _ => return Verdict::Ignored,
            };
        }

        match key {
            Key::Escape => {
                self.ctx.reset();
                Verdict::Processed
            }

            Key::Backspace => {
                self.shift_state();
                self.delete_last();
                Verdict::Processed
            }

            Key::Left | Key::PageUp | Key::Up | Key::Char('<') => {
                self.ctx.candidates.prev_window();
                Verdict::Processed
            }

            Key::Right | Key::PageDown | Key::Down | Key::Char('>') => {
                self.ctx.candidates.next_window();
                Verdict::Processed
            }

            // Space cycles; once there is nothing left to cycle it commits
            // the first candidate.
            Key::Char(' ') => {
                if self.ctx.candidates.next_window() {
                    Verdict::Processed
                } else {
                    self.commit_at(0)
                }
            }

            Key::Char(c) if self.table.is_selection_key(c) => self.select_and_commit(c),

            // A plain composition key commits the first candidate and
            // starts the next composition with itself.
            Key::Char(c) if self.table.is_composition_key(c) => {
                let verdict = self.commit_at(0);
                if verdict == Verdict::Committed {
                    self.append_key(c);
                }
                verdict
            }

            _ => Verdict::Ignored,
        }
    }
}
