//! Input engine - the session state machine
//!
//! This module contains the `InputEngine` struct that dispatches keystrokes
//! to the state-specific handlers and decides commit vs. processed vs.
//! ignored vs. error.

mod composing;
mod composition;
mod selecting;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use cintab_table::{LookupMode, TableModel};
use tracing::{debug, trace};

use super::keycode::KeyEvent;
use super::session::{SessionContext, SessionState};
use crate::config::Settings;
use types::LogNotifier;

/// The session state machine for one composition session.
///
/// Owns the session context exclusively; the table is shared and read-only.
/// Swapping tables must happen between keystrokes by constructing a fresh
/// engine.
pub struct InputEngine {
    /// Shared, immutable table data
    table: Arc<TableModel>,
    /// Behavior settings
    settings: Settings,
    /// Per-session mutable context
    ctx: SessionContext,
    /// Error cue hook for the host UI
    notifier: Box<dyn ErrorNotifier>,
}

impl InputEngine {
    /// Create a new engine with default settings.
    pub fn new(table: Arc<TableModel>) -> Self {
        Self::with_settings(table, Settings::default())
    }

    /// Create a new engine with explicit settings.
    pub fn with_settings(table: Arc<TableModel>, settings: Settings) -> Self {
        let ctx = SessionContext::new(table.selection_key_count());
        Self {
            table,
            settings,
            ctx,
            notifier: Box::new(LogNotifier),
        }
    }

    /// Replace the error notification hook.
    pub fn set_notifier(&mut self, notifier: Box<dyn ErrorNotifier>) {
        self.notifier = notifier;
    }

    /// The table this session composes against.
    pub fn table(&self) -> &TableModel {
        &self.table
    }

    /// Read access to the session context (composition, candidates, commit
    /// text) for UI refresh.
    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Reset the session to a fresh Composing state.
    pub fn reset(&mut self) {
        self.ctx.reset();
    }

    /// Process a key event and return the verdict.
    ///
    /// Key releases and any event carrying a control or alt modifier never
    /// reach the state machine.
    pub fn process_key(&mut self, event: &KeyEvent) -> Verdict {
        if !event.is_press || event.modifiers.control_key || event.modifiers.alt_key {
            return Verdict::Ignored;
        }

        trace!(
            "processing key {} in state {:?}",
            event.key, self.ctx.state
        );

        match self.ctx.state {
            SessionState::Composing => self.process_key_composing(event),
            SessionState::SelectingCandidate => self.process_key_selecting(event),
        }
    }

    /// Flip Composing <-> SelectingCandidate, rewinding the candidate
    /// window to the front.
    pub(super) fn shift_state(&mut self) {
        self.ctx.state = match self.ctx.state {
            SessionState::Composing => SessionState::SelectingCandidate,
            SessionState::SelectingCandidate => SessionState::Composing,
        };
        self.ctx.candidates.reset_start();
    }

    /// Shared Convert procedure: resolve the composition in conversion mode
    /// and either enter candidate selection or commit outright.
    pub(super) fn convert_composition(&mut self) -> Verdict {
        if self.ctx.is_composition_empty() {
            return Verdict::Ignored;
        }
        if !self.refresh_candidates(LookupMode::Conversion) {
            return self.fail(EngineError::NoCandidateMatch {
                composition: self.ctx.composition.clone(),
            });
        }
        self.shift_state();
        if self.ctx.candidates.len() == 1 || self.table.options().auto_commit_on_space {
            return self.commit_at(0);
        }
        Verdict::Processed
    }

    /// Commit the candidate at `index` and reset the session. The context
    /// is left untouched when the index is out of range.
    pub(super) fn commit_at(&mut self, index: usize) -> Verdict {
        let Some(text) = self.ctx.candidates.get(index).map(str::to_owned) else {
            return self.fail(EngineError::SelectionOutOfRange {
                index,
                count: self.ctx.candidates.len(),
            });
        };
        debug!("commit: {}", text);
        self.ctx.reset();
        self.ctx.commit_text = text;
        Verdict::Committed
    }

    /// Commit the candidate a selection key points at within the current
    /// window.
    pub(super) fn select_and_commit(&mut self, key: char) -> Verdict {
        let Some(offset) = self.table.selection_index(key) else {
            return Verdict::Ignored;
        };
        self.commit_at(self.ctx.candidates.start() + offset)
    }

    /// Notify the error hook and return an Error verdict.
    pub(super) fn fail(&mut self, error: EngineError) -> Verdict {
        self.notifier.notify(&error);
        Verdict::Error
    }
}
