//! Session state machine context
//!
//! Defines the two states of a composition session and the mutable context
//! owned by exactly one engine. A context never outlives a table swap:
//! switching tables means constructing a fresh session.

use super::candidate::CandidateWindow;

/// The current state of a composition session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Building a key sequence
    #[default]
    Composing,
    /// Browsing a resolved candidate window
    SelectingCandidate,
}

/// Per-session mutable context, exclusively owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Current state
    pub(crate) state: SessionState,
    /// Raw keys typed so far, not yet converted
    pub(crate) composition: String,
    /// Candidates matched for the current composition
    pub(crate) candidates: CandidateWindow,
    /// Most recently committed text, cleared on the next reset
    pub(crate) commit_text: String,
    /// Composition rendered with key display glyphs, for UI echo
    pub(crate) display_composition: String,
}

impl SessionContext {
    /// Create an empty context with the given candidate window size.
    pub fn new(window_size: usize) -> Self {
        Self {
            state: SessionState::Composing,
            composition: String::new(),
            candidates: CandidateWindow::new(window_size),
            commit_text: String::new(),
            display_composition: String::new(),
        }
    }

    /// Clear everything back to a fresh Composing state.
    pub fn reset(&mut self) {
        self.state = SessionState::Composing;
        self.composition.clear();
        self.candidates.clear();
        self.commit_text.clear();
        self.display_composition.clear();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The in-progress key sequence
    pub fn composition(&self) -> &str {
        &self.composition
    }

    /// The composition rendered with display glyphs
    pub fn display_composition(&self) -> &str {
        &self.display_composition
    }

    /// The committed text; only meaningful right after a Committed verdict
    pub fn commit_text(&self) -> &str {
        &self.commit_text
    }

    /// The candidate window
    pub fn candidates(&self) -> &CandidateWindow {
        &self.candidates
    }

    pub fn is_composition_empty(&self) -> bool {
        self.composition.is_empty()
    }
}
