//! Type definitions for the input engine

use tracing::debug;

/// Per-keystroke action verdict returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Key not consumed; the caller may forward it to the text field
    Ignored,
    /// Key consumed, no text produced; composition/candidate UI should
    /// refresh
    Processed,
    /// Key consumed; the session's commit text holds the string to insert
    Committed,
    /// Key consumed but the operation was invalid; the caller should play
    /// an error cue
    Error,
}

/// Recoverable errors surfaced through [`ErrorNotifier`] alongside an
/// [`Verdict::Error`]. None of these change session state beyond the
/// attempted lookup; further keystrokes proceed normally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no candidate matches composition '{composition}'")]
    NoCandidateMatch { composition: String },

    #[error("selection index {index} out of range for {count} candidates")]
    SelectionOutOfRange { index: usize, count: usize },

    #[error("composition already at maximum length {max}")]
    CompositionFull { max: usize },
}

/// Hook invoked on every Error verdict so an external UI can render a cue
/// (typically a beep). The engine itself performs no I/O.
pub trait ErrorNotifier {
    fn notify(&mut self, error: &EngineError);
}

/// Default notifier: log and nothing else.
pub(super) struct LogNotifier;

impl ErrorNotifier for LogNotifier {
    fn notify(&mut self, error: &EngineError) {
        debug!("input error: {}", error);
    }
}
