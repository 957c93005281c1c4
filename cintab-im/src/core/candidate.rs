//! Candidate window management
//!
//! Holds the ordered candidate list for the current composition and the
//! start index of the visible window. The window size equals the number of
//! selection keys; the start index is always a multiple of it.

/// An ordered candidate list with a sliding selection window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWindow {
    /// All candidates for the current composition
    candidates: Vec<String>,
    /// Start index of the visible window, a multiple of `window_size`
    start: usize,
    /// Number of candidates visible at once
    window_size: usize,
}

impl CandidateWindow {
    /// Create an empty window. A table without selection keys still gets a
    /// window of one so the arithmetic below stays defined.
    pub fn new(window_size: usize) -> Self {
        Self {
            candidates: Vec::new(),
            start: 0,
            window_size: window_size.max(1),
        }
    }

    /// Get all candidates
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Get the number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Get the window start index
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the window size
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The visible slice of candidates
    pub fn window(&self) -> &[String] {
        let start = self.start.min(self.candidates.len());
        let end = (start + self.window_size).min(self.candidates.len());
        &self.candidates[start..end]
    }

    /// Get a candidate by absolute index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(String::as_str)
    }

    /// Replace the candidates for a fresh composition, moving the window
    /// back to the front.
    pub fn set_candidates(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
        self.start = 0;
    }

    /// Move the window back to the front without touching the candidates.
    pub fn reset_start(&mut self) {
        self.start = 0;
    }

    /// Clear candidates and window position
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.start = 0;
    }

    /// True iff there is more than one window's worth of candidates.
    pub fn can_cycle(&self) -> bool {
        self.candidates.len() > self.window_size
    }

    /// Advance the window to the next page, wrapping past the end to the
    /// front. No-op when everything already fits in one window.
    pub fn next_window(&mut self) -> bool {
        self.cycle(1)
    }

    /// Move the window to the previous page, wrapping before the front to
    /// the last partially-filled page.
    pub fn prev_window(&mut self) -> bool {
        self.cycle(-1)
    }

    fn cycle(&mut self, direction: i64) -> bool {
        if !self.can_cycle() {
            return false;
        }
        let len = self.candidates.len() as i64;
        let size = self.window_size as i64;
        let mut next = self.start as i64 + direction * size;
        if next >= len {
            next = 0;
        } else if next < 0 {
            // Highest multiple of the window size below len
            next = (len - 1) / size * size;
        }
        self.start = next as usize;
        true
    }
}
