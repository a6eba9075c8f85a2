//! Running score and best-score tracking
//!
//! `current` resets every session; `best` is monotone for the process
//! lifetime. Actually writing the best somewhere durable is the storage
//! collaborator's job — `finalize_session` only reports that it should.

/// Per-session score plus the process-wide best
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    current: u32,
    best: u32,
}

impl ScoreTracker {
    /// `best` comes from the one-time persistence load at startup
    pub fn new(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn award(&mut self, points: u32) {
        self.current += points;
    }

    /// New session: the running score starts over, the best stays
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// End of a run. Promotes `current` to `best` when it wins and returns
    /// whether the caller should persist the new best.
    pub fn finalize_session(&mut self) -> bool {
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }
}
