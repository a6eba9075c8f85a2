//! Frame-normalized delta time from absolute timestamps
//!
//! The driver hands the simulation raw animation-frame timestamps in
//! milliseconds. We normalize successive timestamps into frame-units so the
//! rest of the simulation is rate-independent: a delta of 1.0 is one frame
//! at the ~60 fps baseline.

use crate::consts::BASELINE_FRAME_MS;

/// Converts successive absolute timestamps into frame-unit deltas
#[derive(Debug, Clone, Default)]
pub struct TimeStep {
    last: Option<f64>,
}

impl TimeStep {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Forget the previous timestamp. The next `advance` yields a zero delta,
    /// which avoids a physics spike on the first frame of a session.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Advance to `now` (milliseconds) and return the elapsed frame-units.
    ///
    /// `max_delta` optionally clamps the result so a long pause (backgrounded
    /// tab) cannot produce one huge simulation jump. Unclamped by default.
    pub fn advance(&mut self, now: f64, max_delta: Option<f32>) -> f32 {
        let delta = match self.last {
            Some(prev) => ((now - prev) / BASELINE_FRAME_MS) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        match max_delta {
            Some(max) => delta.min(max),
            None => delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_advance_is_zero() {
        let mut ts = TimeStep::new();
        assert_eq!(ts.advance(1000.0, None), 0.0);
    }

    #[test]
    fn test_baseline_frame_is_one_unit() {
        let mut ts = TimeStep::new();
        ts.advance(1000.0, None);
        let delta = ts.advance(1000.0 + BASELINE_FRAME_MS, None);
        assert!((delta - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_reset_suppresses_spike() {
        let mut ts = TimeStep::new();
        ts.advance(1000.0, None);
        ts.reset();
        // A long gap straddling the reset must not leak into the delta
        assert_eq!(ts.advance(9000.0, None), 0.0);
        let delta = ts.advance(9000.0 + 2.0 * BASELINE_FRAME_MS, None);
        assert!((delta - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_max_delta_clamp() {
        let mut ts = TimeStep::new();
        ts.advance(0.0, Some(4.0));
        // 10 seconds elapsed, clamped to 4 frame-units
        assert_eq!(ts.advance(10_000.0, Some(4.0)), 4.0);
        // Unclamped path keeps the raw value
        let delta = ts.advance(20_000.0, None);
        assert!(delta > 100.0);
    }
}
