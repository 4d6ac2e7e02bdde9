//! Per-frame ball possession tracking.
//!
//! The holder is the player whose bounding-box center is closest to the
//! ball center. Possession state is owned by a single run and reset
//! with it; it is never shared across videos.

use crate::geometry::distance;

/// Result of one possession update: the holder before this frame (if
/// one was ever established) and the holder selected this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HolderChange {
    pub previous: Option<(f32, f32)>,
    pub current: (f32, f32),
}

/// Tracks the current possession holder's center across frames.
#[derive(Debug, Clone, Default)]
pub struct PossessionTracker {
    holder: Option<(f32, f32)>,
}

impl PossessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the current holder, if possession was ever established.
    pub fn holder(&self) -> Option<(f32, f32)> {
        self.holder
    }

    /// Select the holder for a frame. Callers only invoke this when a
    /// ball and at least one player were detected; frames missing
    /// either leave the state untouched.
    ///
    /// Tie-break: equidistant players resolve to the one appearing
    /// earliest in detection order. The scan uses a strict `<` so the
    /// first minimum wins (a `min_by` would keep the last one).
    pub fn update(&mut self, players: &[(f32, f32)], ball_center: (f32, f32)) -> HolderChange {
        debug_assert!(!players.is_empty());

        let mut best = players[0];
        let mut best_dist = distance(players[0], ball_center);
        for &center in &players[1..] {
            let d = distance(center, ball_center);
            if d < best_dist {
                best = center;
                best_dist = d;
            }
        }

        let previous = self.holder.replace(best);
        HolderChange { previous, current: best }
    }
}
