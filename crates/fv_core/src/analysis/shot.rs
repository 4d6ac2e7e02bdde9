//! Shot detection from ball movement speed.
//!
//! The tracker records the ball center for every frame where a ball was
//! detected. Speed is the distance between the two most recent recorded
//! positions; frames where the ball was missed introduce a gap that is
//! not compensated for.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::geometry::{distance, PenaltyArea};

/// A frame where ball speed exceeded the shot threshold. Immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotEvent {
    pub frame: u64,
    /// Ball center when the shot was detected.
    pub position: (f32, f32),
    pub in_penalty_area: bool,
}

impl ShotEvent {
    /// Positioning advice attached to a shot in rendered reports.
    pub fn suggestion(&self) -> &'static str {
        if self.in_penalty_area {
            "Good shooting position"
        } else {
            "Try to shoot from or get closer to the penalty area for better chances."
        }
    }
}

/// Per-run ball-position history. Only the two most recent recorded
/// positions are ever inspected, so only the latest is retained.
#[derive(Debug, Clone, Default)]
pub struct ShotTracker {
    last_ball_pos: Option<(f32, f32)>,
}

impl ShotTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's ball center and report a shot if the ball
    /// moved faster than the configured threshold since the previous
    /// recorded position.
    pub fn observe(
        &mut self,
        ball_center: (f32, f32),
        frame: u64,
        frame_width: u32,
        frame_height: u32,
        config: &AnalysisConfig,
    ) -> Option<ShotEvent> {
        let previous = self.last_ball_pos.replace(ball_center)?;

        let ball_speed = distance(previous, ball_center);
        if ball_speed <= config.shot_speed_threshold_px {
            return None;
        }

        let area = PenaltyArea::from_frame(
            frame_width,
            frame_height,
            config.penalty_box_width_frac,
            config.penalty_box_height_frac,
        );
        log::debug!("shot at frame {frame}: ball moved {ball_speed:.1}px");
        Some(ShotEvent {
            frame,
            position: ball_center,
            in_penalty_area: area.contains(ball_center),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_position_never_fires() {
        let config = AnalysisConfig::default();
        let mut tracker = ShotTracker::new();
        assert_eq!(tracker.observe((0.0, 0.0), 1, 1000, 600, &config), None);
    }

    #[test]
    fn test_fast_ball_is_a_shot() {
        let config = AnalysisConfig::default();
        let mut tracker = ShotTracker::new();
        tracker.observe((0.0, 0.0), 1, 1000, 600, &config);

        // 50px in one step with a 40px threshold
        let shot = tracker.observe((50.0, 0.0), 2, 1000, 600, &config).expect("shot");
        assert_eq!(shot.frame, 2);
        assert_eq!(shot.position, (50.0, 0.0));
        assert!(!shot.in_penalty_area);
    }

    #[test]
    fn test_exactly_threshold_speed_is_not_a_shot() {
        let config = AnalysisConfig::default();
        let mut tracker = ShotTracker::new();
        tracker.observe((0.0, 0.0), 1, 1000, 600, &config);
        assert_eq!(tracker.observe((40.0, 0.0), 2, 1000, 600, &config), None);
    }

    #[test]
    fn test_shot_inside_penalty_area() {
        let config = AnalysisConfig::default();
        let mut tracker = ShotTracker::new();
        tracker.observe((500.0, 480.0), 1, 1000, 600, &config);

        let shot = tracker.observe((500.0, 550.0), 2, 1000, 600, &config).expect("shot");
        assert!(shot.in_penalty_area);
    }

    #[test]
    fn test_shot_suggestions() {
        let inside = ShotEvent { frame: 1, position: (500.0, 550.0), in_penalty_area: true };
        assert_eq!(inside.suggestion(), "Good shooting position");

        let outside = ShotEvent { frame: 1, position: (10.0, 10.0), in_penalty_area: false };
        assert!(outside.suggestion().contains("closer to the penalty area"));
    }

    #[test]
    fn test_speed_spans_missed_frames() {
        // Ball missed at frame 2; speed compares frames 1 and 3 directly
        let config = AnalysisConfig::default();
        let mut tracker = ShotTracker::new();
        tracker.observe((0.0, 0.0), 1, 1000, 600, &config);

        let shot = tracker.observe((60.0, 0.0), 3, 1000, 600, &config).expect("shot");
        assert_eq!(shot.frame, 3);
    }
}
