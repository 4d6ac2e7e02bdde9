//! Analysis thresholds and zone geometry.
//!
//! All thresholds are pixel-based and configurable so they can be
//! scaled with frame resolution instead of living as magic numbers in
//! the detectors.

use serde::{Deserialize, Serialize};

use crate::detection::ClassMap;
use crate::error::AnalysisError;

/// Configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum holder-center shift (pixels) counted as a pass; smaller
    /// shifts are treated as detection jitter.
    pub noise_threshold_px: f32,
    /// Pass distance (pixels) above which the pass is flagged as risky.
    /// Must stay above `noise_threshold_px`.
    pub risk_threshold_px: f32,
    /// Ball speed (pixels per recorded step) above which a shot is
    /// flagged.
    pub shot_speed_threshold_px: f32,
    /// Penalty-zone width as a fraction of frame width.
    pub penalty_box_width_frac: f32,
    /// Penalty-zone height as a fraction of frame height.
    pub penalty_box_height_frac: f32,
    /// Class-id vocabulary of the upstream detector.
    pub classes: ClassMap,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            noise_threshold_px: 10.0,
            risk_threshold_px: 200.0,
            shot_speed_threshold_px: 40.0,
            penalty_box_width_frac: 0.4,
            penalty_box_height_frac: 0.2,
            classes: ClassMap::default(),
        }
    }
}

impl AnalysisConfig {
    /// Reject configurations the detectors cannot interpret.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.noise_threshold_px <= 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "noise_threshold_px must be positive, got {}",
                self.noise_threshold_px
            )));
        }
        if self.risk_threshold_px <= self.noise_threshold_px {
            return Err(AnalysisError::InvalidConfig(format!(
                "risk_threshold_px ({}) must exceed noise_threshold_px ({})",
                self.risk_threshold_px, self.noise_threshold_px
            )));
        }
        if self.shot_speed_threshold_px <= 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "shot_speed_threshold_px must be positive, got {}",
                self.shot_speed_threshold_px
            )));
        }
        for (name, frac) in [
            ("penalty_box_width_frac", self.penalty_box_width_frac),
            ("penalty_box_height_frac", self.penalty_box_height_frac),
        ] {
            if !(frac > 0.0 && frac <= 1.0) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{name} must be in (0, 1], got {frac}"
                )));
            }
        }
        Ok(())
    }
}
