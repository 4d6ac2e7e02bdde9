//! Pass detection and risk classification.
//!
//! A pass is a frame-to-frame shift of the possession holder's center
//! beyond the noise threshold. Shifts additionally beyond the risk
//! threshold are flagged as tactically risky.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::geometry::distance;

/// Kind of flagged pass fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassFaultKind {
    #[serde(rename = "Long risky pass")]
    LongRiskyPass,
}

impl PassFaultKind {
    pub fn suggestion(&self) -> &'static str {
        match self {
            PassFaultKind::LongRiskyPass => "Try a shorter, safer pass.",
        }
    }
}

impl std::fmt::Display for PassFaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PassFaultKind::LongRiskyPass => write!(f, "Long risky pass"),
        }
    }
}

/// A pass that exceeded the risk threshold. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassFault {
    /// Frame at which the pass was detected.
    pub frame: u64,
    #[serde(rename = "fault")]
    pub kind: PassFaultKind,
    /// Distance the holder center moved, in pixels.
    pub distance_px: f32,
    pub suggestion: String,
}

impl PassFault {
    pub fn new(frame: u64, kind: PassFaultKind, distance_px: f32) -> Self {
        Self {
            frame,
            kind,
            distance_px,
            suggestion: kind.suggestion().to_string(),
        }
    }
}

/// Outcome of evaluating one holder shift.
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutcome {
    /// Shift within the noise threshold; not a pass.
    NoPass,
    /// Counted pass below the risk threshold.
    Pass,
    /// Counted pass above the risk threshold.
    RiskyPass(PassFault),
}

impl PassOutcome {
    pub fn is_pass(&self) -> bool {
        !matches!(self, PassOutcome::NoPass)
    }
}

/// Evaluate the holder shift between the previous frame's holder and
/// this frame's holder. Only called once a previous holder exists.
pub fn evaluate_pass(
    previous: (f32, f32),
    current: (f32, f32),
    frame: u64,
    config: &AnalysisConfig,
) -> PassOutcome {
    let dist_change = distance(previous, current);
    if dist_change <= config.noise_threshold_px {
        return PassOutcome::NoPass;
    }
    if dist_change > config.risk_threshold_px {
        log::debug!("risky pass at frame {frame}: holder moved {dist_change:.1}px");
        return PassOutcome::RiskyPass(PassFault::new(
            frame,
            PassFaultKind::LongRiskyPass,
            dist_change,
        ));
    }
    PassOutcome::Pass
}
