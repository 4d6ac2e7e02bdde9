//! The single artifact an analysis run exposes to consumers.

use serde::{Deserialize, Serialize};

use crate::analysis::pass::PassFault;
use crate::analysis::shot::ShotEvent;

/// Accumulated result of one analysis run.
///
/// Events are appended in frame order and never reordered; every event
/// frame index is <= `total_frames`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_frames: u64,
    pub total_passes: u32,
    pub pass_faults: Vec<PassFault>,
    pub shots: Vec<ShotEvent>,
}

impl AnalysisSummary {
    /// Whether any tactical event was flagged at all.
    pub fn has_events(&self) -> bool {
        !self.pass_faults.is_empty() || !self.shots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pass::PassFaultKind;

    #[test]
    fn test_summary_json_shape() {
        let summary = AnalysisSummary {
            total_frames: 3,
            total_passes: 1,
            pass_faults: vec![PassFault::new(3, PassFaultKind::LongRiskyPass, 290.0)],
            shots: vec![ShotEvent { frame: 2, position: (50.0, 0.0), in_penalty_area: false }],
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_frames"], 3);
        assert_eq!(json["total_passes"], 1);
        assert_eq!(json["pass_faults"][0]["frame"], 3);
        assert_eq!(json["shots"][0]["in_penalty_area"], false);

        let parsed: AnalysisSummary = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_has_events() {
        let mut summary = AnalysisSummary::default();
        assert!(!summary.has_events());
        summary.shots.push(ShotEvent { frame: 1, position: (0.0, 0.0), in_penalty_area: true });
        assert!(summary.has_events());
    }
}
