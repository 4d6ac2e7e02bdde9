//! # Tactical Event Analysis
//!
//! Derives tactical events from per-frame detections.
//!
//! - `possession` - Per-frame ball holder tracking
//! - `pass` - Possession-shift passes and risk faults
//! - `shot` - Ball-speed shot detection with zone classification
//! - `summary` - Accumulated run result

pub mod pass;
pub mod possession;
pub mod shot;
pub mod summary;

pub use pass::{evaluate_pass, PassFault, PassFaultKind, PassOutcome};
pub use possession::{HolderChange, PossessionTracker};
pub use shot::{ShotEvent, ShotTracker};
pub use summary::AnalysisSummary;
