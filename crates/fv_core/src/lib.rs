//! # fv_core - Football Video Tactical Event Analysis
//!
//! Turns a stream of per-frame object detections from a football match
//! video into a deterministic tactical-event summary: ball possession
//! changes, passes with risk classification, and shots with pitch-zone
//! classification.
//!
//! ## Features
//! - Deterministic: the same detection stream always yields the same
//!   summary
//! - Single-threaded, one pass over the stream, per-run state only
//! - Detector-agnostic via an injected class-id vocabulary
//!
//! Video decoding and the detection model itself are external; the core
//! consumes already-computed detections through [`FrameSource`] and
//! exposes exactly one [`AnalysisSummary`] per run.

pub mod analysis;
pub mod config;
pub mod detection;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod report;

pub use analysis::{AnalysisSummary, PassFault, PassFaultKind, ShotEvent};
pub use config::AnalysisConfig;
pub use detection::{ClassMap, DetectedObject, FrameDetections, FrameSource, ObjectKind, VecSource};
pub use error::{AnalysisError, SourceError};
pub use geometry::{distance, BoundingBox, PenaltyArea};
pub use pipeline::{run_stream, run_stream_until, MatchAnalyzer};
pub use report::{answer_query, render_summary};
