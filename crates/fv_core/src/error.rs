use thiserror::Error;

use crate::analysis::summary::AnalysisSummary;

/// Failure reported by a [`crate::detection::FrameSource`].
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to open detection source: {0}")]
    Open(String),

    #[error("failed to read detection source: {0}")]
    Read(String),
}

/// Top-level failure of an analysis run. Every external entry point
/// returns either a summary or one of these, never both, never neither.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The source failed before any frame was processed. No partial
    /// summary exists.
    #[error("could not open detection source: {0}")]
    SourceOpen(String),

    /// The source failed after some frames were processed. The partial
    /// summary covers everything up to the failure.
    #[error("detection source failed after {} frames: {reason}", partial.total_frames)]
    MidStream {
        reason: String,
        partial: Box<AnalysisSummary>,
    },
}
