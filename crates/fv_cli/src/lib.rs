//! Batch front end over the analysis core.
//!
//! Loads a JSON array of per-frame detections (as exported by the
//! detection script) and drives the core pipeline over it. All tactical
//! semantics live in `fv_core`; this crate only does file I/O and
//! printing.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use fv_core::{
    run_stream, run_stream_until, AnalysisConfig, AnalysisError, AnalysisSummary,
    FrameDetections, VecSource,
};

/// Load a detections file: a JSON array of frames.
pub fn load_frames(path: &Path) -> Result<Vec<FrameDetections>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read detections file: {}", path.display()))?;
    let frames: Vec<FrameDetections> =
        serde_json::from_str(&json).context("Failed to parse detections JSON")?;
    Ok(frames)
}

/// Load an analysis configuration, or the defaults when no path given.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: AnalysisConfig =
        serde_json::from_str(&json).context("Failed to parse config JSON")?;
    Ok(config)
}

/// Run the analysis over a detections file, optionally stopping after
/// `max_frames`. A mid-stream source failure still reports the partial
/// summary before the error is surfaced.
pub fn analyze_file(
    input: &Path,
    config: &AnalysisConfig,
    max_frames: Option<u64>,
) -> Result<AnalysisSummary> {
    let mut source = VecSource::new(load_frames(input)?);

    let result = match max_frames {
        Some(limit) => run_stream_until(&mut source, config, |n| n >= limit),
        None => run_stream(&mut source, config),
    };

    match result {
        Ok(summary) => Ok(summary),
        Err(AnalysisError::MidStream { reason, partial }) => {
            eprintln!("Source failed mid-stream: {reason}");
            eprintln!("Partial summary covers {} frames:", partial.total_frames);
            eprintln!("{}", fv_core::render_summary(&partial));
            anyhow::bail!("detection source failed: {reason}")
        }
        Err(err) => Err(err.into()),
    }
}

/// Raw per-frame detection counts, one `(frame index, object count)`
/// pair per frame.
pub fn frame_counts(input: &Path) -> Result<Vec<(u64, usize)>> {
    let frames = load_frames(input)?;
    Ok(frames.iter().map(|f| (f.index, f.objects.len())).collect())
}
