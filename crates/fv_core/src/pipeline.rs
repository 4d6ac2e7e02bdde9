//! Frame-stream driver.
//!
//! Each frame is fully processed in a fixed order (possession -> pass
//! -> shot) before the next is read: pass detection depends on the
//! prior frame's holder and shot detection on the ball-position
//! history. Processing is single-threaded; all state is owned by one
//! [`MatchAnalyzer`] and reset with it.

use crate::analysis::pass::{evaluate_pass, PassOutcome};
use crate::analysis::possession::PossessionTracker;
use crate::analysis::shot::ShotTracker;
use crate::analysis::summary::AnalysisSummary;
use crate::config::AnalysisConfig;
use crate::detection::{FrameDetections, FrameSource, ObjectKind};
use crate::error::{AnalysisError, SourceError};

/// Per-run analysis state. Feed frames with [`process_frame`], then
/// take the summary with [`finalize`].
///
/// The incremental API is also the cancellation mechanism: the owner
/// may stop feeding frames at any point and `finalize` still yields a
/// valid summary covering exactly the frames processed so far.
///
/// [`process_frame`]: MatchAnalyzer::process_frame
/// [`finalize`]: MatchAnalyzer::finalize
#[derive(Debug)]
pub struct MatchAnalyzer {
    config: AnalysisConfig,
    possession: PossessionTracker,
    shot_tracker: ShotTracker,
    summary: AnalysisSummary,
}

impl MatchAnalyzer {
    /// Validates the configuration before any frame is touched.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            config,
            possession: PossessionTracker::new(),
            shot_tracker: ShotTracker::new(),
            summary: AnalysisSummary::default(),
        })
    }

    pub fn frames_processed(&self) -> u64 {
        self.summary.total_frames
    }

    /// Process one frame's detections: possession, then pass, then shot.
    ///
    /// Events are stamped with the run's own processed-frame counter,
    /// not the source-supplied `frame.index`; a detector that skips
    /// frames must never yield an event frame beyond `total_frames`.
    pub fn process_frame(&mut self, frame: &FrameDetections) {
        self.summary.total_frames += 1;
        let frame_ordinal = self.summary.total_frames;

        let mut players: Vec<(f32, f32)> = Vec::new();
        let mut ball: Option<(f32, f32)> = None;
        for obj in &frame.objects {
            match self.config.classes.classify(obj.class_id) {
                Some(ObjectKind::Player) => players.push(obj.bbox.center()),
                // Multiple ball detections in one frame: the last wins
                Some(ObjectKind::Ball) => ball = Some(obj.bbox.center()),
                None => {}
            }
        }

        let Some(ball_center) = ball else {
            return;
        };

        if !players.is_empty() {
            let change = self.possession.update(&players, ball_center);
            if let Some(previous) = change.previous {
                match evaluate_pass(previous, change.current, frame_ordinal, &self.config) {
                    PassOutcome::NoPass => {}
                    PassOutcome::Pass => self.summary.total_passes += 1,
                    PassOutcome::RiskyPass(fault) => {
                        self.summary.total_passes += 1;
                        self.summary.pass_faults.push(fault);
                    }
                }
            }
        }

        if let Some(shot) = self.shot_tracker.observe(
            ball_center,
            frame_ordinal,
            frame.width,
            frame.height,
            &self.config,
        ) {
            self.summary.shots.push(shot);
        }
    }

    /// Consume the analyzer and yield the run's summary.
    pub fn finalize(self) -> AnalysisSummary {
        log::info!(
            "analysis finished: {} frames, {} passes, {} faults, {} shots",
            self.summary.total_frames,
            self.summary.total_passes,
            self.summary.pass_faults.len(),
            self.summary.shots.len()
        );
        self.summary
    }
}

/// Drain a frame source to exhaustion and return the run's summary.
pub fn run_stream<S: FrameSource>(
    source: &mut S,
    config: &AnalysisConfig,
) -> Result<AnalysisSummary, AnalysisError> {
    run_stream_until(source, config, |_| false)
}

/// Like [`run_stream`], but checks `should_stop(frames_processed)`
/// after each frame. A requested stop finalizes normally, yielding a
/// partial summary covering the frames processed so far.
pub fn run_stream_until<S, F>(
    source: &mut S,
    config: &AnalysisConfig,
    mut should_stop: F,
) -> Result<AnalysisSummary, AnalysisError>
where
    S: FrameSource,
    F: FnMut(u64) -> bool,
{
    let mut analyzer = MatchAnalyzer::new(config.clone())?;

    loop {
        let frame = match source.next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => break,
            Err(err) => return Err(stream_failure(err, analyzer)),
        };

        analyzer.process_frame(&frame);

        if should_stop(analyzer.frames_processed()) {
            log::info!("analysis stopped after {} frames", analyzer.frames_processed());
            break;
        }
    }

    Ok(analyzer.finalize())
}

/// A failure before any frame was processed means the source was never
/// usable; afterwards the partial summary travels with the error.
fn stream_failure(err: SourceError, analyzer: MatchAnalyzer) -> AnalysisError {
    let reason = match err {
        SourceError::Open(reason) | SourceError::Read(reason) => reason,
    };
    if analyzer.frames_processed() == 0 {
        AnalysisError::SourceOpen(reason)
    } else {
        AnalysisError::MidStream {
            reason,
            partial: Box::new(analyzer.finalize()),
        }
    }
}
