//! Detection boundary types: what the external object detector hands to
//! the analysis core, and the stream abstraction it is consumed through.
//!
//! The core never decodes video or runs a model; it only consumes
//! already-computed per-frame detections.

use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::geometry::BoundingBox;

/// Object categories the pipeline cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Player,
    Ball,
}

/// Injected class-id vocabulary, decoupling the core from any specific
/// detection model's label scheme. Defaults follow the COCO ids used by
/// the YOLO family (person = 0, sports ball = 32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMap {
    pub player: u32,
    pub ball: u32,
}

impl Default for ClassMap {
    fn default() -> Self {
        Self { player: 0, ball: 32 }
    }
}

impl ClassMap {
    /// Map a raw class id to a known kind. Ids outside the vocabulary
    /// return `None` and are ignored by the pipeline.
    pub fn classify(&self, class_id: u32) -> Option<ObjectKind> {
        if class_id == self.player {
            Some(ObjectKind::Player)
        } else if class_id == self.ball {
            Some(ObjectKind::Ball)
        } else {
            None
        }
    }
}

/// One detection produced by the external model. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub class_id: u32,
    pub bbox: BoundingBox,
}

/// All detections for one video frame.
///
/// `index` is 1-based and monotonically increasing; `width`/`height`
/// are the video dimensions, constant for the whole stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDetections {
    pub index: u64,
    pub width: u32,
    pub height: u32,
    pub objects: Vec<DetectedObject>,
}

/// Sequential, one-pass, finite source of frame detections.
///
/// Each call may block on I/O or model inference; the pipeline does not
/// proceed until it returns. `Ok(None)` signals end of stream.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<FrameDetections>, SourceError>;
}

/// In-memory frame source backed by a `Vec`, used by the file-based
/// front ends and by tests.
#[derive(Debug, Clone)]
pub struct VecSource {
    frames: std::vec::IntoIter<FrameDetections>,
}

impl VecSource {
    pub fn new(frames: Vec<FrameDetections>) -> Self {
        Self { frames: frames.into_iter() }
    }
}

impl FrameSource for VecSource {
    fn next_frame(&mut self) -> Result<Option<FrameDetections>, SourceError> {
        Ok(self.frames.next())
    }
}
