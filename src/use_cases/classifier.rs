// Gesture classifier: one hand's landmarks in, one control signal out.
//
// No smoothing is applied, so a single frame can misclassify; the fire-rate limiter and
// the special cooldown absorb that downstream.

use crate::domain::landmarks::{
    INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP, PINKY_MCP, PINKY_TIP, RING_MCP, RING_TIP,
    THUMB_MCP, THUMB_TIP, WRIST,
};
use crate::domain::tuning::GestureTuning;
use crate::domain::{HandSignal, Landmark, LandmarkSet};
use tracing::{debug, trace};

/// Intermediate measurements behind a classification, kept for debugging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureReading {
    pub pinch_distance: f32,
    pub spread_distance: f32,
    pub thumb_extended: bool,
    pub index_extended: bool,
    pub middle_extended: bool,
    pub ring_extended: bool,
    pub pinky_extended: bool,
}

impl GestureReading {
    pub fn measure(hand: &LandmarkSet, cfg: &GestureTuning) -> Self {
        let finger = |tip: usize, mcp: usize| {
            hand.distance(WRIST, tip) > hand.distance(WRIST, mcp) * cfg.finger_extension_ratio
        };

        Self {
            pinch_distance: hand.distance(THUMB_TIP, INDEX_TIP),
            spread_distance: hand.distance(THUMB_TIP, PINKY_TIP),
            thumb_extended: hand.distance(WRIST, THUMB_TIP)
                > hand.distance(WRIST, THUMB_MCP) * cfg.thumb_extension_ratio,
            index_extended: finger(INDEX_TIP, INDEX_MCP),
            middle_extended: finger(MIDDLE_TIP, MIDDLE_MCP),
            ring_extended: finger(RING_TIP, RING_MCP),
            pinky_extended: finger(PINKY_TIP, PINKY_MCP),
        }
    }

    pub fn is_pinching(&self, cfg: &GestureTuning) -> bool {
        self.pinch_distance < cfg.pinch_distance
    }

    /// Open, spread hand. A pinch always wins over a starfish.
    pub fn is_starfish(&self, cfg: &GestureTuning) -> bool {
        !self.is_pinching(cfg)
            && self.thumb_extended
            && self.index_extended
            && self.middle_extended
            && self.ring_extended
            && self.pinky_extended
            && self.spread_distance > cfg.spread_distance
    }
}

/// Classifies a validated hand.
pub fn classify_hand(hand: &LandmarkSet, cfg: &GestureTuning) -> HandSignal {
    let reading = GestureReading::measure(hand, cfg);
    trace!(?reading, "gesture reading");

    let aim = hand.point(MIDDLE_MCP);
    HandSignal {
        // Mirrored to match the selfie-view camera frame.
        aim_x: 1.0 - aim.x,
        aim_y: aim.y,
        aim_z: aim.z,
        is_pinching: reading.is_pinching(cfg),
        is_starfish: reading.is_starfish(cfg),
        visible: true,
    }
}

/// Classifies raw tracker output. Missing or malformed hands read as "no hand".
pub fn classify(landmarks: Option<&[Landmark]>, cfg: &GestureTuning) -> HandSignal {
    let Some(points) = landmarks else {
        return HandSignal::hidden();
    };

    match LandmarkSet::try_from(points) {
        Ok(hand) => classify_hand(&hand, cfg),
        Err(e) => {
            debug!(error = %e, "rejecting landmark frame");
            HandSignal::hidden()
        }
    }
}
