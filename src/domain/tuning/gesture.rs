/// Thresholds for the hand gesture classifier, in normalized landmark units.

#[derive(Debug, Clone, Copy)]
pub struct GestureTuning {
    /// Thumb tip to index tip distance below which the hand is pinching.
    pub pinch_distance: f32,

    /// Tip must be this many times further from the wrist than the knuckle.
    pub finger_extension_ratio: f32,

    /// Same test for the thumb, measured against its second joint.
    pub thumb_extension_ratio: f32,

    /// Minimum thumb tip to pinky tip distance for an open hand.
    pub spread_distance: f32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            pinch_distance: 0.08,
            finger_extension_ratio: 1.5,
            thumb_extension_ratio: 1.3,
            spread_distance: 0.15,
        }
    }
}
