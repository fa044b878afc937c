// Per-tick control signal distilled from one hand frame.

/// Output of the gesture classifier, consumed once per simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSignal {
    /// Mirrored horizontal aim in [0, 1].
    pub aim_x: f32,
    /// Vertical aim in [0, 1], top of frame is 0.
    pub aim_y: f32,
    pub aim_z: f32,
    pub is_pinching: bool,
    pub is_starfish: bool,
    pub visible: bool,
}

impl HandSignal {
    /// Neutral signal for frames without a usable hand.
    pub const fn hidden() -> Self {
        Self {
            aim_x: 0.5,
            aim_y: 0.5,
            aim_z: 0.0,
            is_pinching: false,
            is_starfish: false,
            visible: false,
        }
    }

    /// Pinch only counts while the hand is on screen.
    pub fn fires(&self) -> bool {
        self.visible && self.is_pinching
    }

    pub fn wants_special(&self) -> bool {
        self.visible && self.is_starfish
    }
}

impl Default for HandSignal {
    fn default() -> Self {
        Self::hidden()
    }
}
