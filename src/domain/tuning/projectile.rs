use std::time::Duration;

/// Gameplay tuning for bullets.

#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Distance travelled away from the camera each tick.
    pub step: f32,

    /// Bullets deeper than this are despawned.
    pub far_depth: f32,

    /// Minimum time between two shots while pinch is held. Inclusive: a shot exactly this
    /// long after the previous one fires.
    pub fire_interval: Duration,

    /// Recoil and shake kicked into the ship by one shot.
    pub recoil: f32,
    pub shake: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            step: 4.0,
            far_depth: -150.0,
            fire_interval: Duration::from_millis(140),
            recoil: 3.0,
            shake: 1.5,
        }
    }
}
