/// Gameplay tuning for the player ship.
///
/// All factors are applied once per tick; they are not scaled by elapsed time.

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Fraction of the remaining distance to the aim target covered each tick.
    pub follow_factor: f32,

    /// How far past the visible slice the hand can steer the ship.
    pub reach: f32,

    /// Banking angle per world unit of lag behind the target.
    pub bank_factor: f32,

    /// Multiplicative decay applied to recoil and shake each tick.
    pub recoil_decay: f32,

    /// Reticle position relative to the ship, scaled outward.
    pub reticle_scale: f32,

    /// Depth the reticle floats at.
    pub reticle_depth: f32,

    /// Reticle spin in radians per tick.
    pub reticle_spin: f32,

    /// Laser opacity while firing / idle.
    pub laser_active_opacity: f32,
    pub laser_idle_opacity: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            follow_factor: 0.4,
            reach: 1.6,
            bank_factor: 0.25,
            recoil_decay: 0.85,
            reticle_scale: 1.8,
            reticle_depth: -50.0,
            reticle_spin: 0.05,
            laser_active_opacity: 0.9,
            laser_idle_opacity: 0.05,
        }
    }
}
