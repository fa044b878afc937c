use std::time::Duration;

/// Gameplay tuning for the area-clear special.

#[derive(Debug, Clone, Copy)]
pub struct SpecialTuning {
    /// Time the special stays unavailable after a trigger.
    pub cooldown: Duration,

    /// Score per enemy cleared.
    pub reward_per_enemy: i64,

    pub recoil: f32,
    pub shake: f32,

    /// Screen flash decay per tick after the special fires at full intensity.
    pub flash_decay: f32,
}

impl Default for SpecialTuning {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(10),
            reward_per_enemy: 1500,
            recoil: 25.0,
            shake: 8.0,
            flash_decay: 0.8,
        }
    }
}
