/// Gameplay tuning for enemies.

#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    /// Chance of one spawn per tick.
    pub spawn_chance: f32,

    /// Spawns are suppressed while this many enemies are alive.
    pub max_alive: usize,

    /// Depth new enemies appear at.
    pub spawn_depth: f32,

    /// Spawn area relative to the visible slice.
    pub spawn_spread: f32,

    /// Distance moved toward the camera each tick.
    pub step: f32,

    /// Tumble in radians per tick around x and y.
    pub spin_x: f32,
    pub spin_y: f32,

    /// Bullet-to-enemy distance that counts as a hit.
    pub hit_radius: f32,

    /// Enemies past this depth have breached.
    pub breach_depth: f32,

    pub destroy_reward: i64,
    pub breach_penalty: i64,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            spawn_chance: 0.12,
            max_alive: 25,
            spawn_depth: -120.0,
            spawn_spread: 1.4,
            step: 1.05,
            spin_x: 0.08,
            spin_y: 0.1,
            hit_radius: 4.0,
            breach_depth: 25.0,
            destroy_reward: 750,
            breach_penalty: 500,
        }
    }
}
