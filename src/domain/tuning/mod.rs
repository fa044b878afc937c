// Gameplay tuning, kept apart from runtime configuration (tick rate, channel sizes).

pub mod enemy;
pub mod gesture;
pub mod player;
pub mod projectile;
pub mod special;
pub mod viewport;

pub use enemy::EnemyTuning;
pub use gesture::GestureTuning;
pub use player::PlayerTuning;
pub use projectile::ProjectileTuning;
pub use special::SpecialTuning;
pub use viewport::Viewport;

/// All gameplay tuning the tick function reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub enemy: EnemyTuning,
    pub special: SpecialTuning,
    pub viewport: Viewport,
}
