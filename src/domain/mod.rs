// Domain layer: core simulation types and rules.

pub mod cooldown;
pub mod errors;
pub mod events;
pub mod landmarks;
pub mod ports;
pub mod signal;
pub mod state;
pub mod systems;
pub mod tuning;

pub use cooldown::{Cooldown, SharedCooldown, SpecialPhase};
pub use errors::LandmarkError;
pub use events::SimEvent;
pub use landmarks::{Landmark, LandmarkSet};
pub use ports::{RandomSource, SpecialGate};
pub use signal::HandSignal;
pub use state::{Bullet, Enemy, EnemyKind, Player, Reticle, Score, Vec3, WorldState};
