// Per-entity update rules applied by the tick function.

pub mod enemies;
pub mod movement;
pub mod projectiles;
