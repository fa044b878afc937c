// Domain-level simulation entities and the per-tick world snapshot.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Vec3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Player {
    pub position: Vec3,
    pub rot_z: f32,

    // Feedback scalars; decay every tick.
    pub recoil: f32,
    pub shake: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: u64,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Standard,
}

impl EnemyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Standard => "standard",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u64,
    pub kind: EnemyKind,
    pub position: Vec3,
    pub rot_x: f32,
    pub rot_y: f32,
    pub spawned_tick: u64,
}

/// Aim marker in front of the ship, only present while a hand is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Reticle {
    pub position: Vec3,
    pub spin: f32,
}

/// Score accumulator that never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score(u64);

impl Score {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Applies a signed delta, flooring at zero. Returns the change actually applied.
    pub fn apply(&mut self, delta: i64) -> i64 {
        let before = self.0;
        self.0 = before.saturating_add_signed(delta);
        self.0 as i64 - before as i64
    }
}

/// Complete simulation state after a tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldState {
    pub tick: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub reticle: Option<Reticle>,
    // Spin survives while the reticle is hidden.
    pub reticle_spin: f32,
    pub laser_opacity: f32,
    pub flash: f32,
    pub score: Score,
    pub last_shot: Option<Duration>,
    pub next_entity_id: u64,
}

impl WorldState {
    pub fn new() -> Self {
        Self {
            next_entity_id: 1,
            ..Self::default()
        }
    }

    pub(crate) fn allocate_id(&mut self) -> u64 {
        let id = self.next_entity_id;
        self.next_entity_id = self.next_entity_id.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_penalty_exceeds_score_then_score_floors_at_zero() {
        let mut score = Score::new(300);

        let applied = score.apply(-500);

        assert_eq!(score.value(), 0);
        assert_eq!(applied, -300);
    }

    #[test]
    fn when_reward_is_applied_then_full_delta_is_reported() {
        let mut score = Score::default();

        let applied = score.apply(4500);

        assert_eq!(score.value(), 4500);
        assert_eq!(applied, 4500);
    }

    #[test]
    fn when_ids_are_allocated_then_they_increase_from_one() {
        let mut world = WorldState::new();

        assert_eq!(world.allocate_id(), 1);
        assert_eq!(world.allocate_id(), 2);
    }
}
