use crate::domain::events::SimEvent;
use crate::domain::ports::RandomSource;
use crate::domain::state::{Enemy, EnemyKind, Vec3, WorldState};
use crate::domain::tuning::{EnemyTuning, Viewport};
use tracing::{debug, info};

/// Rolls for one spawn this tick. No spawn while the population cap is reached.
pub fn maybe_spawn(
    world: &mut WorldState,
    viewport: &Viewport,
    cfg: &EnemyTuning,
    rng: &mut impl RandomSource,
) -> Option<u64> {
    if rng.next_f32() >= cfg.spawn_chance || world.enemies.len() >= cfg.max_alive {
        return None;
    }

    let x = rng.spread(viewport.width() * cfg.spawn_spread);
    let y = rng.spread(viewport.height() * cfg.spawn_spread);
    let id = world.allocate_id();
    world.enemies.push(Enemy {
        id,
        kind: EnemyKind::Standard,
        position: Vec3::new(x, y, cfg.spawn_depth),
        rot_x: 0.0,
        rot_y: 0.0,
        spawned_tick: world.tick,
    });
    debug!(enemy_id = id, x, y, alive = world.enemies.len(), "enemy spawned");
    Some(id)
}

/// Advances enemies and resolves bullet hits and breaches, scoring each one as it happens.
///
/// Enemies and bullets are both scanned back to front; for each enemy the first bullet
/// found within `hit_radius` takes the hit (naive O(E*B), fine at these caps).
pub fn tick_enemies(world: &mut WorldState, cfg: &EnemyTuning, events: &mut Vec<SimEvent>) {
    for i in (0..world.enemies.len()).rev() {
        let enemy = &mut world.enemies[i];
        enemy.position.z += cfg.step;
        enemy.rot_x += cfg.spin_x;
        enemy.rot_y += cfg.spin_y;
        let position = enemy.position;
        let enemy_id = enemy.id;

        let hit = (0..world.bullets.len())
            .rev()
            .find(|&j| world.bullets[j].position.distance(&position) < cfg.hit_radius);

        if let Some(j) = hit {
            let bullet = world.bullets.remove(j);
            world.enemies.remove(i);
            world.score.apply(cfg.destroy_reward);
            info!(enemy_id, bullet_id = bullet.id, "enemy destroyed");
            events.push(SimEvent::EnemyDestroyed {
                enemy_id,
                bullet_id: bullet.id,
            });
        } else if position.z > cfg.breach_depth {
            world.enemies.remove(i);
            world.score.apply(-cfg.breach_penalty);
            info!(enemy_id, "enemy breached");
            events.push(SimEvent::EnemyBreached { enemy_id });
        }
    }
}

/// Removes every live enemy. Returns how many were cleared.
pub fn clear_all(world: &mut WorldState) -> usize {
    let cleared = world.enemies.len();
    world.enemies.clear();
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::{Bullet, Score};

    struct FixedRandom(f32);

    impl RandomSource for FixedRandom {
        fn next_f32(&mut self) -> f32 {
            self.0
        }
    }

    fn enemy_at(id: u64, z: f32) -> Enemy {
        Enemy {
            id,
            kind: EnemyKind::Standard,
            position: Vec3::new(0.0, 0.0, z),
            rot_x: 0.0,
            rot_y: 0.0,
            spawned_tick: 0,
        }
    }

    #[test]
    fn when_roll_is_below_chance_then_enemy_spawns_at_spawn_depth() {
        let mut world = WorldState::new();

        let spawned = maybe_spawn(
            &mut world,
            &Viewport::default(),
            &EnemyTuning::default(),
            &mut FixedRandom(0.0),
        );

        assert_eq!(spawned, Some(1));
        assert_eq!(world.enemies[0].position.z, -120.0);
        assert_eq!(world.enemies[0].kind, EnemyKind::Standard);
    }

    #[test]
    fn when_roll_is_above_chance_then_nothing_spawns() {
        let mut world = WorldState::new();

        let spawned = maybe_spawn(
            &mut world,
            &Viewport::default(),
            &EnemyTuning::default(),
            &mut FixedRandom(0.5),
        );

        assert_eq!(spawned, None);
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn when_population_cap_is_reached_then_spawn_is_suppressed() {
        let mut world = WorldState::new();
        world.enemies = (0..25).map(|id| enemy_at(id, -100.0)).collect();

        let spawned = maybe_spawn(
            &mut world,
            &Viewport::default(),
            &EnemyTuning::default(),
            &mut FixedRandom(0.0),
        );

        assert_eq!(spawned, None);
        assert_eq!(world.enemies.len(), 25);
    }

    #[test]
    fn when_bullet_is_within_hit_radius_then_both_are_removed() {
        let mut world = WorldState::new();
        world.enemies.push(enemy_at(7, -42.0));
        world.bullets.push(Bullet {
            id: 3,
            position: Vec3::new(0.0, 0.0, -40.0),
        });
        let mut events = Vec::new();

        tick_enemies(&mut world, &EnemyTuning::default(), &mut events);

        assert_eq!(world.score.value(), 750);
        assert!(world.enemies.is_empty());
        assert!(world.bullets.is_empty());
        assert_eq!(
            events,
            vec![SimEvent::EnemyDestroyed {
                enemy_id: 7,
                bullet_id: 3
            }]
        );
    }

    #[test]
    fn when_two_bullets_are_in_range_then_last_in_collection_takes_the_hit() {
        let mut world = WorldState::new();
        world.enemies.push(enemy_at(7, -42.0));
        world.bullets.push(Bullet {
            id: 1,
            position: Vec3::new(0.0, 0.0, -41.0),
        });
        world.bullets.push(Bullet {
            id: 2,
            position: Vec3::new(0.0, 0.0, -38.0),
        });
        let mut events = Vec::new();

        tick_enemies(&mut world, &EnemyTuning::default(), &mut events);

        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].id, 1);
    }

    #[test]
    fn when_enemy_crosses_near_boundary_then_it_breaches() {
        let mut world = WorldState::new();
        world.enemies.push(enemy_at(4, 24.5));
        world.score = Score::new(1200);
        let mut events = Vec::new();

        tick_enemies(&mut world, &EnemyTuning::default(), &mut events);

        assert_eq!(world.score.value(), 700);
        assert!(world.enemies.is_empty());
        assert_eq!(events, vec![SimEvent::EnemyBreached { enemy_id: 4 }]);
    }

    #[test]
    fn when_breach_precedes_a_kill_at_zero_score_then_floor_applies_per_event() {
        let mut world = WorldState::new();
        // Scanned back to front: the breaching enemy is handled first.
        world.enemies.push(enemy_at(1, -42.0));
        world.enemies.push(enemy_at(2, 24.5));
        world.bullets.push(Bullet {
            id: 9,
            position: Vec3::new(0.0, 0.0, -40.0),
        });
        let mut events = Vec::new();

        tick_enemies(&mut world, &EnemyTuning::default(), &mut events);

        assert_eq!(world.score.value(), 750);
        assert!(matches!(events[0], SimEvent::EnemyBreached { enemy_id: 2 }));
        assert!(matches!(events[1], SimEvent::EnemyDestroyed { enemy_id: 1, .. }));
    }

    #[test]
    fn when_enemy_advances_then_it_tumbles() {
        let mut world = WorldState::new();
        world.enemies.push(enemy_at(1, -100.0));
        let mut events = Vec::new();

        tick_enemies(&mut world, &EnemyTuning::default(), &mut events);

        let enemy = &world.enemies[0];
        assert!((enemy.position.z - -98.95).abs() < 1e-4);
        assert!((enemy.rot_x - 0.08).abs() < 1e-6);
        assert!((enemy.rot_y - 0.1).abs() < 1e-6);
        assert!(events.is_empty());
    }
}
