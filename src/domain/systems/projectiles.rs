use crate::domain::events::SimEvent;
use crate::domain::state::{Bullet, WorldState};
use crate::domain::tuning::ProjectileTuning;
use std::time::Duration;
use tracing::debug;

/// Fires one bullet from the ship if the fire-rate limiter allows it.
///
/// Holding the pinch keeps firing at `fire_interval`.
pub fn try_fire(
    world: &mut WorldState,
    now: Duration,
    cfg: &ProjectileTuning,
    events: &mut Vec<SimEvent>,
) -> bool {
    let ready = match world.last_shot {
        Some(last) => now.saturating_sub(last) >= cfg.fire_interval,
        None => true,
    };
    if !ready {
        return false;
    }

    let bullet_id = world.allocate_id();
    world.bullets.push(Bullet {
        id: bullet_id,
        position: world.player.position,
    });
    world.last_shot = Some(now);
    world.player.recoil = cfg.recoil;
    world.player.shake = cfg.shake;

    debug!(bullet_id, now_ms = now.as_millis() as u64, "shot fired");
    events.push(SimEvent::ShotFired { bullet_id });
    true
}

/// Moves bullets away from the camera and drops the ones past the far depth.
pub fn tick_bullets(bullets: &mut Vec<Bullet>, cfg: &ProjectileTuning) {
    // Backward scan keeps indices valid while removing.
    for i in (0..bullets.len()).rev() {
        bullets[i].position.z -= cfg.step;
        if bullets[i].position.z < cfg.far_depth {
            bullets.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::Vec3;

    #[test]
    fn when_no_shot_was_fired_yet_then_first_pinch_fires() {
        let mut world = WorldState::new();
        let mut events = Vec::new();

        let fired = try_fire(
            &mut world,
            Duration::ZERO,
            &ProjectileTuning::default(),
            &mut events,
        );

        assert!(fired);
        assert_eq!(world.bullets.len(), 1);
        assert_eq!(events, vec![SimEvent::ShotFired { bullet_id: 1 }]);
        assert_eq!(world.player.recoil, 3.0);
    }

    #[test]
    fn when_second_attempt_is_within_interval_then_it_is_rejected() {
        let mut world = WorldState::new();
        let mut events = Vec::new();
        let cfg = ProjectileTuning::default();

        try_fire(&mut world, Duration::from_millis(1000), &cfg, &mut events);
        let fired = try_fire(&mut world, Duration::from_millis(1139), &cfg, &mut events);

        assert!(!fired);
        assert_eq!(world.bullets.len(), 1);
    }

    #[test]
    fn when_second_attempt_is_exactly_one_interval_later_then_it_fires() {
        let mut world = WorldState::new();
        let mut events = Vec::new();
        let cfg = ProjectileTuning::default();

        try_fire(&mut world, Duration::from_millis(1000), &cfg, &mut events);
        let fired = try_fire(&mut world, Duration::from_millis(1140), &cfg, &mut events);

        assert!(fired);
        assert_eq!(world.bullets.len(), 2);
    }

    #[test]
    fn when_bullet_passes_far_depth_then_it_is_culled() {
        let cfg = ProjectileTuning::default();
        let mut bullets = vec![
            Bullet {
                id: 1,
                position: Vec3::new(0.0, 0.0, -147.0),
            },
            Bullet {
                id: 2,
                position: Vec3::new(0.0, 0.0, -10.0),
            },
        ];

        tick_bullets(&mut bullets, &cfg);

        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].id, 2);
        assert_eq!(bullets[0].position.z, -14.0);
    }
}
