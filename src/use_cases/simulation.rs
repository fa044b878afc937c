// Simulation tick: previous snapshot + hand signal in, next snapshot + events out.

use super::types::TickOutcome;
use crate::domain::systems::{enemies, movement, projectiles};
use crate::domain::tuning::Tuning;
use crate::domain::{HandSignal, RandomSource, SharedCooldown, SimEvent, SpecialGate, WorldState};
use std::time::Duration;
use tracing::info;

/// Advances the world by one tick.
///
/// Pure apart from the two ports: `rng` drives spawns and shake, `special` is the cooldown
/// that may be armed by a starfish. `now` must not go backwards between calls.
pub fn step(
    previous: &WorldState,
    signal: &HandSignal,
    now: Duration,
    tuning: &Tuning,
    special: &mut impl SpecialGate,
    rng: &mut impl RandomSource,
) -> TickOutcome {
    let mut world = previous.clone();
    let mut events = Vec::new();
    let score_before = world.score.value();
    world.tick += 1;

    movement::decay_feedback(&mut world, &tuning.player);
    movement::tick_player(&mut world, signal, &tuning.viewport, &tuning.player, rng);

    // Edge-triggered by the cooldown: only a Ready gate lets the starfish through.
    if signal.wants_special() && special.try_trigger() {
        let cleared = enemies::clear_all(&mut world);
        world
            .score
            .apply(cleared as i64 * tuning.special.reward_per_enemy);
        world.player.recoil = tuning.special.recoil;
        world.player.shake = tuning.special.shake;
        world.flash = 1.0;
        info!(cleared, "special triggered");
        events.push(SimEvent::SpecialTriggered { cleared });
    }
    world.flash *= tuning.special.flash_decay;

    if signal.fires() {
        projectiles::try_fire(&mut world, now, &tuning.projectile, &mut events);
    }

    projectiles::tick_bullets(&mut world.bullets, &tuning.projectile);
    enemies::maybe_spawn(&mut world, &tuning.viewport, &tuning.enemy, rng);
    enemies::tick_enemies(&mut world, &tuning.enemy, &mut events);

    let score_delta = world.score.value() as i64 - score_before as i64;

    TickOutcome {
        state: world,
        events,
        score_delta,
    }
}

/// Owns the current snapshot for hosts that tick one signal at a time.
pub struct Simulation<R> {
    state: WorldState,
    tuning: Tuning,
    cooldown: SharedCooldown,
    rng: R,
}

impl<R> Simulation<R>
where
    R: RandomSource,
{
    pub fn new(tuning: Tuning, cooldown: SharedCooldown, rng: R) -> Self {
        Self {
            state: WorldState::new(),
            tuning,
            cooldown,
            rng,
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn cooldown(&self) -> &SharedCooldown {
        &self.cooldown
    }

    /// Runs one tick and keeps the resulting snapshot.
    pub fn tick(&mut self, signal: &HandSignal, now: Duration) -> TickOutcome {
        let outcome = step(
            &self.state,
            signal,
            now,
            &self.tuning,
            &mut self.cooldown,
            &mut self.rng,
        );
        self.state = outcome.state.clone();
        outcome
    }
}
