use super::classifier::classify;
use super::fanout::WorldFanout;
use super::simulation::Simulation;
use super::stats::{FrameStats, HudState};
use super::types::{FrameInput, WorldUpdate};
use crate::domain::tuning::GestureTuning;
use crate::domain::{HandSignal, RandomSource, SharedCooldown, WorldState};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// How ticks are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMode {
    /// One tick per inbound frame, timed by the frame's own timestamp.
    Lockstep,
    /// Fixed-rate ticks using the most recent signal, independent of frame arrival.
    Paced { interval: Duration },
}

/// Inputs the world task is started with.
pub struct WorldTaskSettings {
    pub mode: TickMode,
    pub gesture: GestureTuning,
    /// Stop after this many ticks (headless runs).
    pub max_ticks: Option<u64>,
}

struct WorldLoop<R> {
    simulation: Simulation<R>,
    gesture: GestureTuning,
    outlet: WorldFanout,
    stats: FrameStats,
    signal: HandSignal,
    started: Instant,
    last_now: Duration,
}

impl<R> WorldLoop<R>
where
    R: RandomSource,
{
    // `now` comes from the frame in lockstep and from the task clock when paced.
    fn accept_frame(&mut self, frame: &FrameInput, now: Duration) {
        self.signal = classify(frame.landmarks.as_deref(), &self.gesture);
        self.stats.record_frame(now, &self.signal);
    }

    // Timestamps are clamped so the fire-rate limiter never sees time go backwards.
    fn clock(&mut self, timestamp: Option<Duration>) -> Duration {
        let now = timestamp.unwrap_or_else(|| self.started.elapsed());
        if now < self.last_now {
            warn!(
                now_ms = now.as_millis() as u64,
                last_ms = self.last_now.as_millis() as u64,
                "non-monotonic timestamp; holding clock"
            );
            return self.last_now;
        }
        self.last_now = now;
        now
    }

    async fn tick(&mut self, now: Duration) -> u64 {
        let outcome = self.simulation.tick(&self.signal, now);
        self.stats.record_tick(now);

        let cooldown = self.simulation.cooldown().snapshot();
        let hud = HudState::build(&outcome.state, &self.signal, &cooldown, &self.stats);
        let tick = outcome.state.tick;

        if !outcome.events.is_empty() {
            debug!(tick, events = outcome.events.len(), score = hud.score, "tick events");
        }

        // Waits on slow consumers so no update or cue is dropped.
        self.outlet
            .publish(WorldUpdate {
                state: outcome.state,
                events: outcome.events,
                score_delta: outcome.score_delta,
                hud,
            })
            .await;
        tick
    }
}

/// Runs the game loop until input ends, `max_ticks` is reached or shutdown is signalled.
///
/// Returns the final world snapshot.
pub async fn world_task<R>(
    mut frame_rx: mpsc::Receiver<FrameInput>,
    outlet: WorldFanout,
    simulation: Simulation<R>,
    settings: WorldTaskSettings,
    mut shutdown: watch::Receiver<bool>,
) -> WorldState
where
    R: RandomSource,
{
    let mut world = WorldLoop {
        simulation,
        gesture: settings.gesture,
        outlet,
        stats: FrameStats::default(),
        signal: HandSignal::hidden(),
        started: Instant::now(),
        last_now: Duration::ZERO,
    };

    // Lockstep never uses the interval, but select! needs a concrete future either way.
    let period = match settings.mode {
        TickMode::Paced { interval } => interval,
        TickMode::Lockstep => Duration::from_secs(3600),
    };
    let paced = matches!(settings.mode, TickMode::Paced { .. });
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(mode = ?settings.mode, "world task started");

    loop {
        let tick = tokio::select! {
            Ok(()) = shutdown.changed() => {
                info!("shutdown requested");
                break;
            }
            frame = frame_rx.recv() => {
                let Some(frame) = frame else {
                    info!("frame input closed");
                    break;
                };
                if paced {
                    // Tracker timestamps never reach the paced clock.
                    let now = world.clock(None);
                    world.accept_frame(&frame, now);
                    continue;
                }
                let now = world.clock(frame.timestamp);
                world.accept_frame(&frame, now);
                world.tick(now).await
            }
            _ = interval.tick(), if paced => {
                let now = world.clock(None);
                world.tick(now).await
            }
        };

        if settings.max_ticks.is_some_and(|max| tick >= max) {
            info!(tick, "tick limit reached");
            break;
        }
    }

    let state = world.simulation.state().clone();
    info!(
        ticks = state.tick,
        score = state.score.value(),
        "world task finished"
    );
    state
}

/// Drives the special cooldown on its own fixed-rate schedule.
///
/// Keeps counting down regardless of how often (or whether) the world ticks.
pub async fn cooldown_timer_task(
    cooldown: SharedCooldown,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    loop {
        tokio::select! {
            Ok(()) = shutdown.changed() => break,
            _ = interval.tick() => {
                let now = Instant::now();
                cooldown.advance(now - last);
                last = now;
            }
        }
    }
    debug!("cooldown timer stopped");
}
