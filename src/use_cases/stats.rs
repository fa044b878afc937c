// Observational counters for the HUD. Not part of gameplay correctness.

use crate::domain::{Cooldown, HandSignal, WorldState};
use std::time::Duration;

const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Counts events per one-second window.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    count: u32,
    window_start: Duration,
    last_rate: u32,
}

impl FpsCounter {
    /// Records one event at `now`; publishes the count once a full window has passed.
    pub fn record(&mut self, now: Duration) -> u32 {
        self.count += 1;
        if now.saturating_sub(self.window_start) > FPS_WINDOW {
            self.last_rate = self.count;
            self.count = 0;
            self.window_start = now;
        }
        self.last_rate
    }

    pub fn rate(&self) -> u32 {
        self.last_rate
    }
}

/// Frame-level bookkeeping the world task keeps next to the simulation.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub inference: FpsCounter,
    pub render: FpsCounter,
    pub hands_ready: bool,
    pub last_hand_time: Option<Duration>,
}

impl FrameStats {
    pub fn record_frame(&mut self, now: Duration, signal: &HandSignal) {
        self.hands_ready = true;
        self.inference.record(now);
        if signal.visible {
            self.last_hand_time = Some(now);
        }
    }

    pub fn record_tick(&mut self, now: Duration) {
        self.render.record(now);
    }
}

/// What the HUD shows after a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct HudState {
    pub score: u64,
    pub special_ready: bool,
    /// 1.0 right after the special fires, 0.0 when ready.
    pub cooldown_fraction: f32,
    pub is_pinching: bool,
    pub is_starfish: bool,
    pub enemy_count: usize,
    pub last_shot: Option<Duration>,
    pub inference_fps: u32,
    pub render_fps: u32,
    pub hands_ready: bool,
    pub last_hand_time: Option<Duration>,
}

impl HudState {
    pub fn build(
        world: &WorldState,
        signal: &HandSignal,
        cooldown: &Cooldown,
        stats: &FrameStats,
    ) -> Self {
        Self {
            score: world.score.value(),
            special_ready: cooldown.is_ready(),
            cooldown_fraction: cooldown.fraction(),
            is_pinching: signal.is_pinching,
            is_starfish: signal.is_starfish,
            enemy_count: world.enemies.len(),
            last_shot: world.last_shot,
            inference_fps: stats.inference.rate(),
            render_fps: stats.render.rate(),
            hands_ready: stats.hands_ready,
            last_hand_time: stats.last_hand_time,
        }
    }
}
