// Use-case level inputs/outputs for the game loop.

use crate::domain::{Landmark, SimEvent, WorldState};
use crate::use_cases::stats::HudState;
use std::time::Duration;

/// One frame from the hand tracker.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Tracker timestamp; times lockstep ticks. Paced ticks use the task clock and ignore it.
    pub timestamp: Option<Duration>,
    /// `None` when the tracker saw no hand.
    pub landmarks: Option<Vec<Landmark>>,
}

/// Result of one tick: the new snapshot plus what happened during it.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub state: WorldState,
    pub events: Vec<SimEvent>,
    /// Net change actually applied to the score.
    pub score_delta: i64,
}

/// Everything downstream adapters need after a tick.
#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub state: WorldState,
    pub events: Vec<SimEvent>,
    pub score_delta: i64,
    pub hud: HudState,
}
