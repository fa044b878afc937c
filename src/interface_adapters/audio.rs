// Audio adapter: turns simulation events into synth cues for the external audio engine.
//
// The core never touches audio. This adapter is created once per session, listens on the
// world update stream and is torn down explicitly (or on drop).

use crate::domain::SimEvent;
use crate::interface_adapters::protocol::{HostMessage, SoundCueDto};
use crate::use_cases::WorldUpdate;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Sawtooth,
}

impl Waveform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
        }
    }
}

/// How frequency and gain move from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    Linear,
    Exponential,
}

impl Ramp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ramp::Linear => "linear",
            Ramp::Exponential => "exponential",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoundCue {
    pub name: &'static str,
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub ramp: Ramp,
    pub gain: f32,
    pub duration: Duration,
}

/// Cue for an event, or `None` for silent events (breaches).
pub fn cue_for(event: &SimEvent) -> Option<SoundCue> {
    match event {
        SimEvent::ShotFired { .. } => Some(SoundCue {
            name: "shoot",
            waveform: Waveform::Square,
            start_hz: 700.0,
            end_hz: 120.0,
            ramp: Ramp::Exponential,
            gain: 0.1,
            duration: Duration::from_millis(80),
        }),
        SimEvent::EnemyDestroyed { .. } => Some(SoundCue {
            name: "explosion",
            waveform: Waveform::Sawtooth,
            start_hz: 200.0,
            end_hz: 10.0,
            ramp: Ramp::Linear,
            gain: 0.3,
            duration: Duration::from_millis(500),
        }),
        SimEvent::SpecialTriggered { .. } => Some(SoundCue {
            name: "mega",
            waveform: Waveform::Sawtooth,
            start_hz: 100.0,
            end_hz: 5.0,
            ramp: Ramp::Linear,
            gain: 0.7,
            duration: Duration::from_millis(2500),
        }),
        SimEvent::EnemyBreached { .. } => None,
    }
}

/// Owns the task that forwards sound cues to the output stream.
pub struct AudioAdapter {
    task: Option<JoinHandle<u64>>,
}

impl AudioAdapter {
    pub fn spawn(world_rx: mpsc::Receiver<WorldUpdate>, out_tx: mpsc::Sender<String>) -> Self {
        Self {
            task: Some(tokio::spawn(forward_cues(world_rx, out_tx))),
        }
    }

    /// Waits for the cue stream to drain after the world updates close.
    /// Returns the number of cues emitted.
    pub async fn shutdown(mut self) -> u64 {
        let Some(task) = self.task.take() else {
            return 0;
        };
        match task.await {
            Ok(emitted) => emitted,
            Err(e) => {
                error!(error = %e, "audio adapter task failed");
                0
            }
        }
    }
}

impl Drop for AudioAdapter {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn forward_cues(
    mut world_rx: mpsc::Receiver<WorldUpdate>,
    out_tx: mpsc::Sender<String>,
) -> u64 {
    let mut emitted = 0;
    while let Some(update) = world_rx.recv().await {
        for cue in update.events.iter().filter_map(cue_for) {
            let msg = HostMessage::Sound(SoundCueDto::from(&cue));
            let txt = match serde_json::to_string(&msg) {
                Ok(txt) => txt,
                Err(e) => {
                    error!(error = ?e, "failed to serialize sound cue");
                    continue;
                }
            };
            if out_tx.send(txt).await.is_err() {
                debug!("output closed; audio adapter exiting");
                return emitted;
            }
            emitted += 1;
        }
    }
    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorldState;
    use crate::use_cases::HudState;

    fn update_with(events: Vec<SimEvent>) -> WorldUpdate {
        let state = WorldState::new();
        WorldUpdate {
            hud: HudState {
                score: 0,
                special_ready: true,
                cooldown_fraction: 0.0,
                is_pinching: false,
                is_starfish: false,
                enemy_count: 0,
                last_shot: None,
                inference_fps: 0,
                render_fps: 0,
                hands_ready: false,
                last_hand_time: None,
            },
            state,
            events,
            score_delta: 0,
        }
    }

    #[test]
    fn when_enemy_breaches_then_no_cue_is_played() {
        assert!(cue_for(&SimEvent::EnemyBreached { enemy_id: 1 }).is_none());
    }

    #[test]
    fn when_special_fires_then_cue_is_the_long_sawtooth_sweep() {
        let cue = cue_for(&SimEvent::SpecialTriggered { cleared: 3 }).expect("expected a cue");

        assert_eq!(cue.name, "mega");
        assert_eq!(cue.waveform, Waveform::Sawtooth);
        assert_eq!(cue.duration, Duration::from_millis(2500));
    }

    #[tokio::test]
    async fn when_updates_carry_events_then_adapter_writes_one_line_per_cue() {
        let (world_tx, world_rx) = mpsc::channel(8);
        let (out_tx, mut out_rx) = mpsc::channel(8);
        let adapter = AudioAdapter::spawn(world_rx, out_tx);

        world_tx
            .send(update_with(vec![
                SimEvent::ShotFired { bullet_id: 1 },
                SimEvent::EnemyBreached { enemy_id: 2 },
                SimEvent::EnemyDestroyed {
                    enemy_id: 3,
                    bullet_id: 1,
                },
            ]))
            .await
            .expect("adapter subscribed");
        drop(world_tx);

        assert_eq!(adapter.shutdown().await, 2);
        let first = out_rx.recv().await.expect("expected a cue line");
        let json: serde_json::Value = serde_json::from_str(&first).expect("valid json");
        assert_eq!(json["type"], "Sound");
        assert_eq!(json["data"]["cue"], "shoot");
    }
}
