// Wire protocol DTOs and conversions for the stdio host.
// One JSON document per line in both directions.

use crate::domain::{Bullet, Enemy, Landmark, Player, Reticle, SimEvent};
use crate::interface_adapters::audio::SoundCue;
use crate::use_cases::{FrameInput, HudState, WorldUpdate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Messages the host writes to stdout.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum HostMessage {
    // Snapshot of the world for a given tick.
    WorldUpdate(WorldUpdateDto),
    // Synth instruction for one audio event.
    Sound(SoundCueDto),
}

/// One hand-tracker frame read from stdin.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameDto {
    /// Host timestamp in milliseconds.
    #[serde(default)]
    pub t_ms: Option<f64>,
    /// Absent, null or empty when no hand was detected.
    #[serde(default)]
    pub landmarks: Option<Vec<LandmarkDto>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LandmarkDto {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl From<LandmarkDto> for Landmark {
    fn from(dto: LandmarkDto) -> Self {
        Landmark::new(dto.x, dto.y, dto.z)
    }
}

impl From<FrameDto> for FrameInput {
    fn from(frame: FrameDto) -> Self {
        let timestamp = frame
            .t_ms
            .filter(|ms| ms.is_finite() && *ms >= 0.0)
            .map(|ms| Duration::from_micros((ms * 1000.0).round() as u64));
        let landmarks = frame
            .landmarks
            .filter(|points| !points.is_empty())
            .map(|points| points.into_iter().map(Landmark::from).collect());
        Self {
            timestamp,
            landmarks,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Vec3Dto {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<crate::domain::Vec3> for Vec3Dto {
    fn from(v: crate::domain::Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Snapshot of the world sent to the renderer and HUD on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub player: PlayerDto,
    pub bullets: Vec<BulletDto>,
    pub enemies: Vec<EnemyDto>,
    pub reticle: Option<ReticleDto>,
    pub laser_opacity: f32,
    pub flash: f32,
    pub score: u64,
    pub score_delta: i64,
    pub events: Vec<EventDto>,
    pub hud: HudDto,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        let state = update.state;
        Self {
            tick: state.tick,
            player: PlayerDto::from(&state.player),
            bullets: state.bullets.iter().map(BulletDto::from).collect(),
            enemies: state.enemies.iter().map(EnemyDto::from).collect(),
            reticle: state.reticle.as_ref().map(ReticleDto::from),
            laser_opacity: state.laser_opacity,
            flash: state.flash,
            score: state.score.value(),
            score_delta: update.score_delta,
            events: update.events.iter().map(EventDto::from).collect(),
            hud: HudDto::from(&update.hud),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub position: Vec3Dto,
    pub rot_z: f32,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            position: player.position.into(),
            rot_z: player.rot_z,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletDto {
    pub id: u64,
    pub position: Vec3Dto,
}

impl From<&Bullet> for BulletDto {
    fn from(bullet: &Bullet) -> Self {
        Self {
            id: bullet.id,
            position: bullet.position.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyDto {
    pub id: u64,
    pub kind: &'static str,
    pub position: Vec3Dto,
    pub rot_x: f32,
    pub rot_y: f32,
}

impl From<&Enemy> for EnemyDto {
    fn from(enemy: &Enemy) -> Self {
        Self {
            id: enemy.id,
            kind: enemy.kind.as_str(),
            position: enemy.position.into(),
            rot_x: enemy.rot_x,
            rot_y: enemy.rot_y,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReticleDto {
    pub position: Vec3Dto,
    pub spin: f32,
}

impl From<&Reticle> for ReticleDto {
    fn from(reticle: &Reticle) -> Self {
        Self {
            position: reticle.position.into(),
            spin: reticle.spin,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum EventDto {
    ShotFired { bullet_id: u64 },
    EnemyDestroyed { enemy_id: u64, bullet_id: u64 },
    EnemyBreached { enemy_id: u64 },
    SpecialTriggered { cleared: usize },
}

impl From<&SimEvent> for EventDto {
    fn from(event: &SimEvent) -> Self {
        match *event {
            SimEvent::ShotFired { bullet_id } => EventDto::ShotFired { bullet_id },
            SimEvent::EnemyDestroyed {
                enemy_id,
                bullet_id,
            } => EventDto::EnemyDestroyed {
                enemy_id,
                bullet_id,
            },
            SimEvent::EnemyBreached { enemy_id } => EventDto::EnemyBreached { enemy_id },
            SimEvent::SpecialTriggered { cleared } => EventDto::SpecialTriggered { cleared },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HudDto {
    pub score: u64,
    pub special_ready: bool,
    pub cooldown_fraction: f32,
    pub is_pinching: bool,
    pub is_starfish: bool,
    pub enemy_count: usize,
    pub last_shot_ms: Option<u64>,
    pub inference_fps: u32,
    pub render_fps: u32,
    pub hands_ready: bool,
    pub last_hand_ms: Option<u64>,
}

impl From<&HudState> for HudDto {
    fn from(hud: &HudState) -> Self {
        Self {
            score: hud.score,
            special_ready: hud.special_ready,
            cooldown_fraction: hud.cooldown_fraction,
            is_pinching: hud.is_pinching,
            is_starfish: hud.is_starfish,
            enemy_count: hud.enemy_count,
            last_shot_ms: hud.last_shot.map(|t| t.as_millis() as u64),
            inference_fps: hud.inference_fps,
            render_fps: hud.render_fps,
            hands_ready: hud.hands_ready,
            last_hand_ms: hud.last_hand_time.map(|t| t.as_millis() as u64),
        }
    }
}

/// Synth instruction for the audio collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct SoundCueDto {
    pub cue: &'static str,
    pub waveform: &'static str,
    pub start_hz: f32,
    pub end_hz: f32,
    pub ramp: &'static str,
    pub gain: f32,
    pub duration_ms: u64,
}

impl From<&SoundCue> for SoundCueDto {
    fn from(cue: &SoundCue) -> Self {
        Self {
            cue: cue.name,
            waveform: cue.waveform.as_str(),
            start_hz: cue.start_hz,
            end_hz: cue.end_hz,
            ramp: cue.ramp.as_str(),
            gain: cue.gain,
            duration_ms: cue.duration.as_millis() as u64,
        }
    }
}
