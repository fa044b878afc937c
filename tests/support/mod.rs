// Shared fixtures for the integration tests: synthetic hands, scripted randomness and
// helpers for building worlds and frames.
#![allow(dead_code)]

use handspace::domain::landmarks::{
    INDEX_MCP, INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP, MIDDLE_TIP, PINKY_MCP, PINKY_TIP, RING_MCP,
    RING_TIP, THUMB_MCP, THUMB_TIP,
};
use handspace::domain::{Enemy, EnemyKind, HandSignal, Landmark, RandomSource, Vec3};

// Joints a fixture does not place sit on the wrist.
const WRIST_AT: (f32, f32) = (0.5, 0.9);

fn hand(points: &[(usize, (f32, f32))]) -> Vec<Landmark> {
    let mut hand = vec![Landmark::new(WRIST_AT.0, WRIST_AT.1, 0.0); LANDMARK_COUNT];
    for &(index, (x, y)) in points {
        hand[index] = Landmark::new(x, y, 0.0);
    }
    hand
}

const KNUCKLES: [(usize, (f32, f32)); 5] = [
    (THUMB_MCP, (0.4, 0.8)),
    (INDEX_MCP, (0.45, 0.7)),
    (MIDDLE_MCP, (0.5, 0.7)),
    (RING_MCP, (0.55, 0.7)),
    (PINKY_MCP, (0.6, 0.72)),
];

/// Every finger extended and spread wide.
pub fn open_hand() -> Vec<Landmark> {
    let mut points = KNUCKLES.to_vec();
    points.extend([
        (THUMB_TIP, (0.25, 0.7)),
        (INDEX_TIP, (0.4, 0.4)),
        (MIDDLE_TIP, (0.5, 0.35)),
        (RING_TIP, (0.6, 0.4)),
        (PINKY_TIP, (0.72, 0.5)),
    ]);
    hand(&points)
}

/// Open hand with the index tip brought onto the thumb tip.
pub fn pinch_hand() -> Vec<Landmark> {
    with_thumb_index_gap(0.02)
}

/// Open hand with the index tip placed `gap` to the right of the thumb tip.
pub fn with_thumb_index_gap(gap: f32) -> Vec<Landmark> {
    let mut hand = open_hand();
    let thumb = hand[THUMB_TIP];
    hand[INDEX_TIP] = Landmark::new(thumb.x + gap, thumb.y, thumb.z);
    hand
}

/// Fingertips curled back onto their knuckles.
pub fn fist() -> Vec<Landmark> {
    let mut points = KNUCKLES.to_vec();
    points.extend([
        (THUMB_TIP, (0.4, 0.8)),
        (INDEX_TIP, (0.45, 0.7)),
        (MIDDLE_TIP, (0.5, 0.7)),
        (RING_TIP, (0.55, 0.7)),
        (PINKY_TIP, (0.6, 0.72)),
    ]);
    hand(&points)
}

pub fn pinching() -> HandSignal {
    HandSignal {
        is_pinching: true,
        visible: true,
        ..HandSignal::hidden()
    }
}

pub fn starfish() -> HandSignal {
    HandSignal {
        is_starfish: true,
        visible: true,
        ..HandSignal::hidden()
    }
}

pub fn enemy_at(id: u64, x: f32, y: f32, z: f32) -> Enemy {
    Enemy {
        id,
        kind: EnemyKind::Standard,
        position: Vec3::new(x, y, z),
        rot_x: 0.0,
        rot_y: 0.0,
        spawned_tick: 0,
    }
}

/// Fails every spawn roll and keeps the ship steady.
pub struct NeverSpawn;

impl RandomSource for NeverSpawn {
    fn next_f32(&mut self) -> f32 {
        0.99
    }
}

/// Passes every spawn roll.
pub struct AlwaysSpawn;

impl RandomSource for AlwaysSpawn {
    fn next_f32(&mut self) -> f32 {
        0.0
    }
}

/// One JSON frame line as the tracker bridge would send it.
pub fn frame_line(t_ms: u64, landmarks: Option<&[Landmark]>) -> String {
    let landmarks = landmarks.map(|points| {
        points
            .iter()
            .map(|p| serde_json::json!({ "x": p.x, "y": p.y, "z": p.z }))
            .collect::<Vec<_>>()
    });
    serde_json::json!({ "t_ms": t_ms, "landmarks": landmarks }).to_string()
}
