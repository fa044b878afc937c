use crate::domain::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

fn now_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// `rand`-backed source for spawn rolls and ship shake.
///
/// A fixed seed reproduces spawn positions and shake for a given tick sequence. Whole sessions
/// can still differ: the special's cooldown runs on wall-clock time, so replay speed decides
/// when it is ready again.
pub struct GameRng {
    seed: u64,
    rng: StdRng,
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the clock when no seed is configured.
    pub fn from_config(seed: Option<u64>) -> Self {
        Self::seeded(seed.unwrap_or_else(now_nanos))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_f32(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }
}
