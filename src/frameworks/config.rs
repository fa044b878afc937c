use crate::use_cases::TickMode;
use std::{env, path::PathBuf, time::Duration};

// Runtime/host constants (not gameplay tuning).

pub const FRAME_CHANNEL_CAPACITY: usize = 256;
// Per consumer; a full queue holds the world task back instead of dropping updates.
pub const WORLD_UPDATE_CAPACITY: usize = 128;
pub const OUTPUT_CHANNEL_CAPACITY: usize = 512;

// Fixed rate of the special cooldown timer, independent of the tick rate.
pub const COOLDOWN_TIMER_INTERVAL: Duration = Duration::from_millis(1000 / 60);

const DEFAULT_TICK_RATE_HZ: u32 = 60;
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

pub fn tick_mode() -> TickMode {
    match env::var("HANDSPACE_TICK_MODE").as_deref() {
        Ok("paced") => TickMode::Paced {
            interval: tick_interval(),
        },
        _ => TickMode::Lockstep,
    }
}

pub fn tick_interval() -> Duration {
    let hz = env::var("HANDSPACE_TICK_RATE_HZ")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|hz| *hz > 0)
        .unwrap_or(DEFAULT_TICK_RATE_HZ);
    Duration::from_secs(1) / hz
}

pub fn aspect_ratio() -> f32 {
    env::var("HANDSPACE_ASPECT")
        .ok()
        .and_then(|v| parse_aspect(&v))
        .unwrap_or(DEFAULT_ASPECT)
}

pub fn rng_seed() -> Option<u64> {
    env::var("HANDSPACE_SEED").ok().and_then(|v| v.parse().ok())
}

pub fn max_ticks() -> Option<u64> {
    env::var("HANDSPACE_MAX_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
}

/// `None` means stdin.
pub fn input_path() -> Option<PathBuf> {
    match env::var("HANDSPACE_INPUT") {
        Ok(path) if !path.is_empty() && path != "-" => Some(PathBuf::from(path)),
        _ => None,
    }
}

// Accepts "1.777" or "16:9".
fn parse_aspect(value: &str) -> Option<f32> {
    let aspect = match value.split_once(':') {
        Some((w, h)) => w.trim().parse::<f32>().ok()? / h.trim().parse::<f32>().ok()?,
        None => value.trim().parse::<f32>().ok()?,
    };
    (aspect.is_finite() && aspect > 0.0).then_some(aspect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_aspect_is_a_ratio_then_it_is_divided() {
        let aspect = parse_aspect("4:3").expect("expected a valid ratio");

        assert!((aspect - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn when_aspect_is_zero_or_garbage_then_it_is_rejected() {
        assert_eq!(parse_aspect("0"), None);
        assert_eq!(parse_aspect("16:0"), None);
        assert_eq!(parse_aspect("wide"), None);
    }
}
