// Cooldown state machine for the special ability.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::domain::ports::SpecialGate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialPhase {
    Ready,
    Cooling,
}

/// Counts down from `max` to zero; zero means the special is ready.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    remaining: Duration,
    max: Duration,
}

impl Cooldown {
    /// Starts ready.
    pub fn new(max: Duration) -> Self {
        Self {
            remaining: Duration::ZERO,
            max,
        }
    }

    pub fn phase(&self) -> SpecialPhase {
        if self.remaining.is_zero() {
            SpecialPhase::Ready
        } else {
            SpecialPhase::Cooling
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == SpecialPhase::Ready
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// 0 when ready, 1 right after a trigger.
    pub fn fraction(&self) -> f32 {
        if self.max.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f32() / self.max.as_secs_f32()
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    /// Ready -> Cooling. Returns false and changes nothing while cooling.
    pub fn try_trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.remaining = self.max;
        true
    }
}

/// Cooldown shared between the timer task and the simulation tick.
///
/// The timer's decrement and the tick's check-and-reset run on different schedules,
/// so every access goes through one lock.
#[derive(Debug, Clone)]
pub struct SharedCooldown {
    inner: Arc<Mutex<Cooldown>>,
}

impl SharedCooldown {
    pub fn new(max: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Cooldown::new(max))),
        }
    }

    pub fn snapshot(&self) -> Cooldown {
        *self.lock()
    }

    pub fn advance(&self, elapsed: Duration) {
        self.lock().advance(elapsed);
    }

    fn lock(&self) -> MutexGuard<'_, Cooldown> {
        // The guarded value is plain data, so a poisoned lock still holds a usable cooldown.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SpecialGate for SharedCooldown {
    fn try_trigger(&mut self) -> bool {
        self.lock().try_trigger()
    }
}

impl SpecialGate for Cooldown {
    fn try_trigger(&mut self) -> bool {
        Cooldown::try_trigger(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_ready_then_trigger_resets_to_max() {
        let mut cooldown = Cooldown::new(Duration::from_secs(10));

        assert!(cooldown.try_trigger());
        assert_eq!(cooldown.remaining(), Duration::from_secs(10));
        assert_eq!(cooldown.phase(), SpecialPhase::Cooling);
    }

    #[test]
    fn when_cooling_then_trigger_is_a_no_op() {
        let mut cooldown = Cooldown::new(Duration::from_secs(10));
        cooldown.try_trigger();
        cooldown.advance(Duration::from_secs(4));

        assert!(!cooldown.try_trigger());
        assert_eq!(cooldown.remaining(), Duration::from_secs(6));
    }

    #[test]
    fn when_advanced_past_zero_then_remaining_stops_at_zero() {
        let mut cooldown = Cooldown::new(Duration::from_secs(10));
        cooldown.try_trigger();

        cooldown.advance(Duration::from_secs(25));

        assert!(cooldown.is_ready());
        assert_eq!(cooldown.fraction(), 0.0);
    }

    #[test]
    fn when_half_elapsed_then_fraction_is_one_half() {
        let mut cooldown = Cooldown::new(Duration::from_secs(10));
        cooldown.try_trigger();

        cooldown.advance(Duration::from_secs(5));

        assert!((cooldown.fraction() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn when_shared_handle_is_cloned_then_both_see_the_same_cooldown() {
        let mut sim_side = SharedCooldown::new(Duration::from_secs(10));
        let timer_side = sim_side.clone();

        assert!(sim_side.try_trigger());
        timer_side.advance(Duration::from_secs(3));

        assert_eq!(sim_side.snapshot().remaining(), Duration::from_secs(7));
    }
}
