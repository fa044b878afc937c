// Ports the simulation depends on; adapters supply the implementations.

/// Source of uniform random numbers in [0, 1).
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;

    /// Uniform value in (-range / 2, range / 2].
    fn spread(&mut self, range: f32) -> f32 {
        range * (0.5 - self.next_f32())
    }
}

/// Gate the special ability goes through; the cooldown decides whether it may fire.
pub trait SpecialGate {
    /// Returns true and arms the cooldown when the special is ready.
    fn try_trigger(&mut self) -> bool;
}
