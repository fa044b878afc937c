use crate::domain::ports::RandomSource;
use crate::domain::state::{Reticle, Vec3, WorldState};
use crate::domain::tuning::{PlayerTuning, Viewport};
use crate::domain::HandSignal;

/// World-space point the hand is steering toward.
pub fn aim_target(signal: &HandSignal, viewport: &Viewport, cfg: &PlayerTuning) -> (f32, f32) {
    let tx = (signal.aim_x - 0.5) * viewport.width() * cfg.reach;
    // Landmark y grows downward; world y grows upward.
    let ty = -(signal.aim_y - 0.5) * viewport.height() * cfg.reach;
    (tx, ty)
}

pub fn decay_feedback(world: &mut WorldState, cfg: &PlayerTuning) {
    world.player.recoil *= cfg.recoil_decay;
    world.player.shake *= cfg.recoil_decay;
}

/// Eases the ship toward the aim target and places the reticle/laser.
///
/// The follow is a fixed fraction per tick, so it is frame-rate coupled.
pub fn tick_player(
    world: &mut WorldState,
    signal: &HandSignal,
    viewport: &Viewport,
    cfg: &PlayerTuning,
    rng: &mut impl RandomSource,
) {
    if !signal.visible {
        // Ship holds its last position; aim visuals are hidden.
        world.reticle = None;
        world.laser_opacity = 0.0;
        return;
    }

    let (tx, ty) = aim_target(signal, viewport, cfg);
    let player = &mut world.player;
    player.position.x += (tx - player.position.x) * cfg.follow_factor;
    player.position.y += (ty - player.position.y) * cfg.follow_factor;
    player.position.z = player.recoil + (rng.next_f32() - 0.5) * player.shake;
    player.rot_z = (player.position.x - tx) * cfg.bank_factor;

    world.reticle_spin += cfg.reticle_spin;
    world.reticle = Some(Reticle {
        position: Vec3::new(
            player.position.x * cfg.reticle_scale,
            player.position.y * cfg.reticle_scale,
            cfg.reticle_depth,
        ),
        spin: world.reticle_spin,
    });
    world.laser_opacity = if signal.is_pinching {
        cfg.laser_active_opacity
    } else {
        cfg.laser_idle_opacity
    };
}
