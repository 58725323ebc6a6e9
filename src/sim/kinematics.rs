//! Player kinematics
//!
//! Velocity is in units per tick. Forces arrive as impulses already scaled
//! by dt; damping is a flat per-tick factor.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::Player;
use crate::clamp_length;
use crate::settings::Tuning;

/// Outward drift impulse for this tick.
///
/// Near the center the outward direction is undefined, so a random
/// direction is used instead.
pub fn centrifugal_impulse(
    pos: Vec2,
    multiplier: f32,
    dt: f32,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Vec2 {
    if multiplier <= 0.0 {
        return Vec2::ZERO;
    }
    let strength = tuning.centrifugal_strength * dt * multiplier;
    let dist = pos.length();
    let dir = if dist > tuning.min_direction_distance {
        pos / dist
    } else {
        let theta: f32 = rng.random_range(0.0..TAU);
        Vec2::new(theta.cos(), theta.sin())
    };
    dir * strength
}

/// Pull toward `target`, or nothing when already on top of it
pub fn attraction_impulse(pos: Vec2, target: Vec2, dt: f32, tuning: &Tuning) -> Vec2 {
    let to_target = target - pos;
    let dist = to_target.length();
    if dist > tuning.min_direction_distance {
        to_target / dist * (tuning.magnet_strength * dt)
    } else {
        Vec2::ZERO
    }
}

/// Apply an impulse, damp, clamp, move, and keep the player in the tunnel.
/// Returns true if the player touched the wall.
pub fn integrate(player: &mut Player, impulse: Vec2, tuning: &Tuning) -> bool {
    player.vel += impulse;
    player.vel *= tuning.damping;
    clamp_length(&mut player.vel, tuning.max_velocity);

    player.pos += player.vel;

    if clamp_length(&mut player.pos, tuning.player_bound) {
        player.vel *= tuning.wall_bounce;
        true
    } else {
        false
    }
}
