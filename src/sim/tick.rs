//! Per-frame simulation tick
//!
//! One call per rendered frame. Buffered input is applied first, then the
//! run advances by `dt` seconds of simulated time. Only `Playing` advances
//! the run; `Paused` freezes everything, including input.

use glam::Vec2;

use super::kinematics::{centrifugal_impulse, integrate};
use super::obstacles::FieldEvent;
use super::state::{GameEvent, Mode, SimulationState};

/// Resolved input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Tunnel rotation to add (radians)
    pub rotation_delta: f32,
    /// Cross-section position of a tap, if one landed since the last tick
    pub magnet_target: Option<Vec2>,
}

/// Advance the session by one frame and return the events it raised
pub fn tick(state: &mut SimulationState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    match state.mode {
        Mode::Paused => {}
        Mode::Splash => {
            state.tunnel_rotation += input.rotation_delta;
            state.splash_time += dt;
            if state.splash_time >= state.tuning.splash_duration {
                state.finish_splash();
            }
        }
        Mode::Tutorial | Mode::Menu | Mode::GameOver => {
            state.tunnel_rotation += input.rotation_delta;
        }
        Mode::Playing => {
            state.tunnel_rotation += input.rotation_delta;
            if let Some(target) = input.magnet_target {
                state.place_magnet(target);
            }
            step_run(state, dt);
        }
    }

    state.drain_events()
}

/// One Playing step: timers, player, distance, combo decay, obstacles
fn step_run(state: &mut SimulationState, dt: f32) {
    state.run_time += f64::from(dt);
    state.expire_magnet();

    // Player
    let multiplier = state.tuning.centrifugal_multiplier(state.run_time as f32);
    let mut impulse = centrifugal_impulse(
        state.player.pos,
        multiplier,
        dt,
        &state.tuning,
        &mut state.rng,
    );
    impulse += state.magnet_impulse(dt);
    integrate(&mut state.player, impulse, &state.tuning);

    // Distance and difficulty
    let moved = state.advance_distance(dt);
    state.decay_combo();

    // Obstacles
    let field_events = state.obstacles.advance(
        moved,
        state.tunnel_rotation,
        state.player.pos,
        &state.tuning,
        &mut state.rng,
    );

    let mut collided = false;
    for event in field_events {
        match event {
            FieldEvent::Passed { .. } => state.award_pass(),
            FieldEvent::NearMiss { index } => state.register_near_miss(index),
            FieldEvent::Collision { .. } => collided = true,
        }
    }

    if collided {
        state.end_game();
    }
}
