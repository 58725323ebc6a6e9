//! Gravitas - rotating tunnel survival game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (lifecycle, player physics, obstacle field, scoring)
//! - `game`: Controller that owns the simulation and wires in input and persistence
//! - `platform`: Pointer gesture resolution and screen-to-tunnel projection
//! - `persistence`: High score storage
//! - `settings`: Data-driven gameplay tuning
//! - `audio`: Sound cue descriptors derived from simulation events

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::HighScores;
pub use settings::Tuning;

use glam::Vec2;

/// Structural constants (not tunable)
pub mod consts {
    /// Number of obstacles cycling through the tunnel
    pub const OBSTACLE_COUNT: usize = 20;
    /// Length of the high score table
    pub const MAX_HIGH_SCORES: usize = 5;
    /// Number of tutorial pages before the menu unlocks
    pub const TUTORIAL_STEPS: u8 = 4;
    /// Reference frame step for the headless runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Rescale `v` so its length is at most `max_len`.
/// Returns true if the vector was shortened.
#[inline]
pub fn clamp_length(v: &mut Vec2, max_len: f32) -> bool {
    let len = v.length();
    if len > max_len {
        *v *= max_len / len;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(4.0, FRAC_PI_2);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_length() {
        let mut v = Vec2::new(3.0, 4.0);
        assert!(clamp_length(&mut v, 2.5));
        assert!((v.length() - 2.5).abs() < 1e-5);

        let mut short = Vec2::new(0.1, 0.0);
        assert!(!clamp_length(&mut short, 2.5));
        assert_eq!(short, Vec2::new(0.1, 0.0));
    }
}
