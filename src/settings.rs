//! Gameplay tuning
//!
//! Every balance constant lives here so a JSON file can override it.
//! Missing keys fall back to the shipped defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::PersistError;

/// Physics, scoring and input constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Tunnel ===
    /// Radius obstacles sit on
    pub tunnel_radius: f32,
    /// Player and magnet placement are kept inside this radius
    pub player_bound: f32,

    // === Player kinematics ===
    /// Velocity multiplier applied once per tick
    pub damping: f32,
    /// Maximum velocity magnitude (units per tick)
    pub max_velocity: f32,
    /// Velocity kept after hitting the tunnel wall
    pub wall_bounce: f32,
    /// Outward push strength at full ramp
    pub centrifugal_strength: f32,
    /// Run time (s) before centrifugal drift starts
    pub centrifugal_delay: f32,
    /// Seconds to ramp centrifugal drift from 0 to full
    pub centrifugal_ramp: f32,
    /// Below this distance from a point, direction is treated as undefined
    pub min_direction_distance: f32,

    // === Magnet ===
    /// Pull strength toward the magnet point
    pub magnet_strength: f32,
    /// Magnet lifetime in seconds
    pub magnet_duration: f32,
    /// Energy drained per second while pulling
    pub energy_drain: f32,
    /// Energy regained per second while no magnet is placed
    pub energy_regen: f32,
    /// Energy ceiling
    pub max_energy: f32,

    // === Obstacles ===
    /// Depth obstacles respawn at
    pub spawn_depth: f32,
    /// Extra random depth spread on a fresh run
    pub spawn_spread: f32,
    /// Depth past which an obstacle counts as passed
    pub pass_depth: f32,
    /// Half-width of the depth band where proximity is checked
    pub collision_band: f32,
    /// Distance below which the player is hit
    pub hit_radius: f32,
    /// Distance below which a pass counts as a near miss
    pub near_miss_radius: f32,

    // === Scoring ===
    /// Points for each obstacle passed (multiplied by combo)
    pub pass_points: u64,
    /// Seconds without a near miss before combo resets
    pub combo_window: f32,

    // === Difficulty ===
    pub base_speed: f32,
    pub max_speed: f32,
    /// Speed gained per `speed_step_distance` meters
    pub speed_step: f32,
    pub speed_step_distance: f32,

    // === Input ===
    /// Radians of tunnel rotation per dragged pixel
    pub drag_sensitivity: f32,
    /// Pointer travel (px) separating a tap from a drag
    pub tap_threshold: f32,

    // === Lifecycle ===
    /// Seconds the splash screen stays up
    pub splash_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tunnel_radius: 4.0,
            player_bound: 3.5,

            damping: 0.85,
            max_velocity: 0.3,
            wall_bounce: 0.5,
            centrifugal_strength: 2.0,
            centrifugal_delay: 2.0,
            centrifugal_ramp: 3.0,
            min_direction_distance: 0.1,

            magnet_strength: 8.0,
            magnet_duration: 2.0,
            energy_drain: 30.0,
            energy_regen: 15.0,
            max_energy: 100.0,

            spawn_depth: -50.0,
            spawn_spread: 50.0,
            pass_depth: 5.0,
            collision_band: 1.5,
            hit_radius: 1.2,
            near_miss_radius: 1.5,

            pass_points: 10,
            combo_window: 3.0,

            base_speed: 10.0,
            max_speed: 25.0,
            speed_step: 0.5,
            speed_step_distance: 50.0,

            drag_sensitivity: 0.01,
            tap_threshold: 10.0,

            splash_duration: 2.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; unspecified keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read tuning from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read tuning from a file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}: {e})", path.display());
                Self::default()
            }
        }
    }

    /// Speed for a given cumulative distance.
    ///
    /// Stepwise in distance and capped at `max_speed`.
    pub fn speed_for_distance(&self, distance: f32) -> f32 {
        let steps = (distance.max(0.0) / self.speed_step_distance).floor();
        (self.base_speed + steps * self.speed_step).min(self.max_speed)
    }

    /// Centrifugal multiplier in [0, 1] for the given run time
    pub fn centrifugal_multiplier(&self, run_time: f32) -> f32 {
        let since = run_time - self.centrifugal_delay;
        if since <= 0.0 {
            0.0
        } else if self.centrifugal_ramp <= 0.0 {
            1.0
        } else {
            (since / self.centrifugal_ramp).min(1.0)
        }
    }
}
