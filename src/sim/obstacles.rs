//! Cyclic obstacle field
//!
//! A fixed ring buffer of obstacles rides toward the player. Each one keeps
//! its own angle on the tunnel wall; tunnel rotation is applied as a
//! counter-rotation of the whole frame when computing world positions.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Proximity, check_proximity, in_collision_band};
use crate::consts::OBSTACLE_COUNT;
use crate::polar_to_cartesian;
use crate::settings::Tuning;

/// One obstacle on the tunnel wall
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Position along the tunnel axis (player plane at 0, grows toward the player)
    pub depth: f32,
    /// Angle on the tunnel wall in the obstacle frame (radians)
    pub angle: f32,
    /// Set once a near miss fired for the current pass
    pub near_miss_triggered: bool,
}

impl Obstacle {
    /// Position in the player's cross-section for a given tunnel rotation
    #[inline]
    pub fn world_position(&self, tunnel_rotation: f32, tunnel_radius: f32) -> Vec2 {
        polar_to_cartesian(tunnel_radius, self.angle - tunnel_rotation)
    }

    fn respawn(&mut self, depth: f32, rng: &mut impl Rng) {
        self.depth = depth;
        self.angle = rng.random_range(0.0..TAU);
        self.near_miss_triggered = false;
    }
}

/// Something that happened to one obstacle during `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Obstacle went past the player and respawned far ahead
    Passed { index: usize },
    /// First near miss for this obstacle on this pass
    NearMiss { index: usize },
    /// Obstacle hit the player
    Collision { index: usize },
}

/// Fixed-size set of obstacles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: [Obstacle; OBSTACLE_COUNT],
}

impl ObstacleField {
    /// Fresh field for a new run, staggered beyond the spawn depth
    pub fn scattered(rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let obstacles = std::array::from_fn(|_| {
            let mut ob = Obstacle::default();
            let depth = tuning.spawn_depth - rng.random::<f32>() * tuning.spawn_spread;
            ob.respawn(depth, &mut *rng);
            ob
        });
        Self { obstacles }
    }

    /// Build a field from explicit obstacles (scripted scenarios)
    pub fn from_obstacles(obstacles: [Obstacle; OBSTACLE_COUNT]) -> Self {
        Self { obstacles }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Obstacle> {
        self.obstacles.get_mut(index)
    }

    /// Move every obstacle `move_dist` toward the player, recycle the ones
    /// that went past, and test the rest against the player.
    ///
    /// Events come back in obstacle order. A collision does not stop the
    /// sweep, so later obstacles can still report near misses.
    pub fn advance(
        &mut self,
        move_dist: f32,
        tunnel_rotation: f32,
        player_pos: Vec2,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> Vec<FieldEvent> {
        let mut events = Vec::new();

        for (index, ob) in self.obstacles.iter_mut().enumerate() {
            ob.depth += move_dist;

            if ob.depth > tuning.pass_depth {
                ob.respawn(tuning.spawn_depth, rng);
                events.push(FieldEvent::Passed { index });
            }

            if !in_collision_band(ob.depth, tuning) {
                continue;
            }

            let world = ob.world_position(tunnel_rotation, tuning.tunnel_radius);
            match check_proximity(world, player_pos, tuning) {
                Proximity::Hit => events.push(FieldEvent::Collision { index }),
                Proximity::NearMiss if !ob.near_miss_triggered => {
                    ob.near_miss_triggered = true;
                    events.push(FieldEvent::NearMiss { index });
                }
                _ => {}
            }
        }

        events
    }
}
