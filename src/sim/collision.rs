//! Proximity tests between obstacles and the player
//!
//! Obstacles live on the tunnel wall; the player lives in the cross-section.
//! Both are compared in the same 2D plane once an obstacle is inside the
//! depth band around the player.

use glam::Vec2;

use crate::settings::Tuning;

/// Outcome of comparing one obstacle with the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    /// Inside the hit radius
    Hit,
    /// Inside the near-miss ring but outside the hit radius
    NearMiss,
    /// Too far to matter
    Clear,
}

/// Classify the distance between an obstacle and the player
pub fn check_proximity(obstacle_pos: Vec2, player_pos: Vec2, tuning: &Tuning) -> Proximity {
    let dist = obstacle_pos.distance(player_pos);
    if dist < tuning.hit_radius {
        Proximity::Hit
    } else if dist < tuning.near_miss_radius {
        Proximity::NearMiss
    } else {
        Proximity::Clear
    }
}

/// Whether an obstacle at `depth` is close enough to the player plane to test.
/// The band is open at both ends.
#[inline]
pub fn in_collision_band(depth: f32, tuning: &Tuning) -> bool {
    depth > -tuning.collision_band && depth < tuning.collision_band
}

/// Display scale for an obstacle near an active magnet.
///
/// Obstacles within 5 units of the player plane and 3 units of the magnet
/// swell up to 45%.
pub fn magnet_pulse_scale(obstacle_pos: Vec2, depth: f32, magnet_pos: Option<Vec2>) -> f32 {
    const PULSE_DEPTH: f32 = 5.0;
    const PULSE_RADIUS: f32 = 3.0;

    let Some(magnet) = magnet_pos else {
        return 1.0;
    };
    if depth <= -PULSE_DEPTH || depth >= PULSE_DEPTH {
        return 1.0;
    }
    let dist = obstacle_pos.distance(magnet);
    if dist < PULSE_RADIUS {
        1.0 + (PULSE_RADIUS - dist) * 0.15
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proximity_thresholds() {
        let t = Tuning::default();
        let obstacle = Vec2::new(4.0, 0.0);

        assert_eq!(check_proximity(obstacle, Vec2::new(3.0, 0.0), &t), Proximity::Hit);
        assert_eq!(check_proximity(obstacle, Vec2::new(2.7, 0.0), &t), Proximity::NearMiss);
        assert_eq!(check_proximity(obstacle, Vec2::new(2.75, 0.0), &t), Proximity::NearMiss);
        assert_eq!(check_proximity(obstacle, Vec2::new(2.5, 0.0), &t), Proximity::Clear);
        assert_eq!(check_proximity(obstacle, Vec2::ZERO, &t), Proximity::Clear);
    }

    #[test]
    fn test_collision_band_is_open() {
        let t = Tuning::default();
        assert!(in_collision_band(0.0, &t));
        assert!(in_collision_band(1.49, &t));
        assert!(in_collision_band(-1.49, &t));
        assert!(!in_collision_band(1.5, &t));
        assert!(!in_collision_band(-1.5, &t));
        assert!(!in_collision_band(-30.0, &t));
    }

    #[test]
    fn test_magnet_pulse() {
        let obstacle = Vec2::new(4.0, 0.0);
        assert_eq!(magnet_pulse_scale(obstacle, 0.0, None), 1.0);
        assert_eq!(magnet_pulse_scale(obstacle, -20.0, Some(Vec2::new(3.0, 0.0))), 1.0);
        let scale = magnet_pulse_scale(obstacle, 0.0, Some(Vec2::new(3.0, 0.0)));
        assert!((scale - 1.3).abs() < 1e-5);
        assert_eq!(magnet_pulse_scale(obstacle, 0.0, Some(Vec2::new(-3.0, 0.0))), 1.0);
    }
}
