//! Screen to tunnel projection
//!
//! The camera sits on the tunnel axis looking down it. A tap is cast
//! through the camera onto the player plane (depth 0).

use glam::Vec2;

/// Perspective camera on the tunnel axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Distance from the eye to the player plane
    pub eye_distance: f32,
    /// Vertical field of view (radians)
    pub fov_y: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye_distance: 5.0,
            fov_y: 75f32.to_radians(),
            viewport: Vec2::new(1280.0, 720.0),
        }
    }
}

impl Camera {
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Project a screen position (pixels, y down) onto the player plane
    pub fn screen_to_plane(&self, screen: Vec2) -> Vec2 {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return Vec2::ZERO;
        }
        let ndc = Vec2::new(
            screen.x / self.viewport.x * 2.0 - 1.0,
            1.0 - screen.y / self.viewport.y * 2.0,
        );
        let half_height = (self.fov_y * 0.5).tan() * self.eye_distance;
        let half_width = half_height * self.viewport.x / self.viewport.y;
        Vec2::new(ndc.x * half_width, ndc.y * half_height)
    }

    /// Inverse of `screen_to_plane`
    pub fn plane_to_screen(&self, plane: Vec2) -> Vec2 {
        let half_height = (self.fov_y * 0.5).tan() * self.eye_distance;
        let half_width = half_height * self.viewport.x / self.viewport.y.max(f32::EPSILON);
        if half_width <= 0.0 || half_height <= 0.0 {
            return Vec2::ZERO;
        }
        let ndc = Vec2::new(plane.x / half_width, plane.y / half_height);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        )
    }
}
