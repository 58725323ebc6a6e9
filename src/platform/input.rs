//! Pointer gesture resolution
//!
//! A press that travels more than `tap_threshold` pixels from where it went
//! down becomes a drag and rotates the tunnel by its horizontal motion until
//! released. A press released without ever travelling that far is a tap.

use glam::Vec2;

use crate::settings::Tuning;
use crate::sim::TickInput;

/// A resolved pointer gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Rotate the tunnel by this many radians
    Rotate(f32),
    /// Tap at a screen position (pixels)
    Tap(Vec2),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    start: Vec2,
    /// X position rotation was last measured from
    last_x: f32,
    dragged: bool,
}

/// Tracks one pointer between down and up
#[derive(Debug, Clone)]
pub struct PointerTracker {
    press: Option<Press>,
    sensitivity: f32,
    threshold: f32,
}

impl PointerTracker {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            press: None,
            sensitivity: tuning.drag_sensitivity,
            threshold: tuning.tap_threshold,
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.press = Some(Press {
            start: pos,
            last_x: pos.x,
            dragged: false,
        });
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> Option<Gesture> {
        let press = self.press.as_mut()?;
        if !press.dragged && pos.distance(press.start) <= self.threshold {
            return None;
        }
        press.dragged = true;
        let dx = pos.x - press.last_x;
        press.last_x = pos.x;
        (dx != 0.0).then_some(Gesture::Rotate(dx * self.sensitivity))
    }

    pub fn pointer_up(&mut self, pos: Vec2) -> Option<Gesture> {
        let press = self.press.take()?;
        if press.dragged || pos.distance(press.start) > self.threshold {
            None
        } else {
            Some(Gesture::Tap(pos))
        }
    }

    /// Drop the current press without producing a gesture
    pub fn pointer_cancel(&mut self) {
        self.press = None;
    }
}

/// Gestures waiting for the next tick.
///
/// Rotation accumulates; only the latest tap is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PendingInput {
    pub rotation: f32,
    /// Tap already projected onto the cross-section
    pub tap: Option<Vec2>,
}

impl PendingInput {
    pub fn push_rotation(&mut self, delta: f32) {
        self.rotation += delta;
    }

    pub fn push_tap(&mut self, world: Vec2) {
        self.tap = Some(world);
    }

    /// Hand the buffered input to a tick and clear the buffer
    pub fn take(&mut self) -> TickInput {
        let pending = std::mem::take(self);
        TickInput {
            rotation_delta: pending.rotation,
            magnet_target: pending.tap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PointerTracker {
        PointerTracker::new(&Tuning::default())
    }

    #[test]
    fn test_tap() {
        let mut t = tracker();
        t.pointer_down(Vec2::new(100.0, 100.0));
        assert_eq!(t.pointer_move(Vec2::new(104.0, 103.0)), None);
        assert_eq!(
            t.pointer_up(Vec2::new(104.0, 103.0)),
            Some(Gesture::Tap(Vec2::new(104.0, 103.0)))
        );
        // The press is consumed
        assert_eq!(t.pointer_up(Vec2::new(104.0, 103.0)), None);
    }

    #[test]
    fn test_drag_rotates_and_suppresses_tap() {
        let mut t = tracker();
        t.pointer_down(Vec2::new(100.0, 100.0));
        // First move past the threshold includes the travel below it
        let g = t.pointer_move(Vec2::new(120.0, 100.0));
        assert_eq!(g, Some(Gesture::Rotate(20.0 * 0.01)));
        let g = t.pointer_move(Vec2::new(110.0, 100.0));
        assert_eq!(g, Some(Gesture::Rotate(-10.0 * 0.01)));
        // Once dragging, moves near the start still rotate and never tap
        assert_eq!(
            t.pointer_move(Vec2::new(101.0, 100.0)),
            Some(Gesture::Rotate(-9.0 * 0.01))
        );
        assert_eq!(t.pointer_up(Vec2::new(101.0, 100.0)), None);
    }

    #[test]
    fn test_vertical_drag_is_not_a_tap() {
        let mut t = tracker();
        t.pointer_down(Vec2::new(50.0, 50.0));
        assert_eq!(t.pointer_move(Vec2::new(50.0, 80.0)), None);
        assert_eq!(t.pointer_up(Vec2::new(50.0, 80.0)), None);
    }

    #[test]
    fn test_up_without_down() {
        let mut t = tracker();
        assert_eq!(t.pointer_up(Vec2::ZERO), None);
        assert_eq!(t.pointer_move(Vec2::new(90.0, 0.0)), None);
    }

    #[test]
    fn test_pending_input() {
        let mut pending = PendingInput::default();
        pending.push_rotation(0.25);
        pending.push_rotation(0.5);
        pending.push_tap(Vec2::new(1.0, 0.0));
        pending.push_tap(Vec2::new(0.0, 2.0));

        let input = pending.take();
        assert_eq!(input.rotation_delta, 0.75);
        assert_eq!(input.magnet_target, Some(Vec2::new(0.0, 2.0)));
        assert_eq!(pending.take(), TickInput::default());
    }
}
