//! Platform abstraction layer
//!
//! Turns raw host input into simulation input:
//! - Pointer gesture resolution (drag vs tap)
//! - Screen to tunnel cross-section projection

pub mod camera;
pub mod input;

pub use camera::Camera;
pub use input::{Gesture, PendingInput, PointerTracker};
