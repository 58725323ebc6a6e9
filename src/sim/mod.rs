//! Simulation module
//!
//! All gameplay logic lives here:
//! - Time only advances through `tick` while a run is playing
//! - Seeded RNG only
//! - Obstacles are processed in index order
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod kinematics;
pub mod lifecycle;
pub mod magnet;
pub mod obstacles;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{Proximity, check_proximity, in_collision_band, magnet_pulse_scale};
pub use obstacles::{FieldEvent, Obstacle, ObstacleField};
pub use state::{GameEvent, MagnetPoint, Mode, Player, SimulationState};
pub use tick::{TickInput, tick};
