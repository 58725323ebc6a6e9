//! Magnet point and the energy that feeds it
//!
//! A tap places a single attractor that lives for `magnet_duration` seconds
//! of run time. Pulling drains energy; energy refills while no magnet is out.

use glam::Vec2;

use super::kinematics::attraction_impulse;
use super::state::{GameEvent, MagnetPoint, SimulationState};
use crate::clamp_length;

impl SimulationState {
    /// Place (or replace) the magnet at a cross-section position.
    /// Positions outside the player bound are pulled onto it.
    pub fn place_magnet(&mut self, mut pos: Vec2) {
        clamp_length(&mut pos, self.tuning.player_bound);
        let was_active = self.magnet.is_some();
        self.magnet = Some(MagnetPoint {
            pos,
            created_at: self.run_time,
        });
        if !was_active {
            self.emit(GameEvent::MagnetActivated { pos });
        }
    }

    /// Remove the magnet once its lifetime has run out
    pub(crate) fn expire_magnet(&mut self) {
        let Some(magnet) = self.magnet else {
            return;
        };
        if self.run_time - magnet.created_at >= f64::from(self.tuning.magnet_duration) {
            self.magnet = None;
            self.emit(GameEvent::MagnetExpired);
        }
    }

    /// Energy bookkeeping plus the pull toward the magnet for this tick
    pub(crate) fn magnet_impulse(&mut self, dt: f32) -> Vec2 {
        let t = &self.tuning;
        match self.magnet {
            Some(magnet) => {
                if self.energy <= 0.0 {
                    return Vec2::ZERO;
                }
                self.energy = (self.energy - t.energy_drain * dt).max(0.0);
                attraction_impulse(self.player.pos, magnet.pos, dt, t)
            }
            None => {
                self.energy = (self.energy + t.energy_regen * dt).min(t.max_energy);
                Vec2::ZERO
            }
        }
    }
}
