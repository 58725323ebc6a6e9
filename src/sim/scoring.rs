//! Score, combo and distance bookkeeping
//!
//! Passing an obstacle pays `pass_points * combo`. Near misses raise the
//! combo; a quiet stretch of `combo_window` seconds drops it back to 1.

use super::state::{GameEvent, SimulationState};

impl SimulationState {
    /// Travel for `dt` seconds at the current speed, then re-derive speed
    /// from the new distance. Returns the distance covered.
    pub(crate) fn advance_distance(&mut self, dt: f32) -> f32 {
        let moved = self.speed * dt;
        self.distance += moved;
        self.speed = self.tuning.speed_for_distance(self.distance);
        moved
    }

    /// Drop the combo if the last near miss is older than the combo window.
    /// The window restarts either way.
    pub(crate) fn decay_combo(&mut self) {
        let quiet = self.run_time - self.combo_timer_start;
        if quiet >= f64::from(self.tuning.combo_window) {
            if self.combo > 1 {
                self.combo = 1;
                self.emit(GameEvent::ComboReset);
            }
            self.combo_timer_start = self.run_time;
        }
    }

    /// An obstacle went past the player
    pub(crate) fn award_pass(&mut self) {
        let amount = self.tuning.pass_points * u64::from(self.combo);
        self.score += amount;
        self.emit(GameEvent::ScoreIncreased {
            amount,
            total: self.score,
        });
    }

    /// An obstacle grazed the player
    pub(crate) fn register_near_miss(&mut self, obstacle: usize) {
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
        self.near_miss_count += 1;
        self.combo_timer_start = self.run_time;
        self.emit(GameEvent::NearMiss { obstacle });
        self.emit(GameEvent::ComboIncreased { combo: self.combo });
    }
}
