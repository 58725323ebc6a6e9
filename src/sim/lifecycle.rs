//! Mode transitions
//!
//! ```text
//! Splash -> Tutorial | Menu
//! Menu <-> Tutorial
//! Menu -> Playing <-> Paused
//! Playing -> GameOver -> Playing (retry) | Menu/Tutorial (reset)
//! Paused -> Menu/Tutorial (reset)
//! ```
//!
//! Every command returns whether it applied. A command that is illegal in
//! the current mode changes nothing.

use super::state::{GameEvent, Mode, SimulationState};
use crate::consts::TUTORIAL_STEPS;

impl SimulationState {
    fn reject(&self, command: &str) -> bool {
        log::debug!("Ignoring {command} in {:?}", self.mode);
        false
    }

    /// Where to go when leaving the splash or abandoning a run
    fn home_mode(&self) -> Mode {
        if self.tutorial_completed {
            Mode::Menu
        } else {
            Mode::Tutorial
        }
    }

    /// Leave the splash screen
    pub fn finish_splash(&mut self) -> bool {
        if self.mode != Mode::Splash {
            return self.reject("finish_splash");
        }
        self.tutorial_step = 0;
        let home = self.home_mode();
        self.set_mode(home);
        true
    }

    /// Replay the tutorial from the menu
    pub fn open_tutorial(&mut self) -> bool {
        if self.mode != Mode::Menu {
            return self.reject("open_tutorial");
        }
        self.tutorial_step = 0;
        self.set_mode(Mode::Tutorial);
        true
    }

    /// Advance one tutorial page; the last page leads to the menu
    pub fn next_tutorial_step(&mut self) -> bool {
        if self.mode != Mode::Tutorial {
            return self.reject("next_tutorial_step");
        }
        let next = self.tutorial_step + 1;
        if next >= TUTORIAL_STEPS {
            self.complete_tutorial();
        } else {
            self.tutorial_step = next;
        }
        true
    }

    pub fn skip_tutorial(&mut self) -> bool {
        if self.mode != Mode::Tutorial {
            return self.reject("skip_tutorial");
        }
        self.complete_tutorial();
        true
    }

    fn complete_tutorial(&mut self) {
        self.tutorial_step = 0;
        self.tutorial_completed = true;
        self.set_mode(Mode::Menu);
    }

    /// Begin a run from the menu, or retry from the game over screen
    pub fn start_game(&mut self) -> bool {
        if !matches!(self.mode, Mode::Menu | Mode::GameOver) {
            return self.reject("start_game");
        }
        self.reset_run();
        self.set_mode(Mode::Playing);
        self.emit(GameEvent::RunStarted { epoch: self.epoch });
        log::info!("Run {} started", self.epoch);
        true
    }

    pub fn pause_game(&mut self) -> bool {
        if self.mode != Mode::Playing {
            return self.reject("pause_game");
        }
        self.set_mode(Mode::Paused);
        true
    }

    pub fn resume_game(&mut self) -> bool {
        if self.mode != Mode::Paused {
            return self.reject("resume_game");
        }
        self.set_mode(Mode::Playing);
        true
    }

    /// Finish the run and record its score on the leaderboard
    pub fn end_game(&mut self) -> bool {
        if self.mode != Mode::Playing {
            return self.reject("end_game");
        }
        let score = self.score;
        let rank = self.high_scores.commit(score);
        self.magnet = None;
        self.set_mode(Mode::GameOver);
        self.emit(GameEvent::RunEnded { score, rank });
        log::info!(
            "Run {} ended: score {}, distance {:.0}m, max combo x{}, rank {:?}",
            self.epoch,
            score,
            self.distance,
            self.max_combo,
            rank
        );
        true
    }

    /// Abandon a paused or finished run and go back to the menu
    /// (or the tutorial if it was never completed)
    pub fn reset_game(&mut self) -> bool {
        if !matches!(self.mode, Mode::GameOver | Mode::Paused) {
            return self.reject("reset_game");
        }
        self.reset_run();
        let home = self.home_mode();
        self.set_mode(home);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_menu() -> SimulationState {
        let mut state = SimulationState::new(11);
        state.tutorial_completed = true;
        assert!(state.finish_splash());
        assert_eq!(state.mode, Mode::Menu);
        state.drain_events();
        state
    }

    #[test]
    fn test_splash_goes_to_tutorial_first_time() {
        let mut state = SimulationState::new(1);
        assert!(state.finish_splash());
        assert_eq!(state.mode, Mode::Tutorial);
        assert!(!state.finish_splash());
    }

    #[test]
    fn test_tutorial_steps_then_menu() {
        let mut state = SimulationState::new(1);
        state.finish_splash();
        for step in 1..TUTORIAL_STEPS {
            assert!(state.next_tutorial_step());
            assert_eq!(state.tutorial_step, step);
            assert_eq!(state.mode, Mode::Tutorial);
        }
        assert!(state.next_tutorial_step());
        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.tutorial_step, 0);
        assert!(state.tutorial_completed);
    }

    #[test]
    fn test_skip_and_replay_tutorial() {
        let mut state = SimulationState::new(1);
        state.finish_splash();
        state.next_tutorial_step();
        assert!(state.skip_tutorial());
        assert_eq!(state.mode, Mode::Menu);
        assert!(state.open_tutorial());
        assert_eq!(state.mode, Mode::Tutorial);
        assert_eq!(state.tutorial_step, 0);
    }

    #[test]
    fn test_start_bumps_epoch_and_resets() {
        let mut state = at_menu();
        assert!(state.start_game());
        assert_eq!(state.mode, Mode::Playing);
        assert_eq!(state.epoch, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 10.0);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::ModeChanged {
                    from: Mode::Menu,
                    to: Mode::Playing
                },
                GameEvent::RunStarted { epoch: 1 }
            ]
        );
    }

    #[test]
    fn test_pause_resume_changes_only_mode() {
        let mut state = at_menu();
        state.start_game();
        state.score = 120;
        state.combo = 4;

        assert!(state.pause_game());
        assert_eq!(state.mode, Mode::Paused);
        assert!(!state.pause_game());
        assert!(state.resume_game());
        assert_eq!(state.mode, Mode::Playing);
        assert_eq!(state.score, 120);
        assert_eq!(state.combo, 4);
        assert_eq!(state.epoch, 1);
    }

    #[test]
    fn test_end_commits_score() {
        let mut state = at_menu();
        state.start_game();
        state.score = 70;
        state.drain_events();

        assert!(state.end_game());
        assert_eq!(state.mode, Mode::GameOver);
        assert_eq!(state.high_scores.as_slice(), &[70]);
        assert!(state.drain_events().contains(&GameEvent::RunEnded {
            score: 70,
            rank: Some(1)
        }));

        // Second end is a no-op and does not double-commit
        assert!(!state.end_game());
        assert_eq!(state.high_scores.len(), 1);
    }

    #[test]
    fn test_illegal_commands_are_noops() {
        let mut state = at_menu();
        assert!(!state.pause_game());
        assert!(!state.resume_game());
        assert!(!state.end_game());
        assert!(!state.reset_game());
        assert_eq!(state.mode, Mode::Menu);

        state.start_game();
        state.end_game();
        assert!(!state.pause_game());
        assert_eq!(state.mode, Mode::GameOver);
        assert!(state.drain_events().iter().all(|e| !matches!(
            e,
            GameEvent::ModeChanged {
                to: Mode::Paused,
                ..
            }
        )));
    }

    #[test]
    fn test_retry_and_reset() {
        let mut state = at_menu();
        state.start_game();
        state.end_game();
        assert!(state.start_game());
        assert_eq!(state.epoch, 2);
        state.end_game();

        assert!(state.reset_game());
        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.epoch, 3);
        assert_eq!(state.high_scores.len(), 2);
    }

    #[test]
    fn test_reset_from_pause_without_tutorial() {
        let mut state = SimulationState::new(1);
        state.mode = Mode::Menu;
        state.start_game();
        state.pause_game();
        assert!(state.reset_game());
        assert_eq!(state.mode, Mode::Tutorial);
    }
}
