//! Simulation state and core types
//!
//! `SimulationState` is the single source of truth for a session. Only the
//! command methods in `lifecycle`, `scoring` and `magnet` and the `tick`
//! function mutate it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleField;
use crate::highscores::HighScores;
use crate::settings::Tuning;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Title card shown at launch
    Splash,
    /// Instruction pages
    Tutorial,
    /// Main menu
    Menu,
    /// Active run
    Playing,
    /// Run frozen
    Paused,
    /// Run ended
    GameOver,
}

impl Mode {
    /// Whether a run is in progress (playing or paused)
    pub fn in_run(self) -> bool {
        matches!(self, Mode::Playing | Mode::Paused)
    }
}

/// The player orb, in tunnel cross-section coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
}

impl Player {
    /// Visual bank angle for renderers
    pub fn roll(&self) -> f32 {
        self.vel.x * -2.0
    }
}

/// An active attractor placed by a tap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnetPoint {
    pub pos: Vec2,
    /// Run time (s) at placement
    pub created_at: f64,
}

/// Notifications for renderers and audio, emitted in the order they happen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ModeChanged { from: Mode, to: Mode },
    RunStarted { epoch: u64 },
    ScoreIncreased { amount: u64, total: u64 },
    ComboIncreased { combo: u32 },
    ComboReset,
    NearMiss { obstacle: usize },
    MagnetActivated { pos: Vec2 },
    MagnetExpired,
    /// `rank` is the 1-based leaderboard slot, None if it missed the table
    RunEnded { score: u64, rank: Option<usize> },
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub mode: Mode,
    /// Bumped on every start/reset
    pub epoch: u64,

    // === Run economy ===
    pub score: u64,
    /// Meters travelled this run
    pub distance: f32,
    pub speed: f32,
    pub combo: u32,
    pub max_combo: u32,
    pub near_miss_count: u32,
    /// Run time of the last near miss or combo reset
    pub combo_timer_start: f64,

    // === Controls ===
    /// Tunnel angle (radians, unbounded)
    pub tunnel_rotation: f32,
    pub energy: f32,
    pub magnet: Option<MagnetPoint>,

    // === World ===
    pub player: Player,
    pub obstacles: ObstacleField,

    /// Simulated seconds since the run started (frozen while paused)
    pub run_time: f64,
    /// Seconds spent on the splash screen
    pub splash_time: f32,

    // === Session-scoped ===
    pub high_scores: HighScores,
    pub tutorial_step: u8,
    pub tutorial_completed: bool,

    pub tuning: Tuning,
    pub seed: u64,
    #[serde(skip, default = "default_rng")]
    pub(crate) rng: Pcg32,
    /// Events raised since the last drain
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl SimulationState {
    /// Create a session on the splash screen with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = ObstacleField::scattered(&mut rng, &tuning);
        Self {
            mode: Mode::Splash,
            epoch: 0,
            score: 0,
            distance: 0.0,
            speed: tuning.base_speed,
            combo: 1,
            max_combo: 1,
            near_miss_count: 0,
            combo_timer_start: 0.0,
            tunnel_rotation: 0.0,
            energy: tuning.max_energy,
            magnet: None,
            player: Player::default(),
            obstacles,
            run_time: 0.0,
            splash_time: 0.0,
            high_scores: HighScores::new(),
            tutorial_step: 0,
            tutorial_completed: false,
            tuning,
            seed,
            rng,
            events: Vec::new(),
        }
    }

    /// Reinitialize everything scoped to a single run and bump the epoch.
    /// High scores and tutorial progress survive.
    pub(crate) fn reset_run(&mut self) {
        self.epoch += 1;
        self.score = 0;
        self.distance = 0.0;
        self.speed = self.tuning.base_speed;
        self.combo = 1;
        self.max_combo = 1;
        self.near_miss_count = 0;
        self.combo_timer_start = 0.0;
        self.tunnel_rotation = 0.0;
        self.energy = self.tuning.max_energy;
        self.magnet = None;
        self.player = Player::default();
        self.run_time = 0.0;
        self.obstacles = ObstacleField::scattered(&mut self.rng, &self.tuning);
    }

    pub(crate) fn set_mode(&mut self, to: Mode) {
        let from = self.mode;
        if from != to {
            self.mode = to;
            self.emit(GameEvent::ModeChanged { from, to });
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event raised since the previous call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn magnet_active(&self) -> bool {
        self.magnet.is_some()
    }
}
