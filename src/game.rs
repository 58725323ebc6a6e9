//! Session controller
//!
//! `Game` owns the simulation state and everything that feeds it. Hosts
//! forward pointer events and lifecycle button presses as they arrive and
//! call `frame` once per rendered frame. Renderers read `state()` between
//! frames; audio and other observers consume the returned events.
//!
//! Hosts that deliver frames from several threads should keep the whole
//! `Game` behind one `Mutex` and hold it for the duration of `frame`.

use glam::Vec2;

use crate::persistence::{self, ScoreStore};
use crate::platform::{Camera, Gesture, PendingInput, PointerTracker};
use crate::settings::Tuning;
use crate::sim::{GameEvent, Mode, SimulationState, tick};

pub struct Game<S: ScoreStore> {
    state: SimulationState,
    pointer: PointerTracker,
    camera: Camera,
    pending: PendingInput,
    /// Events raised by commands issued between frames
    outbox: Vec<GameEvent>,
    store: S,
}

impl<S: ScoreStore> Game<S> {
    /// Create a session on the splash screen and load the high score table
    pub fn new(mut store: S, tuning: Tuning, seed: u64) -> Self {
        let mut state = SimulationState::with_tuning(seed, tuning);
        state.high_scores = persistence::load_or_empty(&mut store);
        let pointer = PointerTracker::new(&state.tuning);
        Self {
            state,
            pointer,
            camera: Camera::default(),
            pending: PendingInput::default(),
            outbox: Vec::new(),
            store,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    // === Input ===

    pub fn pointer_down(&mut self, screen: Vec2) {
        self.pointer.pointer_down(screen);
    }

    pub fn pointer_move(&mut self, screen: Vec2) {
        if let Some(gesture) = self.pointer.pointer_move(screen) {
            self.buffer(gesture);
        }
    }

    pub fn pointer_up(&mut self, screen: Vec2) {
        if let Some(gesture) = self.pointer.pointer_up(screen) {
            self.buffer(gesture);
        }
    }

    pub fn pointer_cancel(&mut self) {
        self.pointer.pointer_cancel();
    }

    fn buffer(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Rotate(delta) => self.pending.push_rotation(delta),
            Gesture::Tap(screen) => {
                let world = self.camera.screen_to_plane(screen);
                self.pending.push_tap(world);
            }
        }
    }

    // === Frame ===

    /// Apply buffered input, advance one tick, persist a finished run.
    /// Returns every event raised since the previous frame.
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        let input = self.pending.take();
        let tick_events = tick(&mut self.state, &input, dt);
        self.record(tick_events);
        std::mem::take(&mut self.outbox)
    }

    /// Queue events for the next frame, saving the table as soon as a run ends
    fn record(&mut self, events: Vec<GameEvent>) {
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::RunEnded { .. }))
        {
            persistence::save_or_log(&mut self.store, &self.state.high_scores);
        }
        self.outbox.extend(events);
    }

    // === Lifecycle commands ===

    fn command(&mut self, apply: impl FnOnce(&mut SimulationState) -> bool) -> bool {
        let applied = apply(&mut self.state);
        let events = self.state.drain_events();
        self.record(events);
        applied
    }

    pub fn finish_splash(&mut self) -> bool {
        self.command(SimulationState::finish_splash)
    }

    pub fn open_tutorial(&mut self) -> bool {
        self.command(SimulationState::open_tutorial)
    }

    pub fn next_tutorial_step(&mut self) -> bool {
        self.command(SimulationState::next_tutorial_step)
    }

    pub fn skip_tutorial(&mut self) -> bool {
        self.command(SimulationState::skip_tutorial)
    }

    pub fn start_game(&mut self) -> bool {
        // A gesture made on the menu must not leak into the new run
        self.pointer.pointer_cancel();
        self.pending = PendingInput::default();
        self.command(SimulationState::start_game)
    }

    pub fn pause_game(&mut self) -> bool {
        self.command(SimulationState::pause_game)
    }

    pub fn resume_game(&mut self) -> bool {
        self.command(SimulationState::resume_game)
    }

    /// End the run now. The score is saved before this returns; the events
    /// arrive with the next frame.
    pub fn end_game(&mut self) -> bool {
        self.command(SimulationState::end_game)
    }

    pub fn reset_game(&mut self) -> bool {
        self.command(SimulationState::reset_game)
    }
}
