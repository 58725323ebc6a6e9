//! Gravitas headless runner
//!
//! Plays one run with a simple autopilot at 60 Hz and records the score in
//! the local high score file. Rendering hosts drive `Game` the same way.

use glam::Vec2;

use gravitas::consts::FRAME_DT;
use gravitas::persistence::JsonFileStore;
use gravitas::sim::{GameEvent, Mode, SimulationState};
use gravitas::{Game, Tuning};

/// Give up after ten minutes of simulated play
const MAX_FRAMES: u32 = 60 * 60 * 10;

/// Seconds between autopilot decisions
const DECISION_INTERVAL: f32 = 0.25;

/// Where to drop the magnet to get away from the closest incoming obstacle
fn autopilot_target(state: &SimulationState) -> Option<Vec2> {
    let tuning = &state.tuning;
    let threat = state
        .obstacles
        .iter()
        .filter(|ob| ob.depth > -12.0 && ob.depth < tuning.collision_band)
        .max_by(|a, b| a.depth.total_cmp(&b.depth))?;

    let threat_pos = threat.world_position(state.tunnel_rotation, tuning.tunnel_radius);
    if threat_pos.distance(state.player.pos) > tuning.near_miss_radius + 1.0 {
        return None;
    }
    // Opposite side of the tunnel, not all the way to the wall
    Some(-threat_pos.normalize_or_zero() * 2.0)
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Gravitas (headless) starting...");

    let tuning = Tuning::load_or_default("gravitas_tuning.json");
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let store = JsonFileStore::new(JsonFileStore::DEFAULT_FILE);
    let mut game = Game::new(store, tuning, seed);

    game.finish_splash();
    game.skip_tutorial();
    game.start_game();

    let mut since_decision = 0.0;
    for _ in 0..MAX_FRAMES {
        since_decision += FRAME_DT;
        if since_decision >= DECISION_INTERVAL && game.mode() == Mode::Playing {
            since_decision = 0.0;
            let state = game.state();
            if !state.magnet_active() && state.energy > 20.0 {
                if let Some(target) = autopilot_target(state) {
                    let screen = game.camera().plane_to_screen(target);
                    game.pointer_down(screen);
                    game.pointer_up(screen);
                }
            }
        }

        let events = game.frame(FRAME_DT);
        for event in &events {
            match event {
                GameEvent::ComboIncreased { combo } if *combo >= 5 => {
                    log::info!("Combo x{combo}");
                }
                GameEvent::RunEnded { score, rank } => {
                    println!("Run over: score {score}, rank {rank:?}");
                }
                _ => {}
            }
        }

        if !game.mode().in_run() {
            break;
        }
    }

    if game.mode() == Mode::Playing {
        game.end_game();
    }

    let state = game.state();
    println!(
        "Distance {:.0}m, near misses {}, max combo x{}",
        state.distance, state.near_miss_count, state.max_combo
    );
    println!("High scores: {:?}", state.high_scores.as_slice());
}
