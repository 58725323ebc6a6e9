//! Full sessions through `Game` against a real high score file

use glam::Vec2;

use gravitas::persistence::{JsonFileStore, ScoreStore};
use gravitas::sim::{GameEvent, Mode};
use gravitas::{Game, Tuning};

const DT: f32 = 1.0 / 64.0;

fn new_game(dir: &tempfile::TempDir, seed: u64) -> Game<JsonFileStore> {
    let store = JsonFileStore::new(dir.path().join("scores.json"));
    Game::new(store, Tuning::default(), seed)
}

fn to_menu(game: &mut Game<JsonFileStore>) {
    assert!(game.finish_splash());
    assert!(game.skip_tutorial());
    game.frame(DT);
    assert_eq!(game.mode(), Mode::Menu);
}

/// Run frames until the mode changes away from Playing
fn play_until_over(game: &mut Game<JsonFileStore>, max_frames: u32) -> Vec<GameEvent> {
    let mut all = Vec::new();
    for _ in 0..max_frames {
        all.extend(game.frame(DT));
        if game.mode() != Mode::Playing {
            break;
        }
    }
    all
}

#[test]
fn unattended_run_ends_in_a_collision_and_is_saved() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = new_game(&dir, 11);
    to_menu(&mut game);
    game.start_game();

    // The player drifts to the wall and nothing steers it away
    let events = play_until_over(&mut game, 64 * 60 * 10);
    assert_eq!(game.mode(), Mode::GameOver);

    let ended: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RunEnded { score, rank } => Some((*score, *rank)),
            _ => None,
        })
        .collect();
    assert_eq!(ended.len(), 1);
    let (score, rank) = ended[0];
    assert_eq!(score, game.state().score);
    assert_eq!(rank, Some(1));
    assert!(game.state().distance > 0.0);

    let mut store = JsonFileStore::new(dir.path().join("scores.json"));
    assert_eq!(store.load().unwrap().as_slice(), &[score]);
}

#[test]
fn scores_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut game = new_game(&dir, 3);
        to_menu(&mut game);
        for _ in 0..3 {
            assert!(game.start_game());
            for _ in 0..32 {
                game.frame(DT);
            }
            assert!(game.end_game());
            game.frame(DT);
        }
        assert_eq!(game.state().high_scores.len(), 3);
    }

    let game = new_game(&dir, 4);
    assert_eq!(game.mode(), Mode::Splash);
    assert_eq!(game.state().high_scores.len(), 3);
}

#[test]
fn retry_starts_a_fresh_epoch() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = new_game(&dir, 8);
    to_menu(&mut game);

    game.start_game();
    for _ in 0..64 {
        game.frame(DT);
    }
    let first_epoch = game.state().epoch;
    game.end_game();
    game.frame(DT);

    assert!(game.start_game());
    let events = game.frame(DT);
    assert!(events.contains(&GameEvent::RunStarted {
        epoch: first_epoch + 1
    }));
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().combo, 1);
    assert_eq!(game.state().energy, game.state().tuning.max_energy);
    assert!(game.state().distance < 1.0);
}

#[test]
fn pause_freezes_input_and_progress() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = new_game(&dir, 21);
    to_menu(&mut game);
    game.start_game();
    for _ in 0..16 {
        game.frame(DT);
    }

    assert!(game.pause_game());
    game.frame(DT);
    let distance = game.state().distance;
    let rotation = game.state().tunnel_rotation;

    // A drag and a tap while paused are swallowed
    game.pointer_down(Vec2::new(100.0, 100.0));
    game.pointer_move(Vec2::new(300.0, 100.0));
    game.pointer_up(Vec2::new(300.0, 100.0));
    game.pointer_down(Vec2::new(640.0, 360.0));
    game.pointer_up(Vec2::new(640.0, 360.0));
    for _ in 0..64 {
        assert!(game.frame(DT).is_empty());
    }
    assert_eq!(game.state().distance, distance);
    assert_eq!(game.state().tunnel_rotation, rotation);
    assert!(game.state().magnet.is_none());

    assert!(game.resume_game());
    game.frame(DT);
    assert!(game.state().distance > distance);
}

#[test]
fn reset_from_pause_returns_to_menu_without_scoring() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = new_game(&dir, 2);
    to_menu(&mut game);
    game.start_game();
    game.frame(DT);
    game.pause_game();

    assert!(game.reset_game());
    let events = game.frame(DT);
    assert_eq!(game.mode(), Mode::Menu);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GameEvent::RunEnded { .. }))
    );
    assert!(game.state().high_scores.is_empty());
    assert!(!dir.path().join("scores.json").exists());
}
