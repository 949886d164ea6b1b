use asteroid_rain::constants::*;
use asteroid_rain::highscore::HighScoreStore;
use asteroid_rain::state::{Command, GameState};
use asteroid_rain::terminal_io::KeyTracker;
use asteroid_rain::types::Vector2D;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A round with every falling object parked well away from the ship.
fn quiet_state(score: u32, high_score: u32) -> (GameState, StdRng) {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut state = GameState::new(high_score, &mut rng);
    for (i, asteroid) in state.asteroids.iter_mut().enumerate() {
        asteroid.position = Vector2D::new(520.0 + 40.0 * i as f64, -100.0);
        asteroid.fall_speed = 0.0;
    }
    for (i, coin) in state.coins.iter_mut().enumerate() {
        coin.position = Vector2D::new(100.0 + 50.0 * i as f64, -1000.0);
    }
    for pickup in [&mut state.power_up, &mut state.shield, &mut state.life] {
        pickup.body.position = Vector2D::new(700.0, -3000.0);
    }
    state.scoreboard.score = score;
    (state, rng)
}

fn ship_position(state: &GameState) -> Vector2D {
    state.ship.position
}

// ── Initial state ─────────────────────────────────────────────────────────────

#[test]
fn new_round_starts_from_defaults() {
    let mut rng = StdRng::seed_from_u64(1);
    let state = GameState::new(25, &mut rng);
    assert_eq!(state.ship.position, Vector2D::new(SHIP_START_X, SHIP_START_Y));
    assert_eq!(state.ship.lives, 3);
    assert_eq!(state.asteroids.len(), 3);
    assert_eq!(state.coins.len(), 3);
    assert_eq!(state.level, 1);
    assert_eq!(state.scoreboard.high_score, 25);
    assert!(state.bullet_available);
    assert!(!state.powerup_available);
    assert!(state.asteroids.iter().all(|a| ASTEROID_SPAWN_ZONE.contains(a.position) && a.fall_speed == INITIAL_ASTEROID_SPEED));
    assert!(state.coins.iter().all(|c| COIN_SPAWN_ZONE.contains(c.position)));
    assert_eq!(state.power_up.body.position, Vector2D::new(50.0, 50.0));
}

// ── Level and asteroid population ─────────────────────────────────────────────

#[test]
fn crossing_fifteen_adds_one_asteroid_next_step() {
    let (mut state, mut rng) = quiet_state(14, 0);
    state.step(&[], &mut rng);
    assert_eq!(state.level, 1);
    assert_eq!(state.asteroids.len(), 3);

    state.scoreboard.score = 15;
    state.step(&[], &mut rng);
    assert_eq!(state.level, 2);
    assert_eq!(state.asteroids.len(), 3);

    state.step(&[], &mut rng);
    assert_eq!(state.asteroids.len(), 4);
    assert_eq!(state.asteroids[3].fall_speed, SPAWNED_ASTEROID_SPEED);
}

// ── Bonus rounds ──────────────────────────────────────────────────────────────

#[test]
fn bonus_round_freezes_asteroids_and_fills_coins() {
    let (mut state, mut rng) = quiet_state(5, 0);
    for asteroid in state.asteroids.iter_mut() {
        asteroid.fall_speed = 0.5;
    }
    let before: Vec<Vector2D> = state.asteroids.iter().map(|a| a.position).collect();
    state.step(&[], &mut rng);
    assert!(state.bonus_round);
    assert_eq!(state.coins.len(), BONUS_COIN_COUNT);
    let after: Vec<Vector2D> = state.asteroids.iter().map(|a| a.position).collect();
    assert_eq!(before, after);

    let newest: Vec<Vector2D> = state.coins[17..].iter().map(|c| c.position).collect();
    state.scoreboard.score = 6;
    state.step(&[], &mut rng);
    assert!(!state.bonus_round);
    assert_eq!(state.coins.len(), STEADY_COIN_COUNT);
    for (coin, old) in state.coins.iter().zip(newest) {
        assert!((coin.position.y - (old.y + COIN_SPEED)).abs() < 1e-9);
    }
    assert!(state.asteroids.iter().all(|a| a.position.y == -99.5));
}

#[test]
fn fresh_round_opens_as_bonus_round() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut state = GameState::new(0, &mut rng);
    state.step(&[], &mut rng);
    assert!(state.bonus_round);
    assert_eq!(state.coins.len(), BONUS_COIN_COUNT);
}

// ── Collisions and lives ──────────────────────────────────────────────────────

#[test]
fn asteroid_collision_costs_a_life() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.asteroids[0].position = Vector2D::new(370.0, 430.0);
    state.asteroids[0].fall_speed = 0.5;
    let report = state.step(&[], &mut rng);
    assert_eq!(state.ship.lives, 2);
    assert!(ASTEROID_RESPAWN_ZONE.contains(state.asteroids[0].position));
    assert!(!report.game_over_entered);
    assert_eq!(report.persist_high_score, None);
}

#[test]
fn shield_absorbs_one_collision() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.ship.safety = true;
    state.asteroids[0].position = Vector2D::new(380.0, 470.0);
    state.step(&[], &mut rng);
    assert_eq!(state.ship.lives, 3);
    assert!(!state.ship.safety);
}

#[test]
fn escaped_asteroid_costs_a_life() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.asteroids[2].position = Vector2D::new(700.0, 550.0);
    state.asteroids[2].fall_speed = 0.5;
    state.step(&[], &mut rng);
    assert_eq!(state.ship.lives, 2);
    assert!(ASTEROID_RESPAWN_ZONE.contains(state.asteroids[2].position));
}

#[test]
fn last_life_lost_ends_the_game_but_pickups_still_work() {
    let (mut state, mut rng) = quiet_state(1, 5);
    state.ship.lives = 1;
    state.asteroids[0].position = Vector2D::new(370.0, 430.0);
    state.asteroids[0].fall_speed = 0.5;

    let report = state.step(&[], &mut rng);
    assert_eq!(state.ship.lives, 0);
    assert!(state.game_over);
    assert!(report.game_over_entered);
    assert_eq!(report.persist_high_score, Some(5));

    let asteroids_before = state.asteroids.clone();
    let coins_before = state.coins.clone();
    state.shield.body.position = ship_position(&state);
    state.power_up.body.position = ship_position(&state);

    let report = state.step(&[], &mut rng);
    assert!(!report.game_over_entered);
    assert_eq!(report.persist_high_score, Some(5));
    assert_eq!(state.asteroids, asteroids_before);
    assert_eq!(state.coins, coins_before);
    assert!(state.ship.safety);
    assert!(state.ship.power);
    assert!(state.powerup_available);
    assert!(state.game_over);
}

#[test]
fn game_over_writes_the_better_score_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    std::fs::write(&path, "4").unwrap();
    let mut store = HighScoreStore::file(&path);
    let high_score = store.load_or_reset();

    let (mut state, mut rng) = quiet_state(9, high_score);
    state.ship.lives = 1;
    state.asteroids[1].position = Vector2D::new(700.0, 551.0);

    let report = state.step(&[], &mut rng);
    assert!(report.game_over_entered);
    store.save(report.persist_high_score.unwrap()).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "9");
}

// ── Shooting ──────────────────────────────────────────────────────────────────

#[test]
fn bullet_rises_hits_and_rearms() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.asteroids[0].position = Vector2D::new(386.0, 300.0);

    state.step(&[Command::Fire], &mut rng);
    assert!(!state.bullet_available);
    assert_eq!(state.ship.bullet.position, Vector2D::new(386.0, 487.0));

    // A second press while the shot is in flight does nothing
    state.step(&[Command::Fire], &mut rng);
    assert_eq!(state.ship.bullet.position.y, 484.0);

    let mut steps = 0;
    while state.score() == 1 && steps < 100 {
        state.step(&[], &mut rng);
        steps += 1;
    }
    assert_eq!(state.score(), 2);
    assert!(state.bullet_available);
    assert!(state.ship.bullet.position.y < -900.0);
    assert!(ASTEROID_RESPAWN_ZONE.contains(state.asteroids[0].position));
}

#[test]
fn power_up_pickup_arms_fan_until_cancelled() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.power_up.body.position = ship_position(&state);

    state.step(&[], &mut rng);
    assert!(state.ship.power);
    assert!(state.powerup_available);
    let positions: Vec<Vector2D> = state.ship.power_weapon.bullets.iter().map(|b| b.position).collect();
    assert_eq!(
        positions,
        vec![Vector2D::new(370.0, 490.0), Vector2D::new(386.0, 490.0), Vector2D::new(402.0, 490.0)]
    );

    state.step(&[Command::CancelPower], &mut rng);
    assert!(!state.ship.power);
    assert!(!state.powerup_available);
    let bullets = &state.ship.power_weapon.bullets;
    assert!((bullets[0].position.x - 369.7).abs() < 1e-9);
    assert_eq!(bullets[1].position, Vector2D::new(386.0, 487.0));
    assert!((bullets[2].position.x - 402.3).abs() < 1e-9);

    // Cancelling twice is a no-op once the latch is spent
    state.ship.power = true;
    state.step(&[Command::CancelPower], &mut rng);
    assert!(state.ship.power);
}

#[test]
fn power_bullet_hit_scores_and_recycles_asteroid() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.ship.power = true;
    state.ship.power_weapon.fire(Vector2D::new(100.0, 200.0));
    state.asteroids[0].position = Vector2D::new(110.0, 180.0);
    state.step(&[], &mut rng);
    assert_eq!(state.score(), 2);
    assert!(ASTEROID_RESPAWN_ZONE.contains(state.asteroids[0].position));
}

// ── Coins and pickups ─────────────────────────────────────────────────────────

#[test]
fn coin_collection_scores_and_recycles() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.coins[1].position = Vector2D::new(370.0, 470.0);
    state.step(&[], &mut rng);
    assert_eq!(state.score(), 2);
    assert!(COIN_RESPAWN_ZONE.contains(state.coins[1].position));
}

#[test]
fn life_pickup_caps_at_four() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.life.body.position = ship_position(&state);
    state.step(&[], &mut rng);
    assert_eq!(state.ship.lives, 4);
    state.life.body.position = ship_position(&state);
    state.step(&[], &mut rng);
    assert_eq!(state.ship.lives, 4);
    assert!(state.life.body.position.y < -700.0);
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn held_keys_move_until_released() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.step(&[Command::LeftDown], &mut rng);
    state.step(&[], &mut rng);
    assert_eq!(state.ship.position.x, 366.0);
    state.step(&[Command::LeftUp, Command::RightDown], &mut rng);
    assert_eq!(state.ship.position.x, 368.0);
    state.step(&[Command::RightUp], &mut rng);
    assert_eq!(state.ship.position.x, 368.0);
}

/// Feeds key events through the tracker the way the terminal driver does and
/// returns how far left the ship ended up.
fn drift_left(events: &[(u64, KeyEvent)], frames: u64) -> f64 {
    let (mut state, mut rng) = quiet_state(1, 0);
    let start = state.ship.position.x;
    let mut keys = KeyTracker::new();
    for frame in 0..frames {
        let mut commands: Vec<Command> = events
            .iter()
            .filter(|(at, _)| *at == frame)
            .filter_map(|(_, event)| keys.translate(event, frame))
            .collect();
        commands.extend(keys.expire(frame));
        for step in 0..SIM_STEPS_PER_FRAME {
            let step_commands: &[Command] = if step == 0 { &commands } else { &[] };
            state.step(step_commands, &mut rng);
        }
    }
    start - state.ship.position.x
}

fn left(kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, kind)
}

#[test]
fn tap_without_release_event_moves_a_short_way() {
    let moved = drift_left(&[(0, left(KeyEventKind::Press))], 60);
    let expected =
        (HOLD_WINDOW_FRAMES + 1) as f64 * SIM_STEPS_PER_FRAME as f64 * SHIP_MOVEMENT_SPEED;
    assert_eq!(moved, expected);
    assert!(moved <= 48.0, "single tap moved the ship {} units", moved);
}

#[test]
fn release_event_stops_the_ship_at_once() {
    let events = [(0, left(KeyEventKind::Press)), (1, left(KeyEventKind::Release))];
    let moved = drift_left(&events, 60);
    assert_eq!(moved, SIM_STEPS_PER_FRAME as f64 * SHIP_MOVEMENT_SPEED);
}

#[test]
fn repeated_presses_keep_the_ship_moving() {
    let events: Vec<(u64, KeyEvent)> =
        (0..=20).step_by(2).map(|f| (f, left(KeyEventKind::Press))).collect();
    let moved = drift_left(&events, 60);
    let frames_moving = 20 + HOLD_WINDOW_FRAMES + 1;
    assert_eq!(moved, frames_moving as f64 * SIM_STEPS_PER_FRAME as f64 * SHIP_MOVEMENT_SPEED);
}

#[test]
fn edges_drop_the_held_key() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.ship.position.x = -1.0;
    state.step(&[Command::LeftDown], &mut rng);
    assert!(!state.move_left);
    assert_eq!(state.ship.position.x, -1.0);

    state.ship.position.x = 731.0;
    state.step(&[Command::RightDown], &mut rng);
    assert!(!state.move_right);
    assert_eq!(state.ship.position.x, 731.0);
}

#[test]
fn quit_stops_the_round() {
    let (mut state, mut rng) = quiet_state(1, 0);
    state.step(&[Command::Quit], &mut rng);
    assert!(!state.running);
}
