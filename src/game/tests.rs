//! Whole-game scenarios driven through `tick` and the engine entry points.

use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

use super::*;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn new_game(seed: u64) -> (GameState, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new(GameConfig::deterministic(), 0);
    start_game(&mut state, Duration::ZERO, &mut rng);
    (state, rng)
}

/// Puts the food right in front of the head.
fn food_ahead(state: &mut GameState) {
    state.food = state.head().stepped(
        state.direction,
        state.config.board_width,
        state.config.board_height,
    );
}

#[test]
fn test_first_meal() {
    let (mut state, mut rng) = new_game(1);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.direction, Direction::Right);
    assert!(state.power_ups.is_empty() && state.enemies.is_empty());

    food_ahead(&mut state);
    let report = tick(&mut state, ms(100), &mut rng);

    assert_eq!(report.ate.as_ref().map(|a| a.score), Some(10));
    assert_eq!(report.new_high_score(), Some(10));
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 4);
    assert!(!state.snake.contains(&state.food));
}

#[test]
fn test_length_grows_by_one_per_meal() {
    let (mut state, mut rng) = new_game(2);
    let mut now = 0;
    for _ in 0..12 {
        food_ahead(&mut state);
        now += 100;
        assert!(tick(&mut state, ms(now), &mut rng).ate.is_some());
    }
    assert_eq!(state.snake.len(), 3 + 12);
    assert!(state.is_running());
}

#[test]
fn test_wraparound_never_leaves_board() {
    let (mut state, mut rng) = new_game(3);
    state.food = Position::new(0, 0);
    state.snake = vec![Position::new(590, 200)];
    tick(&mut state, ms(100), &mut rng);
    assert_eq!(state.head(), Position::new(0, 200));

    state.snake = vec![Position::new(300, 390)];
    state.direction = Direction::Down;
    tick(&mut state, ms(200), &mut rng);
    assert_eq!(state.head(), Position::new(300, 0));
}

#[test]
fn test_speed_ramp_from_fifteen_to_sixteen() {
    let (mut state, mut rng) = new_game(4);
    let mut now = 0;
    for _ in 0..5 {
        food_ahead(&mut state);
        now += 100;
        tick(&mut state, ms(now), &mut rng);
    }
    assert_eq!(state.score, 50);
    assert_eq!(state.snake_speed, 16);
}

#[test]
fn test_top_edge_enemy() {
    let mut state = GameState::default();
    let mut rng = StdRng::seed_from_u64(0);
    let mut found = false;
    for _ in 0..50 {
        if spawn_enemy(&mut state, &mut rng) == Edge::Top {
            let enemy = state.enemies.last().unwrap();
            assert_eq!(enemy.direction, Direction::Down);
            assert_eq!(enemy.y, 0.0);
            found = true;
        }
    }
    assert!(found);
}

#[test]
fn test_slow_motion_runs_out() {
    let (mut state, mut rng) = new_game(5);
    state.power_ups.push(PowerUp {
        id: PowerUpId(99),
        position: Position::new(110, 100),
        kind: PowerUpKind::SlowMotion,
        duration_secs: PowerUpKind::SlowMotion.duration_secs(),
        active: false,
    });
    state.food = Position::new(500, 300);

    let report = tick(&mut state, ms(100), &mut rng);
    assert_eq!(report.picked_up, Some(PowerUpKind::SlowMotion));
    // The pickup step ages the effect by its own 100ms.
    assert_eq!(state.speed_multiplier, 0.5);

    // Slow motion: 7.5 moves/s, one step every 133ms. Step every 200ms.
    let mut now = 100;
    while state.speed_multiplier != 1.0 {
        now += 200;
        tick(&mut state, ms(now), &mut rng);
        assert!(now <= 6_100, "slow motion outlived its duration");
    }
    assert_eq!(now, 6_100);
    assert!(state.active_power_ups.is_empty());
}

#[test]
fn test_shield_saves_from_enemy_then_second_hit_kills() {
    let (mut state, mut rng) = new_game(6);
    state.food = Position::new(500, 300);
    state.has_shield = true;
    state.active_power_ups.push(ActivePowerUp {
        id: PowerUpId(1),
        kind: PowerUpKind::Shield,
        remaining_secs: 8.0,
    });
    // Parked enemies right where the head will be after each step.
    for x in [110.0, 120.0] {
        state.enemies.push(Enemy {
            x,
            y: 100.0,
            direction: Direction::Down,
            speed: 0.0,
        });
    }

    let report = tick(&mut state, ms(100), &mut rng);
    let hit = report.collision.unwrap();
    assert_eq!(hit.kind, CollisionKind::Enemy);
    assert!(hit.shielded);
    assert!(!state.has_shield);
    assert!(state.active_power_ups.is_empty());
    assert_eq!(state.enemies.len(), 1);

    let report = tick(&mut state, ms(200), &mut rng);
    assert!(report.game_over());
    assert_eq!(state.phase, GamePhase::GameOver);

    // Game over is terminal until restart.
    assert_eq!(tick(&mut state, ms(300), &mut rng), TickReport::default());
}

#[test]
fn test_unclaimed_power_up_expires_even_while_paused() {
    let (mut state, mut rng) = new_game(7);
    state.config.power_up_chance = 1.0;
    food_ahead(&mut state);
    let report = tick(&mut state, ms(100), &mut rng);
    assert!(report.ate.unwrap().power_up_dropped);
    assert_eq!(state.power_ups.len(), 1);

    toggle_pause(&mut state, ms(200));
    assert_eq!(expire_map_power_ups(&mut state, ms(15_000)), 0);
    assert_eq!(expire_map_power_ups(&mut state, ms(15_100)), 1);
    assert!(state.power_ups.is_empty());
}

#[test]
fn test_restart_discards_pending_expiry() {
    let (mut state, mut rng) = new_game(8);
    state.config.power_up_chance = 1.0;
    food_ahead(&mut state);
    tick(&mut state, ms(100), &mut rng);
    assert_eq!(state.expiry.len(), 1);

    state.phase = GamePhase::GameOver;
    handle_command(&mut state, Command::Restart, ms(1_000), &mut rng);
    assert!(state.expiry.is_empty());
    assert!(state.power_ups.is_empty());
    assert_eq!(state.high_score, 10);
    assert_eq!(state.snake, INITIAL_SNAKE.to_vec());
}
