//! Frame-driven game loop, pause/resume and restart.

use std::time::Duration;

use bevy::log::info;
use rand::Rng;

use super::{
    Collision, Direction, FoodOutcome, GamePhase, GameState, INITIAL_SNAKE, PowerUpKind,
    check_collisions, generate_food, move_enemies, move_snake, spawn_enemy, update_power_ups,
};

/// Everything a single tick did, for the host to react to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// A movement step ran this tick.
    pub stepped: bool,
    pub ate: Option<FoodOutcome>,
    pub picked_up: Option<PowerUpKind>,
    pub collision: Option<Collision>,
    pub expired: Vec<PowerUpKind>,
    pub enemy_spawned: bool,
}

impl TickReport {
    pub fn game_over(&self) -> bool {
        self.collision.is_some_and(|c| !c.shielded)
    }

    pub fn new_high_score(&self) -> Option<u32> {
        self.ate.as_ref().and_then(|a| a.new_high_score)
    }
}

/// A player command decoded from the keyboard.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
}

/// Resets everything except the high score and starts running at `now`.
pub fn start_game<R: Rng + ?Sized>(state: &mut GameState, now: Duration, rng: &mut R) {
    state.snake = INITIAL_SNAKE.to_vec();
    state.direction = Direction::Right;
    state.input_buffer.clear();
    state.snake_speed = state.config.base_snake_speed;
    state.score = 0;
    state.speed_multiplier = 1.0;
    state.score_multiplier = 1;
    state.has_shield = false;
    state.power_ups.clear();
    state.active_power_ups.clear();
    state.enemies.clear();
    state.enemy_spawn_timer = Duration::ZERO;
    state.expiry.clear();

    generate_food(state, rng);

    state.phase = GamePhase::Running;
    state.last_update = now;
    state.last_frame = now;
    info!("New game started (high score {})", state.high_score);
}

/// One frame of the game loop.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, now: Duration, rng: &mut R) -> TickReport {
    let mut report = TickReport::default();
    if !state.is_running() {
        return report;
    }

    let delta = now.saturating_sub(state.last_update);
    if delta > state.step_interval() {
        let moved = move_snake(state, now, rng);
        report.ate = moved.ate;
        report.picked_up = moved.picked_up;
        move_enemies(state, rng);
        report.collision = check_collisions(state);
        report.expired = update_power_ups(state, delta);
        report.stepped = true;
        state.last_update = now;
    }

    state.enemy_spawn_timer += now.saturating_sub(state.last_frame);
    state.last_frame = now;
    if state.enemy_spawn_timer >= state.config.enemy_spawn_interval {
        spawn_enemy(state, rng);
        state.enemy_spawn_timer = Duration::ZERO;
        report.enemy_spawned = true;
    }

    report
}

/// Pauses a running game or resumes a paused one. Game over is left alone.
pub fn toggle_pause(state: &mut GameState, now: Duration) {
    match state.phase {
        GamePhase::Running => {
            state.phase = GamePhase::Paused;
            info!("Paused");
        }
        GamePhase::Paused => {
            state.phase = GamePhase::Running;
            // Re-anchor so the pause does not count as elapsed game time.
            state.last_update = now;
            state.last_frame = now;
            info!("Resumed");
        }
        GamePhase::GameOver => {}
    }
}

/// Applies one player command.
pub fn handle_command<R: Rng + ?Sized>(
    state: &mut GameState,
    command: Command,
    now: Duration,
    rng: &mut R,
) {
    match command {
        Command::Turn(direction) => {
            state.queue_direction(direction);
        }
        Command::TogglePause => toggle_pause(state, now),
        Command::Restart => {
            if !state.is_running() {
                start_game(state, now, rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Position};
    use rand::{SeedableRng, rngs::StdRng};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn started() -> (GameState, StdRng) {
        let mut rng = StdRng::seed_from_u64(21);
        let mut state = GameState::new(GameConfig::deterministic(), 0);
        start_game(&mut state, ms(1_000), &mut rng);
        state.food = Position::new(500, 300);
        (state, rng)
    }

    #[test]
    fn test_step_waits_for_interval() {
        let (mut state, mut rng) = started();
        // 15 moves per second: one step every 66.7ms
        assert!(!tick(&mut state, ms(1_016), &mut rng).stepped);
        assert!(!tick(&mut state, ms(1_066), &mut rng).stepped);
        assert!(tick(&mut state, ms(1_067), &mut rng).stepped);
        assert_eq!(state.head(), Position::new(110, 100));
        assert_eq!(state.last_update, ms(1_067));
    }

    #[test]
    fn test_enemy_timer_uses_frame_time() {
        let (mut state, mut rng) = started();
        let mut now = 1_000;
        let mut spawned = 0;
        // 625 frames of 16ms add up to exactly ten seconds.
        for _ in 0..625 {
            now += 16;
            if tick(&mut state, ms(now), &mut rng).enemy_spawned {
                spawned += 1;
            }
        }
        assert_eq!(spawned, 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemy_spawn_timer, Duration::ZERO);
    }

    #[test]
    fn test_paused_game_ignores_ticks() {
        let (mut state, mut rng) = started();
        toggle_pause(&mut state, ms(1_010));
        let report = tick(&mut state, ms(5_000), &mut rng);
        assert_eq!(report, TickReport::default());
        assert_eq!(state.head(), Position::new(100, 100));
    }

    #[test]
    fn test_resume_does_not_catch_up() {
        let (mut state, mut rng) = started();
        toggle_pause(&mut state, ms(1_010));
        toggle_pause(&mut state, ms(60_000));
        assert_eq!(state.last_update, ms(60_000));

        assert!(!tick(&mut state, ms(60_016), &mut rng).stepped);
        assert_eq!(state.enemy_spawn_timer, ms(16));
    }

    #[test]
    fn test_restart_only_when_not_running() {
        let (mut state, mut rng) = started();
        state.score = 90;
        handle_command(&mut state, Command::Restart, ms(2_000), &mut rng);
        assert_eq!(state.score, 90);

        handle_command(&mut state, Command::TogglePause, ms(2_000), &mut rng);
        handle_command(&mut state, Command::Restart, ms(2_100), &mut rng);
        assert_eq!(state.score, 0);
        assert!(state.is_running());
        assert_eq!(state.last_update, ms(2_100));
    }

    #[test]
    fn test_space_does_not_revive_finished_game() {
        let (mut state, mut rng) = started();
        state.phase = GamePhase::GameOver;
        handle_command(&mut state, Command::TogglePause, ms(2_000), &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_reverse_command_is_ignored() {
        let (mut state, mut rng) = started();
        handle_command(&mut state, Command::Turn(Direction::Left), ms(1_010), &mut rng);
        tick(&mut state, ms(1_100), &mut rng);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.head(), Position::new(110, 100));
    }
}
