//! The game state resource and the small state machines hanging off it.

use bevy::prelude::*;
use std::time::Duration;

use super::{
    ActivePowerUp, Direction, Enemy, ExpiryQueue, GameConfig, INITIAL_FOOD, INITIAL_SNAKE,
    INPUT_BUFFER_CAPACITY, Position, PowerUp, PowerUpId,
};

/// Which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    Paused,
    GameOver,
}

/// Main game state resource. Every engine mutates it through `&mut`.
#[derive(Resource, Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Head first.
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub input_buffer: InputBuffer,
    pub food: Position,
    /// Power-ups lying on the board.
    pub power_ups: Vec<PowerUp>,
    /// Picked-up power-ups whose effects are running, oldest first.
    pub active_power_ups: Vec<ActivePowerUp>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub high_score: u32,
    pub has_shield: bool,
    pub speed_multiplier: f32,
    pub score_multiplier: u32,
    /// Moves per second before the speed multiplier.
    pub snake_speed: u32,
    pub phase: GamePhase,
    /// Time of the last movement step.
    pub last_update: Duration,
    /// Time of the previous tick.
    pub last_frame: Duration,
    pub enemy_spawn_timer: Duration,
    pub expiry: ExpiryQueue,
    next_power_up_id: u64,
}

impl GameState {
    /// A fresh board with the given persisted high score. No food has been
    /// placed yet; `start_game` does that.
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        GameState {
            snake: INITIAL_SNAKE.to_vec(),
            direction: Direction::Right,
            input_buffer: InputBuffer::default(),
            food: INITIAL_FOOD,
            power_ups: Vec::new(),
            active_power_ups: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            high_score,
            has_shield: false,
            speed_multiplier: 1.0,
            score_multiplier: 1,
            snake_speed: config.base_snake_speed,
            phase: GamePhase::Running,
            last_update: Duration::ZERO,
            last_frame: Duration::ZERO,
            enemy_spawn_timer: Duration::ZERO,
            expiry: ExpiryQueue::default(),
            next_power_up_id: 0,
            config,
        }
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Time between two movement steps at the current speed.
    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / (self.snake_speed as f64 * self.speed_multiplier as f64))
    }

    /// Queues a turn unless it reverses the latest heading.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        let last = self.input_buffer.last_direction().unwrap_or(self.direction);
        if direction == last || direction == last.opposite() {
            return false;
        }
        self.input_buffer.queue_direction(direction)
    }

    pub(crate) fn next_power_up_id(&mut self) -> PowerUpId {
        self.next_power_up_id += 1;
        PowerUpId(self.next_power_up_id)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(GameConfig::default(), 0)
    }
}

/// Input buffer to queue direction changes between steps.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    queued_directions: Vec<Direction>,
}

impl InputBuffer {
    /// Queue a direction change (max 2 buffered inputs).
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if self.queued_directions.len() < INPUT_BUFFER_CAPACITY {
            self.queued_directions.push(direction);
            true
        } else {
            false
        }
    }

    /// Pop the next queued direction.
    pub fn pop_direction(&mut self) -> Option<Direction> {
        if !self.queued_directions.is_empty() {
            Some(self.queued_directions.remove(0))
        } else {
            None
        }
    }

    /// Get the last queued direction without removing it.
    pub fn last_direction(&self) -> Option<Direction> {
        self.queued_directions.last().copied()
    }

    pub fn len(&self) -> usize {
        self.queued_directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued_directions.is_empty()
    }

    /// Clear all queued directions.
    pub fn clear(&mut self) {
        self.queued_directions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default(), 120);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.head(), Position::new(100, 100));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.high_score, 120);
        assert_eq!(state.snake_speed, 15);
        assert!(state.is_running());
    }

    #[test]
    fn test_reverse_turn_is_rejected() {
        let mut state = GameState::default();
        assert!(!state.queue_direction(Direction::Left));
        assert!(state.input_buffer.is_empty());
        assert_eq!(state.direction, Direction::Right);
    }

    #[test]
    fn test_reversal_is_checked_against_last_queued() {
        let mut state = GameState::default();
        assert!(state.queue_direction(Direction::Up));
        // Down would reverse the queued Up, even though the snake still heads right.
        assert!(!state.queue_direction(Direction::Down));
        assert!(state.queue_direction(Direction::Left));
        assert_eq!(state.input_buffer.len(), 2);
    }

    #[test]
    fn test_input_buffer_capacity() {
        let mut buffer = InputBuffer::default();
        assert!(buffer.queue_direction(Direction::Up));
        assert!(buffer.queue_direction(Direction::Left));
        assert!(!buffer.queue_direction(Direction::Down));
        assert_eq!(buffer.pop_direction(), Some(Direction::Up));
        assert_eq!(buffer.last_direction(), Some(Direction::Left));
    }

    #[test]
    fn test_step_interval_follows_multiplier() {
        let mut state = GameState::default();
        state.snake_speed = 10;
        assert_eq!(state.step_interval(), Duration::from_millis(100));
        state.speed_multiplier = 0.5;
        assert_eq!(state.step_interval(), Duration::from_millis(200));
    }
}
