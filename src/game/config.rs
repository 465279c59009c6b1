use std::path::PathBuf;
use std::time::Duration;

use super::{
    BASE_SNAKE_SPEED, BOARD_HEIGHT, BOARD_WIDTH, ENEMY_SPAWN_INTERVAL, ENEMY_TURN_CHANCE,
    HIGH_SCORE_FILE, MAX_SNAKE_SPEED, POWER_UP_CHANCE, POWER_UP_MAP_LIFETIME,
};

/// Tunable rules of a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Board width in world units
    pub board_width: i32,
    /// Board height in world units
    pub board_height: i32,
    /// Snake moves per second at the start of a game
    pub base_snake_speed: u32,
    /// Upper bound for the speed ramp
    pub max_snake_speed: u32,
    /// Probability that eating food drops a power-up
    pub power_up_chance: f64,
    /// Per-step probability that an enemy turns
    pub enemy_turn_chance: f64,
    pub enemy_spawn_interval: Duration,
    /// How long an unclaimed power-up stays on the board
    pub power_up_lifetime: Duration,
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            base_snake_speed: BASE_SNAKE_SPEED,
            max_snake_speed: MAX_SNAKE_SPEED,
            power_up_chance: POWER_UP_CHANCE,
            enemy_turn_chance: ENEMY_TURN_CHANCE,
            enemy_spawn_interval: ENEMY_SPAWN_INTERVAL,
            power_up_lifetime: POWER_UP_MAP_LIFETIME,
            high_score_path: PathBuf::from(HIGH_SCORE_FILE),
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn with_board(width: i32, height: i32) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Default::default()
        }
    }

    /// Same rules with every random drop and turn disabled
    pub fn deterministic() -> Self {
        Self {
            power_up_chance: 0.0,
            enemy_turn_chance: 0.0,
            ..Default::default()
        }
    }
}
