//! Game constants for board size, timing, power-ups, colors, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

use super::Position;

// Board dimensions (in world units; every cell is GRID_SIZE wide)
pub const GRID_SIZE: i32 = 10;
pub const BOARD_WIDTH: i32 = 600;
pub const BOARD_HEIGHT: i32 = 400;

// Snake
pub const INITIAL_SNAKE: [Position; 3] = [
    Position { x: 100, y: 100 },
    Position { x: 90, y: 100 },
    Position { x: 80, y: 100 },
];
pub const INITIAL_FOOD: Position = Position { x: 200, y: 200 };
pub const BASE_SNAKE_SPEED: u32 = 15;
pub const MAX_SNAKE_SPEED: u32 = 30;
pub const INPUT_BUFFER_CAPACITY: usize = 2;

// Scoring
pub const FOOD_SCORE: u32 = 10;
pub const SPEED_RAMP_EVERY: u32 = 50;

// Timing
pub const ENEMY_SPAWN_INTERVAL: Duration = Duration::from_secs(10);
pub const POWER_UP_MAP_LIFETIME: Duration = Duration::from_secs(15);

// Chances
pub const POWER_UP_CHANCE: f64 = 0.1;
pub const ENEMY_TURN_CHANCE: f64 = 0.1;

// Enemy speed range, in cells per step
pub const ENEMY_MIN_SPEED: f32 = 0.7;
pub const ENEMY_SPEED_SPREAD: f32 = 0.6;

// Persistence
pub const HIGH_SCORE_FILE: &str = "snake_high_score.txt";

// Colors
pub const SNAKE_COLOR_EVEN: Color = Color::srgb(0.298, 0.686, 0.314);
pub const SNAKE_COLOR_ODD: Color = Color::srgb(0.506, 0.780, 0.518);
pub const FOOD_COLOR: Color = Color::srgb(0.957, 0.263, 0.212);
pub const ENEMY_COLOR: Color = Color::srgb(0.85, 0.1, 0.35);
pub const SPEED_BOOST_COLOR: Color = Color::srgb(1.0, 0.341, 0.133);
pub const SHIELD_COLOR: Color = Color::srgb(0.129, 0.588, 0.953);
pub const SCORE_MULTIPLIER_COLOR: Color = Color::srgb(0.298, 0.686, 0.314);
pub const SLOW_MOTION_COLOR: Color = Color::srgb(0.612, 0.153, 0.690);
pub const ARENA_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_POWER_UP: f32 = 1.2;
pub const Z_SNAKE: f32 = 1.5;
pub const Z_ENEMY: f32 = 2.0;
