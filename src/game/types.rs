//! Value types shared by the game engines.

use std::fmt;

use super::{GRID_SIZE, SHIELD_COLOR, SCORE_MULTIPLIER_COLOR, SLOW_MOTION_COLOR, SPEED_BOOST_COLOR};
use bevy::prelude::Color;

/// A cell on the board, in world units (always a multiple of `GRID_SIZE`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Check if this position collides with another position.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Moves one cell and wraps around the board edges.
    pub fn stepped(self, direction: Direction, width: i32, height: i32) -> Self {
        let (dx, dy) = direction.delta();
        Position {
            x: (self.x + dx * GRID_SIZE).rem_euclid(width),
            y: (self.y + dy * GRID_SIZE).rem_euclid(height),
        }
    }
}

/// Direction of travel. `Up` decreases `y`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit offset in cells.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// The three directions that do not reverse `self`.
    pub fn turns(&self) -> [Direction; 3] {
        let reverse = self.opposite();
        let mut out = [*self; 3];
        let mut i = 0;
        for dir in Direction::ALL {
            if dir != reverse {
                out[i] = dir;
                i += 1;
            }
        }
        out
    }
}

/// Kinds of power-up that can appear on the board.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum PowerUpKind {
    SpeedBoost,
    Shield,
    ScoreMultiplier,
    SlowMotion,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::SpeedBoost,
        PowerUpKind::Shield,
        PowerUpKind::ScoreMultiplier,
        PowerUpKind::SlowMotion,
    ];

    /// How long the effect lasts once picked up, in seconds.
    pub fn duration_secs(&self) -> f64 {
        match self {
            PowerUpKind::SpeedBoost => 3.0,
            PowerUpKind::Shield => 8.0,
            PowerUpKind::ScoreMultiplier => 10.0,
            PowerUpKind::SlowMotion => 6.0,
        }
    }

    /// Speed and slow-motion both drive the speed multiplier.
    pub fn affects_speed(&self) -> bool {
        matches!(self, PowerUpKind::SpeedBoost | PowerUpKind::SlowMotion)
    }

    pub fn color(&self) -> Color {
        match self {
            PowerUpKind::SpeedBoost => SPEED_BOOST_COLOR,
            PowerUpKind::Shield => SHIELD_COLOR,
            PowerUpKind::ScoreMultiplier => SCORE_MULTIPLIER_COLOR,
            PowerUpKind::SlowMotion => SLOW_MOTION_COLOR,
        }
    }
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PowerUpKind::SpeedBoost => "Speed Boost",
            PowerUpKind::Shield => "Shield",
            PowerUpKind::ScoreMultiplier => "Score x2",
            PowerUpKind::SlowMotion => "Slow Motion",
        };
        f.write_str(name)
    }
}

/// Identifies one spawned power-up for the lifetime of a game.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
pub struct PowerUpId(pub u64);

/// A power-up lying on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub id: PowerUpId,
    pub position: Position,
    pub kind: PowerUpKind,
    pub duration_secs: f64,
    pub active: bool,
}

/// A picked-up power-up whose effect is running.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivePowerUp {
    pub id: PowerUpId,
    pub kind: PowerUpKind,
    pub remaining_secs: f64,
}

/// An enemy drifting across the board at a sub-cell position.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    /// Cells travelled per step.
    pub speed: f32,
}

impl Enemy {
    /// True when the enemy overlaps the cell at `pos` on both axes.
    pub fn overlaps(&self, pos: Position) -> bool {
        let size = GRID_SIZE as f32;
        (pos.x as f32 - self.x).abs() < size && (pos.y as f32 - self.y).abs() < size
    }
}
