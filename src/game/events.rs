//! Game events (messages).

use bevy::prelude::*;

use super::{Position, PowerUpKind};

/// Message triggered when food is eaten (for visual effects).
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Position,
}

/// Message triggered when the snake picks up a power-up.
#[derive(Message)]
pub struct PowerUpPickedEvent {
    pub kind: PowerUpKind,
}

/// Message triggered when the snake dies.
#[derive(Message)]
pub struct GameOverEvent {
    pub score: u32,
}
