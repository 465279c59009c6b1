//! Snake movement and eating.

use std::time::Duration;

use bevy::log::debug;
use rand::Rng;

use super::{
    FOOD_SCORE, GameState, Position, PowerUpKind, SPEED_RAMP_EVERY, check_power_up_collision,
    generate_food, generate_power_up,
};

/// What happened when food was eaten.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodOutcome {
    pub position: Position,
    pub score: u32,
    /// Set when the score beat the stored high score.
    pub new_high_score: Option<u32>,
    pub power_up_dropped: bool,
    pub speed_increased: bool,
}

/// What one movement step did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveOutcome {
    pub ate: Option<FoodOutcome>,
    pub picked_up: Option<PowerUpKind>,
}

/// Advances the snake one cell, wrapping at the board edges.
pub fn move_snake<R: Rng + ?Sized>(state: &mut GameState, now: Duration, rng: &mut R) -> MoveOutcome {
    if let Some(direction) = state.input_buffer.pop_direction() {
        state.direction = direction;
    }

    let head = state.head().stepped(
        state.direction,
        state.config.board_width,
        state.config.board_height,
    );
    state.snake.insert(0, head);

    let ate = if head.collides_with(&state.food) {
        Some(eat_food(state, now, rng))
    } else {
        state.snake.pop();
        None
    };

    MoveOutcome {
        ate,
        picked_up: check_power_up_collision(state),
    }
}

/// Scores the food under the head, respawns it and maybe drops a power-up.
pub fn eat_food<R: Rng + ?Sized>(state: &mut GameState, now: Duration, rng: &mut R) -> FoodOutcome {
    let position = state.food;
    state.score += FOOD_SCORE * state.score_multiplier;

    let new_high_score = if state.score > state.high_score {
        state.high_score = state.score;
        Some(state.score)
    } else {
        None
    };

    generate_food(state, rng);

    let power_up_dropped = rng.random_bool(state.config.power_up_chance)
        && generate_power_up(state, now, rng).is_some();

    let speed_increased =
        state.score % SPEED_RAMP_EVERY == 0 && state.snake_speed < state.config.max_snake_speed;
    if speed_increased {
        state.snake_speed += 1;
        debug!("Snake speed is now {}", state.snake_speed);
    }

    FoodOutcome {
        position,
        score: state.score,
        new_high_score,
        power_up_dropped,
        speed_increased,
    }
}
