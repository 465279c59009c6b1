//! Collision handling: pickups, self and enemy hits, enemy wandering.

use bevy::log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::{GRID_SIZE, GamePhase, GameState, PowerUpKind, activate_power_up, consume_shield};

/// What the head ran into during a step.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum CollisionKind {
    SelfCollision,
    Enemy,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Collision {
    pub kind: CollisionKind,
    /// The shield took the hit and the game goes on.
    pub shielded: bool,
}

/// Picks up the first inactive power-up under the head, if any.
pub fn check_power_up_collision(state: &mut GameState) -> Option<PowerUpKind> {
    let head = state.head();
    let index = state
        .power_ups
        .iter()
        .position(|p| !p.active && p.position.collides_with(&head))?;
    let power_up = state.power_ups.remove(index);
    let kind = power_up.kind;
    activate_power_up(state, power_up);
    Some(kind)
}

/// Resolves at most one collision for the current head, self hits first.
pub fn check_collisions(state: &mut GameState) -> Option<Collision> {
    let head = state.head();

    if state.snake[1..].iter().any(|s| s.collides_with(&head)) {
        return Some(resolve_hit(state, CollisionKind::SelfCollision, None));
    }

    let enemy = state.enemies.iter().position(|e| e.overlaps(head))?;
    Some(resolve_hit(state, CollisionKind::Enemy, Some(enemy)))
}

fn resolve_hit(state: &mut GameState, kind: CollisionKind, enemy: Option<usize>) -> Collision {
    if !state.has_shield {
        state.phase = GamePhase::GameOver;
        info!("Game Over! {kind:?}, final score: {}", state.score);
        return Collision {
            kind,
            shielded: false,
        };
    }

    consume_shield(state);
    if let Some(index) = enemy {
        state.enemies.remove(index);
    }
    Collision {
        kind,
        shielded: true,
    }
}

/// Moves every enemy, drops the ones that left the board and lets the rest
/// turn now and then. Returns how many left the board.
pub fn move_enemies<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> usize {
    let size = GRID_SIZE as f32;
    let width = state.config.board_width as f32;
    let height = state.config.board_height as f32;
    let turn_chance = state.config.enemy_turn_chance;
    let before = state.enemies.len();

    state.enemies.retain_mut(|enemy| {
        let (dx, dy) = enemy.direction.delta();
        enemy.x += dx as f32 * size * enemy.speed;
        enemy.y += dy as f32 * size * enemy.speed;

        if enemy.x < -size || enemy.x > width || enemy.y < -size || enemy.y > height {
            return false;
        }
        if rng.random_bool(turn_chance)
            && let Some(direction) = enemy.direction.turns().choose(rng)
        {
            enemy.direction = *direction;
        }
        true
    });

    before - state.enemies.len()
}
