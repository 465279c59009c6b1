//! Placement of food, power-ups and enemies.

use std::time::Duration;

use bevy::log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::{
    Direction, ENEMY_MIN_SPEED, ENEMY_SPEED_SPREAD, Enemy, GRID_SIZE, GameState, Position,
    PowerUp, PowerUpId, PowerUpKind,
};

/// Board edge an enemy enters from.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Direction that points into the board from this edge.
    pub fn inward(&self) -> Direction {
        match self {
            Edge::Top => Direction::Down,
            Edge::Right => Direction::Left,
            Edge::Bottom => Direction::Up,
            Edge::Left => Direction::Right,
        }
    }
}

/// Every cell not taken by the snake, a board power-up or an enemy.
pub fn free_cells(state: &GameState, exclude_food: bool) -> Vec<Position> {
    let mut cells = Vec::new();
    for x in (0..state.config.board_width).step_by(GRID_SIZE as usize) {
        for y in (0..state.config.board_height).step_by(GRID_SIZE as usize) {
            let cell = Position::new(x, y);
            if !is_occupied(state, cell) && !(exclude_food && cell == state.food) {
                cells.push(cell);
            }
        }
    }
    cells
}

fn is_occupied(state: &GameState, cell: Position) -> bool {
    state.snake.iter().any(|s| s.collides_with(&cell))
        || state.power_ups.iter().any(|p| p.position.collides_with(&cell))
        || state.enemies.iter().any(|e| e.overlaps(cell))
}

/// Moves the food to a random free cell. A full board keeps the old spot.
pub fn generate_food<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    if let Some(cell) = free_cells(state, false).choose(rng) {
        state.food = *cell;
    }
}

/// Drops a random power-up on a free cell that is not the food and schedules
/// its removal from the board.
pub fn generate_power_up<R: Rng + ?Sized>(
    state: &mut GameState,
    now: Duration,
    rng: &mut R,
) -> Option<PowerUpId> {
    let cell = *free_cells(state, true).choose(rng)?;
    let kind = *PowerUpKind::ALL.choose(rng)?;
    let id = state.next_power_up_id();

    state.power_ups.push(PowerUp {
        id,
        position: cell,
        kind,
        duration_secs: kind.duration_secs(),
        active: false,
    });
    state.expiry.schedule(id, now + state.config.power_up_lifetime);
    debug!("{kind} dropped at ({}, {})", cell.x, cell.y);
    Some(id)
}

/// Spawns an enemy on a random edge, heading into the board.
pub fn spawn_enemy<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Edge {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let columns = state.config.board_width / GRID_SIZE;
    let rows = state.config.board_height / GRID_SIZE;

    let (x, y) = match edge {
        Edge::Top => (rng.random_range(0..columns) * GRID_SIZE, 0),
        Edge::Right => (
            state.config.board_width - GRID_SIZE,
            rng.random_range(0..rows) * GRID_SIZE,
        ),
        Edge::Bottom => (
            rng.random_range(0..columns) * GRID_SIZE,
            state.config.board_height - GRID_SIZE,
        ),
        Edge::Left => (0, rng.random_range(0..rows) * GRID_SIZE),
    };

    state.enemies.push(Enemy {
        x: x as f32,
        y: y as f32,
        direction: edge.inward(),
        speed: ENEMY_MIN_SPEED + rng.random::<f32>() * ENEMY_SPEED_SPREAD,
    });
    debug!("Enemy entered from {edge:?} at ({x}, {y})");
    edge
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use rand::{SeedableRng, rngs::StdRng};

    fn tiny_state() -> GameState {
        // 3x1 board: the snake fills all of it
        let mut state = GameState::new(GameConfig::with_board(30, 10), 0);
        state.snake = vec![
            Position::new(20, 0),
            Position::new(10, 0),
            Position::new(0, 0),
        ];
        state
    }

    #[test]
    fn test_food_avoids_snake_power_ups_and_enemies() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = GameState::new(GameConfig::with_board(40, 10), 0);
        state.snake = vec![Position::new(0, 0)];
        state.power_ups.push(PowerUp {
            id: PowerUpId(1),
            position: Position::new(10, 0),
            kind: PowerUpKind::Shield,
            duration_secs: 8.0,
            active: false,
        });
        state.enemies.push(Enemy {
            x: 20.0,
            y: 0.0,
            direction: Direction::Down,
            speed: 1.0,
        });

        for _ in 0..20 {
            generate_food(&mut state, &mut rng);
            assert_eq!(state.food, Position::new(30, 0));
        }
    }

    #[test]
    fn test_full_board_keeps_previous_food() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = tiny_state();
        state.food = Position::new(10, 0);
        generate_food(&mut state, &mut rng);
        assert_eq!(state.food, Position::new(10, 0));
    }

    #[test]
    fn test_power_up_skips_food_cell() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = tiny_state();
        state.snake.truncate(1);
        state.food = Position::new(10, 0);

        let id = generate_power_up(&mut state, Duration::ZERO, &mut rng);
        assert!(id.is_some());
        assert_eq!(state.power_ups[0].position, Position::new(0, 0));
        assert!(!state.power_ups[0].active);
        assert_eq!(
            state.power_ups[0].duration_secs,
            state.power_ups[0].kind.duration_secs()
        );
        assert_eq!(state.expiry.len(), 1);
    }

    #[test]
    fn test_power_up_on_full_board_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = tiny_state();
        assert_eq!(generate_power_up(&mut state, Duration::ZERO, &mut rng), None);
        assert!(state.power_ups.is_empty());
        assert!(state.expiry.is_empty());
    }

    #[test]
    fn test_enemies_enter_moving_inward() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = GameState::default();
        for _ in 0..64 {
            let edge = spawn_enemy(&mut state, &mut rng);
            let enemy = state.enemies.last().unwrap();
            assert_eq!(enemy.direction, edge.inward());
            assert!((0.7..=1.3).contains(&enemy.speed));
            match edge {
                Edge::Top => assert_eq!(enemy.y, 0.0),
                Edge::Right => assert_eq!(enemy.x, 590.0),
                Edge::Bottom => assert_eq!(enemy.y, 390.0),
                Edge::Left => assert_eq!(enemy.x, 0.0),
            }
            assert_eq!(enemy.x as i32 % GRID_SIZE, 0);
            assert_eq!(enemy.y as i32 % GRID_SIZE, 0);
        }
    }
}
