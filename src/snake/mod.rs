//! Snake plugin - feeds keyboard input and frame time into the game loop and
//! publishes what happened as messages.

use bevy::prelude::*;

use crate::game::{
    Command, Direction, FoodEatenEvent, GameOverEvent, GameState, PowerUpPickedEvent,
    expire_map_power_ups, handle_command, start_game, tick,
};
use crate::persistence::HighScores;

/// Plugin for input and game-loop systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FoodEatenEvent>()
            .add_message::<PowerUpPickedEvent>()
            .add_message::<GameOverEvent>()
            .add_systems(Startup, begin_game)
            .add_systems(
                Update,
                (snake_input, game_tick, expire_power_ups, log_exit).chain(),
            );
    }
}

/// Maps a key to the command it stands for.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::ArrowUp => Some(Command::Turn(Direction::Up)),
        KeyCode::ArrowDown => Some(Command::Turn(Direction::Down)),
        KeyCode::ArrowLeft => Some(Command::Turn(Direction::Left)),
        KeyCode::ArrowRight => Some(Command::Turn(Direction::Right)),
        KeyCode::Space => Some(Command::TogglePause),
        KeyCode::KeyR => Some(Command::Restart),
        _ => None,
    }
}

/// Loads the stored high score and starts the first game.
fn begin_game(mut game_state: ResMut<GameState>, high_scores: Res<HighScores>, time: Res<Time<Real>>) {
    game_state.high_score = high_scores.load_or_default();
    start_game(&mut game_state, time.elapsed(), &mut rand::rng());
}

/// System to turn key presses into game commands.
fn snake_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    time: Res<Time<Real>>,
) {
    let mut rng = rand::rng();
    for key in keyboard_input.get_just_pressed() {
        if let Some(command) = command_for_key(*key) {
            handle_command(&mut game_state, command, time.elapsed(), &mut rng);
        }
    }
}

/// System to run one frame of the game loop.
fn game_tick(
    mut game_state: ResMut<GameState>,
    mut high_scores: ResMut<HighScores>,
    time: Res<Time<Real>>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut power_up_writer: MessageWriter<PowerUpPickedEvent>,
    mut game_over_writer: MessageWriter<GameOverEvent>,
) {
    if !game_state.is_running() {
        return;
    }

    let report = tick(&mut game_state, time.elapsed(), &mut rand::rng());

    if let Some(ate) = &report.ate {
        food_eaten_writer.write(FoodEatenEvent {
            position: ate.position,
        });
    }
    if let Some(score) = report.new_high_score() {
        high_scores.record(score);
    }
    if let Some(kind) = report.picked_up {
        power_up_writer.write(PowerUpPickedEvent { kind });
    }
    for kind in &report.expired {
        debug!("{kind} wore off");
    }
    if report.enemy_spawned {
        debug!("{} enemies on the board", game_state.enemies.len());
    }
    if report.game_over() {
        game_over_writer.write(GameOverEvent {
            score: game_state.score,
        });
    }
}

/// System to clear unclaimed power-ups off the board. Runs while paused too.
fn expire_power_ups(mut game_state: ResMut<GameState>, time: Res<Time<Real>>) {
    if game_state.expiry.is_empty() {
        return;
    }
    expire_map_power_ups(&mut game_state, time.elapsed());
}

fn log_exit(mut exit_reader: MessageReader<AppExit>, game_state: Res<GameState>) {
    if exit_reader.read().next().is_some() {
        info!(
            "Exiting with score {} (high score {})",
            game_state.score, game_state.high_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_keys() {
        assert_eq!(
            command_for_key(KeyCode::ArrowUp),
            Some(Command::Turn(Direction::Up))
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowLeft),
            Some(Command::Turn(Direction::Left))
        );
        assert_eq!(command_for_key(KeyCode::Space), Some(Command::TogglePause));
        assert_eq!(command_for_key(KeyCode::KeyR), Some(Command::Restart));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(command_for_key(KeyCode::KeyW), None);
        assert_eq!(command_for_key(KeyCode::Enter), None);
    }
}
