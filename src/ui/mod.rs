//! UI plugin - handles the camera, score display, pause banner and the game
//! over screen.

use bevy::prelude::*;

use crate::game::{GameOverEvent, GamePhase, GameState};

/// Plugin for UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (
                update_score_text,
                update_pause_banner,
                spawn_game_over_screen_system,
                despawn_game_over_screen_on_restart,
            )
                .chain(),
        );
    }
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the pause banner.
#[derive(Component)]
pub struct PauseText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Initial setup system - camera, score text, pause banner.
fn setup_system(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands.spawn((
        Text::from("Score: 0"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(6.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            PauseText,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("PAUSED - press SPACE to resume"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 0.3, 1.0)),
            ));
        });
}

/// Builds the HUD line: score, high score and running effects.
pub fn hud_line(game_state: &GameState) -> String {
    let mut line = format!(
        "Score: {}   High Score: {}",
        game_state.score, game_state.high_score
    );
    for effect in &game_state.active_power_ups {
        line.push_str(&format!("   {} {:.1}s", effect.kind, effect.remaining_secs));
    }
    line
}

/// System to update the score display.
fn update_score_text(game_state: Res<GameState>, mut query: Query<&mut Text, With<ScoreText>>) {
    if let Ok(mut text) = query.single_mut() {
        *text = Text::from(hud_line(&game_state));
    }
}

fn update_pause_banner(
    game_state: Res<GameState>,
    mut query: Query<&mut Visibility, With<PauseText>>,
) {
    if let Ok(mut visibility) = query.single_mut() {
        *visibility = if game_state.phase == GamePhase::Paused {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, score: u32) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GameOverUI,
        ))
        .with_children(|parent| {
            // "GAME OVER" text
            parent.spawn((
                Text::from("GAME OVER"),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 0.3, 0.3, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            // Final score text
            parent.spawn((
                Text::from(format!("Final Score: {}", score)),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            // Restart instructions
            parent.spawn((
                Text::from("Press R to restart"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}

/// System to spawn game over screen when game ends.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    mut game_over_reader: MessageReader<GameOverEvent>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    // Only one overlay at a time
    if let Some(event) = game_over_reader.read().last()
        && game_over_ui.is_empty()
    {
        spawn_game_over_screen(&mut commands, event.score);
    }
}

/// System to remove the game over screen once a new game runs.
fn despawn_game_over_screen_on_restart(
    mut commands: Commands,
    game_state: Res<GameState>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game_state.phase != GamePhase::GameOver {
        for entity in game_over_ui.iter() {
            commands.entity(entity).despawn();
        }
    }
}
