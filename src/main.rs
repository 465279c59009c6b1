use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use snake_powerups::food::PickupPlugin;
use snake_powerups::game::{BACKGROUND_COLOR, BOARD_HEIGHT, BOARD_WIDTH, GameConfig, GameState};
use snake_powerups::persistence::{self, HighScoreStore, HighScores};
use snake_powerups::rendering::RenderingPlugin;
use snake_powerups::snake::SnakePlugin;
use snake_powerups::ui::UiPlugin;

// Room around the board for the score line
const WINDOW_MARGIN: u32 = 20;
const HUD_HEIGHT: u32 = 30;

fn main() {
    let config = GameConfig::default();
    let store = high_score_store(&config);

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(
                        BOARD_WIDTH as u32 + WINDOW_MARGIN,
                        BOARD_HEIGHT as u32 + WINDOW_MARGIN + 2 * HUD_HEIGHT,
                    ),
                    title: "Snake".to_string(),
                    // Arrow keys and space must not scroll the page on the web
                    prevent_default_event_handling: true,
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(GameState::new(config, 0))
        .insert_resource(HighScores(store))
        .add_plugins((SnakePlugin, PickupPlugin, UiPlugin, RenderingPlugin))
        .run();
}

#[cfg(not(target_arch = "wasm32"))]
fn high_score_store(config: &GameConfig) -> Box<dyn HighScoreStore> {
    Box::new(persistence::FileHighScoreStore::new(&config.high_score_path))
}

// No filesystem in the browser; the score lives as long as the page.
#[cfg(target_arch = "wasm32")]
fn high_score_store(_config: &GameConfig) -> Box<dyn HighScoreStore> {
    Box::new(persistence::MemoryHighScoreStore::default())
}
