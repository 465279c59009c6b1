//! Rendering plugin - draws the board, snake and enemies each frame and shakes
//! the camera when the game ends.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::prelude::*;

use crate::game::{
    ARENA_COLOR, BOARD_HEIGHT, BOARD_WIDTH, ENEMY_COLOR, GRID_SIZE, GameOverEvent, GameState,
    SHIELD_COLOR, SNAKE_COLOR_EVEN, SNAKE_COLOR_ODD, Z_BACKGROUND, Z_ENEMY, Z_SNAKE,
};

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraShake>().add_systems(
            Update,
            (
                draw_board,
                draw_snake,
                draw_enemies,
                trigger_camera_shake_on_game_over,
                camera_shake_system,
            )
                .chain(),
        );
    }
}

/// Resource for camera shake effect.
#[derive(Resource)]
pub struct CameraShake {
    pub timer: Timer,
    pub intensity: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        CameraShake {
            timer: Timer::from_seconds(0.0, TimerMode::Once),
            intensity: 0.0,
        }
    }
}

/// Converts a board position (top-left origin, y down) to the centre of its
/// cell in world space (centred origin, y up).
pub fn cell_to_world(x: f32, y: f32) -> Vec2 {
    let half = GRID_SIZE as f32 / 2.0;
    let (width, height) = board_size();
    Vec2::new(x + half - width / 2.0, height / 2.0 - y - half)
}

fn board_size() -> (f32, f32) {
    (BOARD_WIDTH as f32, BOARD_HEIGHT as f32)
}

/// Segment color alternates along the body.
pub fn segment_color(index: usize) -> Color {
    if index % 2 == 0 {
        SNAKE_COLOR_EVEN
    } else {
        SNAKE_COLOR_ODD
    }
}

fn draw_board(mut painter: ShapePainter) {
    let (width, height) = board_size();
    painter.reset();
    painter.set_translation(Vec3::new(0.0, 0.0, Z_BACKGROUND));
    painter.color = ARENA_COLOR;
    painter.rect(Vec2::new(width, height));
}

fn draw_snake(mut painter: ShapePainter, game_state: Res<GameState>) {
    let size = GRID_SIZE as f32;
    painter.reset();
    painter.corner_radii = Vec4::splat(0.2);

    for (index, segment) in game_state.snake.iter().enumerate() {
        let pos = cell_to_world(segment.x as f32, segment.y as f32);
        painter.set_translation(pos.extend(Z_SNAKE));
        painter.color = segment_color(index);
        painter.rect(Vec2::splat(size));
    }

    // Shield ring around the head
    if game_state.has_shield {
        let head = game_state.head();
        let pos = cell_to_world(head.x as f32, head.y as f32);
        painter.set_translation(pos.extend(Z_SNAKE + 0.1));
        painter.hollow = true;
        painter.thickness = 1.5;
        painter.color = SHIELD_COLOR;
        painter.circle(size * 0.9);
    }
}

fn draw_enemies(mut painter: ShapePainter, game_state: Res<GameState>) {
    let size = GRID_SIZE as f32;
    painter.reset();
    painter.color = ENEMY_COLOR;
    // Diamonds, to tell them apart from power-ups
    painter.rotate_z(std::f32::consts::FRAC_PI_4);

    for enemy in &game_state.enemies {
        let pos = cell_to_world(enemy.x, enemy.y);
        painter.set_translation(pos.extend(Z_ENEMY));
        painter.rect(Vec2::splat(size * 0.8));
    }
}

/// System to trigger camera shake on game over.
fn trigger_camera_shake_on_game_over(
    mut game_over_reader: MessageReader<GameOverEvent>,
    mut camera_shake: ResMut<CameraShake>,
) {
    if game_over_reader.read().next().is_some() {
        camera_shake.timer = Timer::from_seconds(0.5, TimerMode::Once);
        camera_shake.intensity = 8.0;
    }
}

/// System to apply camera shake effect.
fn camera_shake_system(
    time: Res<Time>,
    mut camera_shake: ResMut<CameraShake>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    if !camera_shake.timer.is_finished() {
        camera_shake.timer.tick(time.delta());

        if let Ok(mut camera_transform) = camera_query.single_mut() {
            if camera_shake.timer.is_finished() {
                // Reset camera position when shake is done
                camera_transform.translation.x = 0.0;
                camera_transform.translation.y = 0.0;
            } else {
                // Apply random shake based on intensity
                let progress = camera_shake.timer.fraction();
                let decay = 1.0 - progress;

                let mut rng = rand::rng();
                let shake_x = (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
                let shake_y = (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;

                camera_transform.translation.x = shake_x;
                camera_transform.translation.y = shake_y;
            }
        }
    }
}
