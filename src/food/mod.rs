//! Pickup plugin - draws food and power-ups, and flashes where one was taken.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    FOOD_COLOR, FoodEatenEvent, GRID_SIZE, GameState, PowerUpKind, PowerUpPickedEvent, Z_FOOD,
    Z_POWER_UP,
};
use crate::rendering::cell_to_world;

/// Plugin for food and power-up visuals.
pub struct PickupPlugin;

impl Plugin for PickupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PickupPulse>().add_systems(
            Update,
            (
                pickup_pulse_animation,
                draw_pickups,
                spawn_pickup_effects,
                pulse_effect_system,
            )
                .chain(),
        );
    }
}

/// Shared timer for the idle pulse of everything that can be picked up.
#[derive(Resource)]
pub struct PickupPulse {
    pub timer: Timer,
}

impl Default for PickupPulse {
    fn default() -> Self {
        PickupPulse {
            timer: Timer::from_seconds(0.8, TimerMode::Repeating),
        }
    }
}

impl PickupPulse {
    /// Current scale factor, swinging around 1.0.
    pub fn scale(&self) -> f32 {
        let progress = self.timer.fraction();
        1.0 + (progress * std::f32::consts::PI * 2.0).sin() * 0.15
    }
}

/// Component for a short-lived flash that grows and then disappears.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

fn pickup_pulse_animation(time: Res<Time>, mut pulse: ResMut<PickupPulse>) {
    pulse.timer.tick(time.delta());
}

/// System to draw the food and every power-up lying on the board.
fn draw_pickups(mut painter: ShapePainter, game_state: Res<GameState>, pulse: Res<PickupPulse>) {
    let cell = GRID_SIZE as f32;
    let scale = pulse.scale();

    painter.reset();
    let food = cell_to_world(game_state.food.x as f32, game_state.food.y as f32);
    painter.set_translation(food.extend(Z_FOOD));
    painter.color = FOOD_COLOR;
    painter.circle(cell / 2.0 * scale);

    for power_up in &game_state.power_ups {
        let pos = cell_to_world(power_up.position.x as f32, power_up.position.y as f32);
        painter.set_translation(pos.extend(Z_POWER_UP));
        painter.color = power_up.kind.color();
        painter.corner_radii = Vec4::splat(0.3);
        painter.rect(Vec2::splat(cell * scale));
    }
}

/// System to flash where food was eaten or a power-up was taken.
fn spawn_pickup_effects(
    mut commands: Commands,
    game_state: Res<GameState>,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
    mut power_up_reader: MessageReader<PowerUpPickedEvent>,
) {
    for event in food_eaten_reader.read() {
        let pos = cell_to_world(event.position.x as f32, event.position.y as f32);
        spawn_flash(&mut commands, pos, Color::srgba(1.0, 1.0, 0.3, 0.8));
    }

    let head = game_state.head();
    let pos = cell_to_world(head.x as f32, head.y as f32);
    for event in power_up_reader.read() {
        spawn_flash(&mut commands, pos, flash_color(event.kind));
    }
}

fn flash_color(kind: PowerUpKind) -> Color {
    kind.color().with_alpha(0.8)
}

fn spawn_flash(commands: &mut Commands, pos: Vec2, color: Color) {
    commands.spawn((
        ShapeBundle::circle(
            &ShapeConfig {
                color,
                alpha_mode: ShapeAlphaMode::Add,
                transform: Transform::from_translation(pos.extend(Z_FOOD + 0.5)),
                ..ShapeConfig::default_2d()
            },
            GRID_SIZE as f32 / 2.0,
        ),
        PulseEffect {
            timer: Timer::from_seconds(0.3, TimerMode::Once),
            start_scale: 1.0,
            end_scale: 2.5,
        },
    ));
}

/// System to handle pulse effects (for eaten food flash).
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            transform.scale = Vec3::splat(scale);
        }
    }
}
