use bevy::prelude::*;

/// Marker for the backdrop camera
#[derive(Component)]
pub struct BackdropCamera;

/// Spawn the 2D camera. World origin is the window center, one unit per logical pixel.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, BackdropCamera));
}

/// Surface coordinates (top-left origin, y down) to 2D world coordinates
pub fn surface_to_world(p: [f32; 2], width: f32, height: f32) -> Vec2 {
    Vec2::new(p[0] - width * 0.5, height * 0.5 - p[1])
}
