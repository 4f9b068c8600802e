use backdrop_core::constants::{CONNECTION_LINE_WIDTH, DARK_OUTLINE_WIDTH};
use backdrop_sim::{DrawCommand, DrawList};
use bevy::prelude::*;

use super::camera::surface_to_world;

/// Gizmo group for the thin outlines drawn around particles in dark mode
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct OutlineGizmos;

pub fn configure_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (lines, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    lines.line_width = CONNECTION_LINE_WIDTH;
    let (outlines, _) = store.config_mut::<OutlineGizmos>();
    outlines.line_width = DARK_OUTLINE_WIDTH;
}

fn to_color(c: [f32; 4]) -> Color {
    Color::srgba(c[0], c[1], c[2], c[3])
}

/// Immediate-mode strokes of the latest `DrawList`: connection segments and outlines
pub fn draw_strokes(
    draw_list: Res<DrawList>,
    mut lines: Gizmos,
    mut outlines: Gizmos<OutlineGizmos>,
) {
    let (w, h) = (draw_list.width, draw_list.height);
    for cmd in &draw_list.commands {
        match cmd {
            DrawCommand::Line { from, to, stroke } => {
                lines.line_2d(
                    surface_to_world(*from, w, h),
                    surface_to_world(*to, w, h),
                    to_color(stroke.color),
                );
            }
            DrawCommand::Circle {
                center,
                radius,
                outline: Some(stroke),
                ..
            } => {
                outlines.circle_2d(surface_to_world(*center, w, h), *radius, to_color(stroke.color));
            }
            DrawCommand::Circle { outline: None, .. } => {}
        }
    }
}
