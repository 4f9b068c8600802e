use backdrop_sim::pipeline::FieldSet;
use bevy::prelude::*;
use std::path::PathBuf;

use super::camera;
use super::connections::{self, OutlineGizmos};
use super::controls;
use super::particles::{self, DotPool};
use super::theme::ThemePlugin;

/// Presentation of the particle field plus the theme collaborator
pub struct BackdropRenderPlugin {
    /// Theme preference file
    pub prefs_path: PathBuf,
}

impl BackdropRenderPlugin {
    pub fn new(prefs_path: impl Into<PathBuf>) -> Self {
        Self {
            prefs_path: prefs_path.into(),
        }
    }
}

impl Plugin for BackdropRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ThemePlugin {
            prefs_path: self.prefs_path.clone(),
        })
        .init_resource::<DotPool>()
        .init_gizmo_group::<OutlineGizmos>()
        .add_systems(
            Startup,
            (
                camera::spawn_camera,
                particles::init_dot_pool,
                connections::configure_gizmos,
            ),
        )
        .add_systems(Update, controls::field_control_keys.before(FieldSet::Input))
        .add_systems(
            Update,
            (particles::sync_particle_dots, connections::draw_strokes).after(FieldSet::Tick),
        );
    }
}
