use backdrop_core::FieldConfig;
use backdrop_render::BackdropRenderPlugin;
use backdrop_sim::pipeline::FieldSimulationPlugin;
use bevy::prelude::*;
use std::path::Path;

const OVERRIDES_PATH: &str = "backdrop.json";
const THEME_PREFS_PATH: &str = "prefs/theme.bin";

/// Outcome of reading the override file, logged once logging is up
#[derive(Resource)]
struct ConfigLoad(Option<String>);

fn main() {
    let (overrides, load_error) = match backdrop_storage::load_overrides(Path::new(OVERRIDES_PATH)) {
        Ok(o) => (o, None),
        Err(e) => (Default::default(), Some(e)),
    };
    let config = FieldConfig::default().with_overrides(&overrides);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Backdrop".into(),
                resolution: (1280.0, 800.0).into(),
                canvas: Some(config.canvas_selector.clone()),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(backdrop_render::theme::background(default())))
        .insert_resource(ConfigLoad(load_error))
        .add_plugins(FieldSimulationPlugin::new(config))
        .add_plugins(BackdropRenderPlugin::new(THEME_PREFS_PATH))
        .add_systems(Startup, report_config)
        .run();
}

fn report_config(load: Res<ConfigLoad>) {
    match &load.0 {
        Some(e) => warn!("Using default particle config, {} unreadable: {}", OVERRIDES_PATH, e),
        None => info!("Particle config loaded"),
    }
}
