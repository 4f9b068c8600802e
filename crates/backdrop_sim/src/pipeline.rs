use backdrop_core::FieldConfig;
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow, WindowResized};

use super::canvas::DrawList;
use super::field::ParticleField;
use super::state::{CurrentTheme, FieldControl, FieldState, ThemeChanged};

/// Merged field configuration handed to the plugin at startup
#[derive(Resource, Debug, Clone)]
pub struct FieldSettings(pub FieldConfig);

/// Ordering of the field systems within `Update`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldSet {
    /// Pointer, resize and theme signals
    Input,
    /// Simulation step, writes the `DrawList`
    Tick,
}

/// Bevy plugin for the particle field frame loop
pub struct FieldSimulationPlugin {
    pub config: FieldConfig,
}

impl FieldSimulationPlugin {
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }
}

impl Plugin for FieldSimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FieldSettings(self.config.clone()))
            .init_resource::<DrawList>()
            .init_resource::<CurrentTheme>()
            .init_state::<FieldState>()
            .add_event::<FieldControl>()
            .add_event::<ThemeChanged>()
            .configure_sets(Update, (FieldSet::Input, FieldSet::Tick).chain())
            .add_systems(OnEnter(FieldState::Running), start_field)
            .add_systems(OnEnter(FieldState::Stopped), dispose_field)
            .add_systems(
                Update,
                (
                    field_control_system,
                    theme_system.in_set(FieldSet::Input),
                    (pointer_system, resize_system)
                        .in_set(FieldSet::Input)
                        .run_if(in_state(FieldState::Running)),
                    field_tick
                        .in_set(FieldSet::Tick)
                        .run_if(in_state(FieldState::Running)),
                ),
            );
    }
}

/// Bind the field to the primary window. No window, no field.
fn start_field(
    mut commands: Commands,
    settings: Res<FieldSettings>,
    theme: Res<CurrentTheme>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let surface = windows.get_single().ok().map(|w| (w.width(), w.height()));
    let Some(mut field) = ParticleField::initialize(surface, settings.0.clone()) else {
        info!("No drawing surface found; particle field disabled");
        return;
    };
    field.set_theme(theme.0.is_dark());

    let (width, height) = field.size();
    info!(
        "Particle field started: {} particles at {}x{} ({} theme)",
        field.particles().len(),
        width,
        height,
        field.theme().name()
    );
    commands.insert_resource(field);
}

/// Drop the field and its last frame
fn dispose_field(mut commands: Commands, mut draw_list: ResMut<DrawList>) {
    commands.remove_resource::<ParticleField>();
    draw_list.commands.clear();
    info!("Particle field stopped");
}

/// Only the last request of a frame counts, so Stop then Start is a no-op
fn field_control_system(
    mut events: EventReader<FieldControl>,
    state: Res<State<FieldState>>,
    mut next: ResMut<NextState<FieldState>>,
) {
    let Some(last) = events.read().last() else {
        return;
    };
    let target = match last {
        FieldControl::Start => FieldState::Running,
        FieldControl::Stop => FieldState::Stopped,
    };
    if *state.get() == target {
        next.reset();
    } else {
        next.set(target);
    }
}

/// Apply theme pushes. Runs while stopped too, so a restart picks up the latest flag.
fn theme_system(
    mut events: EventReader<ThemeChanged>,
    mut current: ResMut<CurrentTheme>,
    field: Option<ResMut<ParticleField>>,
) {
    let Some(last) = events.read().last() else {
        return;
    };
    current.0 = backdrop_core::Theme::from_dark(last.is_dark);
    if let Some(mut field) = field {
        field.set_theme(last.is_dark);
    }
}

/// Pointer events of the primary window.
///
/// Moves and leaves arrive on separate queues, so their order within a
/// frame is resolved from the window's own cursor position, which the
/// windowing backend updates on every move and clears on leave.
fn pointer_system(
    mut moved: EventReader<CursorMoved>,
    mut left: EventReader<CursorLeft>,
    primary: Query<(Entity, &Window), With<PrimaryWindow>>,
    field: Option<ResMut<ParticleField>>,
) {
    let (Some(mut field), Ok((entity, window))) = (field, primary.get_single()) else {
        moved.clear();
        left.clear();
        return;
    };
    let last_move = moved
        .read()
        .filter(|e| e.window == entity)
        .last()
        .map(|e| e.position);
    let any_leave = left.read().filter(|e| e.window == entity).count() > 0;
    if last_move.is_none() && !any_leave {
        return;
    }

    match (window.cursor_position(), last_move) {
        (Some(p), _) => field.set_pointer(p.x, p.y),
        (None, Some(p)) if !any_leave => field.set_pointer(p.x, p.y),
        _ => field.clear_pointer(),
    }
}

/// Every resize of the primary window rebuilds the field
fn resize_system(
    mut events: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    field: Option<ResMut<ParticleField>>,
) {
    let Some(mut field) = field else {
        events.clear();
        return;
    };
    let Ok(window) = primary.get_single() else {
        return;
    };
    for event in events.read().filter(|e| e.window == window) {
        field.resize(event.width, event.height);
        debug!(
            "Resized to {}x{}: {} particles",
            event.width,
            event.height,
            field.particles().len()
        );
    }
}

/// Main frame tick: simulate and record the frame's draw calls
fn field_tick(field: Option<ResMut<ParticleField>>, mut draw_list: ResMut<DrawList>) {
    if let Some(mut field) = field {
        field.step(&mut *draw_list);
    }
}
