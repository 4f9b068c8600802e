use backdrop_core::Theme;
use backdrop_sim::ThemeChanged;
use backdrop_sim::pipeline::FieldSet;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowTheme, WindowThemeChanged};
use std::path::PathBuf;

/// Owner of the theme flag and its stored preference
#[derive(Resource, Debug, Clone)]
pub struct ThemeToggle {
    /// Where the preference is persisted
    pub path: PathBuf,
    /// Preference read from or written to disk; `None` follows the OS
    pub stored: Option<Theme>,
    pub theme: Theme,
}

impl ThemeToggle {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            stored: None,
            theme: Theme::Light,
        }
    }

    /// Flip the theme and pin it as the stored preference
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.stored = Some(self.theme);
        self.theme
    }

    /// Follow an OS theme change unless the user has a stored preference.
    /// Returns the new theme when it changed.
    pub fn follow_os(&mut self, os_dark: bool) -> Option<Theme> {
        if self.stored.is_some() {
            return None;
        }
        let theme = Theme::from_dark(os_dark);
        if theme == self.theme {
            return None;
        }
        self.theme = theme;
        Some(theme)
    }
}

/// Theme owner: resolves the startup theme, handles [T] and OS theme
/// changes, and keeps the clear color in step with the field
pub struct ThemePlugin {
    /// Theme preference file
    pub prefs_path: PathBuf,
}

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ThemeToggle::new(self.prefs_path.clone()))
            .add_systems(Startup, init_theme)
            .add_systems(
                Update,
                (theme_toggle_system, os_theme_system).before(FieldSet::Input),
            )
            .add_systems(Update, apply_background.after(FieldSet::Tick));
    }
}

/// Background behind the particles for each theme
pub fn background(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::srgb(0.07, 0.07, 0.1),
        Theme::Light => Color::srgb(0.97, 0.97, 0.98),
    }
}

/// Resolve the startup theme: stored preference, else the OS theme
pub fn init_theme(
    mut toggle: ResMut<ThemeToggle>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut changed: EventWriter<ThemeChanged>,
) {
    let stored = match backdrop_storage::load_theme(&toggle.path) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Ignoring theme preference at {}: {}", toggle.path.display(), e);
            None
        }
    };
    let os_dark = windows
        .get_single()
        .map(|w| w.window_theme == Some(WindowTheme::Dark))
        .unwrap_or(false);

    toggle.stored = stored;
    toggle.theme = backdrop_storage::resolve_theme(stored, os_dark);
    info!(
        "Theme: {} ({})",
        toggle.theme.name(),
        if stored.is_some() { "stored" } else { "system" }
    );
    changed.send(ThemeChanged {
        is_dark: toggle.theme.is_dark(),
    });
}

/// [T] toggles the theme, persists it and pushes it to the field
pub fn theme_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut toggle: ResMut<ThemeToggle>,
    mut changed: EventWriter<ThemeChanged>,
) {
    if !keyboard.just_pressed(KeyCode::KeyT) {
        return;
    }
    let theme = toggle.toggle();
    if let Err(e) = backdrop_storage::save_theme(theme, &toggle.path) {
        warn!("Failed to save theme preference: {}", e);
    }
    info!("Theme toggled: {}", theme.name());
    changed.send(ThemeChanged {
        is_dark: theme.is_dark(),
    });
}

pub fn os_theme_system(
    mut events: EventReader<WindowThemeChanged>,
    mut toggle: ResMut<ThemeToggle>,
    mut changed: EventWriter<ThemeChanged>,
) {
    for event in events.read() {
        if let Some(theme) = toggle.follow_os(event.theme == WindowTheme::Dark) {
            info!("Following system theme: {}", theme.name());
            changed.send(ThemeChanged {
                is_dark: theme.is_dark(),
            });
        }
    }
}

pub fn apply_background(mut events: EventReader<ThemeChanged>, mut clear: ResMut<ClearColor>) {
    if let Some(last) = events.read().last() {
        clear.0 = background(Theme::from_dark(last.is_dark));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::FieldConfig;
    use backdrop_sim::ParticleField;
    use backdrop_sim::pipeline::FieldSimulationPlugin;
    use bevy::state::app::StatesPlugin;
    use bevy::window::{CursorLeft, CursorMoved, WindowResized};

    fn prefs(name: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("backdrop-theme-{}", std::process::id()))
            .join(name);
        let _ = std::fs::remove_file(&path);
        path
    }

    fn themed_app(prefs_path: PathBuf) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .add_event::<CursorMoved>()
            .add_event::<CursorLeft>()
            .add_event::<WindowResized>()
            .add_event::<WindowThemeChanged>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(ClearColor(background(Theme::Light)))
            .add_plugins(FieldSimulationPlugin::new(FieldConfig {
                seed: Some(3),
                ..Default::default()
            }))
            .add_plugins(ThemePlugin { prefs_path });
        app.world_mut().spawn((
            Window {
                resolution: (1024.0, 768.0).into(),
                ..default()
            },
            PrimaryWindow,
        ));
        app
    }

    fn field_is_dark(app: &App) -> bool {
        app.world().resource::<ParticleField>().is_dark()
    }

    #[test]
    fn test_stored_dark_applies_on_first_frame() {
        let path = prefs("stored-dark/theme.bin");
        backdrop_storage::save_theme(Theme::Dark, &path).unwrap();

        let mut app = themed_app(path.clone());
        app.update();
        assert!(field_is_dark(&app));
        assert_eq!(app.world().resource::<ClearColor>().0, background(Theme::Dark));
        assert_eq!(app.world().resource::<ThemeToggle>().stored, Some(Theme::Dark));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_no_preference_starts_light() {
        let mut app = themed_app(prefs("none/theme.bin"));
        app.update();
        assert!(!field_is_dark(&app));
        assert_eq!(app.world().resource::<ThemeToggle>().stored, None);
    }

    #[test]
    fn test_key_t_saves_and_flips_same_frame() {
        let path = prefs("toggle/theme.bin");
        let mut app = themed_app(path.clone());
        app.update();
        assert!(!field_is_dark(&app));

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyT);
        app.update();
        assert!(field_is_dark(&app));
        assert_eq!(backdrop_storage::load_theme(&path).unwrap(), Some(Theme::Dark));
        assert_eq!(app.world().resource::<ClearColor>().0, background(Theme::Dark));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_os_change_ignored_with_stored_preference() {
        let path = prefs("pinned/theme.bin");
        backdrop_storage::save_theme(Theme::Light, &path).unwrap();
        let mut app = themed_app(path.clone());
        app.update();

        let mut windows = app
            .world_mut()
            .query_filtered::<Entity, With<PrimaryWindow>>();
        let window = windows.single(app.world());
        app.world_mut().send_event(WindowThemeChanged {
            window,
            theme: WindowTheme::Dark,
        });
        app.update();
        assert!(!field_is_dark(&app));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_toggle_pins_preference() {
        let mut toggle = ThemeToggle::new(PathBuf::from("unused"));
        assert_eq!(toggle.toggle(), Theme::Dark);
        assert_eq!(toggle.stored, Some(Theme::Dark));
        assert_eq!(toggle.toggle(), Theme::Light);
        assert_eq!(toggle.stored, Some(Theme::Light));
    }

    #[test]
    fn test_os_theme_followed_only_without_preference() {
        let mut toggle = ThemeToggle::new(PathBuf::from("unused"));
        assert_eq!(toggle.follow_os(true), Some(Theme::Dark));
        assert_eq!(toggle.follow_os(true), None);

        toggle.toggle();
        assert_eq!(toggle.theme, Theme::Light);
        assert_eq!(toggle.follow_os(true), None);
        assert_eq!(toggle.theme, Theme::Light);
    }
}
