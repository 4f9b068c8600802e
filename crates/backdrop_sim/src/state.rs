use bevy::prelude::*;

/// Lifecycle of the particle field
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// Frame loop active, listeners attached
    #[default]
    Running,
    /// Field disposed; nothing is simulated or drawn
    Stopped,
}

/// Requests to start or stop the field
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    Start,
    Stop,
}

/// Pushed by whoever owns the theme whenever the flag changes
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChanged {
    pub is_dark: bool,
}

/// Latest theme flag, kept across field restarts
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentTheme(pub backdrop_core::Theme);
