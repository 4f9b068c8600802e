pub mod canvas;
pub mod field;
pub mod pipeline;
pub mod state;
pub mod style;

pub use canvas::{Canvas, DrawCommand, DrawList};
pub use field::ParticleField;
pub use state::{CurrentTheme, FieldControl, FieldState, ThemeChanged};
