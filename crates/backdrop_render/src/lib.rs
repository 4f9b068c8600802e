pub mod camera;
pub mod connections;
pub mod controls;
pub mod particles;
pub mod plugin;
pub mod theme;

pub use plugin::BackdropRenderPlugin;
