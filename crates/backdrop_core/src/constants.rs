// Interaction and drawing constants.
// Distances are in logical pixels, velocities in pixels per frame.

/// Default pointer repulsion radius
pub const DEFAULT_POINTER_RADIUS: f32 = 150.0;

/// Scale applied to the repulsion force before it is subtracted from velocity
pub const REPULSION_SCALE: f32 = 0.5;

/// Particle radius range: [MIN_PARTICLE_SIZE, MIN_PARTICLE_SIZE + PARTICLE_SIZE_SPAN)
pub const MIN_PARTICLE_SIZE: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 3.0;

/// Fill opacity of particles in light mode
pub const LIGHT_PARTICLE_ALPHA: f32 = 0.5;

/// White outline drawn around particles in dark mode
pub const DARK_OUTLINE_ALPHA: f32 = 0.8;
pub const DARK_OUTLINE_WIDTH: f32 = 0.5;

/// Stroke width of connection segments
pub const CONNECTION_LINE_WIDTH: f32 = 1.0;

/// Connection opacity multipliers per tier
pub const DARK_NEAR_ALPHA: f32 = 0.9;
pub const DARK_FAR_ALPHA: f32 = 0.4;
pub const LIGHT_NEAR_ALPHA: f32 = 0.8;
pub const LIGHT_FAR_ALPHA: f32 = 0.2;
