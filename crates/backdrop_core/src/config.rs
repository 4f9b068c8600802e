use serde::{Deserialize, Serialize};

/// Particle field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of particles on wide viewports
    pub particle_count: u32,
    /// Whether nearby particles are joined by line segments
    pub connect_particles: bool,
    /// Below this distance a connection uses the bright tier
    pub min_distance: f32,
    /// Connections at or beyond this distance are not drawn
    pub max_distance: f32,
    /// Initial velocity range (each component in [-speed/2, speed/2))
    pub speed: f32,
    /// Viewports narrower than this use `mobile_particle_count`
    pub responsive_breakpoint: f32,
    /// Number of particles on narrow viewports
    pub mobile_particle_count: u32,
    /// Palette as `#rrggbb` strings
    pub colors: Vec<String>,
    /// Pointer repulsion radius
    pub pointer_radius: f32,
    /// Random seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Optional velocity magnitude cap. `None` keeps repulsion unbounded.
    pub max_speed: Option<f32>,
    /// CSS selector of the canvas the window binds to on the web
    pub canvas_selector: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 80,
            connect_particles: true,
            min_distance: 120.0,
            max_distance: 280.0,
            speed: 0.6,
            responsive_breakpoint: 768.0,
            mobile_particle_count: 40,
            colors: vec![
                "#0066ff".to_string(),
                "#673AB7".to_string(),
                "#0033cc".to_string(),
            ],
            pointer_radius: crate::constants::DEFAULT_POINTER_RADIUS,
            seed: None,
            max_speed: None,
            canvas_selector: "#particle-canvas".to_string(),
        }
    }
}

/// Partial configuration read from an override file.
/// Every field left out keeps its default. Keys are accepted in snake_case
/// or in the camelCase spelling of the page script's `PARTICLE_CONFIG`;
/// unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfigOverrides {
    #[serde(alias = "particleCount")]
    pub particle_count: Option<u32>,
    #[serde(alias = "connectParticles")]
    pub connect_particles: Option<bool>,
    #[serde(alias = "minDistance")]
    pub min_distance: Option<f32>,
    #[serde(alias = "maxDistance")]
    pub max_distance: Option<f32>,
    pub speed: Option<f32>,
    #[serde(alias = "responsiveBreakpoint")]
    pub responsive_breakpoint: Option<f32>,
    #[serde(alias = "mobileParticleCount")]
    pub mobile_particle_count: Option<u32>,
    pub colors: Option<Vec<String>>,
    #[serde(alias = "pointerRadius")]
    pub pointer_radius: Option<f32>,
    pub seed: Option<u64>,
    #[serde(alias = "maxSpeed")]
    pub max_speed: Option<f32>,
    #[serde(alias = "canvasSelector")]
    pub canvas_selector: Option<String>,
}

impl FieldConfig {
    /// Merge overrides on top of this configuration
    pub fn with_overrides(mut self, o: &FieldConfigOverrides) -> Self {
        if let Some(v) = o.particle_count {
            self.particle_count = v;
        }
        if let Some(v) = o.connect_particles {
            self.connect_particles = v;
        }
        if let Some(v) = o.min_distance {
            self.min_distance = v;
        }
        if let Some(v) = o.max_distance {
            self.max_distance = v;
        }
        if let Some(v) = o.speed {
            self.speed = v;
        }
        if let Some(v) = o.responsive_breakpoint {
            self.responsive_breakpoint = v;
        }
        if let Some(v) = o.mobile_particle_count {
            self.mobile_particle_count = v;
        }
        if let Some(v) = &o.colors {
            self.colors = v.clone();
        }
        if let Some(v) = o.pointer_radius {
            self.pointer_radius = v;
        }
        if o.seed.is_some() {
            self.seed = o.seed;
        }
        if o.max_speed.is_some() {
            self.max_speed = o.max_speed;
        }
        if let Some(v) = &o.canvas_selector {
            self.canvas_selector = v.clone();
        }
        self
    }

    /// Particle count for a viewport of the given width.
    /// The breakpoint itself counts as wide.
    pub fn count_for_width(&self, width: f32) -> usize {
        if width < self.responsive_breakpoint {
            self.mobile_particle_count as usize
        } else {
            self.particle_count as usize
        }
    }

    /// Parsed palette. Malformed entries are dropped; if nothing survives
    /// the default palette is used.
    pub fn palette(&self) -> Vec<[f32; 4]> {
        let parsed: Vec<[f32; 4]> = self
            .colors
            .iter()
            .filter_map(|c| crate::types::parse_hex_color(c))
            .collect();
        if parsed.is_empty() {
            Self::default()
                .colors
                .iter()
                .filter_map(|c| crate::types::parse_hex_color(c))
                .collect()
        } else {
            parsed
        }
    }
}
