use backdrop_core::{FieldConfig, Particle, PointerState, Theme};
use backdrop_physics::{motion, spawn};
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::canvas::Canvas;
use super::style::DrawStyle;

/// The particle field, tracked as a Bevy Resource
#[derive(Resource)]
pub struct ParticleField {
    /// Field configuration (fixed for the field's lifetime)
    pub config: FieldConfig,
    /// Parsed palette
    palette: Vec<[f32; 4]>,
    /// Surface size in logical pixels
    width: f32,
    height: f32,
    /// Pointer position and repulsion radius
    pointer: PointerState,
    /// Theme used by subsequent draws
    theme: Theme,
    particles: Vec<Particle>,
    rng: ChaCha8Rng,
    /// Incremented on every rebuild
    generation: u32,
}

impl ParticleField {
    /// Bind the field to a surface of the given size.
    /// Without a surface there is nothing to draw on and no field is created.
    pub fn initialize(surface: Option<(f32, f32)>, config: FieldConfig) -> Option<Self> {
        let (width, height) = surface?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut field = Self {
            palette: config.palette(),
            pointer: PointerState::absent(config.pointer_radius),
            config,
            width,
            height,
            theme: Theme::Light,
            particles: Vec::new(),
            rng,
            generation: 0,
        };
        field.rebuild();
        Some(field)
    }

    /// Drop every particle and reseed at the current size and count rule
    pub fn rebuild(&mut self) {
        self.particles = spawn::seed_particles(
            &self.config,
            &self.palette,
            self.width,
            self.height,
            &mut self.rng,
        );
        self.generation = self.generation.wrapping_add(1);
        debug!(
            "Particle field rebuilt: {} particles at {}x{}",
            self.particles.len(),
            self.width,
            self.height
        );
    }

    /// New surface size; always rebuilds
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rebuild();
    }

    /// Advance one frame and draw it
    pub fn step(&mut self, canvas: &mut impl Canvas) {
        canvas.clear(self.width, self.height);
        let style = DrawStyle::new(self.theme);
        let outline = style.particle_outline();

        for p in self.particles.iter_mut() {
            motion::update(p, self.width, self.height, &self.pointer, self.config.max_speed);
            canvas.fill_circle(p.pos(), p.size, style.particle_fill(p.color), outline);
        }

        if self.config.connect_particles {
            for c in backdrop_physics::find_connections(&self.particles, self.config.max_distance) {
                let stroke = style.connection(c.distance, c.opacity, self.config.min_distance);
                canvas.line(self.particles[c.a].pos(), self.particles[c.b].pos(), stroke);
            }
        }
    }

    /// Switch the draw color policy. Motion is unaffected.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.theme = Theme::from_dark(is_dark);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.position = Some([x, y]);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.position = None;
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}
