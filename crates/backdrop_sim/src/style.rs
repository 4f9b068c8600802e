use backdrop_core::constants::{
    CONNECTION_LINE_WIDTH, DARK_OUTLINE_ALPHA, DARK_OUTLINE_WIDTH, LIGHT_PARTICLE_ALPHA,
};
use backdrop_core::{Stroke, Theme};
use backdrop_physics::LineTier;

/// Color policy for the current theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawStyle {
    pub theme: Theme,
}

impl DrawStyle {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Particle fill: opaque palette color on dark, half-transparent on light.
    /// The light alpha is quantized to a byte the way a `#rrggbbaa` color would be.
    pub fn particle_fill(&self, color: [f32; 4]) -> [f32; 4] {
        if self.theme.is_dark() {
            [color[0], color[1], color[2], 1.0]
        } else {
            let alpha = (LIGHT_PARTICLE_ALPHA * 255.0).round() / 255.0;
            [color[0], color[1], color[2], alpha]
        }
    }

    /// Thin white outline for contrast on dark backgrounds
    pub fn particle_outline(&self) -> Option<Stroke> {
        self.theme.is_dark().then_some(Stroke {
            color: [1.0, 1.0, 1.0, DARK_OUTLINE_ALPHA],
            width: DARK_OUTLINE_WIDTH,
        })
    }

    pub fn connection(&self, distance: f32, opacity: f32, min_distance: f32) -> Stroke {
        let tier = LineTier::select(self.theme.is_dark(), distance, min_distance);
        Stroke {
            color: tier.color(opacity),
            width: CONNECTION_LINE_WIDTH,
        }
    }
}
