use backdrop_core::constants::{DARK_FAR_ALPHA, DARK_NEAR_ALPHA, LIGHT_FAR_ALPHA, LIGHT_NEAR_ALPHA};
use backdrop_core::Particle;

/// A segment between two particles closer than the connection range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Index of the earlier particle
    pub a: usize,
    /// Index of the later particle
    pub b: usize,
    pub distance: f32,
    /// `1 - distance / max_distance`, in (0, 1]
    pub opacity: f32,
}

/// Stroke tier of a connection: theme x proximity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineTier {
    DarkNear,
    DarkFar,
    LightNear,
    LightFar,
}

impl LineTier {
    pub fn select(is_dark: bool, distance: f32, min_distance: f32) -> Self {
        let near = distance < min_distance;
        match (is_dark, near) {
            (true, true) => Self::DarkNear,
            (true, false) => Self::DarkFar,
            (false, true) => Self::LightNear,
            (false, false) => Self::LightFar,
        }
    }

    /// Multiplier applied to the connection opacity
    pub fn alpha_scale(&self) -> f32 {
        match self {
            Self::DarkNear => DARK_NEAR_ALPHA,
            Self::DarkFar => DARK_FAR_ALPHA,
            Self::LightNear => LIGHT_NEAR_ALPHA,
            Self::LightFar => LIGHT_FAR_ALPHA,
        }
    }

    /// Stroke color [r, g, b, a] for a connection of the given opacity.
    /// White on dark backgrounds, black on light ones.
    pub fn color(&self, opacity: f32) -> [f32; 4] {
        let a = opacity * self.alpha_scale();
        match self {
            Self::DarkNear | Self::DarkFar => [1.0, 1.0, 1.0, a],
            Self::LightNear | Self::LightFar => [0.0, 0.0, 0.0, a],
        }
    }
}

/// Connection between two particles, if they are in range
pub fn connect(a: &Particle, b: &Particle, max_distance: f32) -> Option<(f32, f32)> {
    if max_distance <= 0.0 {
        return None;
    }
    let distance = a.distance_to(b);
    if distance >= max_distance {
        return None;
    }
    Some((distance, 1.0 - distance / max_distance))
}

/// Every unordered pair `(a, b)` with `a < b` closer than `max_distance`.
/// O(n²); fine for the few dozen particles a backdrop uses.
pub fn find_connections(particles: &[Particle], max_distance: f32) -> Vec<Connection> {
    let mut out = Vec::new();
    for (a, pa) in particles.iter().enumerate() {
        for (b, pb) in particles.iter().enumerate().skip(a + 1) {
            if let Some((distance, opacity)) = connect(pa, pb, max_distance) {
                out.push(Connection {
                    a,
                    b,
                    distance,
                    opacity,
                });
            }
        }
    }
    out
}
