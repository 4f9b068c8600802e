use backdrop_core::constants::{MIN_PARTICLE_SIZE, PARTICLE_SIZE_SPAN};
use backdrop_core::{FieldConfig, Particle};
use rand::Rng;

/// Seed a fresh particle set for a surface of the given size.
/// Count follows the responsive rule of `config`.
pub fn seed_particles(
    config: &FieldConfig,
    palette: &[[f32; 4]],
    width: f32,
    height: f32,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let n = config.count_for_width(width);
    (0..n)
        .map(|_| random_particle(palette, width, height, config.speed, rng))
        .collect()
}

/// Uniform position over the surface, velocity components in
/// `[-speed/2, speed/2)`, radius in `[1, 4)`.
pub fn random_particle(
    palette: &[[f32; 4]],
    width: f32,
    height: f32,
    speed: f32,
    rng: &mut impl Rng,
) -> Particle {
    let pos = [rng.r#gen::<f32>() * width, rng.r#gen::<f32>() * height];
    let vel = [
        (rng.r#gen::<f32>() - 0.5) * speed,
        (rng.r#gen::<f32>() - 0.5) * speed,
    ];
    let size = rng.r#gen::<f32>() * PARTICLE_SIZE_SPAN + MIN_PARTICLE_SIZE;
    let color = if palette.is_empty() {
        [1.0, 1.0, 1.0, 1.0]
    } else {
        palette[rng.gen_range(0..palette.len())]
    };
    Particle::new(pos, vel, size, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn palette() -> Vec<[f32; 4]> {
        FieldConfig::default().palette()
    }

    #[test]
    fn test_count_rule_at_breakpoint() {
        let config = FieldConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(seed_particles(&config, &palette(), 767.0, 600.0, &mut rng).len(), 40);
        assert_eq!(seed_particles(&config, &palette(), 768.0, 600.0, &mut rng).len(), 80);
    }

    #[test]
    fn test_seeded_particles_within_bounds() {
        let config = FieldConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for (w, h) in [(1024.0, 768.0), (500.0, 800.0), (1.0, 1.0)] {
            for p in seed_particles(&config, &palette(), w, h, &mut rng) {
                assert!(p.x >= 0.0 && p.x <= w, "x = {} for w = {}", p.x, w);
                assert!(p.y >= 0.0 && p.y <= h, "y = {} for h = {}", p.y, h);
                assert!(p.size >= 1.0 && p.size < 4.0);
                assert!(p.vx.abs() <= config.speed / 2.0);
                assert!(p.vy.abs() <= config.speed / 2.0);
                assert!(palette().contains(&p.color));
            }
        }
    }

    #[test]
    fn test_same_seed_same_particles() {
        let config = FieldConfig::default();
        let a = seed_particles(&config, &palette(), 1024.0, 768.0, &mut ChaCha8Rng::seed_from_u64(42));
        let b = seed_particles(&config, &palette(), 1024.0, 768.0, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_palette_falls_back_to_white() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let p = random_particle(&[], 100.0, 100.0, 0.6, &mut rng);
        assert_eq!(p.color, [1.0, 1.0, 1.0, 1.0]);
    }
}
