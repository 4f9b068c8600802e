use backdrop_core::constants::REPULSION_SCALE;
use backdrop_core::{Particle, PointerState};

/// Move the particle by one frame of velocity
pub fn advance(p: &mut Particle) {
    p.x += p.vx;
    p.y += p.vy;
}

/// Flip the velocity component of any crossed edge.
/// Position is left untouched, so a particle may sit slightly outside
/// the bounds for a frame before it turns around.
pub fn reflect(p: &mut Particle, width: f32, height: f32) {
    if p.x > width || p.x < 0.0 {
        p.vx = -p.vx;
    }
    if p.y > height || p.y < 0.0 {
        p.vy = -p.vy;
    }
}

/// Push the particle away from the pointer with linear falloff.
///
/// The perturbation is additive and undamped: a pointer resting near a
/// particle keeps accelerating it every frame. A particle exactly under
/// the pointer has no defined escape direction and is left alone.
pub fn repel(p: &mut Particle, pointer: &PointerState) {
    let Some([px, py]) = pointer.position else {
        return;
    };
    if pointer.radius <= 0.0 {
        return;
    }

    let dx = px - p.x;
    let dy = py - p.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance >= pointer.radius || distance == 0.0 {
        return;
    }

    let angle = dy.atan2(dx);
    let force = (pointer.radius - distance) / pointer.radius;
    p.vx -= angle.cos() * force * REPULSION_SCALE;
    p.vy -= angle.sin() * force * REPULSION_SCALE;
}

/// Scale velocity down so its magnitude does not exceed `max_speed`
pub fn cap_speed(p: &mut Particle, max_speed: f32) {
    let speed = p.speed();
    if speed > max_speed && speed > 0.0 {
        let k = max_speed.max(0.0) / speed;
        p.vx *= k;
        p.vy *= k;
    }
}

/// Full per-frame update of a single particle
pub fn update(
    p: &mut Particle,
    width: f32,
    height: f32,
    pointer: &PointerState,
    max_speed: Option<f32>,
) {
    advance(p);
    reflect(p, width, height);
    repel(p, pointer);
    if let Some(cap) = max_speed {
        cap_speed(p, cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new([x, y], [vx, vy], 2.0, [1.0, 1.0, 1.0, 1.0])
    }

    fn pointer_at(x: f32, y: f32) -> PointerState {
        PointerState {
            position: Some([x, y]),
            radius: 150.0,
        }
    }

    #[test]
    fn test_reflect_flips_without_clamping() {
        let mut p = particle(800.5, 300.0, 0.3, 0.1);
        update(&mut p, 800.0, 600.0, &PointerState::absent(150.0), None);
        assert!(p.vx < 0.0);
        assert_eq!(p.vy, 0.1);
        // Still outside, not pulled back in
        assert!(p.x > 800.0);
    }

    #[test]
    fn test_reflect_negative_edge() {
        let mut p = particle(0.1, -0.2, -0.3, -0.4);
        update(&mut p, 800.0, 600.0, &PointerState::absent(150.0), None);
        assert!(p.vx > 0.0);
        assert!(p.vy > 0.0);
    }

    #[test]
    fn test_inside_bounds_keeps_velocity() {
        let mut p = particle(400.0, 300.0, 0.2, -0.2);
        update(&mut p, 800.0, 600.0, &PointerState::absent(150.0), None);
        assert_eq!((p.vx, p.vy), (0.2, -0.2));
        assert!((p.x - 400.2).abs() < 1e-4);
    }

    #[test]
    fn test_repel_pushes_away_from_pointer() {
        // Pointer to the right of the particle: particle is pushed left
        let mut p = particle(100.0, 100.0, 0.0, 0.0);
        repel(&mut p, &pointer_at(150.0, 100.0));
        assert!(p.vx < 0.0);
        assert!(p.vy.abs() < 1e-6);
        // force = (150 - 50) / 150, scaled by 0.5
        assert!((p.vx + (100.0 / 150.0) * 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_repel_outside_radius_is_noop() {
        let mut p = particle(0.0, 0.0, 0.1, 0.1);
        repel(&mut p, &pointer_at(150.0, 0.0));
        assert_eq!((p.vx, p.vy), (0.1, 0.1));
    }

    #[test]
    fn test_repel_at_zero_distance_stays_finite() {
        let mut p = particle(200.0, 200.0, 0.1, -0.1);
        repel(&mut p, &pointer_at(200.0, 200.0));
        assert!(p.vx.is_finite() && p.vy.is_finite());
        assert_eq!((p.vx, p.vy), (0.1, -0.1));
    }

    #[test]
    fn test_repel_with_zero_radius_is_noop() {
        let mut p = particle(10.0, 10.0, 0.0, 0.0);
        let pointer = PointerState {
            position: Some([10.0, 11.0]),
            radius: 0.0,
        };
        repel(&mut p, &pointer);
        assert_eq!((p.vx, p.vy), (0.0, 0.0));
    }

    #[test]
    fn test_pointer_dwell_grows_speed_without_bound() {
        // Known property: no damping, so holding the pointer next to a
        // particle keeps adding speed. Keep the particle pinned to isolate it.
        let mut p = particle(100.0, 100.0, 0.0, 0.0);
        let pointer = pointer_at(101.0, 100.0);
        let mut last = 0.0;
        for _ in 0..200 {
            repel(&mut p, &pointer);
            assert!(p.speed() > last);
            last = p.speed();
        }
        assert!(last > 90.0, "speed after dwell = {}", last);
    }

    #[test]
    fn test_cap_speed_limits_magnitude() {
        let mut p = particle(100.0, 100.0, 3.0, 4.0);
        cap_speed(&mut p, 1.0);
        assert!((p.speed() - 1.0).abs() < 1e-5);
        // Direction preserved
        assert!((p.vx / p.vy - 0.75).abs() < 1e-5);

        let mut slow = particle(0.0, 0.0, 0.1, 0.0);
        cap_speed(&mut slow, 1.0);
        assert_eq!(slow.vx, 0.1);
    }
}
