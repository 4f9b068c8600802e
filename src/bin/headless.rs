//! Run the particle field without a window and report how it behaves.
//! Focus: pointer dwell, since repulsion has no damping.

use backdrop_core::FieldConfig;
use backdrop_sim::{DrawList, ParticleField};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

struct FrameStats {
    particles: usize,
    lines: usize,
    mean_speed: f32,
    max_speed: f32,
    outside: usize,
}

fn measure(field: &ParticleField, draw: &DrawList) -> FrameStats {
    let (w, h) = field.size();
    let speeds: Vec<f32> = field.particles().iter().map(|p| p.speed()).collect();
    FrameStats {
        particles: speeds.len(),
        lines: draw.lines().count(),
        mean_speed: speeds.iter().sum::<f32>() / speeds.len().max(1) as f32,
        max_speed: speeds.iter().cloned().fold(0.0, f32::max),
        outside: field
            .particles()
            .iter()
            .filter(|p| p.x < 0.0 || p.x > w || p.y < 0.0 || p.y > h)
            .count(),
    }
}

fn run(label: &str, config: FieldConfig, frames: u32, dwell: bool) {
    let Some(mut field) = ParticleField::initialize(Some((1024.0, 768.0)), config) else {
        return;
    };
    let mut draw = DrawList::default();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    println!("--- {} ---", label);
    for frame in 1..=frames {
        if dwell {
            // Pointer wanders slowly around the center
            let x = 512.0 + rng.gen_range(-40.0..40.0f32);
            let y = 384.0 + rng.gen_range(-40.0..40.0f32);
            field.set_pointer(x, y);
        } else {
            field.clear_pointer();
        }
        field.step(&mut draw);

        if frame % (frames / 5).max(1) == 0 {
            let s = measure(&field, &draw);
            println!(
                "frame {:>5} | particles {:>3} | lines {:>4} | speed mean {:>8.3} max {:>8.3} | outside {}",
                frame, s.particles, s.lines, s.mean_speed, s.max_speed, s.outside
            );
        }
    }

    field.resize(500.0, 800.0);
    println!("after resize to 500x800: {} particles", field.particles().len());
}

fn main() {
    let frames = 3_000;
    let base = FieldConfig {
        seed: Some(2024),
        ..FieldConfig::default()
    };

    eprintln!("Running {} frames per scenario...", frames);

    run("idle", base.clone(), frames, false);
    run("pointer dwell (unbounded)", base.clone(), frames, true);
    run(
        "pointer dwell (max_speed 2.0)",
        FieldConfig {
            max_speed: Some(2.0),
            ..base
        },
        frames,
        true,
    );
}
