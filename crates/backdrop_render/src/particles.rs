use backdrop_sim::{DrawCommand, DrawList};
use bevy::prelude::*;
use std::collections::HashMap;

use super::camera::surface_to_world;

/// Marker for pooled particle circles
#[derive(Component)]
pub struct ParticleDot;

/// Circle entities reused across frames, with one shared unit mesh and
/// a material per distinct fill color
#[derive(Resource, Default)]
pub struct DotPool {
    mesh: Option<Handle<Mesh>>,
    entities: Vec<Entity>,
    materials: HashMap<[u8; 4], Handle<ColorMaterial>>,
}

/// Fill colors are quantized to bytes so the material cache stays small
pub fn color_key(c: [f32; 4]) -> [u8; 4] {
    c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

pub fn init_dot_pool(mut pool: ResMut<DotPool>, mut meshes: ResMut<Assets<Mesh>>) {
    pool.mesh = Some(meshes.add(Circle::new(1.0)));
}

/// Present the circles of the latest `DrawList`.
/// Surplus pooled entities are hidden rather than despawned.
pub fn sync_particle_dots(
    mut commands: Commands,
    mut pool: ResMut<DotPool>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    draw_list: Res<DrawList>,
    mut dots: Query<
        (&mut Transform, &mut MeshMaterial2d<ColorMaterial>, &mut Visibility),
        With<ParticleDot>,
    >,
) {
    let pool = &mut *pool;
    let Some(mesh) = pool.mesh.clone() else {
        return;
    };

    let mut used = 0;
    for cmd in draw_list.circles() {
        let DrawCommand::Circle {
            center,
            radius,
            fill,
            ..
        } = cmd
        else {
            continue;
        };

        let material = pool
            .materials
            .entry(color_key(*fill))
            .or_insert_with(|| {
                materials.add(ColorMaterial::from(Color::srgba(
                    fill[0], fill[1], fill[2], fill[3],
                )))
            })
            .clone();
        let transform = Transform::from_translation(
            surface_to_world(*center, draw_list.width, draw_list.height).extend(0.0),
        )
        .with_scale(Vec3::splat(*radius));

        if let Some(&entity) = pool.entities.get(used) {
            if let Ok((mut t, mut m, mut v)) = dots.get_mut(entity) {
                *t = transform;
                if m.0 != material {
                    m.0 = material;
                }
                *v = Visibility::Visible;
            }
        } else {
            let entity = commands
                .spawn((
                    Mesh2d(mesh.clone()),
                    MeshMaterial2d(material),
                    transform,
                    Visibility::Visible,
                    ParticleDot,
                ))
                .id();
            pool.entities.push(entity);
        }
        used += 1;
    }

    for &entity in pool.entities.iter().skip(used) {
        if let Ok((_, _, mut v)) = dots.get_mut(entity) {
            *v = Visibility::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_sim::Canvas;

    fn dot_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<ColorMaterial>>()
            .init_resource::<DotPool>()
            .init_resource::<DrawList>()
            .add_systems(Startup, init_dot_pool)
            .add_systems(Update, sync_particle_dots);
        app
    }

    fn draw(app: &mut App, circles: usize) {
        let mut list = app.world_mut().resource_mut::<DrawList>();
        list.clear(800.0, 600.0);
        for i in 0..circles {
            list.fill_circle([10.0 * i as f32, 20.0], 2.0, [0.0, 0.4, 1.0, 1.0], None);
        }
    }

    fn visible_dots(app: &mut App) -> (usize, usize) {
        let mut query = app
            .world_mut()
            .query_filtered::<&Visibility, With<ParticleDot>>();
        let all: Vec<_> = query.iter(app.world()).collect();
        let shown = all.iter().filter(|v| ***v == Visibility::Visible).count();
        (all.len(), shown)
    }

    #[test]
    fn test_pool_reuses_and_hides_surplus() {
        let mut app = dot_app();
        draw(&mut app, 3);
        app.update();
        app.update();
        assert_eq!(visible_dots(&mut app), (3, 3));

        draw(&mut app, 1);
        app.update();
        assert_eq!(visible_dots(&mut app), (3, 1));
        assert_eq!(app.world().resource::<Assets<ColorMaterial>>().len(), 1);
    }

    #[test]
    fn test_color_key_quantizes() {
        assert_eq!(color_key([0.0, 0.4, 1.0, 128.0 / 255.0]), [0, 102, 255, 128]);
        assert_eq!(color_key([-1.0, 2.0, 0.5, 1.0]), [0, 255, 128, 255]);
    }
}
